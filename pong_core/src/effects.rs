//! Cosmetic effect state driven by simulation events.
//!
//! Nothing here feeds back into the match. Effects draw from their own RNG so
//! the simulation replays identically with or without a renderer attached.

use crate::{Events, GameRng, Params, RandomSource};
use glam::Vec2;

/// Camera offset that jitters after a point and settles
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenShake {
    pub intensity: f32,
    pub offset: Vec2,
}

impl ScreenShake {
    pub fn trigger(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    /// Pick this tick's offset in `[-intensity, intensity]` and decay
    pub fn update(&mut self, rng: &mut impl RandomSource) {
        if self.intensity > 0.0 {
            let range = self.intensity as i32;
            self.offset = Vec2::new(
                rng.range_inclusive(-range, range) as f32,
                rng.range_inclusive(-range, range) as f32,
            );
            self.intensity -= Params::SHAKE_DECAY;
        } else {
            self.intensity = 0.0;
            self.offset = Vec2::ZERO;
        }
    }

    pub fn is_active(&self) -> bool {
        self.intensity > 0.0
    }
}

/// Recent ball positions, overwritten oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct BallTrail {
    points: [Vec2; Params::TRAIL_LENGTH],
    head: usize,
}

impl BallTrail {
    pub fn new(pos: Vec2) -> Self {
        Self {
            points: [pos; Params::TRAIL_LENGTH],
            head: 0,
        }
    }

    pub fn push(&mut self, pos: Vec2) {
        self.points[self.head] = pos;
        self.head = (self.head + 1) % Params::TRAIL_LENGTH;
    }

    /// Collapse the trail onto one point
    pub fn reset(&mut self, pos: Vec2) {
        self.points = [pos; Params::TRAIL_LENGTH];
        self.head = 0;
    }

    /// Newest position first
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        let len = Params::TRAIL_LENGTH;
        (0..len).map(move |i| self.points[(self.head + len - 1 - i) % len])
    }
}

pub struct Effects {
    pub shake: ScreenShake,
    pub trail: BallTrail,
    rng: GameRng,
}

impl Effects {
    pub fn new(seed: u64, ball_pos: Vec2) -> Self {
        Self {
            shake: ScreenShake::default(),
            trail: BallTrail::new(ball_pos),
            rng: GameRng::new(seed),
        }
    }

    /// Advance one tick after the simulation has run
    pub fn update(&mut self, events: &Events, ball_pos: Vec2) {
        self.shake.update(&mut self.rng);
        self.trail.push(ball_pos);

        if events.scored.is_some() {
            self.shake.trigger(Params::SHAKE_ON_SCORE);
        }
    }

    pub fn reset(&mut self, ball_pos: Vec2) {
        self.shake = ScreenShake::default();
        self.trail.reset(ball_pos);
    }
}
