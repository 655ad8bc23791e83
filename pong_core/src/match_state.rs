//! Per-match state: the hecs world holding both paddles and the ball, plus
//! score, active difficulty and the simulation RNG.

use crate::{
    create_ball, create_paddle, Aabb, Ball, Config, Difficulty, DifficultyProfile, GameRng,
    Paddle, Phase, Score, Serve, Side,
};
use glam::Vec2;
use hecs::World;

pub struct MatchState {
    pub world: World,
    pub config: Config,
    pub difficulty: Difficulty,
    pub profile: DifficultyProfile,
    pub score: Score,
    pub rng: GameRng,
}

impl MatchState {
    pub fn new(config: Config, seed: u64) -> Self {
        let difficulty = Difficulty::default();
        let profile = difficulty.profile();
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(
            &mut world,
            Paddle::new(Side::Player, &config, config.player_paddle_speed),
        );
        create_paddle(
            &mut world,
            Paddle::new(Side::Computer, &config, profile.paddle_speed),
        );

        let mut ball = Ball::new(config.court_center(), Vec2::ZERO, config.ball_radius);
        ball.reset(
            config.court_center(),
            profile.initial_ball_speed,
            Serve::Random,
            &mut rng,
        );
        create_ball(&mut world, ball);

        Self {
            world,
            config,
            difficulty,
            profile,
            score: Score::new(),
            rng,
        }
    }

    /// Apply a difficulty tier's tuning to the computer paddle
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.profile = difficulty.profile();
        let speed = self.profile.paddle_speed;
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == Side::Computer {
                paddle.speed = speed;
            }
        }
    }

    /// Serve a fresh ball from the court center
    pub fn reset_ball(&mut self, serve: Serve) {
        let center = self.config.court_center();
        let speed = self.profile.initial_ball_speed;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(center, speed, serve, &mut self.rng);
        }
    }

    /// Put the ball at `pos` moving at `vel` without touching its hit counter
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    pub fn reset_paddles(&mut self) {
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.reset(&self.config);
        }
    }

    /// New round at `difficulty`: zero score, random serve, paddles centered
    pub fn start_round(&mut self, difficulty: Difficulty) {
        self.set_difficulty(difficulty);
        self.score.reset();
        self.reset_ball(Serve::Random);
        self.reset_paddles();
    }

    /// Replay at the current difficulty
    pub fn restart(&mut self) {
        self.score.reset();
        self.reset_ball(Serve::Random);
        self.reset_paddles();
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn snapshot(&self, phase: Phase) -> Snapshot {
        let paddle_rect = |side| {
            self.paddle(side)
                .unwrap_or_else(|| Paddle::new(side, &self.config, 0.0))
                .rect()
        };
        let ball = self.ball().unwrap_or_else(|| {
            Ball::new(self.config.court_center(), Vec2::ZERO, self.config.ball_radius)
        });
        let show_speed_readout = self
            .profile
            .escalation
            .is_some_and(|esc| ball.hit_counter > esc.after_hits);

        Snapshot {
            phase,
            difficulty: self.difficulty,
            court: self.config.court(),
            player_paddle: paddle_rect(Side::Player),
            computer_paddle: paddle_rect(Side::Computer),
            ball_pos: ball.pos,
            ball_vel: ball.vel,
            ball_radius: ball.radius,
            hit_counter: ball.hit_counter,
            speed_multiplier: ball.speed_multiplier,
            show_speed_readout,
            score: self.score,
            winner: self.score.has_winner(self.config.win_score),
        }
    }
}

/// Read-only view of a match for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    pub difficulty: Difficulty,
    pub court: Aabb,
    pub player_paddle: Aabb,
    pub computer_paddle: Aabb,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub ball_radius: f32,
    pub hit_counter: u32,
    pub speed_multiplier: f32,
    /// Impossible tier past its escalation threshold
    pub show_speed_readout: bool,
    pub score: Score,
    pub winner: Option<Side>,
}
