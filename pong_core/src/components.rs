use crate::{Aabb, Config, RandomSource};
use glam::Vec2;

/// Court side. The player defends the left edge, the computer the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// Sign of `speedX` for a ball travelling toward this side
    pub fn incoming_sign(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Computer => 1.0,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, fixed for the match
    pub y: f32, // Top edge (clamped to court)
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub vel: f32, // Smoothed velocity, px/tick (0 under direct control)
}

impl Paddle {
    pub fn new(side: Side, config: &Config, speed: f32) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: config.paddle_center_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            speed,
            vel: 0.0,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_min_size(
            Vec2::new(self.x, self.y),
            Vec2::new(self.width, self.height),
        )
    }

    /// Recenter vertically and drop any carried velocity
    pub fn reset(&mut self, config: &Config) {
        self.y = config.paddle_center_y();
        self.vel = 0.0;
    }
}

/// Which side puts the ball in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Serve {
    /// Coin flip for the horizontal direction
    #[default]
    Random,
    /// Player serves: ball leaves toward the computer (+x)
    Player,
    /// Computer serves: ball leaves toward the player (-x)
    Computer,
}

impl Serve {
    /// The side that conceded serves the next ball
    pub fn after_point(scorer: Side) -> Serve {
        match scorer {
            Side::Player => Serve::Computer,
            Side::Computer => Serve::Player,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub hit_counter: u32,      // Paddle hits since the last serve
    pub speed_multiplier: f32, // Escalation factor, >= 1.0
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            hit_counter: 0,
            speed_multiplier: 1.0,
        }
    }

    /// Reset ball to `center` and serve at `speed` on both axes
    pub fn reset(&mut self, center: Vec2, speed: f32, serve: Serve, rng: &mut impl RandomSource) {
        self.pos = center;
        self.hit_counter = 0;
        self.speed_multiplier = 1.0;

        let vx = match serve {
            Serve::Random => {
                if rng.range_inclusive(0, 1) == 0 {
                    -speed
                } else {
                    speed
                }
            }
            Serve::Player => speed,
            Serve::Computer => -speed,
        };
        let vy = if rng.range_inclusive(0, 1) == 0 {
            -speed
        } else {
            speed
        };

        self.vel = Vec2::new(vx, vy);
    }

    /// Leading edge in the direction of horizontal travel
    pub fn leading_x(&self) -> f32 {
        if self.vel.x < 0.0 {
            self.pos.x - self.radius
        } else {
            self.pos.x + self.radius
        }
    }

    pub fn is_moving_toward(&self, side: Side) -> bool {
        self.vel.x * side.incoming_sign() > 0.0
    }
}
