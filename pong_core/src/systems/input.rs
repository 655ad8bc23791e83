use crate::{Config, Paddle, PaddleControl, Side};
use hecs::World;

/// Directional intents held by the player this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

impl PaddleInput {
    pub fn new(up: bool, down: bool) -> Self {
        Self { up, down }
    }

    /// -1 = up, 0 = hold, 1 = down
    pub fn dir(&self) -> i8 {
        match (self.up, self.down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}

/// Apply the player's intents to the player paddle
pub fn move_player_paddle(world: &mut World, input: PaddleInput, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Player {
            continue;
        }

        match config.paddle_control {
            PaddleControl::Direct => {
                paddle.vel = 0.0;
                paddle.y += input.dir() as f32 * paddle.speed;
            }
            PaddleControl::Smoothed => {
                paddle.vel = smoothed_velocity(paddle.vel, input.dir(), paddle.speed, config);
                paddle.y += paddle.vel;
            }
        }

        let clamped = config.clamp_paddle_y(paddle.y);
        if clamped != paddle.y {
            // Pinned against a wall
            paddle.y = clamped;
            paddle.vel = 0.0;
        }
    }
}

/// One tick of the acceleration model
pub fn smoothed_velocity(vel: f32, dir: i8, max_vel: f32, config: &Config) -> f32 {
    let mut vel = if dir != 0 {
        let dir = dir as f32;
        let mut accel = config.paddle_accel * dir;
        if vel * dir < 0.0 {
            accel *= config.paddle_turn_boost;
        }
        vel + accel
    } else {
        vel * config.paddle_friction
    };

    vel = vel.clamp(-max_vel, max_vel);
    if vel.abs() < config.paddle_vel_deadzone {
        vel = 0.0;
    }
    vel
}
