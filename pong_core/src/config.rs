use crate::{Aabb, Params, Side};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// How player intents drive the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleControl {
    /// Held intent moves at full speed, release stops dead
    Direct,
    /// Acceleration with friction decay and a reversal boost
    #[default]
    Smoothed,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub court_x: f32,
    pub court_y: f32,
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub player_paddle_speed: f32,
    pub paddle_control: PaddleControl,
    pub paddle_accel: f32,
    pub paddle_turn_boost: f32,
    pub paddle_friction: f32,
    pub paddle_vel_deadzone: f32,
    pub ball_radius: f32,
    pub spin_retain: f32,
    pub spin_strength: f32,
    pub win_score: u8,
    /// Insert a ReadyToStart phase between difficulty selection and play
    pub ready_prompt: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_x: Params::COURT_X,
            court_y: Params::COURT_Y,
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            player_paddle_speed: Params::PLAYER_PADDLE_SPEED,
            paddle_control: PaddleControl::Smoothed,
            paddle_accel: Params::PADDLE_ACCEL,
            paddle_turn_boost: Params::PADDLE_TURN_BOOST,
            paddle_friction: Params::PADDLE_FRICTION,
            paddle_vel_deadzone: Params::PADDLE_VEL_DEADZONE,
            ball_radius: Params::BALL_RADIUS,
            spin_retain: Params::SPIN_RETAIN,
            spin_strength: Params::SPIN_STRENGTH,
            win_score: Params::WIN_SCORE,
            ready_prompt: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full-screen court with direct paddle control, as in the borderless variant
    pub fn classic() -> Self {
        Self {
            court_x: 0.0,
            court_y: 0.0,
            court_width: Params::SCREEN_WIDTH,
            court_height: Params::SCREEN_HEIGHT,
            paddle_control: PaddleControl::Direct,
            ..Self::default()
        }
    }

    pub fn court(&self) -> Aabb {
        Aabb::from_min_size(
            Vec2::new(self.court_x, self.court_y),
            Vec2::new(self.court_width, self.court_height),
        )
    }

    pub fn court_center(&self) -> Vec2 {
        self.court().center()
    }

    pub fn court_top(&self) -> f32 {
        self.court_y
    }

    pub fn court_bottom(&self) -> f32 {
        self.court_y + self.court_height
    }

    pub fn court_left(&self) -> f32 {
        self.court_x
    }

    pub fn court_right(&self) -> f32 {
        self.court_x + self.court_width
    }

    /// Get X position (left edge) for a paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.court_left() + self.paddle_inset,
            Side::Computer => self.court_right() - self.paddle_inset - self.paddle_width,
        }
    }

    /// Top edge that vertically centers a paddle in the court
    pub fn paddle_center_y(&self) -> f32 {
        self.court_y + (self.court_height - self.paddle_height) / 2.0
    }

    /// Clamp paddle Y (top edge) to court bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let max = (self.court_bottom() - self.paddle_height).max(self.court_top());
        y.clamp(self.court_top(), max)
    }
}
