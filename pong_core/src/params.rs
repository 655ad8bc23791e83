/// Game tuning parameters for Pong
///
/// All speeds are in pixels per tick; the simulation advances one fixed step per call.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 1024.0;
    pub const SCREEN_HEIGHT: f32 = 768.0;

    // Court (inset from the screen edges)
    pub const COURT_BORDER_X: f32 = 5.0;
    pub const COURT_BORDER_Y: f32 = 75.0;
    pub const COURT_X: f32 = Self::COURT_BORDER_X;
    pub const COURT_Y: f32 = Self::COURT_BORDER_Y;
    pub const COURT_WIDTH: f32 = Self::SCREEN_WIDTH - 2.0 * Self::COURT_BORDER_X;
    pub const COURT_HEIGHT: f32 = Self::SCREEN_HEIGHT - 2.0 * Self::COURT_BORDER_Y;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PADDLE_INSET: f32 = 20.0; // gap between court edge and paddle face
    pub const PLAYER_PADDLE_SPEED: f32 = 10.0;

    // Smoothed paddle control
    pub const PADDLE_ACCEL: f32 = 2.5;
    pub const PADDLE_TURN_BOOST: f32 = 2.0; // accel multiplier when reversing
    pub const PADDLE_FRICTION: f32 = 0.8; // velocity kept per tick with no intent
    pub const PADDLE_VEL_DEADZONE: f32 = 0.1;

    // Ball
    pub const BALL_RADIUS: f32 = 15.0;
    pub const SPIN_RETAIN: f32 = 0.75; // share of speedY kept on a paddle hit
    pub const SPIN_STRENGTH: f32 = 7.0; // speedY added per unit of hit offset

    // Score
    pub const WIN_SCORE: u8 = 10;

    // Effects
    pub const SHAKE_ON_SCORE: f32 = 8.0;
    pub const SHAKE_DECAY: f32 = 0.5; // intensity lost per tick
    pub const TRAIL_LENGTH: usize = 15;
}
