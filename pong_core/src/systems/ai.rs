//! Computer opponent.
//!
//! Each tick the AI picks a target height for its paddle and, if it passes the
//! accuracy gate, steps toward it:
//! 1. Ball moving away: track the ball's current y.
//! 2. Ball incoming: extrapolate the intercept at the paddle face. Tiers with
//!    advanced prediction add their noise and fold the intercept back through
//!    the walls the ball would bounce off on the way.
//! 3. Outside the dead zone, move at `paddle_speed * reaction_speed`.

use crate::{Ball, Config, DifficultyProfile, Paddle, RandomSource, Side};
use hecs::World;

/// Height the AI wants its paddle center at
pub fn predict_target_y(
    ball: &Ball,
    paddle: &Paddle,
    profile: &DifficultyProfile,
    config: &Config,
    rng: &mut impl RandomSource,
) -> f32 {
    if !ball.is_moving_toward(paddle.side) || ball.vel.x.abs() <= f32::EPSILON {
        return ball.pos.y;
    }

    let time_to_reach = (paddle.x - ball.pos.x) / ball.vel.x;
    let mut target_y = ball.pos.y + ball.vel.y * time_to_reach;
    if !target_y.is_finite() {
        return ball.pos.y;
    }

    if profile.advanced_prediction {
        if profile.prediction_noise > 0 {
            let noise = profile.prediction_noise;
            target_y += rng.range_inclusive(-noise, noise) as f32;
        }
        target_y = fold_into_court(target_y, ball.radius, config);
    }

    target_y
}

/// Reflect `y` off the top and bottom walls until the ball's edge is inside
pub fn fold_into_court(y: f32, radius: f32, config: &Config) -> f32 {
    let lo = config.court_top() + radius;
    let hi = config.court_bottom() - radius;
    let span = hi - lo;
    if span <= 0.0 {
        return config.court_center().y;
    }

    // Unrolled bounces repeat every two court heights
    let t = (y - lo).rem_euclid(2.0 * span);
    if t > span {
        hi - (t - span)
    } else {
        lo + t
    }
}

/// Paddle y-delta for this tick (caller clamps the result into the court)
pub fn decide_move(
    ball: &Ball,
    paddle: &Paddle,
    profile: &DifficultyProfile,
    config: &Config,
    rng: &mut impl RandomSource,
) -> f32 {
    let target_y = predict_target_y(ball, paddle, profile, config, rng);

    // Chance to react, rolled fresh every tick
    if rng.percent() >= profile.accuracy * 100.0 {
        return 0.0;
    }

    let center = paddle.center_y();
    let step = paddle.speed * profile.reaction_speed;
    if center < target_y - profile.dead_zone {
        step
    } else if center > target_y + profile.dead_zone {
        -step
    } else {
        0.0
    }
}

/// Move the computer paddle by the AI's decision
pub fn move_computer_paddle(
    world: &mut World,
    config: &Config,
    profile: &DifficultyProfile,
    rng: &mut impl RandomSource,
) {
    let ball = match world.query::<&Ball>().iter().next().map(|(_e, b)| *b) {
        Some(ball) => ball,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Computer {
            continue;
        }
        let delta = decide_move(&ball, paddle, profile, config, rng);
        paddle.y = config.clamp_paddle_y(paddle.y + delta);
    }
}
