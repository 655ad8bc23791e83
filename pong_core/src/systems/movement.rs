use crate::{Ball, DifficultyProfile};
use hecs::World;

/// Move ball one tick along its velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Clamp each velocity component to the tier's speed cap
pub fn clamp_ball_speed(world: &mut World, profile: &DifficultyProfile) {
    let max = profile.max_speed;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel.x = ball.vel.x.clamp(-max, max);
        ball.vel.y = ball.vel.y.clamp(-max, max);
    }
}
