use crate::{Ball, Config, DifficultyProfile, Events, RandomSource, Score, Serve, Side};
use hecs::World;

/// Check if ball left the court (scoring). At most one point per tick.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    profile: &DifficultyProfile,
    score: &mut Score,
    events: &mut Events,
    rng: &mut impl RandomSource,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x - ball.radius < config.court_left() {
            Side::Computer
        } else if ball.pos.x + ball.radius > config.court_right() {
            Side::Player
        } else {
            continue;
        };

        score.increment(scorer);
        events.scored = Some(scorer);
        tracing::info!(
            ?scorer,
            player = score.player,
            computer = score.computer,
            "point scored"
        );

        ball.reset(
            config.court_center(),
            profile.initial_ball_speed,
            Serve::after_point(scorer),
            rng,
        );

        if let Some(winner) = score.has_winner(config.win_score) {
            events.game_over = Some(winner);
            tracing::info!(?winner, "match point reached");
        }
    }
}
