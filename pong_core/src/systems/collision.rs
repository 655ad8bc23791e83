use crate::{Ball, Config, DifficultyProfile, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(
    world: &mut World,
    config: &Config,
    profile: &DifficultyProfile,
    events: &mut Events,
) {
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, config) {
            events.ball_hit_wall = true;
        }

        for paddle in &paddles {
            if bounce_off_paddle(ball, paddle, config, profile) {
                events.ball_hit_paddle = Some(paddle.side);
            }
        }
    }
}

/// Reflect off the top/bottom walls and put the ball back on the boundary.
/// Returns true if the ball touched a wall.
pub fn bounce_off_walls(ball: &mut Ball, config: &Config) -> bool {
    let top = config.court_top();
    let bottom = config.court_bottom();

    if ball.pos.y - ball.radius <= top {
        ball.vel.y = ball.vel.y.abs();
        ball.pos.y = top + ball.radius;
        true
    } else if ball.pos.y + ball.radius >= bottom {
        ball.vel.y = -ball.vel.y.abs();
        ball.pos.y = bottom - ball.radius;
        true
    } else {
        false
    }
}

/// Returns true on a hit. Only a ball travelling toward the paddle can hit it.
pub fn bounce_off_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    config: &Config,
    profile: &DifficultyProfile,
) -> bool {
    if !ball.is_moving_toward(paddle.side) {
        return false;
    }

    let reached_face = match paddle.side {
        Side::Player => ball.leading_x() <= paddle.x + paddle.width,
        Side::Computer => ball.leading_x() >= paddle.x,
    };
    let within_paddle = ball.pos.y >= paddle.y && ball.pos.y <= paddle.y + paddle.height;
    if !reached_face || !within_paddle {
        return false;
    }

    ball.hit_counter += 1;
    if let Some(esc) = profile.escalation {
        if ball.hit_counter > esc.after_hits {
            ball.speed_multiplier = (ball.speed_multiplier + esc.step).min(esc.cap);
        }
    }

    ball.vel.x *= -profile.hit_factor(ball.speed_multiplier);

    // -1 at the top edge, 1 at the bottom edge
    let half_height = paddle.height / 2.0;
    let hit_position = ((ball.pos.y - paddle.center_y()) / half_height).clamp(-1.0, 1.0);
    ball.vel.y = ball.vel.y * config.spin_retain + hit_position * config.spin_strength;

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Difficulty};
    use glam::Vec2;

    fn setup_world() -> (World, Config, DifficultyProfile, Events) {
        let world = World::new();
        let config = Config::new();
        let profile = Difficulty::Medium.profile();
        let events = Events::new();
        (world, config, profile, events)
    }

    fn ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .expect("ball")
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, profile, mut events) = setup_world();
        let ball_pos = Vec2::new(500.0, config.court_top() + config.ball_radius - 3.0);
        let ball_vel = Vec2::new(4.0, -4.0);
        create_ball(&mut world, Ball::new(ball_pos, ball_vel, config.ball_radius));

        check_collisions(&mut world, &config, &profile, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.y, 4.0, "Ball should bounce down after hitting top wall");
        assert_eq!(ball.vel.x, ball_vel.x, "X velocity should be unchanged");
        assert_eq!(
            ball.pos.y,
            config.court_top() + config.ball_radius,
            "Ball should sit exactly on the boundary"
        );
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, profile, mut events) = setup_world();
        let ball_pos = Vec2::new(500.0, config.court_bottom() - config.ball_radius + 5.0);
        let ball_vel = Vec2::new(4.0, 4.0);
        create_ball(&mut world, Ball::new(ball_pos, ball_vel, config.ball_radius));

        check_collisions(&mut world, &config, &profile, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.y, -4.0, "Ball should bounce up after hitting bottom wall");
        assert_eq!(ball.pos.y, config.court_bottom() - config.ball_radius);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_wall_event_mid_court() {
        let (mut world, config, profile, mut events) = setup_world();
        create_ball(
            &mut world,
            Ball::new(config.court_center(), Vec2::new(4.0, 4.0), config.ball_radius),
        );

        check_collisions(&mut world, &config, &profile, &mut events);

        assert!(events.is_empty());
        assert_eq!(ball(&world).vel, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_ball_collides_with_player_paddle() {
        let (mut world, config, profile, mut events) = setup_world();
        let paddle = Paddle::new(Side::Player, &config, 10.0);
        create_paddle(&mut world, paddle);

        let ball_pos = Vec2::new(paddle.x + paddle.width + config.ball_radius - 2.0, paddle.center_y());
        create_ball(&mut world, Ball::new(ball_pos, Vec2::new(-8.0, 0.0), config.ball_radius));

        check_collisions(&mut world, &config, &profile, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.x, 8.0 * profile.speed_increase, "Ball should bounce right faster");
        assert_eq!(ball.vel.y, 0.0, "Center hit keeps a flat trajectory");
        assert_eq!(ball.hit_counter, 1);
        assert_eq!(events.ball_hit_paddle, Some(Side::Player));
    }

    #[test]
    fn test_ball_collides_with_computer_paddle() {
        let (mut world, config, profile, mut events) = setup_world();
        let paddle = Paddle::new(Side::Computer, &config, profile.paddle_speed);
        create_paddle(&mut world, paddle);

        let ball_pos = Vec2::new(paddle.x - config.ball_radius + 1.0, paddle.center_y());
        create_ball(&mut world, Ball::new(ball_pos, Vec2::new(8.0, 2.0), config.ball_radius));

        check_collisions(&mut world, &config, &profile, &mut events);

        let ball = ball(&world);
        assert!(ball.vel.x < 0.0, "Ball should bounce left after hitting computer paddle");
        assert_eq!(ball.vel.y, 2.0 * config.spin_retain);
        assert_eq!(events.ball_hit_paddle, Some(Side::Computer));
    }

    #[test]
    fn test_ball_misses_paddle_outside_vertical_extent() {
        let (mut world, config, profile, mut events) = setup_world();
        let paddle = Paddle::new(Side::Player, &config, 10.0);
        create_paddle(&mut world, paddle);

        let ball_pos = Vec2::new(paddle.x + paddle.width, paddle.y - 1.0);
        create_ball(&mut world, Ball::new(ball_pos, Vec2::new(-8.0, 0.0), config.ball_radius));

        check_collisions(&mut world, &config, &profile, &mut events);

        assert_eq!(events.ball_hit_paddle, None);
        assert_eq!(ball(&world).vel.x, -8.0);
    }

    #[test]
    fn test_trajectory_affected_by_hit_position() {
        let config = Config::new();
        let profile = Difficulty::Medium.profile();
        let paddle = Paddle::new(Side::Player, &config, 10.0);
        let x = paddle.x + paddle.width;

        let mut top = Ball::new(Vec2::new(x, paddle.y), Vec2::new(-6.0, 0.0), 15.0);
        assert!(bounce_off_paddle(&mut top, &paddle, &config, &profile));
        assert_eq!(top.vel.y, -config.spin_strength, "Top edge deflects steeply upward");

        let mut bottom = Ball::new(
            Vec2::new(x, paddle.y + paddle.height),
            Vec2::new(-6.0, 0.0),
            15.0,
        );
        assert!(bounce_off_paddle(&mut bottom, &paddle, &config, &profile));
        assert_eq!(bottom.vel.y, config.spin_strength);

        let mut blended = Ball::new(
            Vec2::new(x, paddle.center_y() + paddle.height / 4.0),
            Vec2::new(-6.0, 4.0),
            15.0,
        );
        assert!(bounce_off_paddle(&mut blended, &paddle, &config, &profile));
        assert_eq!(
            blended.vel.y,
            4.0 * config.spin_retain + 0.5 * config.spin_strength
        );
    }

    #[test]
    fn test_ball_does_not_bounce_when_moving_away_from_paddle() {
        let (mut world, config, profile, mut events) = setup_world();
        let paddle = Paddle::new(Side::Player, &config, 10.0);
        create_paddle(&mut world, paddle);

        // Just returned by the paddle and still overlapping it
        let ball_pos = Vec2::new(paddle.x + paddle.width, paddle.center_y());
        create_ball(&mut world, Ball::new(ball_pos, Vec2::new(8.0, 0.0), config.ball_radius));

        check_collisions(&mut world, &config, &profile, &mut events);

        assert_eq!(ball(&world).vel.x, 8.0, "Ball should not bounce when moving away");
        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_single_hit_per_approach() {
        let (mut world, config, profile, mut events) = setup_world();
        let paddle = Paddle::new(Side::Player, &config, 10.0);
        create_paddle(&mut world, paddle);

        let ball_pos = Vec2::new(paddle.x + paddle.width + config.ball_radius, paddle.center_y());
        create_ball(&mut world, Ball::new(ball_pos, Vec2::new(-3.0, 0.0), config.ball_radius));

        let mut hits = 0;
        for _ in 0..30 {
            events.clear();
            crate::move_ball(&mut world);
            check_collisions(&mut world, &config, &profile, &mut events);
            if events.ball_hit_paddle.is_some() {
                hits += 1;
            }
        }

        assert_eq!(hits, 1, "Paddle must fire once while the ball crosses its x-span");
        assert!(ball(&world).vel.x > 0.0);
    }

    #[test]
    fn test_impossible_escalates_after_three_hits() {
        let config = Config::new();
        let profile = Difficulty::Impossible.profile();
        let paddle = Paddle::new(Side::Player, &config, 10.0);
        let mut ball = Ball::new(
            Vec2::new(paddle.x + paddle.width, paddle.center_y()),
            Vec2::new(-1.0, 0.0),
            15.0,
        );

        for expected in [1.0, 1.0, 1.0, 1.08] {
            ball.vel.x = -1.0;
            bounce_off_paddle(&mut ball, &paddle, &config, &profile);
            assert!((ball.speed_multiplier - expected).abs() < 1e-5);
        }
        assert_eq!(ball.hit_counter, 4);
        assert!((ball.vel.x - 1.08 * 1.08).abs() < 1e-5);

        for _ in 0..40 {
            ball.vel.x = -1.0;
            bounce_off_paddle(&mut ball, &paddle, &config, &profile);
        }
        assert_eq!(ball.speed_multiplier, 2.5, "Multiplier is capped");
    }

    #[test]
    fn test_lower_tiers_never_escalate() {
        let config = Config::new();
        let profile = Difficulty::Hard.profile();
        let paddle = Paddle::new(Side::Player, &config, 10.0);
        let mut ball = Ball::new(
            Vec2::new(paddle.x + paddle.width, paddle.center_y()),
            Vec2::new(-1.0, 0.0),
            15.0,
        );

        for _ in 0..10 {
            ball.vel.x = -1.0;
            bounce_off_paddle(&mut ball, &paddle, &config, &profile);
        }
        assert_eq!(ball.hit_counter, 10);
        assert_eq!(ball.speed_multiplier, 1.0);
        assert_eq!(ball.vel.x, 1.05);
    }
}
