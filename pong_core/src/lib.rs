pub mod components;
pub mod config;
pub mod controller;
pub mod difficulty;
pub mod effects;
pub mod fsm;
pub mod map;
pub mod match_state;
pub mod menu;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controller::*;
pub use difficulty::*;
pub use effects::*;
pub use fsm::*;
pub use map::*;
pub use match_state::*;
pub use menu::*;
pub use params::*;
pub use resources::*;
pub use systems::*;

use hecs::World;

/// Advance a match by one fixed tick
pub fn step(state: &mut MatchState, input: PaddleInput, events: &mut Events) {
    // Clear events at start of tick
    events.clear();

    // 1. Player paddle from held intents
    move_player_paddle(&mut state.world, input, &state.config);

    // 2. Computer paddle from the AI decision
    move_computer_paddle(&mut state.world, &state.config, &state.profile, &mut state.rng);

    // 3. Move ball
    move_ball(&mut state.world);

    // 4. Check collisions (walls, then paddles)
    check_collisions(&mut state.world, &state.config, &state.profile, events);

    // 5. Check scoring (ball left the court)
    check_scoring(
        &mut state.world,
        &state.config,
        &state.profile,
        &mut state.score,
        events,
        &mut state.rng,
    );

    // 6. Speed cap
    clamp_ball_speed(&mut state.world, &state.profile);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle) -> hecs::Entity {
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
