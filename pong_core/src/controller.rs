//! Round controller: one call per tick.
//!
//! Intents are tried in priority order and the first one the phase accepts is
//! applied, so a tick performs at most one intent-driven transition. While
//! `Playing` with no accepted intent, the physics step runs and a game-over
//! event moves the round to `GameOver` in the same tick.

use crate::{
    step, Action, Config, Difficulty, DifficultyError, Effects, Events, MatchState, Menu,
    PaddleInput, Phase, PointerInput, RoundFsm, Snapshot, TransitionResult,
};

/// Intents signalled this tick (edges, except the two movement flags)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub move_up: bool,
    pub move_down: bool,
    pub start: bool,
    pub select: Option<Difficulty>,
    pub cancel: bool,
    pub pause: bool,
    pub lost_focus: bool,
    pub resume: bool,
    pub to_menu: bool,
    pub replay: bool,
    pub reselect: bool,
    pub pointer: Option<PointerInput>,
}

impl TickInput {
    /// Signalled intents, highest priority first
    pub fn actions(&self) -> impl Iterator<Item = Action> {
        let flagged = |flag: bool, action: Action| flag.then_some(action);
        [
            flagged(self.lost_focus, Action::LostFocus),
            flagged(self.pause, Action::Pause),
            flagged(self.resume, Action::Resume),
            self.select.map(Action::Select),
            flagged(self.start, Action::Start),
            flagged(self.replay, Action::Replay),
            flagged(self.reselect, Action::Reselect),
            flagged(self.cancel, Action::Cancel),
            flagged(self.to_menu, Action::ToMenu),
        ]
        .into_iter()
        .flatten()
    }

    pub fn paddle(&self) -> PaddleInput {
        PaddleInput::new(self.move_up, self.move_down)
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub transition: Option<TransitionResult>,
    pub events: Events,
}

pub struct RoundController {
    fsm: RoundFsm,
    state: MatchState,
    menu: Menu,
    effects: Effects,
}

impl RoundController {
    pub fn new(config: Config, seed: u64) -> Self {
        let fsm = RoundFsm::new(config.ready_prompt);
        let state = MatchState::new(config, seed);
        let ball_pos = state.config.court_center();

        Self {
            menu: Menu::new(fsm.phase(), state.config.court_center()),
            fsm,
            state,
            effects: Effects::new(seed.wrapping_add(1), ball_pos),
        }
    }

    pub fn phase(&self) -> Phase {
        self.fsm.phase()
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot(self.fsm.phase())
    }

    /// Advance one tick
    pub fn tick(&mut self, input: &TickInput) -> TickReport {
        let mut report = TickReport::default();

        let clicked = input
            .pointer
            .and_then(|pointer| self.menu.handle_pointer(&pointer));

        for action in input.actions().chain(clicked) {
            if self.fsm.can_transition(action) {
                report.transition = Some(self.apply(action));
                break;
            }
        }

        if report.transition.is_none() && self.fsm.is_playing() {
            step(&mut self.state, input.paddle(), &mut report.events);

            if let Some(winner) = report.events.game_over {
                tracing::info!(?winner, score = ?self.state.score, "game over");
                report.transition = Some(self.apply(Action::GameOver));
            }
        }

        let ball_pos = self
            .state
            .ball()
            .map_or(self.state.config.court_center(), |ball| ball.pos);
        self.effects.update(&report.events, ball_pos);
        self.menu.sync(self.fsm.phase());

        report
    }

    /// Select a difficulty named by an untrusted source. On a parse error the
    /// current difficulty and phase are kept.
    pub fn select_untrusted(&mut self, raw: &str) -> Result<TransitionResult, DifficultyError> {
        let difficulty = raw.parse::<Difficulty>().map_err(|err| {
            tracing::warn!(%err, kept = %self.state.difficulty, "rejected difficulty selection");
            err
        })?;
        Ok(self.apply(Action::Select(difficulty)))
    }

    fn apply(&mut self, action: Action) -> TransitionResult {
        let result = self.fsm.transition(action);
        if !result.success {
            return result;
        }

        match action {
            Action::Select(difficulty) => {
                self.state.start_round(difficulty);
                tracing::info!(%difficulty, "round started");
                self.reset_effects();
            }
            Action::Replay => {
                self.state.restart();
                tracing::info!(difficulty = %self.state.difficulty, "round restarted");
                self.reset_effects();
            }
            _ => {}
        }

        result
    }

    fn reset_effects(&mut self) {
        let ball_pos = self
            .state
            .ball()
            .map_or(self.state.config.court_center(), |ball| ball.pos);
        self.effects.reset(ball_pos);
    }
}
