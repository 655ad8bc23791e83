//! Round State Machine
//!
//! Phases of a single-player match and the actions that move between them.

use crate::Difficulty;

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Menu,
    DifficultySelect,
    ReadyToStart,
    Playing,
    Paused,
    GameOver,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Select(Difficulty),
    Cancel,
    Pause,
    LostFocus,
    Resume,
    ToMenu,
    Replay,
    Reselect,
    GameOver,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_phase: Phase,
    pub to_phase: Phase,
    pub action: Action,
}

/// Round Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct RoundFsm {
    phase: Phase,
    ready_prompt: bool,
}

impl RoundFsm {
    pub fn new(ready_prompt: bool) -> Self {
        Self {
            phase: Phase::Menu,
            ready_prompt,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: Action) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: Action) -> TransitionResult {
        let from_phase = self.phase;

        match self.next_phase(action) {
            Some(next_phase) => {
                self.phase = next_phase;
                tracing::debug!(?from_phase, to_phase = ?next_phase, ?action, "phase transition");
                TransitionResult {
                    success: true,
                    from_phase,
                    to_phase: next_phase,
                    action,
                }
            }
            None => {
                tracing::debug!(phase = ?from_phase, ?action, "action ignored");
                TransitionResult {
                    success: false,
                    from_phase,
                    to_phase: from_phase,
                    action,
                }
            }
        }
    }

    /// Get next phase for a given action (if valid)
    fn next_phase(&self, action: Action) -> Option<Phase> {
        match (self.phase, action) {
            // From Menu
            (Phase::Menu, Action::Start) => Some(Phase::DifficultySelect),

            // From DifficultySelect
            (Phase::DifficultySelect, Action::Select(_)) => Some(if self.ready_prompt {
                Phase::ReadyToStart
            } else {
                Phase::Playing
            }),
            (Phase::DifficultySelect, Action::Cancel) => Some(Phase::Menu),

            // From ReadyToStart
            (Phase::ReadyToStart, Action::Start) => Some(Phase::Playing),
            (Phase::ReadyToStart, Action::Cancel) => Some(Phase::DifficultySelect),

            // From Playing
            (Phase::Playing, Action::Pause | Action::LostFocus) => Some(Phase::Paused),
            (Phase::Playing, Action::GameOver) => Some(Phase::GameOver),

            // From Paused
            (Phase::Paused, Action::Resume) => Some(Phase::Playing),
            (Phase::Paused, Action::Replay) => Some(Phase::Playing),
            (Phase::Paused, Action::ToMenu) => Some(Phase::Menu),

            // From GameOver
            (Phase::GameOver, Action::Replay) => Some(Phase::Playing),
            (Phase::GameOver, Action::Reselect) => Some(Phase::DifficultySelect),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }
}
