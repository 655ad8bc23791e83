//! Pointer-driven buttons.
//!
//! Buttons are an alternate intent source: a click resolves to the same
//! [`Action`] a key press would, and goes through the same transition table.

use crate::{Aabb, Action, Difficulty, Phase};
use glam::Vec2;

pub const BUTTON_WIDTH: f32 = 240.0;
pub const BUTTON_HEIGHT: f32 = 50.0;
pub const BUTTON_SPACING: f32 = 20.0;

/// Pointer state for one tick. `pressed`/`released` are edges, not held state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerInput {
    pub pos: Vec2,
    pub pressed: bool,
    pub released: bool,
}

impl PointerInput {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub rect: Aabb,
    pub action: Action,
}

/// Buttons shown in `phase`, stacked in a column centered on `center`
pub fn layout(phase: Phase, center: Vec2) -> Vec<Button> {
    let entries: Vec<(&'static str, Action)> = match phase {
        Phase::Menu => vec![("Start", Action::Start)],
        Phase::DifficultySelect => Difficulty::ALL
            .iter()
            .map(|&d| (d.name(), Action::Select(d)))
            .chain([("Back", Action::Cancel)])
            .collect(),
        Phase::ReadyToStart => vec![("Go", Action::Start), ("Back", Action::Cancel)],
        Phase::Playing => Vec::new(),
        Phase::Paused => vec![
            ("Resume", Action::Resume),
            ("Restart", Action::Replay),
            ("Main Menu", Action::ToMenu),
        ],
        Phase::GameOver => vec![
            ("Play Again", Action::Replay),
            ("Change Difficulty", Action::Reselect),
        ],
    };

    let count = entries.len() as f32;
    let pitch = BUTTON_HEIGHT + BUTTON_SPACING;
    // Center of the first button; the column is symmetric about `center`
    let first_y = center.y - (count - 1.0) * pitch / 2.0;

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (label, action))| Button {
            label,
            rect: Aabb::from_center_size(
                Vec2::new(center.x, first_y + i as f32 * pitch),
                Vec2::new(BUTTON_WIDTH, BUTTON_HEIGHT),
            ),
            action,
        })
        .collect()
}

/// Button layout for the current phase plus hover and press tracking
#[derive(Debug, Clone)]
pub struct Menu {
    phase: Phase,
    center: Vec2,
    buttons: Vec<Button>,
    hovered: Option<usize>,
    armed: Option<usize>,
}

impl Menu {
    pub fn new(phase: Phase, center: Vec2) -> Self {
        Self {
            phase,
            center,
            buttons: layout(phase, center),
            hovered: None,
            armed: None,
        }
    }

    /// Relayout if the phase changed. A press held across a phase change is dropped.
    pub fn sync(&mut self, phase: Phase) {
        if phase != self.phase {
            *self = Self::new(phase, self.center);
        }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn hovered(&self) -> Option<&Button> {
        self.hovered.and_then(|i| self.buttons.get(i))
    }

    fn hit_test(&self, pos: Vec2) -> Option<usize> {
        self.buttons.iter().position(|b| b.rect.contains(pos))
    }

    /// Update hover and return the action of a completed click, if any
    pub fn handle_pointer(&mut self, pointer: &PointerInput) -> Option<Action> {
        let hit = self.hit_test(pointer.pos);
        self.hovered = hit;

        if pointer.pressed {
            self.armed = hit;
        }

        if pointer.released {
            let clicked = match (self.armed.take(), hit) {
                (Some(armed), Some(hit)) if armed == hit => Some(self.buttons[hit].action),
                _ => None,
            };
            return clicked;
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn court_center() -> Vec2 {
        Config::new().court_center()
    }

    fn center_of(menu: &Menu, label: &str) -> Vec2 {
        menu.buttons()
            .iter()
            .find(|b| b.label == label)
            .map(|b| b.rect.center())
            .expect("button")
    }

    #[test]
    fn test_layout_per_phase() {
        assert_eq!(layout(Phase::Menu, court_center()).len(), 1);
        assert_eq!(layout(Phase::DifficultySelect, court_center()).len(), 5);
        assert_eq!(layout(Phase::ReadyToStart, court_center()).len(), 2);
        assert!(layout(Phase::Playing, court_center()).is_empty());
        assert_eq!(layout(Phase::Paused, court_center()).len(), 3);
        assert_eq!(layout(Phase::GameOver, court_center()).len(), 2);
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let buttons = layout(Phase::DifficultySelect, court_center());
        for pair in buttons.windows(2) {
            assert!(pair[0].rect.max.y < pair[1].rect.min.y);
        }
        let court = Config::new().court();
        for button in &buttons {
            assert!(court.contains(button.rect.min));
            assert!(court.contains(button.rect.max));
        }
    }

    #[test]
    fn test_layout_follows_court() {
        let config = Config {
            court_x: 100.0,
            court_y: 40.0,
            court_width: 640.0,
            court_height: 480.0,
            ..Config::new()
        };
        let center = config.court_center();

        for phase in [Phase::Menu, Phase::Paused, Phase::GameOver] {
            let buttons = layout(phase, center);
            let top = buttons.first().expect("button").rect.min.y;
            let bottom = buttons.last().expect("button").rect.max.y;
            assert_eq!((top + bottom) / 2.0, center.y, "{phase:?} column centered");
            for button in &buttons {
                assert_eq!(button.rect.center().x, center.x);
            }
        }
    }

    #[test]
    fn test_hover_follows_pointer() {
        let mut menu = Menu::new(Phase::Paused, court_center());
        let pos = center_of(&menu, "Restart");

        assert_eq!(menu.handle_pointer(&PointerInput::at(pos)), None);
        assert_eq!(menu.hovered().map(|b| b.label), Some("Restart"));

        menu.handle_pointer(&PointerInput::at(Vec2::ZERO));
        assert!(menu.hovered().is_none());
    }

    #[test]
    fn test_click_fires_on_release() {
        let mut menu = Menu::new(Phase::DifficultySelect, court_center());
        let pos = center_of(&menu, "Hard");

        let press = PointerInput {
            pos,
            pressed: true,
            released: false,
        };
        assert_eq!(menu.handle_pointer(&press), None);

        let release = PointerInput {
            pos,
            pressed: false,
            released: true,
        };
        assert_eq!(
            menu.handle_pointer(&release),
            Some(Action::Select(Difficulty::Hard))
        );
    }

    #[test]
    fn test_drag_off_button_cancels_click() {
        let mut menu = Menu::new(Phase::DifficultySelect, court_center());
        let easy = center_of(&menu, "Easy");
        let back = center_of(&menu, "Back");

        menu.handle_pointer(&PointerInput {
            pos: easy,
            pressed: true,
            released: false,
        });
        let fired = menu.handle_pointer(&PointerInput {
            pos: back,
            pressed: false,
            released: true,
        });
        assert_eq!(fired, None);
    }

    #[test]
    fn test_sync_drops_armed_press() {
        let mut menu = Menu::new(Phase::Menu, court_center());
        let pos = center_of(&menu, "Start");
        menu.handle_pointer(&PointerInput {
            pos,
            pressed: true,
            released: false,
        });

        menu.sync(Phase::DifficultySelect);
        let fired = menu.handle_pointer(&PointerInput {
            pos,
            pressed: false,
            released: true,
        });
        assert_eq!(fired, None);
    }
}
