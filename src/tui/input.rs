//! Terminal keys to session input events.

use crossterm::event::KeyCode;
use pocket_games::{GameView, InputEvent, Key, MachineState, SessionView, Target};

/// Translates key codes for the current view.
///
/// Number Challenge slots are picked with a cursor: Left/Right move it and
/// Enter or Space presses the slot under it.
#[derive(Debug, Default)]
pub struct InputMapper {
    slot_cursor: usize,
}

impl InputMapper {
    /// Slot under the cursor.
    pub fn slot_cursor(&self) -> usize {
        self.slot_cursor
    }

    /// Maps `code` to an input event, or `None` when it only moves the cursor
    /// or means nothing here.
    pub fn map(&mut self, code: KeyCode, view: &SessionView<'_>) -> Option<InputEvent> {
        if code == KeyCode::Esc {
            return Some(Key::Escape.into());
        }
        if view.state != MachineState::Playing {
            self.slot_cursor = 0;
        }
        match (view.state, view.game) {
            (MachineState::Won | MachineState::Lost, _) => match code {
                KeyCode::Char('m' | 'M') => Some(Target::ExitToMenu.into()),
                KeyCode::Char('r' | 'R') => Some(Target::Replay.into()),
                KeyCode::Enter => Some(Key::Enter.into()),
                _ => None,
            },
            (
                MachineState::Playing,
                Some(GameView::Numbers {
                    round: Some(round), ..
                }),
            ) => self.map_slot_key(code, round.slots().len()),
            _ => plain_key(code),
        }
    }

    fn map_slot_key(&mut self, code: KeyCode, len: usize) -> Option<InputEvent> {
        let last = len.saturating_sub(1);
        match code {
            KeyCode::Left => {
                self.slot_cursor = self.slot_cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.slot_cursor = (self.slot_cursor + 1).min(last);
                None
            }
            KeyCode::Home => {
                self.slot_cursor = 0;
                None
            }
            KeyCode::End => {
                self.slot_cursor = last;
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                Some(Target::Slot(self.slot_cursor.min(last)).into())
            }
            _ => None,
        }
    }
}

fn plain_key(code: KeyCode) -> Option<InputEvent> {
    let key = match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        _ => return None,
    };
    Some(key.into())
}
