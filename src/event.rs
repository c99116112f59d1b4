//! Discrete input events fed to a session.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The three games in the suite.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum GameKind {
    /// Drop drawn numbers into ordered slots.
    #[strum(to_string = "Number Challenge")]
    Numbers,
    /// Guess a five-letter word in six rounds.
    Wordle,
    /// Steer a growing chain around the arena.
    Snake,
}

impl GameKind {
    /// Key that selects this game from the menu.
    pub fn menu_key(self) -> char {
        match self {
            Self::Numbers => '1',
            Self::Wordle => '2',
            Self::Snake => '3',
        }
    }

    /// The game selected by a menu key, if any.
    pub fn from_menu_key(key: char) -> Option<Self> {
        Self::iter().find(|kind| kind.menu_key() == key)
    }
}

/// A keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Delete the previous character.
    Backspace,
    /// Confirm.
    Enter,
    /// Cancel: one level up.
    Escape,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
}

/// A pointer press already resolved to the control under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// A game button on the menu.
    Game(GameKind),
    /// A level button (1-based).
    Level(u8),
    /// A slot of the Number Challenge (0-based).
    Slot(usize),
    /// The start button while configuring.
    Start,
    /// The replay button after a game ends.
    Replay,
    /// The menu button after a game ends.
    ExitToMenu,
}

/// One input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
pub enum InputEvent {
    /// A key press.
    Key(Key),
    /// A resolved pointer press.
    Press(Target),
}

impl InputEvent {
    /// True for the cancel signal.
    pub fn is_cancel(&self) -> bool {
        matches!(self, Self::Key(Key::Escape))
    }
}
