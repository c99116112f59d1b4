//! Difficulty levels.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A difficulty level. Each level adds five slots.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Level {
    /// Five slots.
    #[default]
    #[strum(to_string = "Level 1")]
    One,
    /// Ten slots.
    #[strum(to_string = "Level 2")]
    Two,
    /// Fifteen slots.
    #[strum(to_string = "Level 3")]
    Three,
    /// Twenty slots.
    #[strum(to_string = "Level 4")]
    Four,
    /// Twenty-five slots.
    #[strum(to_string = "Level 5")]
    Five,
}

impl Level {
    /// Level number, 1 through 5.
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// Looks up a level by its number.
    #[instrument]
    pub fn from_number(number: u8) -> Option<Self> {
        Self::iter().find(|level| level.number() == number)
    }

    /// Number of slots played at this level.
    pub fn slots(self) -> usize {
        usize::from(self.number()) * 5
    }

    /// The next harder level, wrapping to the first.
    pub fn next(self) -> Self {
        Self::from_number(self.number() % 5 + 1).unwrap_or_default()
    }

    /// The next easier level, wrapping to the last.
    pub fn previous(self) -> Self {
        Self::from_number((self.number() + 3) % 5 + 1).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_table() {
        let slots: Vec<usize> = Level::iter().map(Level::slots).collect();
        assert_eq!(slots, vec![5, 10, 15, 20, 25]);
    }

    #[test]
    fn test_from_number_bounds() {
        assert_eq!(Level::from_number(0), None);
        assert_eq!(Level::from_number(3), Some(Level::Three));
        assert_eq!(Level::from_number(6), None);
    }

    #[test]
    fn test_cycling() {
        assert_eq!(Level::Five.next(), Level::One);
        assert_eq!(Level::One.previous(), Level::Five);
        assert_eq!(Level::Three.previous(), Level::Two);
    }
}
