//! Fixed-length lowercase words.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Letters in every word.
pub const WORD_LEN: usize = 5;

/// A five-letter word of lowercase ASCII letters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Word([u8; WORD_LEN]);

impl Word {
    /// Parses a word, accepting exactly five lowercase ASCII letters.
    #[instrument]
    pub fn parse(text: &str) -> Option<Self> {
        let bytes: [u8; WORD_LEN] = text.as_bytes().try_into().ok()?;
        bytes
            .iter()
            .all(u8::is_ascii_lowercase)
            .then_some(Self(bytes))
    }

    /// Builds a word from letters typed so far, if there are exactly five.
    pub fn from_letters(letters: &[u8]) -> Option<Self> {
        let bytes: [u8; WORD_LEN] = letters.try_into().ok()?;
        bytes
            .iter()
            .all(u8::is_ascii_lowercase)
            .then_some(Self(bytes))
    }

    /// The letters of the word.
    pub fn letters(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// The word as a string slice.
    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII letters.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Word({})", self.as_str())
    }
}
