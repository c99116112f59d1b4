//! Startup errors for a game leaving `Configuring`.

use derive_more::{Display, Error};
use pocket_wordle::WordListError;

/// A game could not start. The machine stays in `Configuring`.
///
/// Distinct from in-game losses: nothing was played yet.
#[derive(Debug, Display, Error)]
pub enum StartupError {
    /// A word list failed to load.
    #[display("Could not load the {} word list: {}", list, source)]
    WordList {
        /// Which list failed ("answers" or "valid").
        list: &'static str,
        /// Underlying failure.
        source: WordListError,
    },
}

impl StartupError {
    /// Wraps a word-list failure for the named list.
    pub fn word_list(list: &'static str) -> impl FnOnce(WordListError) -> Self {
        move |source| Self::WordList { list, source }
    }
}
