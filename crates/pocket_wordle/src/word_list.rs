//! Newline-delimited word lists.
//!
//! Two lists drive a game: the answers the secret is drawn from, and the
//! words accepted as guesses. Both are plain text, one five-letter lowercase
//! word per line. Blank lines and surrounding whitespace are ignored.

use std::collections::HashSet;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument, warn};

use crate::word::Word;

const BUNDLED_ANSWERS: &str = include_str!("../words/answers.txt");
const BUNDLED_VALID: &str = include_str!("../words/valid.txt");

/// Why a word list could not be loaded.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum WordListError {
    /// The file could not be read.
    #[display("Failed to read word list {}: {}", path, source)]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A line is not a five-letter lowercase word.
    #[display("Line {} is not a five-letter lowercase word: {:?}", line, content)]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// The list has no words.
    #[display("Word list is empty")]
    Empty,
}

/// An ordered list of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Parses newline-delimited words.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Malformed`] for the first bad line, or
    /// [`WordListError::Empty`] if no words are found.
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn parse(text: &str) -> Result<Self, WordListError> {
        let mut words = Vec::new();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let word = Word::parse(line).ok_or_else(|| {
                warn!(line = index + 1, content = line, "Malformed word list entry");
                WordListError::Malformed {
                    line: index + 1,
                    content: line.to_string(),
                }
            })?;
            words.push(word);
        }

        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        debug!(count = words.len(), "Parsed word list");
        Ok(Self { words })
    }

    /// Reads and parses a word list file.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Io`] if the file cannot be read, otherwise the
    /// errors of [`WordList::parse`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| WordListError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let list = Self::parse(&text)?;
        info!(count = list.len(), "Loaded word list");
        Ok(list)
    }

    /// The answer list shipped with the crate.
    ///
    /// # Errors
    ///
    /// Fails only if the bundled file is malformed.
    pub fn bundled_answers() -> Result<Self, WordListError> {
        Self::parse(BUNDLED_ANSWERS)
    }

    /// The guess list shipped with the crate.
    ///
    /// # Errors
    ///
    /// Fails only if the bundled file is malformed.
    pub fn bundled_valid() -> Result<Self, WordListError> {
        Self::parse(BUNDLED_VALID)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the list has no words. Parsed lists are never empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words in file order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Picks a word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Word> {
        self.words.choose(rng).copied()
    }
}

/// The set of words accepted as guesses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<Word>,
}

impl Dictionary {
    /// Builds a dictionary from the union of several lists.
    #[instrument(skip(lists))]
    pub fn new<'a>(lists: impl IntoIterator<Item = &'a WordList>) -> Self {
        let words: HashSet<Word> = lists
            .into_iter()
            .flat_map(|list| list.words().iter().copied())
            .collect();
        debug!(count = words.len(), "Built dictionary");
        Self { words }
    }

    /// True when `word` is an accepted guess.
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Number of accepted words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no word is accepted.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_parse_skips_blank_lines_and_whitespace() {
        let list = WordList::parse("crane\n\n  slate  \r\n").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.words()[1].as_str(), "slate");
    }

    #[test]
    fn test_parse_reports_malformed_line() {
        let err = WordList::parse("crane\ncranes\n").unwrap_err();
        assert!(matches!(
            err,
            WordListError::Malformed { line: 2, ref content } if content == "cranes"
        ));
    }

    #[test]
    fn test_parse_rejects_empty_list() {
        assert!(matches!(
            WordList::parse("\n \n"),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn test_bundled_lists_parse() {
        let answers = WordList::bundled_answers().unwrap();
        let valid = WordList::bundled_valid().unwrap();
        assert!(!answers.is_empty());
        assert!(!valid.is_empty());
    }

    #[test]
    fn test_dictionary_is_union() {
        let answers = WordList::parse("crane").unwrap();
        let valid = WordList::parse("slate\ncrane").unwrap();
        let dictionary = Dictionary::new([&answers, &valid]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains(&Word::parse("crane").unwrap()));
        assert!(!dictionary.contains(&Word::parse("zebra").unwrap()));
    }

    #[test]
    fn test_choose_is_deterministic_for_seed() {
        let list = WordList::bundled_answers().unwrap();
        let a = list.choose(&mut ChaCha8Rng::seed_from_u64(3));
        let b = list.choose(&mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(a, b);
        assert!(a.is_some());
    }
}
