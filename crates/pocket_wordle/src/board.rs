//! Guess rounds for one secret word.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::evaluate::{Tag, evaluate, is_solved};
use crate::word::{WORD_LEN, Word};
use crate::word_list::Dictionary;

/// Guesses allowed per secret.
pub const MAX_ROUNDS: usize = 6;

/// One guess: letters being typed, and the tags once submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Round {
    /// Letters typed so far, lowercase ASCII.
    letters: Vec<u8>,
    /// Per-letter tags, present only once the round is sealed.
    tags: Option<[Tag; WORD_LEN]>,
}

impl Round {
    /// True once the round has been submitted and scored.
    pub fn is_sealed(&self) -> bool {
        self.tags.is_some()
    }

    /// The typed letters as text.
    pub fn text(&self) -> String {
        self.letters.iter().map(|&b| char::from(b)).collect()
    }
}

/// Where the board stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum BoardStatus {
    /// Guesses are still accepted.
    Open,
    /// A sealed round matched the secret.
    Solved,
    /// Every round was used without a match.
    Exhausted,
}

/// Result of a scored submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The guess matched the secret.
    Solved([Tag; WORD_LEN]),
    /// The guess was scored and more rounds remain.
    Scored {
        /// Tags for the guess.
        tags: [Tag; WORD_LEN],
        /// Rounds still available.
        remaining: usize,
    },
    /// The guess was scored and it was the last round.
    Exhausted([Tag; WORD_LEN]),
}

/// Why a submission was not scored. The board is unchanged on error.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GuessError {
    /// Fewer than five letters have been typed.
    #[display("Guess has only {} letters", len)]
    Incomplete {
        /// Letters typed.
        len: usize,
    },

    /// The guess is not in the validity list.
    #[display("'{}' is not in the word list", word)]
    InvalidWord {
        /// The rejected guess.
        word: String,
    },

    /// The board is solved or exhausted.
    #[display("No rounds remain")]
    BoardClosed,
}

/// Six rounds of guesses against one secret word.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GuessBoard {
    /// The word being guessed.
    secret: Word,
    /// Sealed rounds followed by the round being typed, if the board is open.
    rounds: Vec<Round>,
    /// Current status.
    status: BoardStatus,
}

impl GuessBoard {
    /// Starts a board for `secret` with an empty first round.
    #[instrument]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            rounds: vec![Round::default()],
            status: BoardStatus::Open,
        }
    }

    /// Number of sealed rounds. Only ever increases.
    pub fn round_index(&self) -> usize {
        self.rounds.iter().filter(|r| r.is_sealed()).count()
    }

    /// The round being typed, if the board is open.
    pub fn current(&self) -> Option<&Round> {
        self.rounds.last().filter(|r| !r.is_sealed())
    }

    fn current_mut(&mut self) -> Option<&mut Round> {
        self.rounds.last_mut().filter(|r| !r.is_sealed())
    }

    /// Appends a letter to the current round.
    ///
    /// Letters are case-folded; anything but an ASCII letter is ignored, as is
    /// typing past five letters. Returns whether the round changed.
    #[instrument(skip(self))]
    pub fn append_letter(&mut self, letter: char) -> bool {
        if !letter.is_ascii_alphabetic() {
            return false;
        }
        let Some(round) = self.current_mut() else {
            return false;
        };
        if round.letters.len() >= WORD_LEN {
            return false;
        }
        round.letters.push(letter.to_ascii_lowercase() as u8);
        true
    }

    /// Removes the last letter of the current round. Returns whether the round changed.
    #[instrument(skip(self))]
    pub fn remove_last_letter(&mut self) -> bool {
        self.current_mut()
            .and_then(|round| round.letters.pop())
            .is_some()
    }

    /// Submits the current round.
    ///
    /// A valid guess is scored and sealed, and a fresh round opens if any
    /// remain.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError`] without touching the board when the round is
    /// incomplete, the word is not in `dictionary`, or the board is closed.
    #[instrument(skip(self, dictionary), fields(round = self.round_index()))]
    pub fn submit(&mut self, dictionary: &Dictionary) -> Result<Submission, GuessError> {
        let secret = self.secret;
        let round = self.current_mut().ok_or(GuessError::BoardClosed)?;

        let guess = Word::from_letters(&round.letters).ok_or(GuessError::Incomplete {
            len: round.letters.len(),
        })?;
        if !dictionary.contains(&guess) {
            debug!(%guess, "Guess not in dictionary");
            return Err(GuessError::InvalidWord {
                word: guess.to_string(),
            });
        }

        let tags = evaluate(&secret, &guess);
        round.tags = Some(tags);
        let sealed = self.round_index();
        debug!(%guess, ?tags, sealed, "Round sealed");

        if is_solved(&tags) {
            info!(rounds = sealed, "Secret found");
            self.status = BoardStatus::Solved;
            return Ok(Submission::Solved(tags));
        }
        if sealed >= MAX_ROUNDS {
            info!(secret = %self.secret, "Rounds exhausted");
            self.status = BoardStatus::Exhausted;
            return Ok(Submission::Exhausted(tags));
        }

        self.rounds.push(Round::default());
        Ok(Submission::Scored {
            tags,
            remaining: MAX_ROUNDS - sealed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word_list::WordList;

    fn dictionary() -> Dictionary {
        let list = WordList::parse("crane\nslate\nallee\neagle\nnacre\nspoon\n").unwrap();
        Dictionary::new([&list])
    }

    fn type_word(board: &mut GuessBoard, word: &str) {
        for c in word.chars() {
            board.append_letter(c);
        }
    }

    #[test]
    fn test_typing_stops_at_five_letters() {
        let mut board = GuessBoard::new(Word::parse("crane").unwrap());
        type_word(&mut board, "slates");
        assert_eq!(board.current().unwrap().text(), "slate");
    }

    #[test]
    fn test_typing_folds_case_and_skips_symbols() {
        let mut board = GuessBoard::new(Word::parse("crane").unwrap());
        assert!(board.append_letter('S'));
        assert!(!board.append_letter('1'));
        assert!(!board.append_letter(' '));
        assert_eq!(board.current().unwrap().text(), "s");
    }

    #[test]
    fn test_backspace_on_empty_round() {
        let mut board = GuessBoard::new(Word::parse("crane").unwrap());
        assert!(!board.remove_last_letter());
        board.append_letter('a');
        assert!(board.remove_last_letter());
        assert!(board.current().unwrap().letters().is_empty());
    }

    #[test]
    fn test_incomplete_submission_rejected() {
        let mut board = GuessBoard::new(Word::parse("crane").unwrap());
        type_word(&mut board, "cra");
        assert_eq!(
            board.submit(&dictionary()),
            Err(GuessError::Incomplete { len: 3 })
        );
        assert_eq!(board.round_index(), 0);
    }

    #[test]
    fn test_invalid_word_keeps_round_editable() {
        let mut board = GuessBoard::new(Word::parse("crane").unwrap());
        type_word(&mut board, "zzzzz");
        let before = board.clone();
        assert_eq!(
            board.submit(&dictionary()),
            Err(GuessError::InvalidWord {
                word: "zzzzz".to_string()
            })
        );
        assert_eq!(board, before);
        assert!(board.remove_last_letter());
    }

    #[test]
    fn test_scored_round_is_sealed() {
        let mut board = GuessBoard::new(Word::parse("crane").unwrap());
        type_word(&mut board, "slate");
        let result = board.submit(&dictionary()).unwrap();
        assert!(matches!(result, Submission::Scored { remaining: 5, .. }));
        assert_eq!(board.round_index(), 1);
        assert!(board.rounds()[0].is_sealed());
        assert!(board.current().unwrap().letters().is_empty());
    }

    #[test]
    fn test_solving_closes_board() {
        let mut board = GuessBoard::new(Word::parse("crane").unwrap());
        type_word(&mut board, "crane");
        assert_eq!(
            board.submit(&dictionary()),
            Ok(Submission::Solved([Tag::Correct; WORD_LEN]))
        );
        assert_eq!(*board.status(), BoardStatus::Solved);
        assert!(!board.append_letter('a'));
        assert_eq!(board.submit(&dictionary()), Err(GuessError::BoardClosed));
    }

    #[test]
    fn test_sixth_miss_exhausts() {
        let mut board = GuessBoard::new(Word::parse("crane").unwrap());
        for _ in 0..5 {
            type_word(&mut board, "slate");
            assert!(matches!(
                board.submit(&dictionary()),
                Ok(Submission::Scored { .. })
            ));
        }
        type_word(&mut board, "spoon");
        assert!(matches!(
            board.submit(&dictionary()),
            Ok(Submission::Exhausted(_))
        ));
        assert_eq!(*board.status(), BoardStatus::Exhausted);
        assert_eq!(board.round_index(), MAX_ROUNDS);
        assert!(board.current().is_none());
    }
}
