//! Wordle rules.
//!
//! A secret five-letter word is drawn from an answer list. The player has six
//! rounds; each round is typed letter by letter, checked against a list of
//! accepted words, then scored. Scoring follows the usual duplicate-letter
//! rules: exact matches claim their letter first and no letter of the secret
//! is counted twice.
//!
//! # Example
//!
//! ```
//! use pocket_wordle::{Dictionary, GuessBoard, Submission, Tag, Word, WordList};
//!
//! let answers = WordList::parse("crane\nslate").unwrap();
//! let dictionary = Dictionary::new([&answers]);
//! let mut board = GuessBoard::new(Word::parse("crane").unwrap());
//!
//! for c in "slate".chars() {
//!     board.append_letter(c);
//! }
//! let Ok(Submission::Scored { tags, remaining }) = board.submit(&dictionary) else {
//!     panic!("slate is a valid miss");
//! };
//! assert_eq!(tags[2], Tag::Correct);
//! assert_eq!(remaining, 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod evaluate;
mod word;
mod word_list;

pub use board::{BoardStatus, GuessBoard, GuessError, MAX_ROUNDS, Round, Submission};
pub use evaluate::{Tag, evaluate, is_solved};
pub use word::{WORD_LEN, Word};
pub use word_list::{Dictionary, WordList, WordListError};
