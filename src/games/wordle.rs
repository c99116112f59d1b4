//! Wordle on the shared machine.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use pocket_wordle::{Dictionary, GuessBoard, GuessError, Submission, WordList, WordListError};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};

use crate::config::WordleConfig;
use crate::error::StartupError;
use crate::event::{GameKind, InputEvent, Key, Target};
use crate::machine::{Configure, GameRules, LossReason, Outcome, Rejection, Step};

/// Answers to draw from and the words accepted as guesses.
#[derive(Debug)]
struct Lexicon {
    answers: WordList,
    dictionary: Dictionary,
}

/// Word-list sources and, once started, the loaded lists.
#[derive(Debug)]
pub struct WordleRules {
    answers_path: Option<PathBuf>,
    valid_path: Option<PathBuf>,
    lexicon: Option<Lexicon>,
    rng: ChaCha8Rng,
}

impl WordleRules {
    /// Rules reading the lists named in `config`, or the bundled ones.
    #[instrument(skip(config))]
    pub fn new(config: &WordleConfig, seed: Option<u64>) -> Self {
        Self {
            answers_path: config.answers().clone(),
            valid_path: config.valid().clone(),
            lexicon: None,
            rng: super::game_rng(seed),
        }
    }

    /// True once the word lists have been loaded.
    pub fn is_loaded(&self) -> bool {
        self.lexicon.is_some()
    }

    fn load(&self) -> Result<Lexicon, StartupError> {
        let answers = read_list(self.answers_path.as_deref(), WordList::bundled_answers)
            .map_err(StartupError::word_list("answers"))?;
        let valid = read_list(self.valid_path.as_deref(), WordList::bundled_valid)
            .map_err(StartupError::word_list("valid"))?;
        let dictionary = Dictionary::new([&answers, &valid]);
        info!(
            answers = answers.len(),
            accepted = dictionary.len(),
            "Word lists loaded"
        );
        Ok(Lexicon {
            answers,
            dictionary,
        })
    }
}

fn read_list(
    path: Option<&Path>,
    bundled: fn() -> Result<WordList, WordListError>,
) -> Result<WordList, WordListError> {
    match path {
        Some(path) => WordList::from_file(path),
        None => bundled(),
    }
}

/// One round: the guess board and the invalid-word flag.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct WordleRound {
    /// Secret and guesses.
    board: GuessBoard,
    /// Set by a rejected guess, cleared by the next edit.
    invalid: bool,
}

impl GameRules for WordleRules {
    type Round = WordleRound;

    fn kind(&self) -> GameKind {
        GameKind::Wordle
    }

    fn configure(&mut self, event: &InputEvent) -> Configure {
        match event {
            InputEvent::Key(Key::Enter) | InputEvent::Press(Target::Start) => Configure::Start,
            _ => Configure::Ignored,
        }
    }

    #[instrument(skip(self))]
    fn new_round(&mut self) -> Result<WordleRound, StartupError> {
        let lexicon = match self.lexicon.take() {
            Some(lexicon) => lexicon,
            None => self.load()?,
        };
        let secret = lexicon.answers.choose(&mut self.rng);
        self.lexicon = Some(lexicon);
        let secret = secret.ok_or(StartupError::WordList {
            list: "answers",
            source: WordListError::Empty,
        })?;
        debug!(%secret, "Secret drawn");
        Ok(WordleRound {
            board: GuessBoard::new(secret),
            invalid: false,
        })
    }

    #[instrument(skip(self, round))]
    fn play(&mut self, round: &mut WordleRound, event: &InputEvent) -> Step {
        let InputEvent::Key(key) = *event else {
            return Step::Ignored;
        };
        match key {
            Key::Char(c) => edited(round, |board| board.append_letter(c)),
            Key::Backspace => edited(round, GuessBoard::remove_last_letter),
            Key::Enter => {
                let Some(lexicon) = self.lexicon.as_ref() else {
                    return Step::Ignored;
                };
                match round.board.submit(&lexicon.dictionary) {
                    Ok(Submission::Solved(_)) => Step::Finished(Outcome::Won),
                    Ok(Submission::Exhausted(_)) => {
                        Step::Finished(Outcome::Lost(LossReason::RoundsExhausted))
                    }
                    Ok(Submission::Scored { .. }) => Step::Applied,
                    Err(GuessError::InvalidWord { word }) => {
                        round.invalid = true;
                        Step::Rejected(Rejection::InvalidWord { word })
                    }
                    Err(GuessError::Incomplete { .. } | GuessError::BoardClosed) => Step::Ignored,
                }
            }
            _ => Step::Ignored,
        }
    }
}

fn edited(round: &mut WordleRound, edit: impl FnOnce(&mut GuessBoard) -> bool) -> Step {
    if edit(&mut round.board) {
        round.invalid = false;
        Step::Applied
    } else {
        Step::Ignored
    }
}
