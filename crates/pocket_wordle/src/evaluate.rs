//! Guess scoring.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::word::{WORD_LEN, Word};

/// How one letter of a guess relates to the secret.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Tag {
    /// The letter is not in the secret, or every copy is already accounted for.
    Absent,
    /// The letter is in the secret at another position.
    Misplaced,
    /// The letter is in the secret at this position.
    Correct,
}

/// Scores `guess` against `secret`, one tag per position.
///
/// Each letter of the secret can justify at most one non-absent tag. Exact
/// matches claim their letter first; the remaining copies are then handed
/// out left to right as [`Tag::Misplaced`].
#[instrument]
pub fn evaluate(secret: &Word, guess: &Word) -> [Tag; WORD_LEN] {
    let mut budget: HashMap<u8, usize> = HashMap::new();
    for &letter in secret.letters() {
        *budget.entry(letter).or_default() += 1;
    }

    let mut tags = [Tag::Absent; WORD_LEN];
    let pairs = || secret.letters().iter().zip(guess.letters()).enumerate();

    for (i, (s, g)) in pairs() {
        if s == g {
            tags[i] = Tag::Correct;
            if let Some(count) = budget.get_mut(g) {
                *count -= 1;
            }
        }
    }

    for (i, (s, g)) in pairs() {
        if s == g {
            continue;
        }
        match budget.get_mut(g) {
            Some(count) if *count > 0 => {
                *count -= 1;
                tags[i] = Tag::Misplaced;
            }
            _ => trace!(position = i, letter = %char::from(*g), "Letter absent"),
        }
    }

    tags
}

/// True when every tag is [`Tag::Correct`].
pub fn is_solved(tags: &[Tag; WORD_LEN]) -> bool {
    tags.iter().all(|t| *t == Tag::Correct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Tag::*;

    fn score(secret: &str, guess: &str) -> [Tag; WORD_LEN] {
        evaluate(
            &Word::parse(secret).expect("secret"),
            &Word::parse(guess).expect("guess"),
        )
    }

    #[test]
    fn test_exact_match_is_all_correct() {
        let tags = score("crane", "crane");
        assert_eq!(tags, [Correct; WORD_LEN]);
        assert!(is_solved(&tags));
    }

    #[test]
    fn test_no_common_letters() {
        assert_eq!(score("crane", "idiot"), [Absent; WORD_LEN]);
    }

    #[test]
    fn test_misplaced_letters() {
        assert_eq!(
            score("crane", "nacre"),
            [Misplaced, Misplaced, Misplaced, Misplaced, Correct]
        );
    }

    #[test]
    fn test_single_secret_copy_tags_one_guess_letter() {
        // The trailing 'e' matches exactly; the other 'e' takes the spare copy.
        assert_eq!(
            score("eagle", "allee"),
            [Misplaced, Misplaced, Absent, Misplaced, Correct]
        );
        // 'l' appears once in "eagle" and twice in "allee".
        let tags = score("eagle", "allee");
        let l_tags: Vec<Tag> = [1, 2].iter().map(|&i| tags[i]).collect();
        assert_eq!(l_tags.iter().filter(|t| **t != Absent).count(), 1);
    }

    #[test]
    fn test_double_secret_letter_single_guess_letter() {
        assert_eq!(
            score("allee", "eagle"),
            [Misplaced, Misplaced, Absent, Misplaced, Correct]
        );
    }

    #[test]
    fn test_correct_claims_budget_before_misplaced() {
        // The 'o' at position 3 matches exactly, so the earlier 'o' is absent.
        assert_eq!(
            score("abbot", "ooxox"),
            [Absent, Absent, Absent, Correct, Absent]
        );
    }

    #[test]
    fn test_repeated_guess_letter_left_to_right() {
        assert_eq!(
            score("spoon", "ooxxx"),
            [Misplaced, Misplaced, Absent, Absent, Absent]
        );
    }
}
