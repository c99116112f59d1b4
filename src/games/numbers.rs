//! Number Challenge on the shared machine.

use derive_getters::Getters;
use pocket_numbers::{Level, OrderedSlots, Placement, PlacementError, draw_value};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};

use crate::config::NumbersConfig;
use crate::error::StartupError;
use crate::event::{GameKind, InputEvent, Key, Target};
use crate::machine::{Configure, GameRules, LossReason, Outcome, Rejection, Step};

/// Level choice and the number source.
#[derive(Debug, Getters)]
pub struct NumbersRules {
    /// Level played by the next round.
    level: Level,
    /// Largest number drawn.
    max_value: u32,
    #[getter(skip)]
    rng: ChaCha8Rng,
}

impl NumbersRules {
    /// Rules at level one.
    #[instrument(skip(config))]
    pub fn new(config: &NumbersConfig, seed: Option<u64>) -> Self {
        Self {
            level: Level::default(),
            max_value: *config.max_value(),
            rng: super::game_rng(seed),
        }
    }

    fn pick(&mut self, number: u8) -> Configure {
        match Level::from_number(number) {
            Some(level) => {
                self.level = level;
                Configure::Start
            }
            None => Configure::Ignored,
        }
    }
}

/// One round: the slots and the number waiting to be placed.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct NumbersRound {
    /// Level being played.
    level: Level,
    /// The ordered slots.
    slots: OrderedSlots,
    /// Number to place next.
    current: u32,
}

impl NumbersRound {
    /// Slots that can take the current number.
    pub fn legal_slots(&self) -> Vec<usize> {
        self.slots.legal_slots(self.current)
    }
}

impl GameRules for NumbersRules {
    type Round = NumbersRound;

    fn kind(&self) -> GameKind {
        GameKind::Numbers
    }

    fn configure(&mut self, event: &InputEvent) -> Configure {
        match *event {
            InputEvent::Key(Key::Char(c)) => match c.to_digit(10) {
                Some(digit) => self.pick(digit as u8),
                None => Configure::Ignored,
            },
            InputEvent::Press(Target::Level(number)) => self.pick(number),
            InputEvent::Key(Key::Up) => {
                self.level = self.level.previous();
                Configure::Changed
            }
            InputEvent::Key(Key::Down) => {
                self.level = self.level.next();
                Configure::Changed
            }
            InputEvent::Key(Key::Enter) | InputEvent::Press(Target::Start) => Configure::Start,
            _ => Configure::Ignored,
        }
    }

    #[instrument(skip(self), fields(level = %self.level))]
    fn new_round(&mut self) -> Result<NumbersRound, StartupError> {
        let slots = OrderedSlots::new(self.level.slots());
        let current = draw_value(&mut self.rng, &slots, self.max_value);
        info!(slots = slots.len(), current, "Number round started");
        Ok(NumbersRound {
            level: self.level,
            slots,
            current,
        })
    }

    #[instrument(skip(self, round), fields(current = round.current))]
    fn play(&mut self, round: &mut NumbersRound, event: &InputEvent) -> Step {
        let InputEvent::Press(Target::Slot(slot)) = *event else {
            return Step::Ignored;
        };
        match round.slots.place(slot, round.current) {
            Ok(Placement::Completed) => Step::Finished(Outcome::Won),
            Ok(Placement::Placed) => {
                round.current = draw_value(&mut self.rng, &round.slots, self.max_value);
                debug!(next = round.current, "Drew next number");
                Step::Applied
            }
            Err(PlacementError::InvalidPlacement { slot }) => {
                Step::Rejected(Rejection::InvalidPlacement { slot })
            }
            Err(PlacementError::NoValidPlacement { value }) => {
                info!(value, "Number fits nowhere");
                Step::Finished(Outcome::Lost(LossReason::NoValidPlacement))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> NumbersRules {
        NumbersRules::new(&NumbersConfig::default(), Some(11))
    }

    #[test]
    fn test_digit_picks_level_and_starts() {
        let mut rules = rules();
        assert_eq!(rules.configure(&Key::Char('3').into()), Configure::Start);
        assert_eq!(*rules.level(), Level::Three);
        assert_eq!(rules.configure(&Key::Char('9').into()), Configure::Ignored);
        assert_eq!(rules.configure(&Key::Char('a').into()), Configure::Ignored);
        assert_eq!(*rules.level(), Level::Three);
    }

    #[test]
    fn test_arrows_move_highlight() {
        let mut rules = rules();
        assert_eq!(rules.configure(&Key::Up.into()), Configure::Changed);
        assert_eq!(*rules.level(), Level::Five);
        rules.configure(&Key::Down.into());
        rules.configure(&Key::Down.into());
        assert_eq!(*rules.level(), Level::Two);
        assert_eq!(rules.configure(&Target::Start.into()), Configure::Start);
    }

    #[test]
    fn test_round_matches_level() {
        let mut rules = rules();
        rules.configure(&Target::Level(4).into());
        let round = rules.new_round().unwrap();
        assert_eq!(round.slots().len(), 20);
        assert_eq!(round.slots().filled(), 0);
        assert!(*round.current() <= 999);
        assert_eq!(round.legal_slots().len(), 20);
    }

    #[test]
    fn test_illegal_slot_is_rejected() {
        let mut rules = rules();
        let mut round = rules.new_round().unwrap();
        assert_eq!(
            rules.play(&mut round, &Target::Slot(7).into()),
            Step::Rejected(Rejection::InvalidPlacement { slot: 7 })
        );
        assert_eq!(round.slots().filled(), 0);
    }

    #[test]
    fn test_dead_end_loses_on_attempt() {
        let mut rules = rules();
        let mut blocked = NumbersRound {
            level: Level::One,
            slots: OrderedSlots::new(5),
            current: 50,
        };
        blocked.slots.place(0, 100).unwrap();
        blocked.slots.place(1, 200).unwrap();
        blocked.slots.place(2, 300).unwrap();
        blocked.slots.place(3, 400).unwrap();
        let before = blocked.slots.clone();
        assert_eq!(
            rules.play(&mut blocked, &Target::Slot(4).into()),
            Step::Finished(Outcome::Lost(LossReason::NoValidPlacement))
        );
        assert_eq!(blocked.slots, before);
    }

    #[test]
    fn test_last_slot_wins() {
        let mut rules = rules();
        let mut round = NumbersRound {
            level: Level::One,
            slots: OrderedSlots::new(5),
            current: 999,
        };
        for (slot, value) in [(0, 1), (1, 2), (2, 3), (3, 4)] {
            round.slots.place(slot, value).unwrap();
        }
        assert_eq!(
            rules.play(&mut round, &Target::Slot(4).into()),
            Step::Finished(Outcome::Won)
        );
        assert!(round.slots().is_full());
    }

    #[test]
    fn test_keys_ignored_while_playing() {
        let mut rules = rules();
        let mut round = rules.new_round().unwrap();
        assert_eq!(rules.play(&mut round, &Key::Char('1').into()), Step::Ignored);
        assert_eq!(rules.play(&mut round, &Key::Enter.into()), Step::Ignored);
    }
}
