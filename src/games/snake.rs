//! Snake on the shared machine.

use derive_getters::Getters;
use pocket_snake::{Arena, ArenaSettings, Crash, Direction};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

use crate::config::SnakeConfig;
use crate::error::StartupError;
use crate::event::{GameKind, InputEvent, Key, Target};
use crate::machine::{Configure, GameRules, LossReason, Outcome, Step};

/// Arena tunables and the item placement source.
#[derive(Debug, Getters)]
pub struct SnakeRules {
    /// Settings for every new arena.
    settings: ArenaSettings,
    #[getter(skip)]
    rng: ChaCha8Rng,
}

impl SnakeRules {
    /// Rules for arenas described by `config`.
    #[instrument(skip(config))]
    pub fn new(config: &SnakeConfig, seed: Option<u64>) -> Self {
        Self {
            settings: config.arena_settings(),
            rng: super::game_rng(seed),
        }
    }
}

/// One round: the arena, idle until the first key press.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct SnakeRound {
    /// Chain, items and score.
    arena: Arena,
    /// Whether ticks move the chain yet.
    moving: bool,
}

fn heading(key: Key) -> Option<Direction> {
    match key {
        Key::Up => Some(Direction::Up),
        Key::Down => Some(Direction::Down),
        Key::Left => Some(Direction::Left),
        Key::Right => Some(Direction::Right),
        _ => None,
    }
}

fn loss_reason(crash: Crash) -> LossReason {
    match crash {
        Crash::SelfCollision => LossReason::SelfCollision,
        Crash::OutOfBounds => LossReason::OutOfBounds,
        Crash::BodyTooShort => LossReason::BodyTooShort,
    }
}

impl GameRules for SnakeRules {
    type Round = SnakeRound;

    fn kind(&self) -> GameKind {
        GameKind::Snake
    }

    fn configure(&mut self, event: &InputEvent) -> Configure {
        match event {
            InputEvent::Key(Key::Enter) | InputEvent::Press(Target::Start) => Configure::Start,
            _ => Configure::Ignored,
        }
    }

    fn new_round(&mut self) -> Result<SnakeRound, StartupError> {
        Ok(SnakeRound {
            arena: Arena::new(self.settings, &mut self.rng),
            moving: false,
        })
    }

    fn play(&mut self, round: &mut SnakeRound, event: &InputEvent) -> Step {
        let InputEvent::Key(key) = *event else {
            return Step::Ignored;
        };
        let steer = heading(key);
        if let Some(direction) = steer {
            round.arena.steer(direction);
        }
        if !round.moving {
            debug!("Chain starts moving");
            round.moving = true;
            return Step::Applied;
        }
        match steer {
            Some(_) => Step::Applied,
            None => Step::Ignored,
        }
    }

    #[instrument(skip_all)]
    fn tick(&mut self, round: &mut SnakeRound) -> Step {
        if !round.moving {
            return Step::Ignored;
        }
        let report = round.arena.tick(&mut self.rng);
        match report.crash {
            Some(crash) => Step::Finished(Outcome::Lost(loss_reason(crash))),
            None => Step::Applied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{Feedback, GameMachine, MachineState};
    use pocket_snake::{Chain, Point};

    fn rules() -> SnakeRules {
        SnakeRules::new(&SnakeConfig::default(), Some(3))
    }

    fn round_with(chain: Chain, reward: Point, penalty: Point) -> SnakeRound {
        SnakeRound {
            arena: Arena::with_layout(ArenaSettings::default(), chain, reward, penalty),
            moving: true,
        }
    }

    #[test]
    fn test_idle_until_first_key() {
        let mut rules = rules();
        let mut round = rules.new_round().unwrap();
        let head = round.arena().chain().head();
        assert_eq!(rules.tick(&mut round), Step::Ignored);
        assert_eq!(round.arena().chain().head(), head);

        assert_eq!(rules.play(&mut round, &Key::Char(' ').into()), Step::Applied);
        assert_eq!(rules.tick(&mut round), Step::Applied);
        assert_eq!(round.arena().chain().head(), head.offset(-3.0, 0.0));
    }

    #[test]
    fn test_arrow_steers_next_tick() {
        let mut rules = rules();
        let mut round = rules.new_round().unwrap();
        let head = round.arena().chain().head();
        rules.play(&mut round, &Key::Down.into());
        rules.tick(&mut round);
        assert_eq!(round.arena().chain().head(), head.offset(0.0, 3.0));
    }

    #[test]
    fn test_penalty_at_length_one_loses() {
        let mut rules = rules();
        let spot = Point::new(280.0, 300.0);
        let mut round = round_with(
            Chain::new(Point::new(300.0, 300.0), Direction::Left, 1),
            spot,
            spot,
        );
        assert_eq!(
            rules.tick(&mut round),
            Step::Finished(Outcome::Lost(LossReason::BodyTooShort))
        );
        assert_eq!(round.arena().chain().len(), 1);
        assert_eq!(*round.arena().score(), 0);
    }

    #[test]
    fn test_edge_loses() {
        let mut rules = rules();
        let far = Point::new(550.0, 750.0);
        let mut round = round_with(
            Chain::new(Point::new(300.0, 3.0), Direction::Up, 3),
            far,
            far,
        );
        assert_eq!(
            rules.tick(&mut round),
            Step::Finished(Outcome::Lost(LossReason::OutOfBounds))
        );
    }

    #[test]
    fn test_non_arrow_keys_ignored_once_moving() {
        let mut rules = rules();
        let mut round = rules.new_round().unwrap();
        assert_eq!(rules.play(&mut round, &Key::Char('a').into()), Step::Applied);
        let before = round.clone();
        assert_eq!(rules.play(&mut round, &Key::Backspace.into()), Step::Ignored);
        assert_eq!(rules.play(&mut round, &Key::Char('q').into()), Step::Ignored);
        assert_eq!(rules.play(&mut round, &Key::Enter.into()), Step::Ignored);
        assert_eq!(round, before);
        assert_eq!(rules.play(&mut round, &Key::Right.into()), Step::Applied);
    }

    #[test]
    fn test_machine_loses_on_fatal_penalty_tick() {
        let mut machine = GameMachine::new(rules());
        assert_eq!(
            machine.on_input(&Key::Enter.into()).unwrap(),
            Feedback::Entered(MachineState::Playing)
        );
        let spot = Point::new(280.0, 300.0);
        machine.replace_round(round_with(
            Chain::new(Point::new(300.0, 300.0), Direction::Left, 1),
            spot,
            spot,
        ));

        assert_eq!(machine.on_tick(), Feedback::Entered(MachineState::Lost));
        assert_eq!(
            machine.outcome(),
            Some(Outcome::Lost(LossReason::BodyTooShort))
        );
        let arena = machine.round().unwrap().arena();
        assert_eq!(arena.chain().len(), 1);
        assert_eq!(*arena.score(), 0);
        assert_eq!(arena.penalty().position, spot);
        assert_eq!(machine.on_tick(), Feedback::Ignored);
    }

    #[test]
    fn test_pointer_presses_ignored() {
        let mut rules = rules();
        let mut round = rules.new_round().unwrap();
        assert_eq!(rules.play(&mut round, &Target::Slot(0).into()), Step::Ignored);
        assert!(!*round.moving());
    }
}
