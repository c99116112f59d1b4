//! The state machine shared by every game.
//!
//! A [`GameMachine`] walks `Configuring -> Playing -> Won | Lost`, replays
//! from either ending, and climbs one level per cancel signal until it
//! reaches `Menu`. What a game does in each state lives behind
//! [`GameRules`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::StartupError;
use crate::event::{GameKind, InputEvent, Key, Target};

/// Where a game stands.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum MachineState {
    /// No game running; waiting for a selection.
    Menu,
    /// Pre-play setup.
    Configuring,
    /// A round is in progress.
    Playing,
    /// The round was won.
    Won,
    /// The round was lost.
    Lost,
}

/// Why a round was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum LossReason {
    /// The drawn number fit in no slot.
    NoValidPlacement,
    /// Six guesses without finding the word.
    RoundsExhausted,
    /// The chain ran into itself.
    SelfCollision,
    /// The chain reached the arena edge.
    OutOfBounds,
    /// A penalty was touched with only the head left.
    BodyTooShort,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The round was won.
    Won,
    /// The round was lost.
    Lost(LossReason),
}

/// A move refused without changing the round.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The slot cannot hold the current number.
    #[display("Slot {} cannot hold that number", slot + 1)]
    InvalidPlacement {
        /// Rejected slot (0-based).
        slot: usize,
    },
    /// The guess is not an accepted word.
    #[display("'{}' is not in the word list", word)]
    InvalidWord {
        /// Rejected guess.
        word: String,
    },
}

/// What a configuring event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Configure {
    /// Irrelevant event.
    Ignored,
    /// A setting changed.
    Changed,
    /// Begin playing.
    Start,
}

/// What a playing event or tick did to the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Irrelevant event.
    Ignored,
    /// The round changed and continues.
    Applied,
    /// The move was refused; the round is unchanged.
    Rejected(Rejection),
    /// The round is over.
    Finished(Outcome),
}

/// Game-specific behaviour driven by a [`GameMachine`].
///
/// The rules value lives as long as the game is selected, across replays,
/// and holds settings and resources such as loaded word lists. Each round
/// gets a fresh [`GameRules::Round`].
pub trait GameRules {
    /// State of one round.
    type Round: std::fmt::Debug;

    /// Which game these rules implement.
    fn kind(&self) -> GameKind;

    /// Handles an event while configuring.
    fn configure(&mut self, event: &InputEvent) -> Configure;

    /// Builds a fresh round.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError`] when a resource the game needs is missing
    /// or malformed.
    fn new_round(&mut self) -> Result<Self::Round, StartupError>;

    /// Handles an event while playing.
    fn play(&mut self, round: &mut Self::Round, event: &InputEvent) -> Step;

    /// Advances one frame while playing. Turn-based games ignore ticks.
    fn tick(&mut self, _round: &mut Self::Round) -> Step {
        Step::Ignored
    }
}

/// What the machine did with an input or tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Nothing changed.
    Ignored,
    /// Configuration or round changed; state unchanged.
    Applied,
    /// The move was refused.
    Rejected(Rejection),
    /// The machine moved to a new state.
    Entered(MachineState),
}

/// One game's state machine.
#[derive(Debug)]
pub struct GameMachine<R: GameRules> {
    rules: R,
    state: MachineState,
    round: Option<R::Round>,
    outcome: Option<Outcome>,
}

impl<R: GameRules> GameMachine<R> {
    /// Wraps `rules` in a machine that starts in `Configuring`.
    pub fn new(rules: R) -> Self {
        debug!(kind = %rules.kind(), "Creating game machine");
        Self {
            rules,
            state: MachineState::Configuring,
            round: None,
            outcome: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> MachineState {
        self.state
    }

    /// The game's rules and settings.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// The current or just-finished round, absent while configuring.
    pub fn round(&self) -> Option<&R::Round> {
        self.round.as_ref()
    }

    /// How the last round ended, while in `Won` or `Lost`.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Handles one input event.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError`] when starting a round fails. The machine
    /// stays in the state it was in.
    #[instrument(skip(self), fields(kind = %self.rules.kind(), state = %self.state))]
    pub fn on_input(&mut self, event: &InputEvent) -> Result<Feedback, StartupError> {
        if event.is_cancel() {
            return Ok(self.cancel());
        }
        match self.state {
            MachineState::Menu => Ok(Feedback::Ignored),
            MachineState::Configuring => match self.rules.configure(event) {
                Configure::Ignored => Ok(Feedback::Ignored),
                Configure::Changed => Ok(Feedback::Applied),
                Configure::Start => self.start(),
            },
            MachineState::Playing => {
                let Some(round) = self.round.as_mut() else {
                    return Ok(Feedback::Ignored);
                };
                let step = self.rules.play(round, event);
                Ok(self.apply(step))
            }
            MachineState::Won | MachineState::Lost => match event {
                InputEvent::Key(Key::Enter) | InputEvent::Press(Target::Replay) => self.start(),
                InputEvent::Press(Target::ExitToMenu) => {
                    self.discard_round();
                    Ok(self.enter(MachineState::Menu))
                }
                _ => Ok(Feedback::Ignored),
            },
        }
    }

    /// Advances one frame. Only a playing round sees ticks.
    pub fn on_tick(&mut self) -> Feedback {
        if self.state != MachineState::Playing {
            return Feedback::Ignored;
        }
        let Some(round) = self.round.as_mut() else {
            return Feedback::Ignored;
        };
        let step = self.rules.tick(round);
        self.apply(step)
    }

    /// Swaps in a prepared round, keeping the current state.
    #[cfg(test)]
    pub(crate) fn replace_round(&mut self, round: R::Round) {
        self.round = Some(round);
    }

    fn cancel(&mut self) -> Feedback {
        match self.state {
            MachineState::Menu => Feedback::Ignored,
            MachineState::Configuring => self.enter(MachineState::Menu),
            MachineState::Playing | MachineState::Won | MachineState::Lost => {
                self.discard_round();
                self.enter(MachineState::Configuring)
            }
        }
    }

    fn start(&mut self) -> Result<Feedback, StartupError> {
        let round = self.rules.new_round()?;
        self.round = Some(round);
        self.outcome = None;
        Ok(self.enter(MachineState::Playing))
    }

    fn apply(&mut self, step: Step) -> Feedback {
        match step {
            Step::Ignored => Feedback::Ignored,
            Step::Applied => Feedback::Applied,
            Step::Rejected(rejection) => {
                debug!(%rejection, "Move rejected");
                Feedback::Rejected(rejection)
            }
            Step::Finished(outcome) => {
                self.outcome = Some(outcome);
                let next = match outcome {
                    Outcome::Won => MachineState::Won,
                    Outcome::Lost(reason) => {
                        info!(%reason, "Round lost");
                        MachineState::Lost
                    }
                };
                self.enter(next)
            }
        }
    }

    fn discard_round(&mut self) {
        self.round = None;
        self.outcome = None;
    }

    fn enter(&mut self, next: MachineState) -> Feedback {
        info!(kind = %self.rules.kind(), from = %self.state, to = %next, "State transition");
        self.state = next;
        Feedback::Entered(next)
    }
}
