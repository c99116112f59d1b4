//! The session: game selection and the single active game.

use tracing::{debug, info, instrument};

use crate::config::GamesConfig;
use crate::error::StartupError;
use crate::event::{GameKind, InputEvent, Key, Target};
use crate::games::{NumbersRound, NumbersRules, SnakeRound, SnakeRules, WordleRound, WordleRules};
use crate::machine::{Feedback, GameMachine, MachineState, Outcome};

/// Whether the driver should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    /// Keep going.
    Continue,
    /// Escape was pressed on the menu.
    Quit,
}

/// The selected game's machine.
#[derive(Debug)]
pub enum ActiveGame {
    /// Number Challenge.
    Numbers(GameMachine<NumbersRules>),
    /// Wordle.
    Wordle(GameMachine<WordleRules>),
    /// Snake.
    Snake(GameMachine<SnakeRules>),
}

impl ActiveGame {
    /// A fresh game of `kind` in `Configuring`.
    #[instrument(skip(config))]
    pub fn new(kind: GameKind, config: &GamesConfig) -> Self {
        let seed = *config.seed();
        match kind {
            GameKind::Numbers => {
                Self::Numbers(GameMachine::new(NumbersRules::new(config.numbers(), seed)))
            }
            GameKind::Wordle => {
                Self::Wordle(GameMachine::new(WordleRules::new(config.wordle(), seed)))
            }
            GameKind::Snake => Self::Snake(GameMachine::new(SnakeRules::new(config.snake(), seed))),
        }
    }

    /// Which game this is.
    pub fn kind(&self) -> GameKind {
        match self {
            Self::Numbers(_) => GameKind::Numbers,
            Self::Wordle(_) => GameKind::Wordle,
            Self::Snake(_) => GameKind::Snake,
        }
    }

    /// Machine state.
    pub fn state(&self) -> MachineState {
        match self {
            Self::Numbers(m) => m.state(),
            Self::Wordle(m) => m.state(),
            Self::Snake(m) => m.state(),
        }
    }

    /// How the last round ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Numbers(m) => m.outcome(),
            Self::Wordle(m) => m.outcome(),
            Self::Snake(m) => m.outcome(),
        }
    }

    /// Forwards an input event to the machine.
    ///
    /// # Errors
    ///
    /// Propagates [`StartupError`] from starting a round.
    pub fn on_input(&mut self, event: &InputEvent) -> Result<Feedback, StartupError> {
        match self {
            Self::Numbers(m) => m.on_input(event),
            Self::Wordle(m) => m.on_input(event),
            Self::Snake(m) => m.on_input(event),
        }
    }

    /// Forwards a tick to the machine.
    pub fn on_tick(&mut self) -> Feedback {
        match self {
            Self::Numbers(m) => m.on_tick(),
            Self::Wordle(m) => m.on_tick(),
            Self::Snake(m) => m.on_tick(),
        }
    }

    /// Read-only view of the game.
    pub fn view(&self) -> GameView<'_> {
        match self {
            Self::Numbers(m) => GameView::Numbers {
                level: *m.rules().level(),
                round: m.round(),
            },
            Self::Wordle(m) => GameView::Wordle { round: m.round() },
            Self::Snake(m) => GameView::Snake {
                settings: *m.rules().settings(),
                round: m.round(),
            },
        }
    }
}

/// Borrowed per-game snapshot for renderers.
#[derive(Debug, Clone, Copy)]
pub enum GameView<'a> {
    /// Number Challenge.
    Numbers {
        /// Highlighted level.
        level: pocket_numbers::Level,
        /// Current round, if any.
        round: Option<&'a NumbersRound>,
    },
    /// Wordle.
    Wordle {
        /// Current round, if any.
        round: Option<&'a WordleRound>,
    },
    /// Snake.
    Snake {
        /// Arena tunables.
        settings: pocket_snake::ArenaSettings,
        /// Current round, if any.
        round: Option<&'a SnakeRound>,
    },
}

/// Read-only snapshot of the whole session.
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    /// State of the active game, or `Menu`.
    pub state: MachineState,
    /// Selected game, if any.
    pub kind: Option<GameKind>,
    /// How the last round ended.
    pub outcome: Option<Outcome>,
    /// Per-game snapshot, if a game is selected.
    pub game: Option<GameView<'a>>,
}

/// Owns the configuration and at most one active game.
#[derive(Debug)]
pub struct Session {
    config: GamesConfig,
    active: Option<ActiveGame>,
}

impl Session {
    /// A session on the menu.
    #[instrument(skip(config))]
    pub fn new(config: GamesConfig) -> Self {
        info!("Creating session");
        Self {
            config,
            active: None,
        }
    }

    /// Configuration the session was built with.
    pub fn config(&self) -> &GamesConfig {
        &self.config
    }

    /// The active game, if any.
    pub fn active(&self) -> Option<&ActiveGame> {
        self.active.as_ref()
    }

    /// State of the active game, or `Menu`.
    pub fn state(&self) -> MachineState {
        self.active
            .as_ref()
            .map_or(MachineState::Menu, ActiveGame::state)
    }

    /// Routes an input event to the menu or the active game.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError`] when the active game fails to start a round.
    /// The game stays selected and configuring.
    #[instrument(skip(self), fields(state = %self.state()))]
    pub fn on_input(&mut self, event: &InputEvent) -> Result<SessionControl, StartupError> {
        let Some(game) = self.active.as_mut() else {
            return Ok(self.on_menu_input(event));
        };
        let feedback = game.on_input(event)?;
        debug!(?feedback, "Game handled input");
        if game.state() == MachineState::Menu {
            info!(kind = %game.kind(), "Returning to menu");
            self.active = None;
        }
        Ok(SessionControl::Continue)
    }

    /// Forwards a tick to the active game.
    pub fn on_tick(&mut self) -> Feedback {
        self.active
            .as_mut()
            .map_or(Feedback::Ignored, ActiveGame::on_tick)
    }

    /// Read-only snapshot for renderers.
    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            state: self.state(),
            kind: self.active.as_ref().map(ActiveGame::kind),
            outcome: self.active.as_ref().and_then(ActiveGame::outcome),
            game: self.active.as_ref().map(ActiveGame::view),
        }
    }

    fn on_menu_input(&mut self, event: &InputEvent) -> SessionControl {
        let kind = match *event {
            InputEvent::Key(Key::Escape) => {
                info!("Quit from menu");
                return SessionControl::Quit;
            }
            InputEvent::Key(Key::Char(c)) => GameKind::from_menu_key(c),
            InputEvent::Press(Target::Game(kind)) => Some(kind),
            _ => None,
        };
        if let Some(kind) = kind {
            info!(%kind, "Game selected");
            self.active = Some(ActiveGame::new(kind, &self.config));
        }
        SessionControl::Continue
    }
}
