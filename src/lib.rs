//! Pocket Games: three small games behind one menu.
//!
//! The rules live in their own crates; this crate sequences them.
//!
//! # Architecture
//!
//! - **Machine**: [`GameMachine`] runs any [`GameRules`] through
//!   `Configuring -> Playing -> Won | Lost`, with replay and cancel.
//! - **Games**: rules adapters for Number Challenge, Wordle and Snake.
//! - **Session**: menu selection and the single [`ActiveGame`].
//! - **Config**: [`GamesConfig`] read from TOML.
//!
//! Front-ends feed [`InputEvent`]s and ticks into a [`Session`] and draw
//! from [`Session::view`]; they never touch game state directly.
//!
//! # Example
//!
//! ```
//! use pocket_games::{GamesConfig, Key, MachineState, Session};
//!
//! let mut session = Session::new(GamesConfig::default());
//! session.on_input(&Key::Char('1').into())?;
//! assert_eq!(session.state(), MachineState::Configuring);
//!
//! session.on_input(&Key::Enter.into())?;
//! assert_eq!(session.state(), MachineState::Playing);
//! # Ok::<(), pocket_games::StartupError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod event;
mod games;
mod machine;
mod session;

pub use config::{ConfigError, GamesConfig, NumbersConfig, SnakeConfig, WordleConfig};
pub use error::StartupError;
pub use event::{GameKind, InputEvent, Key, Target};
pub use games::{NumbersRound, NumbersRules, SnakeRound, SnakeRules, WordleRound, WordleRules};
pub use machine::{
    Configure, Feedback, GameMachine, GameRules, LossReason, MachineState, Outcome, Rejection,
    Step,
};
pub use session::{ActiveGame, GameView, Session, SessionControl, SessionView};
