//! Snake rules.
//!
//! A rigid chain of segments slides through a bounded arena, one step per
//! tick, in one of four headings. Touching a reward grows the chain and
//! scores; touching a penalty shrinks it. Running into the body, reaching an
//! edge, or touching a penalty with only the head left ends the game. Speed
//! rises with the score up to a ceiling.
//!
//! # Example
//!
//! ```
//! use pocket_snake::{Arena, ArenaSettings, Chain, Direction, Point};
//! use rand::SeedableRng;
//!
//! let chain = Chain::new(Point::new(300.0, 300.0), Direction::Left, 3);
//! let far = Point::new(550.0, 750.0);
//! let mut arena = Arena::with_layout(ArenaSettings::default(), chain, far, far);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//!
//! arena.steer(Direction::Up);
//! let report = arena.tick(&mut rng);
//! assert!(report.crash.is_none());
//! assert_eq!(arena.chain().head(), Point::new(300.0, 297.0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod chain;
mod geometry;

pub use arena::{
    Arena, ArenaSettings, BASE_STEP, Crash, ITEM_SIZE, Item, ItemKind, REWARD_POINTS,
    SCORE_PER_SPEED, TickReport,
};
pub use chain::{Chain, ChainError, SEGMENT_SIZE, SEGMENT_SPACING};
pub use geometry::{Bounds, Direction, Hitbox, Point};
