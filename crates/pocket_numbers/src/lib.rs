//! Number Challenge rules.
//!
//! A level fixes the number of slots. Each turn a number is drawn and the
//! player drops it into one of the empty slots; the filled slots must stay
//! strictly increasing when read left to right. Filling every slot wins, and
//! drawing a number that fits nowhere loses.
//!
//! # Example
//!
//! ```
//! use pocket_numbers::{OrderedSlots, Placement, PlacementError};
//!
//! let mut slots = OrderedSlots::new(5);
//! slots.place(1, 10).unwrap();
//! slots.place(3, 30).unwrap();
//!
//! assert_eq!(slots.legal_slots(20), vec![2]);
//! assert_eq!(
//!     slots.place(0, 20),
//!     Err(PlacementError::InvalidPlacement { slot: 0 })
//! );
//! assert_eq!(slots.place(2, 20), Ok(Placement::Placed));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod draw;
mod invariants;
mod level;
mod slots;

pub use draw::{DEFAULT_MAX_VALUE, draw_value};
pub use invariants::StrictlyIncreasing;
pub use level::Level;
pub use slots::{OrderedSlots, Placement, PlacementError};
