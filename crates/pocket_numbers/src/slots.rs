//! Ordered slot sequence and the placement rules over it.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::invariants::StrictlyIncreasing;

/// A fixed number of slots, each empty or holding a placed number.
///
/// The filled slots are always strictly increasing in slot order. The only
/// way to fill a slot is [`OrderedSlots::place`], which refuses anything that
/// would break that ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedSlots {
    slots: Vec<Option<u32>>,
}

/// Successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// The number was placed and empty slots remain.
    Placed,
    /// The number filled the last empty slot.
    Completed,
}

/// Why a placement was refused. The sequence is never modified on error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    /// The chosen slot is filled, out of range, or would break the ordering.
    #[display("Slot {} cannot hold that number", slot)]
    InvalidPlacement {
        /// The rejected slot (0-based).
        slot: usize,
    },

    /// No empty slot can hold the number at all.
    #[display("{} fits in no remaining slot", value)]
    NoValidPlacement {
        /// The number that could not be placed.
        value: u32,
    },
}

impl OrderedSlots {
    /// Creates `len` empty slots.
    #[instrument]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when there are no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Contents of a slot, `None` when empty or out of range.
    pub fn get(&self, slot: usize) -> Option<u32> {
        self.slots.get(slot).copied().flatten()
    }

    /// All slots in order.
    pub fn as_slice(&self) -> &[Option<u32>] {
        &self.slots
    }

    /// True when every slot holds a number.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of filled slots.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True when `value` has already been placed.
    pub fn contains(&self, value: u32) -> bool {
        self.slots.contains(&Some(value))
    }

    /// Returns the empty slots that can hold `candidate` (0-based, ascending).
    ///
    /// A slot is legal when every filled slot before it holds a smaller number
    /// and every filled slot after it holds a larger one. The scan runs in two
    /// passes: the first finds where the window of candidates opens (just past
    /// the last filled slot below `candidate`), the second walks forward from
    /// there collecting empty slots until the next filled slot closes it.
    #[instrument(skip(self), fields(len = self.slots.len()))]
    pub fn legal_slots(&self, candidate: u32) -> Vec<usize> {
        let mut start = 0;
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(value) if *value < candidate => start = index + 1,
                Some(value) if *value == candidate => return Vec::new(),
                Some(_) => break,
                None => {}
            }
        }

        let legal: Vec<usize> = self.slots[start..]
            .iter()
            .take_while(|slot| slot.is_none())
            .enumerate()
            .map(|(offset, _)| start + offset)
            .collect();

        debug!(candidate, ?legal, "Computed legal slots");
        legal
    }

    /// Places `value` into `slot` (0-based).
    ///
    /// # Errors
    ///
    /// - [`PlacementError::NoValidPlacement`] when `value` fits nowhere; this
    ///   is checked first and ends the game.
    /// - [`PlacementError::InvalidPlacement`] when `slot` is not one of the
    ///   legal slots.
    #[instrument(skip(self))]
    pub fn place(&mut self, slot: usize, value: u32) -> Result<Placement, PlacementError> {
        let legal = self.legal_slots(value);
        if legal.is_empty() {
            debug!(value, "No slot can hold the value");
            return Err(PlacementError::NoValidPlacement { value });
        }
        if !legal.contains(&slot) {
            debug!(slot, value, "Rejected placement");
            return Err(PlacementError::InvalidPlacement { slot });
        }

        self.slots[slot] = Some(value);
        debug_assert!(
            StrictlyIncreasing::holds(self),
            "Placement broke invariant: {}",
            StrictlyIncreasing::description()
        );

        if self.is_full() {
            Ok(Placement::Completed)
        } else {
            Ok(Placement::Placed)
        }
    }
}
