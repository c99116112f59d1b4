//! Ordering invariant for the slot sequence.

use tracing::{instrument, warn};

use crate::OrderedSlots;

/// Invariant: filled slots are strictly increasing in slot order.
pub struct StrictlyIncreasing;

impl StrictlyIncreasing {
    /// Checks the invariant, logging the first offending pair.
    #[instrument(skip(slots))]
    pub fn holds(slots: &OrderedSlots) -> bool {
        let mut previous: Option<(usize, u32)> = None;
        for (index, value) in slots
            .as_slice()
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|v| (i, v)))
        {
            if let Some((prev_index, prev_value)) = previous
                && prev_value >= value
            {
                warn!(
                    prev_index,
                    prev_value,
                    index,
                    value,
                    invariant = Self::description(),
                    "Slot ordering violated"
                );
                return false;
            }
            previous = Some((index, value));
        }
        true
    }

    /// Human-readable description of the invariant.
    pub fn description() -> &'static str {
        "Filled slots are strictly increasing"
    }
}
