//! Drawing the next number to place.

use rand::Rng;
use tracing::{instrument, trace};

use crate::OrderedSlots;

/// Largest number drawn unless configured otherwise.
pub const DEFAULT_MAX_VALUE: u32 = 999;

/// Draws a number in `0..=max` that is not already placed in `slots`.
///
/// The range must hold more numbers than there are filled slots, which every
/// level satisfies for the default maximum.
#[instrument(skip(rng, slots), fields(filled = slots.filled()))]
pub fn draw_value<R: Rng + ?Sized>(rng: &mut R, slots: &OrderedSlots, max: u32) -> u32 {
    debug_assert!(
        u64::from(max) + 1 > slots.filled() as u64,
        "Value range exhausted by placed numbers"
    );
    loop {
        let value = rng.gen_range(0..=max);
        if !slots.contains(value) {
            return value;
        }
        trace!(value, "Redrawing duplicate");
    }
}
