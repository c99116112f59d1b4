//! Property tests for the slot ordering rules.

use pocket_numbers::{Level, OrderedSlots, Placement, PlacementError, StrictlyIncreasing};
use proptest::prelude::*;

/// Legal slots computed straight from the definition, for comparison.
fn legal_by_definition(slots: &OrderedSlots, candidate: u32) -> Vec<usize> {
    (0..slots.len())
        .filter(|&s| slots.get(s).is_none())
        .filter(|&s| (0..s).filter_map(|i| slots.get(i)).all(|v| v < candidate))
        .filter(|&s| {
            (s + 1..slots.len())
                .filter_map(|i| slots.get(i))
                .all(|v| v > candidate)
        })
        .collect()
}

proptest! {
    #[test]
    fn placements_keep_sequence_strictly_increasing(
        len in 1usize..=25,
        moves in prop::collection::vec((0u32..=999, 0usize..25), 0..60),
    ) {
        let mut slots = OrderedSlots::new(len);
        for (value, slot) in moves {
            let before = slots.clone();
            match slots.place(slot % len, value) {
                Ok(_) => {}
                Err(_) => prop_assert_eq!(&slots, &before),
            }
            prop_assert!(StrictlyIncreasing::holds(&slots));
        }
    }

    #[test]
    fn two_pass_scan_matches_definition(
        len in 1usize..=25,
        moves in prop::collection::vec((0u32..=999, 0usize..25), 0..40),
        candidate in 0u32..=999,
    ) {
        let mut slots = OrderedSlots::new(len);
        for (value, slot) in moves {
            let _ = slots.place(slot % len, value);
        }
        prop_assert_eq!(slots.legal_slots(candidate), legal_by_definition(&slots, candidate));
    }

    #[test]
    fn empty_sequence_accepts_everything(len in 1usize..=25, candidate in 0u32..=999) {
        let slots = OrderedSlots::new(len);
        prop_assert_eq!(slots.legal_slots(candidate), (0..len).collect::<Vec<_>>());
    }
}

#[test]
fn worked_example_from_five_slots() {
    let mut slots = OrderedSlots::new(5);
    slots.place(1, 10).expect("10 fits anywhere");
    slots.place(3, 30).expect("30 fits after 10");

    assert_eq!(slots.legal_slots(20), vec![2]);
}

#[test]
fn filling_level_one_in_order_completes() {
    let mut slots = OrderedSlots::new(Level::One.slots());
    let results: Vec<_> = (0..5)
        .map(|i| slots.place(i, (i as u32 + 1) * 100))
        .collect();

    assert_eq!(results[..4], [Ok(Placement::Placed); 4]);
    assert_eq!(results[4], Ok(Placement::Completed));
}

#[test]
fn stuck_value_is_reported() {
    let mut slots = OrderedSlots::new(3);
    slots.place(0, 10).unwrap();
    slots.place(1, 11).unwrap();

    assert_eq!(
        slots.place(2, 5),
        Err(PlacementError::NoValidPlacement { value: 5 })
    );
}
