//! Property-based tests for the divider
//!
//! Tests that the offset never leaves its bounds under arbitrary sequences
//! of drags, container resizes and resets.

use proptest::prelude::*;
use sidebyside_core::split::Divider;

/// One interaction with the divider
#[derive(Debug, Clone)]
enum DividerOp {
    Drag(i32),
    Resize(u32),
    Reset,
}

fn arb_min_offset() -> impl Strategy<Value = u32> {
    1u32..400
}

fn arb_op() -> impl Strategy<Value = DividerOp> {
    prop_oneof![
        4 => (-5000i32..5000).prop_map(DividerOp::Drag),
        2 => (0u32..4000).prop_map(DividerOp::Resize),
        1 => Just(DividerOp::Reset),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any sequence of operations the offset stays inside
    /// `[min_offset, max(length - min_offset, min_offset)]`.
    #[test]
    fn prop_offset_stays_in_bounds(
        min_offset in arb_min_offset(),
        length in 0u32..4000,
        initial in 0u32..5000,
        ops in prop::collection::vec(arb_op(), 0..50),
    ) {
        let mut divider = Divider::new(min_offset);
        divider.initialize(length, initial);

        for op in ops {
            match op {
                DividerOp::Drag(delta) => { divider.drag(delta); }
                DividerOp::Resize(length) => { divider.set_total_length(length); }
                DividerOp::Reset => { divider.reset(); }
            }

            let max = divider.total_length().saturating_sub(min_offset).max(min_offset);
            prop_assert_eq!(divider.min_offset(), min_offset);
            prop_assert_eq!(divider.max_offset(), max);
            prop_assert!(divider.offset() >= min_offset);
            prop_assert!(divider.offset() <= max);
        }
    }

    /// A drag either lands exactly at `offset + delta` or stops at a bound.
    #[test]
    fn prop_drag_is_clamped_sum(
        min_offset in arb_min_offset(),
        length in 0u32..4000,
        delta in -5000i32..5000,
    ) {
        let mut divider = Divider::new(min_offset);
        divider.initialize(length, min_offset);
        let before = i64::from(divider.offset());

        let moved = divider.drag(delta);

        let expected = (before + i64::from(delta))
            .clamp(i64::from(divider.min_offset()), i64::from(divider.max_offset()));
        prop_assert_eq!(i64::from(divider.offset()), expected);
        prop_assert_eq!(moved, expected != before);
    }

    /// Dragging there and back returns to the start when no bound is hit.
    #[test]
    fn prop_unclamped_drag_is_reversible(
        delta in -300i32..300,
    ) {
        let mut divider = Divider::new(220);
        divider.initialize(2000, 1000);

        divider.drag(delta);
        divider.drag(-delta);

        prop_assert_eq!(divider.offset(), 1000);
    }
}
