//! Property-based tests for the box layout engine.
//! Verifies invariants hold for ALL valid inputs, not just fixed examples.

#![allow(
    clippy::arithmetic_side_effects, // generated values are small
    clippy::indexing_slicing,
    clippy::cast_possible_wrap,
)]

use boxkit_layout::align::{resolve_offset, Align};
use boxkit_layout::config::MAX_SIZE;
use boxkit_layout::flex::{distribute, FlexCandidate};
use boxkit_layout::margin::collapse;
use boxkit_layout::prelude::*;
use proptest::prelude::*;

const CAP: usize = 8;

fn candidates(entries: &[(u32, f32)]) -> Vec<FlexCandidate> {
    entries
        .iter()
        .enumerate()
        .map(|(i, &(potential, weight))| FlexCandidate::new(i, potential, weight))
        .collect()
}

fn hint_strategy() -> impl Strategy<Value = SizeHint> {
    (0u32..60, 0u32..60, 0u32..60, 0u32..40).prop_map(|(min, extra, room, height)| {
        SizeHint::new(min, min + extra, min + extra + room, height, height, height)
    })
}

proptest::proptest! {
    /// No candidate is moved further than its potential.
    #[test]
    fn distribute_respects_potentials(
        pool in proptest::collection::vec((0u32..200, 0.1f32..5.0), 1..CAP),
        delta in -1000i32..1000,
    ) {
        let pool = candidates(&pool);
        let offsets = distribute::<CAP>(&pool, delta);
        for candidate in &pool {
            let offset = offsets.get(candidate.index).unwrap();
            prop_assert!(offset.unsigned_abs() <= candidate.potential);
            prop_assert!(offset == 0 || offset.signum() == delta.signum());
        }
    }

    /// The whole delta is handed out whenever the pool can absorb it,
    /// otherwise every candidate ends at its potential.
    #[test]
    fn distribute_is_exact_or_saturated(
        pool in proptest::collection::vec((0u32..200, 0.1f32..5.0), 1..CAP),
        delta in -1000i32..1000,
    ) {
        let pool = candidates(&pool);
        let capacity: u64 = pool.iter().map(|c| u64::from(c.potential)).sum();
        let offsets = distribute::<CAP>(&pool, delta);

        if capacity >= u64::from(delta.unsigned_abs()) {
            prop_assert_eq!(offsets.total(), i64::from(delta));
        } else {
            for candidate in &pool {
                let offset = offsets.get(candidate.index).unwrap();
                prop_assert_eq!(offset.unsigned_abs(), candidate.potential);
            }
        }
    }

    /// Collapsed margins never lose to either side.
    #[test]
    fn collapse_is_max(a in -100i32..100, b in -100i32..100) {
        let gap = collapse(Some(a), Some(b));
        prop_assert_eq!(gap, a.max(b));
    }

    /// Alignment keeps a fitting child inside the available extent.
    #[test]
    fn resolve_offset_stays_inside(child in 0i32..500, extra in 0i32..500) {
        let available = child + extra;
        for align in [Align::Start, Align::Center, Align::End] {
            let offset = resolve_offset(align, child, available);
            prop_assert!(offset >= 0);
            prop_assert!(offset + child <= available);
        }
    }

    /// SizeHint::new always produces an ordered, bounded hint.
    #[test]
    fn size_hint_new_is_ordered(values in proptest::array::uniform6(0u32..=u32::MAX)) {
        let [a, b, c, d, e, f] = values;
        let hint = SizeHint::new(a, b, c, d, e, f);
        prop_assert!(hint.min_width <= hint.width && hint.width <= hint.max_width);
        prop_assert!(hint.min_height <= hint.height && hint.height <= hint.max_height);
        prop_assert!(hint.max_width <= MAX_SIZE && hint.max_height <= MAX_SIZE);
    }

    /// Laying out twice with the same inputs yields the same rectangles.
    #[test]
    fn layout_is_idempotent(
        hints in proptest::collection::vec(hint_strategy(), 0..CAP),
        width in -50i32..600,
        height in -50i32..100,
        spacing in 0i32..10,
        reversed in any::<bool>(),
    ) {
        let mut row: BoxLayout<Spacer, CAP> = BoxLayout::hbox().spacing(spacing).reversed(reversed);
        for hint in &hints {
            let _ = row.push(Spacer::with_hint(*hint));
        }
        let first = row.layout(width, height);
        let second = row.layout(width, height);
        prop_assert_eq!(first, second);
    }

    /// With non-negative spacing and no margins the included children form
    /// a prefix of the layout order.
    #[test]
    fn excluded_children_form_a_suffix(
        hints in proptest::collection::vec(hint_strategy(), 0..CAP),
        width in 0i32..300,
    ) {
        let mut row: BoxLayout<Spacer, CAP> = BoxLayout::hbox();
        for hint in &hints {
            let _ = row.push(Spacer::with_hint(*hint));
        }
        let result = row.layout(width, 40);
        let first_excluded = result
            .placements
            .iter()
            .position(|p| !p.is_included())
            .unwrap_or(result.placements.len());
        prop_assert!(result.placements[first_excluded..].iter().all(|p| !p.is_included()));
    }

    /// When the available extent lies between the summed minimum and
    /// maximum, stretchable children fill it exactly.
    #[test]
    fn flex_fills_reachable_extent(
        hints in proptest::collection::vec(hint_strategy(), 1..CAP),
        pick in 0.0f64..=1.0,
    ) {
        let mut row: BoxLayout<Spacer, CAP> = BoxLayout::hbox();
        for hint in &hints {
            let _ = row.push(Spacer::with_hint(*hint));
        }
        let aggregate = row.size_hint();
        let span = f64::from(aggregate.max_width - aggregate.min_width);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let width = aggregate.min_width + (span * pick) as u32;

        let result = row.layout(width as i32, 40);
        prop_assert_eq!(result.used_main, width as i32);
    }

    /// Reversal never reorders the stored children.
    #[test]
    fn reversed_keeps_children(hints in proptest::collection::vec(hint_strategy(), 0..CAP)) {
        let mut row: BoxLayout<Spacer, CAP> = BoxLayout::hbox().reversed(true);
        for hint in &hints {
            let _ = row.push(Spacer::with_hint(*hint));
        }
        let _ = row.layout(200, 40);
        let stored: Vec<SizeHint> = row.children().iter().map(Widget::size_hint).collect();
        prop_assert_eq!(stored, hints);
    }
}
