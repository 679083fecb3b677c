//! Property-based invariant tests for the window calculator.
//!
//! 1. Coverage: every item intersecting the viewport lies inside the computed range.
//! 2. Bounds: `0 <= start <= end <= count`, with an empty collection giving `[0, 0)`.
//! 3. Growing the overscan never shrinks the range.
//! 4. `total_extent == count * item_extent`.
//! 5. Scrolling to an index with `Align::Start` makes it the first strictly visible item.

use proptest::prelude::*;
use windower::{Align, WindowCalculator, WindowOptions, total_extent};

fn calculator(item_extent: u32, viewport_extent: u32, overscan: usize) -> WindowCalculator {
    WindowCalculator::new(
        WindowOptions::new(item_extent)
            .with_viewport_extent(viewport_extent)
            .with_overscan(overscan),
    )
    .expect("item extent is non-zero")
}

proptest! {
    #[test]
    fn every_visible_item_is_materialized(
        item_extent in 1u32..=500,
        viewport_extent in 1u32..=2_000,
        count in 0usize..=500,
        overscan in 0usize..=8,
        offset in 0u64..=300_000,
    ) {
        let calc = calculator(item_extent, viewport_extent, overscan);
        let range = calc.range(offset, count);
        let ext = item_extent as u64;
        let view_end = offset + viewport_extent as u64;

        for i in 0..count {
            let top = i as u64 * ext;
            if top < view_end && top + ext > offset {
                prop_assert!(
                    range.contains(i),
                    "item {} visible at offset {} but range is {:?}", i, offset, range
                );
            }
        }
    }
}

proptest! {
    #[test]
    fn range_stays_in_bounds(
        item_extent in 1u32..=500,
        viewport_extent in 0u32..=2_000,
        count in 0usize..=500,
        overscan in 0usize..=64,
        offset in any::<u64>(),
    ) {
        let calc = calculator(item_extent, viewport_extent, overscan);
        let range = calc.range(offset, count);
        prop_assert!(range.start_index <= range.end_index);
        prop_assert!(range.end_index <= count);
        if count == 0 {
            prop_assert_eq!(range.start_index, 0);
            prop_assert_eq!(range.end_index, 0);
        }
    }
}

proptest! {
    #[test]
    fn more_overscan_never_shrinks_the_range(
        item_extent in 1u32..=500,
        viewport_extent in 1u32..=2_000,
        count in 0usize..=500,
        overscan in 0usize..=16,
        extra in 1usize..=16,
        offset in 0u64..=300_000,
    ) {
        let narrow = calculator(item_extent, viewport_extent, overscan).range(offset, count);
        let wide = calculator(item_extent, viewport_extent, overscan + extra).range(offset, count);
        prop_assert!(wide.end_index <= count);
        prop_assert!(wide.start_index <= narrow.start_index);
        prop_assert!(wide.end_index >= narrow.end_index);
    }
}

proptest! {
    #[test]
    fn total_extent_is_count_times_item_extent(
        item_extent in 1u32..=100_000,
        count in 0usize..=1_000_000,
    ) {
        let calc = calculator(item_extent, 100, 0);
        let expected = count as u64 * item_extent as u64;
        prop_assert_eq!(calc.total_extent(count), expected);
        prop_assert_eq!(total_extent(count, item_extent), expected);
    }
}

proptest! {
    #[test]
    fn scroll_to_start_makes_index_first_visible(
        item_extent in 1u32..=200,
        viewport_extent in 1u32..=1_000,
        count in 1usize..=400,
        overscan in 0usize..=6,
        pick in any::<prop::sample::Index>(),
    ) {
        let calc = calculator(item_extent, viewport_extent, overscan);
        let max = calc.max_scroll_offset(count);
        let reachable = (0..count)
            .filter(|&i| calc.item_start(i) <= max)
            .count();
        prop_assume!(reachable > 0);
        let index = pick.index(reachable);

        let offset = calc.scroll_to_index_offset(index, Align::Start, count).unwrap();
        prop_assert_eq!(calc.viewport_range(offset, count).start_index, index);
        prop_assert!(calc.range(offset, count).contains(index));
    }
}
