use core::num::NonZeroU32;

use crate::{Result, VisibleRange, Window, WindowError, WindowOptions};

/// Pure fixed-extent window math.
///
/// A calculator can only be built from validated [`WindowOptions`], so every query is
/// infallible except scroll-to requests, which validate the target index.
///
/// The calculator holds no scroll state and no item data: the offset and the item count are
/// passed to each query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowCalculator {
    item_extent: NonZeroU32,
    viewport_extent: u32,
    overscan: usize,
}

impl WindowCalculator {
    pub fn new(options: WindowOptions) -> Result<Self> {
        options.validate()?;
        let item_extent =
            NonZeroU32::new(options.item_extent).ok_or(WindowError::ZeroItemExtent)?;
        wdebug!(
            item_extent = options.item_extent,
            viewport_extent = options.viewport_extent,
            overscan = options.overscan,
            "WindowCalculator::new"
        );
        Ok(Self {
            item_extent,
            viewport_extent: options.viewport_extent,
            overscan: options.overscan,
        })
    }

    pub fn options(&self) -> WindowOptions {
        WindowOptions {
            item_extent: self.item_extent.get(),
            viewport_extent: self.viewport_extent,
            overscan: self.overscan,
        }
    }

    pub fn item_extent(&self) -> u32 {
        self.item_extent.get()
    }

    pub fn viewport_extent(&self) -> u32 {
        self.viewport_extent
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn set_item_extent(&mut self, item_extent: u32) -> Result<()> {
        self.item_extent = NonZeroU32::new(item_extent).ok_or(WindowError::ZeroItemExtent)?;
        Ok(())
    }

    pub fn set_viewport_extent(&mut self, viewport_extent: u32) {
        self.viewport_extent = viewport_extent;
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.overscan = overscan;
    }

    /// Total logical size of `count` items: `count * item_extent` (saturating).
    pub fn total_extent(&self, count: usize) -> u64 {
        (count as u64).saturating_mul(self.extent())
    }

    /// Offset of item `index` from the top of the spacer: `index * item_extent`.
    pub fn item_start(&self, index: usize) -> u64 {
        (index as u64).saturating_mul(self.extent())
    }

    /// Index of the item covering `offset`, clamped to the last item.
    ///
    /// Returns `None` for an empty collection.
    pub fn index_at_offset(&self, offset: u64, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let index = offset / self.extent();
        Some(clamp_index(index, count).min(count - 1))
    }

    /// Largest offset at which the viewport still ends inside the content.
    pub fn max_scroll_offset(&self, count: usize) -> u64 {
        self.total_extent(count).saturating_sub(self.viewport_extent as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64, count: usize) -> u64 {
        offset.min(self.max_scroll_offset(count))
    }

    /// Items to materialize at `offset`, overscan included.
    ///
    /// `start = first - overscan` and
    /// `end = start + ceil(viewport / item_extent) + 2 * overscan`, both clamped to
    /// `[0, count]`, where `first` is the item under the top edge of the viewport. When that
    /// `end` would stop short of the last item touching the bottom edge (an unaligned offset
    /// with little or no overscan), `end` is raised to include it, so any item that is even
    /// partially inside the viewport lies in the returned range.
    ///
    /// A zero viewport materializes nothing: the range is empty even when `overscan` is set,
    /// rather than the `[first - overscan, first + overscan)` the formula alone would give.
    pub fn range(&self, offset: u64, count: usize) -> VisibleRange {
        self.range_with_overscan(offset, count, self.overscan)
    }

    /// Items strictly inside the viewport at `offset` (no overscan).
    pub fn viewport_range(&self, offset: u64, count: usize) -> VisibleRange {
        self.range_with_overscan(offset, count, 0)
    }

    /// The full frame description at `offset`: range, spacer size and block offset.
    pub fn window(&self, offset: u64, count: usize) -> Window {
        let range = self.range(offset, count);
        Window {
            range,
            total_extent: self.total_extent(count),
            offset_top: self.item_start(range.start_index),
        }
    }

    fn range_with_overscan(&self, offset: u64, count: usize, overscan: usize) -> VisibleRange {
        if count == 0 || self.viewport_extent == 0 {
            return VisibleRange::EMPTY;
        }

        let extent = self.extent();
        let overscan = overscan as u64;
        let view = self.viewport_extent as u64;
        let first = offset / extent;
        let last_visible = offset.saturating_add(view - 1) / extent;

        let start = clamp_index(first.saturating_sub(overscan), count);
        let end = (start as u64)
            .saturating_add(view.div_ceil(extent))
            .saturating_add(overscan.saturating_mul(2))
            .max(last_visible.saturating_add(1));
        let end = clamp_index(end, count);
        wtrace!(offset, count, start, end, "WindowCalculator::range");

        VisibleRange {
            start_index: start,
            end_index: end,
        }
    }

    fn extent(&self) -> u64 {
        self.item_extent.get() as u64
    }
}

fn clamp_index(index: u64, count: usize) -> usize {
    usize::try_from(index).map_or(count, |i| i.min(count))
}

/// Computes the overscanned range for a single set of inputs.
///
/// This is the free-standing form of [`WindowCalculator::range`] for callers that do not keep
/// a calculator around. It fails when `item_extent` is zero.
pub fn compute_range(
    offset: u64,
    item_extent: u32,
    viewport_extent: u32,
    item_count: usize,
    overscan: usize,
) -> Result<VisibleRange> {
    let calc = WindowCalculator::new(WindowOptions {
        item_extent,
        viewport_extent,
        overscan,
    })?;
    Ok(calc.range(offset, item_count))
}

/// `item_count * item_extent`, saturating.
pub fn total_extent(item_count: usize, item_extent: u32) -> u64 {
    (item_count as u64).saturating_mul(item_extent as u64)
}
