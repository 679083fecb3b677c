use alloc::sync::Arc;
use core::fmt;

use windower::{
    Align, RangeDiff, ScrollState, VisibleRange, Window, WindowCalculator, WindowOptions,
};

use crate::{LoadMoreCallback, LoadMoreOptions, ScrollMetrics};

/// What a single scroll notification changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollOutcome {
    pub range: VisibleRange,
    /// Indexes that left and entered the window relative to the previous notification.
    pub diff: RangeDiff,
    pub load_more_fired: bool,
}

/// A framework-neutral controller that owns the scroll offset of one windowed list.
///
/// This type does not hold any UI objects or item data. Adapters drive it by calling:
/// - `handle_scroll` (or `on_scroll`) when the host reports a scroll
/// - `set_item_count` / `set_viewport_extent` when the collection or viewport changes
/// - `scroll_to_index` for programmatic scrolling, then apply the returned offset to the host
///
/// The visible range is recomputed synchronously after every change, so reads never observe a
/// stale window. There are no timers: load-more is checked only when a scroll is reported.
#[derive(Clone)]
pub struct ScrollController {
    calc: WindowCalculator,
    item_count: usize,
    scroll_offset: u64,
    range: VisibleRange,
    load_more: LoadMoreOptions,
    on_load_more: Option<LoadMoreCallback>,
}

impl ScrollController {
    pub fn new(options: WindowOptions, item_count: usize) -> windower::Result<Self> {
        Ok(Self::from_calculator(WindowCalculator::new(options)?, item_count))
    }

    pub fn from_calculator(calc: WindowCalculator, item_count: usize) -> Self {
        Self {
            range: calc.range(0, item_count),
            calc,
            item_count,
            scroll_offset: 0,
            load_more: LoadMoreOptions::default(),
            on_load_more: None,
        }
    }

    pub fn with_load_more(
        mut self,
        options: LoadMoreOptions,
        on_load_more: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.load_more = options;
        self.on_load_more = Some(Arc::new(on_load_more));
        self
    }

    pub fn set_on_load_more(&mut self, on_load_more: Option<impl Fn() + Send + Sync + 'static>) {
        self.on_load_more = on_load_more.map(|f| Arc::new(f) as _);
    }

    pub fn set_load_more_options(&mut self, options: LoadMoreOptions) {
        self.load_more = options;
    }

    pub fn load_more_options(&self) -> LoadMoreOptions {
        self.load_more
    }

    pub fn calculator(&self) -> &WindowCalculator {
        &self.calc
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn viewport_extent(&self) -> u32 {
        self.calc.viewport_extent()
    }

    /// Items to materialize (overscan included).
    pub fn visible_range(&self) -> VisibleRange {
        self.range
    }

    /// Items strictly inside the viewport (no overscan).
    pub fn viewport_range(&self) -> VisibleRange {
        self.calc.viewport_range(self.scroll_offset, self.item_count)
    }

    pub fn total_extent(&self) -> u64 {
        self.calc.total_extent(self.item_count)
    }

    pub fn offset_top(&self) -> u64 {
        self.calc.item_start(self.range.start_index)
    }

    pub fn window(&self) -> Window {
        Window {
            range: self.range,
            total_extent: self.total_extent(),
            offset_top: self.offset_top(),
        }
    }

    /// Stores a raw scroll offset from the host and recomputes the range.
    ///
    /// The offset is taken as-is; the host viewport is expected to clamp it already.
    pub fn on_scroll(&mut self, raw_offset: u64) -> VisibleRange {
        atrace!(raw_offset, "ScrollController::on_scroll");
        self.scroll_offset = raw_offset;
        self.refresh_range();
        self.range
    }

    /// Handles a full host scroll notification: viewport, offset, then the load-more check.
    ///
    /// `is_loading` is owned by the caller. While it is `false`, every notification inside the
    /// threshold fires load-more again, so callers must flip it before the next tick.
    pub fn handle_scroll(&mut self, metrics: ScrollMetrics, is_loading: bool) -> ScrollOutcome {
        let prev = self.range;
        self.calc.set_viewport_extent(metrics.viewport_extent);
        let range = self.on_scroll(metrics.offset);
        let load_more_fired = self.check_load_more(metrics.scroll_extent, is_loading);
        ScrollOutcome {
            range,
            diff: prev.diff(range),
            load_more_fired,
        }
    }

    pub fn is_near_end(&self, scroll_extent: u64) -> bool {
        self.load_more
            .is_near_end(scroll_extent, self.scroll_offset, self.calc.viewport_extent())
    }

    /// Fires the load-more callback if one is registered, nothing is loading, and the viewport
    /// is within the threshold of `scroll_extent`. Returns whether it fired.
    pub fn check_load_more(&self, scroll_extent: u64, is_loading: bool) -> bool {
        let Some(on_load_more) = &self.on_load_more else {
            return false;
        };
        if is_loading || !self.is_near_end(scroll_extent) {
            return false;
        }
        adebug!(
            scroll_extent,
            offset = self.scroll_offset,
            threshold = self.load_more.threshold,
            "load more"
        );
        on_load_more();
        true
    }

    /// Replaces the collection length. The offset is kept; the range is recomputed against the
    /// new count.
    pub fn set_item_count(&mut self, item_count: usize) {
        if self.item_count == item_count {
            return;
        }
        self.item_count = item_count;
        self.refresh_range();
    }

    pub fn set_viewport_extent(&mut self, viewport_extent: u32) {
        self.calc.set_viewport_extent(viewport_extent);
        self.refresh_range();
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.calc.set_overscan(overscan);
        self.refresh_range();
    }

    pub fn set_item_extent(&mut self, item_extent: u32) -> windower::Result<()> {
        self.calc.set_item_extent(item_extent)?;
        self.refresh_range();
        Ok(())
    }

    /// Moves the viewport so item `index` lands at `align`, and recomputes the range at once.
    ///
    /// Returns the applied offset for the host to write into its scroll container. Fails
    /// without touching the offset if `index` is out of bounds.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> windower::Result<u64> {
        let offset = self
            .calc
            .scroll_to_index_offset(index, align, self.item_count)?;
        adebug!(index, offset, "ScrollController::scroll_to_index");
        self.scroll_offset = offset;
        self.refresh_range();
        Ok(offset)
    }

    /// Sets the offset directly, e.g. when restoring or anchoring.
    pub fn scroll_to_offset(&mut self, offset: u64) -> VisibleRange {
        self.on_scroll(offset)
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            viewport_extent: self.calc.viewport_extent(),
        }
    }

    pub fn restore_scroll_state(&mut self, state: ScrollState) {
        self.calc.set_viewport_extent(state.viewport_extent);
        self.scroll_offset = state.offset;
        self.refresh_range();
    }

    fn refresh_range(&mut self) {
        self.range = self.calc.range(self.scroll_offset, self.item_count);
    }
}

impl fmt::Debug for ScrollController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollController")
            .field("calc", &self.calc)
            .field("item_count", &self.item_count)
            .field("scroll_offset", &self.scroll_offset)
            .field("range", &self.range)
            .field("load_more", &self.load_more)
            .field("has_on_load_more", &self.on_load_more.is_some())
            .finish()
    }
}
