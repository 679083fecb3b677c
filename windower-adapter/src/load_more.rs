use alloc::sync::Arc;

/// Default distance from the end of the scrollable content at which load-more fires.
pub const DEFAULT_LOAD_MORE_THRESHOLD: u64 = 200;

/// A callback fired when the viewport comes within the load-more threshold of the end.
///
/// The controller does not await or observe it: hosts start their fetch here and report
/// progress back through the `is_loading` flag on the next scroll event.
pub type LoadMoreCallback = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadMoreOptions {
    /// Distance from the bottom of the scrollable content below which load-more fires.
    pub threshold: u64,
}

impl Default for LoadMoreOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_LOAD_MORE_THRESHOLD,
        }
    }
}

impl LoadMoreOptions {
    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Whether `scroll_extent - offset - viewport_extent < threshold`.
    ///
    /// `scroll_extent` is the full scrollable size reported by the host, which may exceed the
    /// list's own total extent by any surrounding chrome.
    pub fn is_near_end(&self, scroll_extent: u64, offset: u64, viewport_extent: u32) -> bool {
        offset
            .saturating_add(viewport_extent as u64)
            .saturating_add(self.threshold)
            > scroll_extent
    }
}

/// Raw geometry delivered with a host scroll notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub offset: u64,
    /// Full scrollable size of the host (e.g. DOM `scrollHeight`).
    pub scroll_extent: u64,
    pub viewport_extent: u32,
}

impl ScrollMetrics {
    pub fn new(offset: u64, scroll_extent: u64, viewport_extent: u32) -> Self {
        Self {
            offset,
            scroll_extent,
            viewport_extent,
        }
    }
}
