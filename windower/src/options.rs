use crate::{Result, WindowError};

/// Default number of extra items materialized beyond each edge of the viewport.
pub const DEFAULT_OVERSCAN: usize = 3;

/// Geometry of a fixed-extent windowed list.
///
/// This is plain data (and serializable with `feature = "serde"`), so hosts can keep it in
/// their own configuration. It is checked by [`WindowOptions::validate`] when a
/// [`crate::WindowCalculator`] is built from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowOptions {
    /// Size of every item along the scroll axis. Must be non-zero.
    pub item_extent: u32,
    /// Size of the visible window along the scroll axis.
    pub viewport_extent: u32,
    /// Extra items materialized beyond each edge of the viewport.
    pub overscan: usize,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            item_extent: 1,
            viewport_extent: 0,
            overscan: DEFAULT_OVERSCAN,
        }
    }
}

impl WindowOptions {
    pub fn new(item_extent: u32) -> Self {
        Self {
            item_extent,
            ..Self::default()
        }
    }

    pub fn with_item_extent(mut self, item_extent: u32) -> Self {
        self.item_extent = item_extent;
        self
    }

    pub fn with_viewport_extent(mut self, viewport_extent: u32) -> Self {
        self.viewport_extent = viewport_extent;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.item_extent == 0 {
            wwarn!(
                viewport_extent = self.viewport_extent,
                overscan = self.overscan,
                "WindowOptions: item extent is zero"
            );
            return Err(WindowError::ZeroItemExtent);
        }
        Ok(())
    }
}
