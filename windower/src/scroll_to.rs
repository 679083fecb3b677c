use crate::{Align, Result, WindowCalculator, WindowError};

impl WindowCalculator {
    /// Computes the scroll offset that brings item `index` into view with the given alignment.
    ///
    /// - `Start`: `index * item_extent`
    /// - `Center`: `index * item_extent - viewport / 2 + item_extent / 2`
    /// - `End`: `index * item_extent - viewport + item_extent`
    ///
    /// Negative targets clamp to `0`. The result is *not* clamped against
    /// [`Self::max_scroll_offset`]; use [`Self::clamp_scroll_offset`] when the host does not
    /// clamp on its own.
    ///
    /// An `index` outside `0..count` is an error rather than being pulled back into range.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align, count: usize) -> Result<u64> {
        if index >= count {
            wwarn!(index, count, "scroll_to_index_offset: index out of bounds");
            return Err(WindowError::IndexOutOfBounds { index, count });
        }

        let start = self.item_start(index);
        let item = self.item_extent() as u64;
        let view = self.viewport_extent() as u64;

        let target = match align {
            Align::Start => start,
            Align::Center => start.saturating_add(item / 2).saturating_sub(view / 2),
            Align::End => start.saturating_add(item).saturating_sub(view),
        };
        wdebug!(index, ?align, target, "scroll_to_index_offset");
        Ok(target)
    }
}
