use crate::ScrollController;

/// The identity of a row plus how far the viewport had scrolled past its top edge.
///
/// Capture one before replacing the collection and apply it afterwards: the row keeps its
/// on-screen position even if rows were inserted above it or the list was re-sorted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollAnchor<K> {
    pub key: K,
    /// `scroll_offset - item_start` at capture time.
    pub offset_in_viewport: u64,
}

/// Captures an anchor for the first strictly visible item.
///
/// `key_for(index)` must return the identity of the item currently at `index`. Returns `None`
/// when nothing is visible.
pub fn capture_first_visible_anchor<K>(
    c: &ScrollController,
    key_for: impl FnOnce(usize) -> K,
) -> Option<ScrollAnchor<K>> {
    let visible = c.viewport_range();
    if visible.is_empty() {
        return None;
    }
    let index = visible.start_index;
    let start = c.calculator().item_start(index);
    Some(ScrollAnchor {
        key: key_for(index),
        offset_in_viewport: c.scroll_offset().saturating_sub(start),
    })
}

/// Applies a previously captured anchor by moving the scroll offset.
///
/// The adapter must provide a `key_to_index` mapping for the *current* collection (after
/// calling `set_item_count`). The resulting offset is clamped to the scrollable range.
///
/// Returns `true` when the anchored item still exists and the offset was applied.
pub fn apply_anchor<K>(
    c: &mut ScrollController,
    anchor: &ScrollAnchor<K>,
    key_to_index: impl FnOnce(&K) -> Option<usize>,
) -> bool {
    let Some(index) = key_to_index(&anchor.key).filter(|&i| i < c.item_count()) else {
        return false;
    };
    let calc = c.calculator();
    let target = calc
        .item_start(index)
        .saturating_add(anchor.offset_in_viewport);
    let target = calc.clamp_scroll_offset(target, c.item_count());
    adebug!(index, target, "apply_anchor");
    c.scroll_to_offset(target);
    true
}
