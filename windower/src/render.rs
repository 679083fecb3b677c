use alloc::vec::Vec;

use crate::{PositionedItem, VisibleRange, Window, WindowCalculator};

/// Output of [`render_window`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered<N> {
    /// The collection is empty; holds the caller's placeholder.
    Empty(N),
    /// The windowed block: one node per materialized item, in index order.
    Window { window: Window, nodes: Vec<N> },
}

impl<N> Rendered<N> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    pub fn nodes(&self) -> &[N] {
        match self {
            Self::Empty(_) => &[],
            Self::Window { nodes, .. } => nodes,
        }
    }
}

/// Key extractor for collections without a natural identity.
///
/// Index keys are only stable while the collection is never reordered.
pub fn index_key<T>(_item: &T, index: usize) -> usize {
    index
}

/// Visits one positioned descriptor per index in `range` without allocating.
///
/// Indexes past the end of `items` are skipped, so a range computed for a longer collection
/// degrades to the overlapping prefix instead of panicking.
pub fn for_each_positioned<'a, T, K>(
    items: &'a [T],
    range: VisibleRange,
    calc: &WindowCalculator,
    mut key_extractor: impl FnMut(&T, usize) -> K,
    mut f: impl FnMut(PositionedItem<'a, T, K>),
) {
    let end = range.end_index.min(items.len());
    if end < range.end_index {
        wwarn!(
            end_index = range.end_index,
            len = items.len(),
            "for_each_positioned: range exceeds collection"
        );
    }
    let Some(slice) = items.get(range.start_index..end) else {
        return;
    };
    for (offset, item) in slice.iter().enumerate() {
        let index = range.start_index + offset;
        f(PositionedItem {
            index,
            key: key_extractor(item, index),
            item,
            offset_from_top: calc.item_start(index),
        });
    }
}

/// Collects positioned descriptors into `out` (clears `out` first).
///
/// Prefer [`for_each_positioned`] and a reused scratch buffer on hot paths.
pub fn collect_positioned<'a, T, K>(
    items: &'a [T],
    range: VisibleRange,
    calc: &WindowCalculator,
    key_extractor: impl FnMut(&T, usize) -> K,
    out: &mut Vec<PositionedItem<'a, T, K>>,
) {
    out.clear();
    for_each_positioned(items, range, calc, key_extractor, |it| out.push(it));
}

/// Assembles the rendered block for `items` at scroll `offset`.
///
/// An empty collection yields `Rendered::Empty(empty())`; neither `key_extractor` nor
/// `render_item` is called in that case.
pub fn render_window<'a, T, K, N>(
    items: &'a [T],
    calc: &WindowCalculator,
    offset: u64,
    key_extractor: impl FnMut(&T, usize) -> K,
    mut render_item: impl FnMut(PositionedItem<'a, T, K>) -> N,
    empty: impl FnOnce() -> N,
) -> Rendered<N> {
    if items.is_empty() {
        return Rendered::Empty(empty());
    }

    let window = calc.window(offset, items.len());
    let mut nodes = Vec::with_capacity(window.range.len());
    for_each_positioned(items, window.range, calc, key_extractor, |it| {
        nodes.push(render_item(it));
    });
    Rendered::Window { window, nodes }
}
