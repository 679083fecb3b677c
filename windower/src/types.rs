use core::ops::Range;

/// Where the target item should land inside the viewport after a scroll-to request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

/// A half-open interval `[start_index, end_index)` of item indexes.
///
/// Produced by the calculator with `start_index <= end_index <= count`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index: end_index.max(start_index),
        }
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index < self.end_index
    }

    pub fn indexes(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    /// Splits the transition from `self` to `next` into the indexes that left the window and
    /// the indexes that entered it.
    ///
    /// Indexes present in both ranges appear in neither side, so a host only has to tear
    /// down `removed` and materialize `added`.
    pub fn diff(&self, next: VisibleRange) -> RangeDiff {
        let disjoint = self.end_index <= next.start_index || next.end_index <= self.start_index;
        if self.is_empty() || next.is_empty() || disjoint {
            return RangeDiff {
                removed: [*self, Self::EMPTY],
                added: [next, Self::EMPTY],
            };
        }

        RangeDiff {
            removed: [
                span(self.start_index, next.start_index),
                span(next.end_index, self.end_index),
            ],
            added: [
                span(next.start_index, self.start_index),
                span(self.end_index, next.end_index),
            ],
        }
    }
}

impl From<VisibleRange> for Range<usize> {
    fn from(range: VisibleRange) -> Self {
        range.indexes()
    }
}

fn span(start: usize, end: usize) -> VisibleRange {
    if start < end {
        VisibleRange {
            start_index: start,
            end_index: end,
        }
    } else {
        VisibleRange::EMPTY
    }
}

/// Result of [`VisibleRange::diff`]. Each side holds at most two disjoint runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeDiff {
    pub removed: [VisibleRange; 2],
    pub added: [VisibleRange; 2],
}

impl RangeDiff {
    pub fn is_unchanged(&self) -> bool {
        self.removed.iter().all(VisibleRange::is_empty)
            && self.added.iter().all(VisibleRange::is_empty)
    }

    pub fn removed_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.removed.iter().flat_map(VisibleRange::indexes)
    }

    pub fn added_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.added.iter().flat_map(VisibleRange::indexes)
    }
}

/// Everything a host needs to lay out one frame of a windowed list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    /// Items to materialize (overscan included).
    pub range: VisibleRange,
    /// Size of the spacer that stands in for the whole collection (`count * item_extent`).
    pub total_extent: u64,
    /// Offset of the first materialized item from the top of the spacer.
    pub offset_top: u64,
}

/// One materialized item, positioned inside the spacer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionedItem<'a, T, K> {
    pub index: usize,
    pub key: K,
    pub item: &'a T,
    /// `index * item_extent`.
    pub offset_from_top: u64,
}
