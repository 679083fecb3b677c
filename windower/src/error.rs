use thiserror::Error;

/// Errors reported by the windowing engine.
///
/// Both variants are caller errors: the engine never produces a zero-length or negative
/// window to paper over bad input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum WindowError {
    /// Every item must occupy a positive extent along the scroll axis.
    #[error("item extent must be greater than zero")]
    ZeroItemExtent,
    /// A scroll-to request named an index past the end of the collection.
    #[error("index {index} is out of bounds for a collection of {count} items")]
    IndexOutOfBounds { index: usize, count: usize },
}

pub type Result<T, E = WindowError> = core::result::Result<T, E>;
