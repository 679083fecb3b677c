/// A lightweight, serializable snapshot of a list's scroll position and viewport.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, so hosts can
/// persist it across sessions without coupling the engine to any UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
    pub viewport_extent: u32,
}
