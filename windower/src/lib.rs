//! A headless windowing engine for large, fixed-extent scrolling lists.
//!
//! For the scroll-event adapter (load-more triggering, anchoring), see the
//! `windower-adapter` crate.
//!
//! Given a scroll offset, an item extent, a viewport extent and an item count, this crate
//! decides which items must be materialized so that no visible item is ever left unrendered,
//! reports the total extent a host should give its spacer so the scrollbar reflects the whole
//! collection, and positions each materialized item inside that spacer.
//!
//! It is UI-agnostic. A TUI/GUI/DOM layer is expected to provide:
//! - viewport extent (e.g. height for vertical lists)
//! - scroll offset
//! - the items themselves, plus a key extractor and a render function
//!
//! ```
//! use windower::{WindowCalculator, WindowOptions};
//!
//! let calc = WindowCalculator::new(
//!     WindowOptions::new(280).with_viewport_extent(800).with_overscan(3),
//! )
//! .unwrap();
//! let window = calc.window(2800, 1000);
//! assert_eq!(window.range.indexes(), 7..16);
//! assert_eq!(window.total_extent, 280_000);
//! assert_eq!(window.offset_top, 7 * 280);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod options;
mod render;
mod scroll_to;
mod state;
mod types;
mod window;


pub use error::{Result, WindowError};
pub use options::{DEFAULT_OVERSCAN, WindowOptions};
pub use render::{Rendered, collect_positioned, for_each_positioned, index_key, render_window};
pub use state::ScrollState;
pub use types::{Align, PositionedItem, RangeDiff, VisibleRange, Window};
pub use window::{WindowCalculator, compute_range, total_extent};
