//! Scroll-event adapter for the `windower` crate.
//!
//! The `windower` crate is UI-agnostic and holds only the window math. This crate provides
//! the thin, framework-neutral layer a host wires its scroll events into:
//!
//! - [`ScrollController`]: owns the scroll offset, recomputes the window on every event, and
//!   fires a caller-supplied load-more callback near the end of the content
//! - Scroll anchoring (e.g. prepending rows without visual jumps)
//!
//! Everything runs synchronously on the caller's thread: there are no timers or background
//! tasks, and the load-more callback is fire-and-forget.
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use windower::WindowOptions;
//! use windower_adapter::{LoadMoreOptions, ScrollController, ScrollMetrics};
//!
//! let fetches = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&fetches);
//! let mut list = ScrollController::new(WindowOptions::new(10).with_viewport_extent(600), 100)
//!     .unwrap()
//!     .with_load_more(LoadMoreOptions::default(), move || {
//!         counter.fetch_add(1, Ordering::Relaxed);
//!     });
//!
//! let out = list.handle_scroll(ScrollMetrics::new(250, 1000, 600), false);
//! assert!(out.load_more_fired);
//! assert_eq!(fetches.load(Ordering::Relaxed), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod load_more;


pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};
pub use controller::{ScrollController, ScrollOutcome};
pub use load_more::{DEFAULT_LOAD_MORE_THRESHOLD, LoadMoreCallback, LoadMoreOptions, ScrollMetrics};
pub use windower::{Align, Result, WindowError};
