//! A headless windowing engine for fixed-height lists.
//!
//! The engine maps a scroll offset onto the small run of items that is actually visible (plus
//! an overscan margin), reports the full content height so a spacer can keep the scroll extent
//! honest, and raises a rate-limited "end reached" signal for infinite loading.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the viewport height and scroll offset of its scroll container
//! - the length of its collection
//! - a way to render one item, fed from [`ListWindow::render_slice`]
//!
//! For a host binding that owns the collection and services loads, see the `rowport-host`
//! crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
pub mod geometry;
mod guard;
mod options;
mod slice;
mod state;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use error::{Dimension, Error, Result};
pub use geometry::compute_window;
pub use guard::LoadGuard;
pub use options::{
    DEFAULT_END_REACHED_THRESHOLD, DEFAULT_OVERSCAN, EndReachedCallback, OnChangeCallback,
    WindowOptions,
};
pub use slice::{RenderSlice, SliceItem};
pub use state::ViewportState;
pub use types::{Align, EndReached, ScrollDirection, Update, Window, WindowRange};
pub use window::ListWindow;
