//! Host binding utilities for the `rowport` crate.
//!
//! The `rowport` crate is UI-agnostic and only does the window math and load-guard bookkeeping.
//! This crate provides the glue a host typically writes around it:
//!
//! - a binding that owns the collection and keeps the engine's item count in sync
//! - translation of scroll-container metrics into engine events
//! - positioned frames for a per-item render callback
//! - an infinite-load pump driven by a [`LoadMore`] source
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod binding;
mod frame;
mod loader;
mod metrics;


pub use binding::HostList;
pub use frame::{Frame, Placed};
pub use loader::LoadMore;
pub use metrics::{HostEvent, ScrollMetrics};
