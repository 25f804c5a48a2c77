//! Adapter utilities for the `header-collapse` crate.
//!
//! The `header-collapse` crate is UI-agnostic and focuses on the transition math and the style
//! contract. This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A frame-aligned read/write queue (`FrameQueue`)
//! - An in-memory element tree implementing `HeaderHost` (`ElementTree`)
//! - A controller wiring a primary + collapsing header pair (`Controller`)
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod queue;
mod tree;

#[cfg(test)]
mod tests;

pub use controller::{COLLAPSE_MAIN_CLASS, Controller, ObserverConfig};
pub use queue::{FlushStats, FrameQueue};
pub use tree::{ComputedStyle, ElementTree, NodeId, NodeKind};
