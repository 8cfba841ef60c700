//! Adapter utilities for the `parabox` crate.
//!
//! The `parabox` crate is UI-agnostic and only talks to a page through its `Host` trait. This
//! crate provides a small, framework-neutral host and driver:
//!
//! - [`Page`]: an in-memory page with element geometry, inline styles, a millisecond clock and
//!   tween-based style animations
//! - [`Controller`]: owns an engine and a page, and forwards scroll events and clock ticks
//!
//! This crate is intentionally framework-agnostic (no DOM or toolkit bindings).
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod controller;
mod page;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use page::{ElementId, Page};
pub use tween::Tween;
