//! A headless scroll-effects engine.
//!
//! For a reference in-memory page host with an animation clock, see the `parabox-adapter` crate.
//!
//! This crate binds scroll-offset changes to visual effects on page elements:
//! - background parallax: a background image drifts vertically while its element crosses the
//!   viewport,
//! - item parallax: an element animates between two style maps when the scroll offset enters or
//!   leaves a range,
//! - section tracking: a `sectionChange` event fires whenever the last passed labeled threshold
//!   changes.
//!
//! It is UI-agnostic. A page/TUI/GUI layer implements [`Host`] to provide:
//! - the scroll offset and element geometry
//! - style reads and writes
//! - animation start/stop and event dispatch
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod background;
mod error;
mod host;
mod item;
mod key;
mod options;
mod parabox;
mod position;
mod range;
mod section;
mod style;
mod types;


pub use background::{BackgroundAttrs, BackgroundParallax};
pub use error::{Error, Result};
pub use host::Host;
pub use item::{ItemAttrs, ItemParallax};
pub use key::ElementKey;
pub use options::{BackgroundOptions, BehaviorOptions, ItemOptions, SectionOptions};
pub use parabox::ParaBox;
pub use position::{
    BACKGROUND_POSITION, BACKGROUND_POSITION_X, BackgroundPosition, VerticalPosition,
    horizontal_anchor,
};
pub use range::in_range;
pub use section::SectionTracker;
pub use style::{StyleMap, StyleValue};
pub use types::{
    Animation, Behavior, Easing, SECTION_CHANGE_EVENT, SectionChange, SectionPoint, Subscription,
};
