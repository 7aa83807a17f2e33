//! Strata Switch - an animated toggle switch widget.
//!
//! This is the main umbrella crate that re-exports all public APIs.
//!
//! The switch is a checkable control drawn as a pill-shaped track with a
//! sliding circular indicator. Checking it animates the indicator across
//! the track while the track color cross-fades.
//!
//! # Example
//!
//! ```
//! use strata_switch::prelude::*;
//! use std::time::Instant;
//!
//! let mut switch = ToggleSwitch::with_text("Notifications");
//! switch.toggled().connect(|on| {
//!     println!("notifications: {}", on);
//! });
//!
//! switch.set_checked_at(true, Instant::now());
//! assert!(switch.is_checked());
//! ```
//!
//! The widget has no clock of its own. Hosts drive the animation by
//! delivering timer events (or calling
//! [`ToggleSwitch::animation_tick`](widget::ToggleSwitch::animation_tick))
//! while [`is_animating`](widget::ToggleSwitch::is_animating) holds.

pub use strata_switch_core::*;

/// Graphics rendering module.
pub mod render {
    pub use strata_switch_render::*;
}

pub mod prelude;
pub mod widget;
