//! Animation support for widgets.

pub mod easing;
pub mod toggle;

pub use easing::{Easing, lerp};
pub use toggle::{
    DEFAULT_DURATION, DEFAULT_TICK_INTERVAL, ToggleAnimation, ToggleState,
};
