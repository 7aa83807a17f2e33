//! The widget system.
//!
//! Widgets implement the [`Widget`] trait over a shared [`WidgetBase`],
//! paint through the [`Painter`](strata_switch_render::Painter) handed to
//! them in a [`PaintContext`], and receive input and timer ticks as
//! [`WidgetEvent`]s from the host toolkit.

pub mod animation;
pub mod base;
pub mod events;
pub mod geometry;
pub mod traits;
pub mod widgets;

pub use animation::{Easing, ToggleAnimation, ToggleState};
pub use base::WidgetBase;
pub use events::{
    EnterEvent, EventBase, Key, KeyPressEvent, KeyReleaseEvent, LeaveEvent, MouseButton,
    MousePressEvent, MouseReleaseEvent, TimerEvent, WidgetEvent,
};
pub use geometry::SizeHint;
pub use traits::{PaintContext, Widget};
pub use widgets::{AbstractButton, ToggleStyle, ToggleSwitch};
