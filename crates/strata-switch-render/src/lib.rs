//! Paint surface contract and drawing types for Strata Switch.
//!
//! The host toolkit owns the actual rendering backend; this crate defines
//! what the toggle widget needs from it:
//!
//! - Basic geometry and color types ([`Point`], [`Size`], [`Rect`],
//!   [`RoundedRect`], [`Color`])
//! - A font description ([`Font`]) used for label text
//! - The [`Painter`] trait, the drawing surface a host backend implements
//! - [`RecordingPainter`], a backend-free painter that records draw commands
//!   for tests

pub mod error;
pub mod font;
pub mod painter;
pub mod types;

pub use error::ParseColorError;
pub use font::{Font, FontFamily, FontWeight};
pub use painter::{DrawCommand, Painter, RecordingPainter};
pub use types::{Color, Point, Rect, RoundedRect, Size};
