//! Prelude module for Strata Switch.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use strata_switch::prelude::*;
//! ```

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use crate::signal::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Object System
// ============================================================================

pub use crate::object::{Object, ObjectId};

// ============================================================================
// Timers
// ============================================================================

pub use crate::timer::{TimerId, TimerManager};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent};

// ============================================================================
// The Toggle Switch
// ============================================================================

pub use crate::widget::{Easing, ToggleState, ToggleStyle, ToggleSwitch};

// ============================================================================
// Geometry and Color
// ============================================================================

pub use crate::render::{Color, Font, Painter, Point, Rect, RoundedRect, Size};
