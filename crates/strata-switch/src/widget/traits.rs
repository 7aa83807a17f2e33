//! The widget contract.

use strata_switch_core::Object;
use strata_switch_render::{Painter, Rect, Size};

use crate::widget::base::WidgetBase;
use crate::widget::events::WidgetEvent;
use crate::widget::geometry::SizeHint;

/// Context handed to a widget while it paints.
///
/// Bundles the drawing surface with the rectangle the widget is painting
/// into, in the widget's local coordinates.
pub struct PaintContext<'a> {
    painter: &'a mut dyn Painter,
    widget_rect: Rect,
}

impl<'a> PaintContext<'a> {
    /// Create a paint context for a widget's local rectangle.
    pub fn new(painter: &'a mut dyn Painter, widget_rect: Rect) -> Self {
        Self {
            painter,
            widget_rect,
        }
    }

    /// The drawing surface.
    pub fn painter(&mut self) -> &mut dyn Painter {
        self.painter
    }

    /// The widget's local rectangle.
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    /// The width available for painting.
    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    /// The height available for painting.
    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }

    /// The size available for painting.
    pub fn size(&self) -> Size {
        self.widget_rect.size
    }
}

/// The base trait for all widgets.
pub trait Widget: Object + Send + Sync {
    /// Access the common widget state.
    fn widget_base(&self) -> &WidgetBase;

    /// Mutable access to the common widget state.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// The sizes the widget would like the host layout to give it.
    fn size_hint(&self) -> SizeHint;

    /// Paint the widget into the context.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Handle an event. Returns `true` if the widget consumed it.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }
}
