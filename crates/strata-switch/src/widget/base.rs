//! Common widget state.
//!
//! [`WidgetBase`] holds the state every widget carries: identity, geometry,
//! enabled/visible flags, interaction state (hover, pressed, focus) and the
//! repaint flag the host's frame loop consumes. Concrete widgets embed it
//! and delegate.

use strata_switch_core::{Object, ObjectId};
use strata_switch_render::{Point, Rect, Size};

/// Common implementation for widget functionality.
pub struct WidgetBase {
    /// Unique id of the owning widget.
    id: ObjectId,
    /// Position and size within the parent, in parent coordinates.
    geometry: Rect,
    /// Whether the widget accepts user interaction.
    enabled: bool,
    /// Whether the widget is drawn.
    visible: bool,
    /// Whether the widget can take keyboard focus.
    focusable: bool,
    /// Whether the widget currently has keyboard focus.
    focused: bool,
    /// Whether the pointer is currently over the widget.
    hovered: bool,
    /// Whether a press started on the widget and has not been released.
    pressed: bool,
    /// Whether the widget needs repainting.
    needs_repaint: bool,
}

impl WidgetBase {
    /// Create a new widget base.
    pub fn new() -> Self {
        Self {
            id: ObjectId::allocate(),
            geometry: Rect::default(),
            enabled: true,
            visible: true,
            focusable: false,
            focused: false,
            hovered: false,
            pressed: false,
            needs_repaint: true,
        }
    }

    /// The unique object id.
    pub fn object_id(&self) -> ObjectId {
        self.id
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// The widget's geometry in parent coordinates.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.update();
        }
    }

    /// The widget's size.
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Resize the widget, keeping its position.
    pub fn resize(&mut self, width: f32, height: f32) {
        let mut rect = self.geometry;
        rect.size = Size::new(width, height);
        self.set_geometry(rect);
    }

    /// The widget's local rectangle (origin at 0,0).
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.width(), self.geometry.height())
    }

    /// Check if a point in local coordinates lies inside the widget.
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect().contains(point)
    }

    // =========================================================================
    // Enabled / Visible
    // =========================================================================

    /// Whether the widget accepts user interaction.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable user interaction.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.update();
        }
    }

    /// Whether the widget is drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the widget.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.update();
        }
    }

    // =========================================================================
    // Interaction State
    // =========================================================================

    /// Whether the widget can take keyboard focus.
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// Set whether the widget can take keyboard focus.
    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    /// Whether the widget currently has keyboard focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Set the focus state. Called by the host's focus manager.
    pub fn set_focus(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.update();
        }
    }

    /// Whether the pointer is over the widget.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Set the hover state. Called from enter/leave event handling.
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.update();
        }
    }

    /// Whether a press is in progress on the widget.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Set the pressed state. Called from press/release event handling.
    pub fn set_pressed(&mut self, pressed: bool) {
        if self.pressed != pressed {
            self.pressed = pressed;
            self.update();
        }
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Whether the widget needs repainting.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint on the next frame.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Consume the repaint flag. Called by the host after painting.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for WidgetBase {
    fn object_id(&self) -> ObjectId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let base = WidgetBase::new();
        assert!(base.is_enabled());
        assert!(base.is_visible());
        assert!(!base.is_focusable());
        assert!(!base.is_hovered());
        assert!(!base.is_pressed());
        assert!(base.needs_repaint());
    }

    #[test]
    fn test_geometry_and_local_rect() {
        let mut base = WidgetBase::new();
        base.set_geometry(Rect::new(50.0, 60.0, 36.0, 18.0));

        assert_eq!(base.rect(), Rect::new(0.0, 0.0, 36.0, 18.0));
        assert!(base.contains_point(Point::new(10.0, 10.0)));
        assert!(!base.contains_point(Point::new(40.0, 10.0)));
    }

    #[test]
    fn test_state_changes_request_repaint() {
        let mut base = WidgetBase::new();
        assert!(base.take_repaint());
        assert!(!base.needs_repaint());

        base.set_enabled(false);
        assert!(base.take_repaint());

        // No change, no repaint
        base.set_enabled(false);
        assert!(!base.take_repaint());

        base.set_hovered(true);
        assert!(base.take_repaint());
    }
}
