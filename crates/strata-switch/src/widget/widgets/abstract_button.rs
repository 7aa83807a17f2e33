//! Shared button behavior.
//!
//! [`AbstractButton`] implements the interaction model every button-like
//! widget shares: press/release tracking for mouse and keyboard, optional
//! checkable state, and the four button signals. Concrete widgets embed it
//! and add their own painting and geometry.

use strata_switch_core::logging::targets;
use strata_switch_core::{Object, ObjectId, Signal};

use crate::widget::base::WidgetBase;
use crate::widget::events::{
    Key, KeyPressEvent, KeyReleaseEvent, MouseButton, MousePressEvent, MouseReleaseEvent,
};

/// Common state and behavior for button widgets.
pub struct AbstractButton {
    base: WidgetBase,
    /// Label text, empty for an unlabeled button.
    text: String,
    /// Whether the button holds a checked state.
    checkable: bool,
    checked: bool,
    /// Whether the active press came from the keyboard.
    key_pressed: bool,
    /// Emitted on a completed click, with the checked state after it.
    clicked: Signal<bool>,
    /// Emitted when the button is pressed down.
    pressed: Signal<()>,
    /// Emitted when the button is released.
    released: Signal<()>,
    /// Emitted whenever the checked state changes, with the new state.
    toggled: Signal<bool>,
}

impl AbstractButton {
    /// Create a non-checkable button with no text.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            text: String::new(),
            checkable: false,
            checked: false,
            key_pressed: false,
            clicked: Signal::new(),
            pressed: Signal::new(),
            released: Signal::new(),
            toggled: Signal::new(),
        }
    }

    /// Access the common widget state.
    pub fn base(&self) -> &WidgetBase {
        &self.base
    }

    /// Mutable access to the common widget state.
    pub fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    /// The button's label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the button's label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.base.update();
    }

    /// Whether the button holds a checked state.
    pub fn is_checkable(&self) -> bool {
        self.checkable
    }

    /// Set whether the button holds a checked state.
    ///
    /// Making a checked button non-checkable clears its checked state.
    pub fn set_checkable(&mut self, checkable: bool) {
        self.checkable = checkable;
        if !checkable && self.checked {
            self.set_checked(false);
        }
    }

    /// Whether the button is checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state, emitting `toggled` on change.
    ///
    /// Does nothing on a non-checkable button. Unlike user interaction this
    /// is not gated on the enabled state; hosts may synchronize a disabled
    /// button to a model.
    pub fn set_checked(&mut self, checked: bool) {
        if !self.checkable || self.checked == checked {
            return;
        }
        self.checked = checked;
        self.base.update();
        tracing::debug!(
            target: targets::WIDGET,
            id = ?self.base.object_id(),
            checked,
            "button toggled"
        );
        self.toggled.emit(checked);
    }

    /// Flip the checked state.
    pub fn toggle(&mut self) {
        self.set_checked(!self.checked);
    }

    /// Perform a full programmatic click.
    ///
    /// Emits `pressed`, `released`, `toggled` (when checkable) and
    /// `clicked`, in that order, mirroring a physical press and release.
    /// Does nothing while disabled.
    pub fn click(&mut self) {
        if !self.base.is_enabled() {
            return;
        }
        self.pressed.emit(());
        self.released.emit(());
        self.complete_click();
    }

    // =========================================================================
    // Signals
    // =========================================================================

    /// Emitted on a completed click, with the checked state after it.
    pub fn clicked(&self) -> &Signal<bool> {
        &self.clicked
    }

    /// Emitted when the button is pressed down.
    pub fn pressed(&self) -> &Signal<()> {
        &self.pressed
    }

    /// Emitted when the button is released.
    pub fn released(&self) -> &Signal<()> {
        &self.released
    }

    /// Emitted whenever the checked state changes, with the new state.
    pub fn toggled(&self) -> &Signal<bool> {
        &self.toggled
    }

    // =========================================================================
    // Event handling
    // =========================================================================

    /// Handle a mouse press. Returns `true` if the press was consumed.
    pub fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if !self.base.is_enabled()
            || event.button != MouseButton::Left
            || !self.base.contains_point(event.local_pos)
        {
            return false;
        }
        self.base.set_pressed(true);
        self.pressed.emit(());
        true
    }

    /// Handle a mouse release. Returns `true` if it completed a click.
    ///
    /// A click completes only when the release lands inside the widget;
    /// releasing outside cancels the press.
    pub fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left || !self.base.is_pressed() {
            return false;
        }
        self.base.set_pressed(false);
        self.released.emit(());

        if self.base.is_enabled() && self.base.contains_point(event.local_pos) {
            self.complete_click();
            return true;
        }
        false
    }

    /// Handle a key press. Returns `true` if the key was consumed.
    pub fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        if !self.base.is_enabled()
            || event.is_repeat
            || !matches!(event.key, Key::Space | Key::Enter)
        {
            return false;
        }
        self.key_pressed = true;
        self.base.set_pressed(true);
        self.pressed.emit(());
        true
    }

    /// Handle a key release. Returns `true` if it completed a click.
    pub fn handle_key_release(&mut self, event: &KeyReleaseEvent) -> bool {
        if !self.key_pressed || !matches!(event.key, Key::Space | Key::Enter) {
            return false;
        }
        self.key_pressed = false;
        self.base.set_pressed(false);
        self.released.emit(());

        if self.base.is_enabled() {
            self.complete_click();
            return true;
        }
        false
    }

    /// Toggle (when checkable) and emit `clicked`.
    fn complete_click(&mut self) {
        if self.checkable {
            self.toggle();
        }
        tracing::debug!(
            target: targets::WIDGET,
            id = ?self.base.object_id(),
            checked = self.checked,
            "button clicked"
        );
        self.clicked.emit(self.checked);
    }
}

impl Default for AbstractButton {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for AbstractButton {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

static_assertions::assert_impl_all!(AbstractButton: Send, Sync);
