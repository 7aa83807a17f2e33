//! Widget events.
//!
//! The host toolkit translates its native input and timer events into these
//! types and dispatches them through [`crate::widget::Widget::event`]. Only
//! the events a toggle-style control consumes are modeled: mouse press and
//! release, hover enter/leave, keyboard activation, and timer ticks.
//!
//! Input and timer events carry the host clock's [`Instant`] so animation
//! starts and ticks share one time base.

use std::time::Instant;

use strata_switch_core::TimerId;
use strata_switch_render::Point;

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keys a button-like widget reacts to.
///
/// The host maps its own key codes; anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Enter,
    Other(u32),
}

/// Common event state shared by all event types.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    /// Mark the event as handled.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Mark the event as not handled, letting the host propagate it.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }

    /// Whether the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

/// A mouse button was pressed inside the widget.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    pub base: EventBase,
    /// Position in the widget's local coordinates.
    pub local_pos: Point,
    pub button: MouseButton,
    /// The host clock time of the input.
    pub timestamp: Instant,
}

impl MousePressEvent {
    pub fn new(local_pos: Point, button: MouseButton, timestamp: Instant) -> Self {
        Self {
            base: EventBase::default(),
            local_pos,
            button,
            timestamp,
        }
    }
}

/// A mouse button was released.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    pub base: EventBase,
    /// Position in the widget's local coordinates.
    pub local_pos: Point,
    pub button: MouseButton,
    /// The host clock time of the input.
    pub timestamp: Instant,
}

impl MouseReleaseEvent {
    pub fn new(local_pos: Point, button: MouseButton, timestamp: Instant) -> Self {
        Self {
            base: EventBase::default(),
            local_pos,
            button,
            timestamp,
        }
    }
}

/// The pointer entered the widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnterEvent {
    pub base: EventBase,
}

/// The pointer left the widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaveEvent {
    pub base: EventBase,
}

/// A key was pressed while the widget had focus.
#[derive(Debug, Clone, Copy)]
pub struct KeyPressEvent {
    pub base: EventBase,
    pub key: Key,
    /// Whether this is an auto-repeat of a held key.
    pub is_repeat: bool,
    pub timestamp: Instant,
}

impl KeyPressEvent {
    pub fn new(key: Key, timestamp: Instant) -> Self {
        Self {
            base: EventBase::default(),
            key,
            is_repeat: false,
            timestamp,
        }
    }
}

/// A key was released while the widget had focus.
#[derive(Debug, Clone, Copy)]
pub struct KeyReleaseEvent {
    pub base: EventBase,
    pub key: Key,
    pub timestamp: Instant,
}

impl KeyReleaseEvent {
    pub fn new(key: Key, timestamp: Instant) -> Self {
        Self {
            base: EventBase::default(),
            key,
            timestamp,
        }
    }
}

/// A timer owned by this widget fired.
#[derive(Debug, Clone, Copy)]
pub struct TimerEvent {
    pub base: EventBase,
    /// The timer that fired.
    pub id: TimerId,
    /// The host clock time of the tick.
    pub timestamp: Instant,
}

impl TimerEvent {
    pub fn new(id: TimerId, timestamp: Instant) -> Self {
        Self {
            base: EventBase::default(),
            id,
            timestamp,
        }
    }
}

/// All events a widget can receive.
#[derive(Debug, Clone, Copy)]
pub enum WidgetEvent {
    MousePress(MousePressEvent),
    MouseRelease(MouseReleaseEvent),
    Enter(EnterEvent),
    Leave(LeaveEvent),
    KeyPress(KeyPressEvent),
    KeyRelease(KeyReleaseEvent),
    Timer(TimerEvent),
}

impl WidgetEvent {
    /// Mark the event as handled.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Mark the event as not handled.
    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }

    /// Whether the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    fn base(&self) -> &EventBase {
        match self {
            Self::MousePress(e) => &e.base,
            Self::MouseRelease(e) => &e.base,
            Self::Enter(e) => &e.base,
            Self::Leave(e) => &e.base,
            Self::KeyPress(e) => &e.base,
            Self::KeyRelease(e) => &e.base,
            Self::Timer(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::MousePress(e) => &mut e.base,
            Self::MouseRelease(e) => &mut e.base,
            Self::Enter(e) => &mut e.base,
            Self::Leave(e) => &mut e.base,
            Self::KeyPress(e) => &mut e.base,
            Self::KeyRelease(e) => &mut e.base,
            Self::Timer(e) => &mut e.base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_and_ignore() {
        let mut event = WidgetEvent::Enter(EnterEvent::default());
        assert!(!event.is_accepted());
        event.accept();
        assert!(event.is_accepted());
        event.ignore();
        assert!(!event.is_accepted());
    }

    #[test]
    fn test_key_press_defaults_to_not_repeat() {
        let event = KeyPressEvent::new(Key::Space, Instant::now());
        assert!(!event.is_repeat);
    }
}
