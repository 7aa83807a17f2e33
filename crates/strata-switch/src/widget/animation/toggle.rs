//! The toggle position animation.
//!
//! [`ToggleAnimation`] drives a position in `[0, 1]` between the off end
//! (`0.0`) and the on end (`1.0`). The owning widget calls
//! [`animate_to`](ToggleAnimation::animate_to) when its checked state
//! changes and [`tick`](ToggleAnimation::tick) on every timer fire; all
//! time comes in as [`Instant`] arguments so hosts and tests control the
//! clock.
//!
//! A redirect mid-flight re-anchors the segment at the current interpolated
//! position and restarts the clock, so a reversal settles within one full
//! duration and the position never leaves `[0, 1]`.

use std::time::{Duration, Instant};

use strata_switch_core::logging::targets;

use crate::widget::animation::easing::{Easing, lerp};

/// Default time a full off-to-on (or on-to-off) transition takes.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

/// Default interval between animation ticks, roughly 60 Hz.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(15);

/// The four states of a toggle's animation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    /// At rest at position 0.
    IdleOff,
    /// Moving toward position 1.
    AnimatingToOn,
    /// At rest at position 1.
    IdleOn,
    /// Moving toward position 0.
    AnimatingToOff,
}

/// One animation run from an anchor position toward an end.
#[derive(Debug, Clone, Copy)]
struct Segment {
    /// Position when the segment started.
    from: f32,
    /// Position the segment ends at, 0.0 or 1.0.
    target: f32,
    /// Clock time the segment started.
    started: Instant,
}

/// Animates the indicator position of a toggle between its two ends.
#[derive(Debug, Clone)]
pub struct ToggleAnimation {
    /// Current position in `[0, 1]`.
    position: f32,
    /// The in-flight segment, if animating.
    segment: Option<Segment>,
    duration: Duration,
    easing: Easing,
}

impl ToggleAnimation {
    /// Create an animation at rest at the given end.
    pub fn new(on: bool) -> Self {
        Self {
            position: if on { 1.0 } else { 0.0 },
            segment: None,
            duration: DEFAULT_DURATION,
            easing: Easing::EaseInOutCubic,
        }
    }

    /// The current position in `[0, 1]`.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Whether an animation is in flight.
    pub fn is_running(&self) -> bool {
        self.segment.is_some()
    }

    /// The current lifecycle state.
    pub fn state(&self) -> ToggleState {
        match self.segment {
            Some(segment) if segment.target == 1.0 => ToggleState::AnimatingToOn,
            Some(_) => ToggleState::AnimatingToOff,
            None if self.position == 1.0 => ToggleState::IdleOn,
            None => ToggleState::IdleOff,
        }
    }

    /// The duration of a full end-to-end transition.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Set the transition duration.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// The easing curve.
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Set the easing curve.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Start animating toward an end.
    ///
    /// If an animation is already running toward the other end, it is
    /// redirected: the new segment is anchored at the current position and
    /// its clock restarts at `now`. Starting toward an end already reached
    /// (or already targeted) does nothing.
    pub fn animate_to(&mut self, on: bool, now: Instant) {
        let target = if on { 1.0 } else { 0.0 };

        match self.segment {
            Some(segment) if segment.target == target => return,
            None if self.position == target => return,
            Some(_) => {
                tracing::debug!(
                    target: targets::ANIMATION,
                    position = self.position,
                    target,
                    "redirecting toggle animation"
                );
            }
            None => {
                tracing::debug!(
                    target: targets::ANIMATION,
                    position = self.position,
                    target,
                    "starting toggle animation"
                );
            }
        }

        self.segment = Some(Segment {
            from: self.position,
            target,
            started: now,
        });
    }

    /// Jump to an end without animating, cancelling any in-flight segment.
    pub fn snap_to(&mut self, on: bool) {
        self.segment = None;
        self.position = if on { 1.0 } else { 0.0 };
    }

    /// Advance the animation to `now` and return the new position.
    ///
    /// When the segment's duration has elapsed the position snaps to the
    /// exact target and the animation stops. A `now` earlier than the
    /// segment start leaves the position at the anchor.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let Some(segment) = self.segment else {
            return self.position;
        };

        let elapsed = now.saturating_duration_since(segment.started);
        let raw = elapsed.as_secs_f32() / self.duration.as_secs_f32();

        if raw >= 1.0 {
            self.position = segment.target;
            self.segment = None;
            tracing::debug!(
                target: targets::ANIMATION,
                position = self.position,
                "toggle animation settled"
            );
        } else {
            let eased = self.easing.apply(raw);
            self.position = lerp(segment.from, segment.target, eased).clamp(0.0, 1.0);
        }

        self.position
    }
}

impl Default for ToggleAnimation {
    fn default() -> Self {
        Self::new(false)
    }
}
