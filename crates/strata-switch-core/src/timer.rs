//! Timer system for Strata Switch.
//!
//! Provides one-shot and repeating timers for the host event loop to pump.
//! The manager never samples the wall clock itself: every query takes the
//! current [`Instant`] from the caller, so hosts integrate it with their own
//! frame clock and tests drive it with synthetic time.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use slotmap::{SlotMap, new_key_type};

use crate::error::{Result, TimerError};

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// The type of timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires once after the specified duration.
    OneShot,
    /// Fires repeatedly at the specified interval.
    Repeating,
}

/// Internal timer data.
#[derive(Debug)]
struct TimerData {
    /// When this timer should next fire.
    next_fire: Instant,
    /// The interval for repeating timers.
    interval: Duration,
    /// The kind of timer.
    kind: TimerKind,
    /// Whether this timer is active.
    active: bool,
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages the timers of a host event loop.
///
/// The animation protocol of the toggle widget is a repeating timer: the
/// host starts one at the widget's tick interval, calls the widget's tick
/// on every fire reported by [`process_expired`](Self::process_expired),
/// and stops the timer when the widget reports the animation settled.
pub struct TimerManager {
    /// All registered timers.
    timers: SlotMap<TimerId, TimerData>,
    /// Priority queue of pending timer fires (min-heap by fire time).
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create a new timer manager.
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            queue: BinaryHeap::new(),
        }
    }

    /// Start a one-shot timer that fires `duration` after `now`.
    ///
    /// Returns the timer ID that can be used to cancel the timer.
    pub fn start_one_shot(&mut self, duration: Duration, now: Instant) -> TimerId {
        self.insert(duration, TimerKind::OneShot, now)
    }

    /// Start a repeating timer that fires at the specified interval.
    ///
    /// The first fire occurs `interval` after `now`.
    /// Returns the timer ID that can be used to cancel the timer.
    pub fn start_repeating(&mut self, interval: Duration, now: Instant) -> TimerId {
        self.insert(interval, TimerKind::Repeating, now)
    }

    fn insert(&mut self, interval: Duration, kind: TimerKind, now: Instant) -> TimerId {
        let next_fire = now + interval;
        let id = self.timers.insert(TimerData {
            next_fire,
            interval,
            kind,
            active: true,
        });
        self.queue.push(TimerQueueEntry {
            id,
            fire_time: next_fire,
        });
        id
    }

    /// Stop and remove a timer.
    ///
    /// Returns `Ok(())` if the timer was found and removed, or an error if
    /// not found.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        if let Some(timer) = self.timers.get_mut(id) {
            timer.active = false;
            self.timers.remove(id);
            Ok(())
        } else {
            Err(TimerError::InvalidTimerId.into())
        }
    }

    /// Check if a timer is currently active.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.get(id).is_some_and(|t| t.active)
    }

    /// Get the duration from `now` until the next timer fires, if any.
    ///
    /// Returns `None` if there are no active timers. Hosts use this to
    /// suspend their event loop between ticks.
    pub fn time_until_next(&mut self, now: Instant) -> Option<Duration> {
        // Clean up any stopped timers from the front of the queue.
        while let Some(entry) = self.queue.peek() {
            if !self.timers.get(entry.id).is_some_and(|t| t.active) {
                self.queue.pop();
            } else {
                break;
            }
        }

        self.queue.peek().map(|entry| {
            if entry.fire_time > now {
                entry.fire_time - now
            } else {
                Duration::ZERO
            }
        })
    }

    /// Process all timers that should have fired by `now`.
    ///
    /// Returns the ids of fired timers, in fire order. Repeating timers are
    /// rescheduled relative to `now`; one-shot timers are removed.
    pub fn process_expired(&mut self, now: Instant) -> Vec<TimerId> {
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek() {
            if entry.fire_time > now {
                break;
            }

            let entry = *entry;
            self.queue.pop();
            let id = entry.id;

            let Some(timer) = self.timers.get_mut(id) else {
                continue;
            };
            if !timer.active {
                continue;
            }
            // A rescheduled repeating timer leaves a stale heap entry behind;
            // only the entry matching next_fire is the live one.
            if timer.next_fire != entry.fire_time {
                continue;
            }

            tracing::trace!(target: "strata_switch_core::timer", ?id, "timer fired");
            fired.push(id);

            match timer.kind {
                TimerKind::OneShot => {
                    timer.active = false;
                    self.timers.remove(id);
                }
                TimerKind::Repeating => {
                    timer.next_fire = now + timer.interval;
                    self.queue.push(TimerQueueEntry {
                        id,
                        fire_time: timer.next_fire,
                    });
                }
            }
        }

        fired
    }

    /// Get the number of active timers.
    pub fn active_count(&self) -> usize {
        self.timers.iter().filter(|(_, t)| t.active).count()
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_one_shot_fires_once() {
        let start = Instant::now();
        let mut mgr = TimerManager::new();
        let id = mgr.start_one_shot(ms(100), start);

        assert!(mgr.process_expired(start + ms(50)).is_empty());
        assert_eq!(mgr.process_expired(start + ms(100)), vec![id]);
        assert!(!mgr.is_active(id));
        assert!(mgr.process_expired(start + ms(500)).is_empty());
    }

    #[test]
    fn test_repeating_reschedules() {
        let start = Instant::now();
        let mut mgr = TimerManager::new();
        let id = mgr.start_repeating(ms(15), start);

        assert_eq!(mgr.process_expired(start + ms(15)), vec![id]);
        assert_eq!(mgr.process_expired(start + ms(30)), vec![id]);
        assert!(mgr.is_active(id));

        mgr.stop(id).unwrap();
        assert!(mgr.process_expired(start + ms(45)).is_empty());
    }

    #[test]
    fn test_stop_unknown_timer_errors() {
        let start = Instant::now();
        let mut mgr = TimerManager::new();
        let id = mgr.start_one_shot(ms(10), start);
        mgr.stop(id).unwrap();
        assert!(mgr.stop(id).is_err());
    }

    #[test]
    fn test_time_until_next() {
        let start = Instant::now();
        let mut mgr = TimerManager::new();
        assert_eq!(mgr.time_until_next(start), None);

        mgr.start_one_shot(ms(100), start);
        mgr.start_one_shot(ms(40), start);
        assert_eq!(mgr.time_until_next(start), Some(ms(40)));
        assert_eq!(mgr.time_until_next(start + ms(60)), Some(Duration::ZERO));
    }

    #[test]
    fn test_fire_order_is_by_deadline() {
        let start = Instant::now();
        let mut mgr = TimerManager::new();
        let slow = mgr.start_one_shot(ms(80), start);
        let fast = mgr.start_one_shot(ms(20), start);

        assert_eq!(mgr.process_expired(start + ms(100)), vec![fast, slow]);
    }

    #[test]
    fn test_active_count() {
        let start = Instant::now();
        let mut mgr = TimerManager::new();
        let a = mgr.start_repeating(ms(15), start);
        let _b = mgr.start_repeating(ms(30), start);
        assert_eq!(mgr.active_count(), 2);

        mgr.stop(a).unwrap();
        assert_eq!(mgr.active_count(), 1);
    }
}
