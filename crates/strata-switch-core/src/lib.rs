//! Core systems for Strata Switch.
//!
//! This crate provides the foundational pieces the toggle switch widget is
//! built on:
//!
//! - **Object identity**: stable ids for widget instances
//! - **Signal/Slot System**: type-safe state-change notification
//! - **Timers**: one-shot and repeating timers driven by an explicit clock
//!
//! The host toolkit owns the event loop; [`TimerManager`] is pumped from it
//! (or from a test harness) by passing the current [`std::time::Instant`]
//! into [`TimerManager::process_expired`].
//!
//! # Signal/Slot Example
//!
//! ```
//! use strata_switch_core::Signal;
//!
//! // Create a signal that notifies when the checked state changes
//! let toggled = Signal::<bool>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = toggled.connect(|checked| {
//!     println!("Checked: {}", checked);
//! });
//!
//! // Emit the signal
//! toggled.emit(true);
//!
//! // Disconnect when done
//! toggled.disconnect(conn_id);
//! ```

pub mod error;
pub mod logging;
pub mod object;
pub mod signal;
pub mod timer;

pub use error::{Result, SignalError, SwitchError, TimerError};
pub use object::{Object, ObjectId};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use timer::{TimerId, TimerKind, TimerManager};
