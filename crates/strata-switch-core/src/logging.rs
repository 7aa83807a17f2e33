//! Logging facilities for Strata Switch.
//!
//! Strata Switch uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=strata_switch_core::timer=trace`.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "strata_switch_core";
    /// Timer system target.
    pub const TIMER: &str = "strata_switch_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "strata_switch_core::signal";
    /// Toggle animation target (lives in the widget crate).
    pub const ANIMATION: &str = "strata_switch::animation";
    /// Widget event handling target.
    pub const WIDGET: &str = "strata_switch::widget";
}
