//! Concrete widget implementations.

pub mod abstract_button;
pub mod toggle_switch;

pub use abstract_button::AbstractButton;
pub use toggle_switch::{ToggleStyle, ToggleSwitch};
