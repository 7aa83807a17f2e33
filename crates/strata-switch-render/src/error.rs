//! Error types for the render contract.

use thiserror::Error;

/// Errors from parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The digit count is not one of the supported hex forms.
    #[error("invalid hex color length {0} (expected 3, 4, 6 or 8 digits)")]
    InvalidLength(usize),
    /// A character outside `[0-9a-fA-F]` appeared in a component.
    #[error("invalid hex digit in color component")]
    InvalidDigit,
}
