//! Size hints for layout negotiation.
//!
//! The host toolkit owns layout; widgets only report the sizes they would
//! like through [`SizeHint`].

use strata_switch_render::Size;

/// A widget's preferred and minimum sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeHint {
    /// The size the widget would like to have.
    pub preferred: Size,
    /// The smallest size at which the widget is still usable.
    pub minimum: Size,
}

impl SizeHint {
    /// Create a size hint with the given preferred size and no minimum.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: Size::ZERO,
        }
    }

    /// Create a size hint from preferred width and height.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Set the minimum size using builder pattern.
    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = minimum;
        self
    }

    /// Set the minimum size from width and height using builder pattern.
    pub fn with_minimum_dimensions(self, width: f32, height: f32) -> Self {
        self.with_minimum(Size::new(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_hint_builder() {
        let hint = SizeHint::from_dimensions(80.0, 24.0).with_minimum_dimensions(40.0, 18.0);
        assert_eq!(hint.preferred, Size::new(80.0, 24.0));
        assert_eq!(hint.minimum, Size::new(40.0, 18.0));
    }
}
