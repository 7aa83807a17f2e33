//! Basic geometry and color types for rendering.
//!
//! This module provides the fundamental types the toggle widget paints with.

use std::str::FromStr;

use crate::error::ParseColorError;

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// The left edge x-coordinate.
    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// The top edge y-coordinate.
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// The right edge x-coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// The bottom edge y-coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// The rectangle's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// The rectangle's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// The center point.
    #[inline]
    pub fn center(&self) -> Point {
        Point {
            x: self.origin.x + self.size.width / 2.0,
            y: self.origin.y + self.size.height / 2.0,
        }
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

/// A rectangle with a uniform corner radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radius: f32,
}

impl RoundedRect {
    /// Create a rounded rectangle with a uniform radius.
    #[inline]
    pub fn new(rect: Rect, radius: f32) -> Self {
        Self { rect, radius }
    }

    /// A rounded rect whose corner radius is half its height (a "pill").
    #[inline]
    pub fn pill(rect: Rect) -> Self {
        Self {
            radius: rect.height() / 2.0,
            rect,
        }
    }
}

/// An RGBA color with components in the 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create a color from a hex string.
    ///
    /// Accepts `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`, with or without
    /// the leading `#`. Shorthand digits are doubled (`#0BF` is `#00BBFF`).
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let hex = hex.trim_start_matches('#');

        fn wide(component: &str) -> Result<u8, ParseColorError> {
            u8::from_str_radix(component, 16).map_err(|_| ParseColorError::InvalidDigit)
        }
        fn short(component: &str) -> Result<u8, ParseColorError> {
            wide(component).map(|n| n * 17)
        }

        let (r, g, b, a) = match hex.len() {
            3 => (short(&hex[0..1])?, short(&hex[1..2])?, short(&hex[2..3])?, 255),
            4 => (
                short(&hex[0..1])?,
                short(&hex[1..2])?,
                short(&hex[2..3])?,
                short(&hex[3..4])?,
            ),
            6 => (wide(&hex[0..2])?, wide(&hex[2..4])?, wide(&hex[4..6])?, 255),
            8 => (
                wide(&hex[0..2])?,
                wide(&hex[2..4])?,
                wide(&hex[4..6])?,
                wide(&hex[6..8])?,
            ),
            len => return Err(ParseColorError::InvalidLength(len)),
        };

        Ok(Self::from_rgba8(r, g, b, a))
    }

    /// Return a new color with the given alpha.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Linear interpolation between two colors.
    ///
    /// `t` is clamped to `[0, 1]`; `t == 0` yields `self`, `t == 1` yields
    /// `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Convert to an array `[r, g, b, a]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::from_rgb(0.5, 0.5, 0.5);
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(9.9, 9.9)));
        assert!(!rect.contains(Point::new(10.0, 5.0)));
        assert!(!rect.contains(Point::new(-0.1, 5.0)));
    }

    #[test]
    fn test_rounded_rect_pill() {
        let pill = RoundedRect::pill(Rect::new(0.0, 0.0, 36.0, 18.0));
        assert_eq!(pill.radius, 9.0);
    }

    #[test]
    fn test_color_from_hex_long_forms() {
        assert_eq!(Color::from_hex("#00BBFF"), Ok(Color::from_rgb8(0, 187, 255)));
        assert_eq!(
            Color::from_hex("00BBFF80"),
            Ok(Color::from_rgba8(0, 187, 255, 128))
        );
    }

    #[test]
    fn test_color_from_hex_shorthand() {
        // Shorthand digits double: #0BF == #00BBFF
        assert_eq!(Color::from_hex("#0BF"), Color::from_hex("#00BBFF"));
        assert_eq!(Color::from_hex("#0BF8"), Color::from_hex("#00BBFF88"));
    }

    #[test]
    fn test_color_from_hex_errors() {
        assert_eq!(
            Color::from_hex("#12345"),
            Err(ParseColorError::InvalidLength(5))
        );
        assert_eq!(Color::from_hex("#GGHHII"), Err(ParseColorError::InvalidDigit));
    }

    #[test]
    fn test_color_from_str() {
        let color: Color = "#777".parse().unwrap();
        assert_eq!(color, Color::from_rgb8(119, 119, 119));
    }

    #[test]
    fn test_color_lerp_endpoints_and_clamp() {
        let off = Color::from_rgb8(0, 187, 255);
        let on = Color::from_rgb8(119, 119, 119);
        assert_eq!(off.lerp(on, 0.0), off);
        assert_eq!(off.lerp(on, 1.0), on);
        assert_eq!(off.lerp(on, 2.0), on);
        assert_eq!(off.lerp(on, -1.0), off);

        let mid = off.lerp(on, 0.5);
        assert!((mid.g - (off.g + on.g) / 2.0).abs() < 1e-6);
    }
}
