//! The paint surface contract.
//!
//! [`Painter`] is the drawing interface the host rendering backend
//! implements and hands to widgets at paint time. The toggle widget only
//! needs filled rounded rectangles, filled circles and text, so the trait is
//! deliberately small; a backend with a richer surface simply forwards.
//!
//! [`RecordingPainter`] implements the trait without any backend by
//! recording the commands it receives. Tests assert against the recorded
//! command stream instead of pixels.

use crate::font::Font;
use crate::types::{Color, Point, Rect, RoundedRect};

/// A drawing surface for widget painting.
///
/// Coordinates are in the widget's local space with the origin at the top
/// left. Implementations must not reorder commands; later commands paint
/// over earlier ones.
pub trait Painter {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a rounded rectangle with a solid color.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color);

    /// Fill an axis-aligned ellipse with a solid color.
    fn fill_ellipse(&mut self, center: Point, radius_x: f32, radius_y: f32, color: Color);

    /// Fill a circle with a solid color.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.fill_ellipse(center, radius, radius, color);
    }

    /// Draw a single line of text with its baseline-box anchored at
    /// `origin` (top-left of the text's bounding box).
    fn fill_text(&mut self, text: &str, origin: Point, font: &Font, color: Color);
}

/// A single recorded draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillRoundedRect {
        rect: RoundedRect,
        color: Color,
    },
    FillEllipse {
        center: Point,
        radius_x: f32,
        radius_y: f32,
        color: Color,
    },
    FillText {
        text: String,
        origin: Point,
        font: Font,
        color: Color,
    },
}

/// A painter that records commands instead of rasterizing them.
///
/// Used by tests to verify paint output deterministically.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    commands: Vec<DrawCommand>,
}

impl RecordingPainter {
    /// Create an empty recording painter.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far, in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Discard all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// The recorded rounded-rect fills, in paint order.
    pub fn rounded_rects(&self) -> impl Iterator<Item = (&RoundedRect, &Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillRoundedRect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    /// The recorded ellipse fills, in paint order.
    pub fn ellipses(&self) -> impl Iterator<Item = (&Point, &Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillEllipse { center, color, .. } => Some((center, color)),
            _ => None,
        })
    }

    /// The recorded text fills, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, &Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillText { text, color, .. } => Some((text.as_str(), color)),
            _ => None,
        })
    }
}

impl Painter for RecordingPainter {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        self.commands.push(DrawCommand::FillRoundedRect { rect, color });
    }

    fn fill_ellipse(&mut self, center: Point, radius_x: f32, radius_y: f32, color: Color) {
        self.commands.push(DrawCommand::FillEllipse {
            center,
            radius_x,
            radius_y,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, origin: Point, font: &Font, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            origin,
            font: font.clone(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut painter = RecordingPainter::new();
        painter.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        painter.fill_circle(Point::new(5.0, 5.0), 4.0, Color::WHITE);

        assert_eq!(painter.commands().len(), 2);
        assert!(matches!(painter.commands()[0], DrawCommand::FillRect { .. }));
        // fill_circle is delegated through fill_ellipse
        assert!(matches!(
            painter.commands()[1],
            DrawCommand::FillEllipse { radius_x, radius_y, .. } if radius_x == radius_y
        ));
    }

    #[test]
    fn test_filters() {
        let mut painter = RecordingPainter::new();
        let pill = RoundedRect::pill(Rect::new(0.0, 0.0, 36.0, 18.0));
        painter.fill_rounded_rect(pill, Color::GRAY);
        painter.fill_text("label", Point::ZERO, &Font::default(), Color::BLACK);

        assert_eq!(painter.rounded_rects().count(), 1);
        assert_eq!(painter.ellipses().count(), 0);
        let (text, color) = painter.texts().next().unwrap();
        assert_eq!(text, "label");
        assert_eq!(*color, Color::BLACK);
    }

    #[test]
    fn test_clear() {
        let mut painter = RecordingPainter::new();
        painter.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        painter.clear();
        assert!(painter.commands().is_empty());
    }
}
