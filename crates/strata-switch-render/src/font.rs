//! Font description for label text.
//!
//! The host paint surface owns glyph shaping and exact metrics. This type
//! only describes what to render with, plus a deterministic width estimate
//! used for size hints before any surface exists.

/// A font family selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// The host's default proportional UI font.
    #[default]
    SansSerif,
    /// The host's default serif font.
    Serif,
    /// The host's default fixed-width font.
    Monospace,
    /// A specific family by name, resolved by the host.
    Named(String),
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// A font for text rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
    weight: FontWeight,
}

impl Font {
    /// Create a font with the given family and point size.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::Normal,
        }
    }

    /// Set the weight using builder pattern.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// The font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// The point size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// The nominal line height (size plus leading).
    pub fn line_height(&self) -> f32 {
        self.size * 1.2
    }

    /// Estimate the rendered width of `text`.
    ///
    /// Exact metrics belong to the host paint surface; this estimate feeds
    /// size hints only. It assumes an average advance of a bit over half an
    /// em per glyph, which is close for proportional UI fonts.
    pub fn estimated_text_width(&self, text: &str) -> f32 {
        let advance = match self.family {
            FontFamily::Monospace => 0.62,
            _ => 0.55,
        };
        text.chars().count() as f32 * self.size * advance
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 14.0)
    }
}
