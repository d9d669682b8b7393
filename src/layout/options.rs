//! Page geometry and text measurement options.

use crate::error::{Error, Result};

/// Page width of an A4 sheet in points.
pub const A4_WIDTH: f32 = 595.0;
/// Page height of an A4 sheet in points.
pub const A4_HEIGHT: f32 = 842.0;
/// Page width of a US Letter sheet in points.
pub const LETTER_WIDTH: f32 = 612.0;
/// Page height of a US Letter sheet in points.
pub const LETTER_HEIGHT: f32 = 792.0;

/// Options for paginated layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Page width in points
    pub page_width: f32,

    /// Page height in points
    pub page_height: f32,

    /// Margin on all four sides in points
    pub margin: f32,

    /// Base font size in points
    pub font_size: f32,

    /// Line height as a multiple of the font size
    pub line_height_factor: f32,
}

impl LayoutOptions {
    /// Create layout options with defaults (A4, 40pt margin, 12pt text).
    pub fn new() -> Self {
        Self::default()
    }

    /// Use A4 page dimensions.
    pub fn a4() -> Self {
        Self::default()
    }

    /// Use US Letter page dimensions.
    pub fn letter() -> Self {
        Self {
            page_width: LETTER_WIDTH,
            page_height: LETTER_HEIGHT,
            ..Self::default()
        }
    }

    /// Set explicit page dimensions in points.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set the margin in points.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the base font size in points.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the line height multiplier.
    pub fn with_line_height_factor(mut self, factor: f32) -> Self {
        self.line_height_factor = factor;
        self
    }

    /// Horizontal space available for text.
    pub fn usable_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Vertical advance per line in points.
    pub fn line_height(&self) -> f32 {
        self.font_size * self.line_height_factor
    }

    /// Check that the geometry leaves room to place text.
    pub fn validate(&self) -> Result<()> {
        if self.margin < 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "margin must not be negative (got {})",
                self.margin
            )));
        }
        if self.usable_width() <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "margins {} leave no usable width on a {}pt page",
                self.margin, self.page_width
            )));
        }
        if self.line_height() <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "font size {} with line height factor {} yields no line height",
                self.font_size, self.line_height_factor
            )));
        }
        Ok(())
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH,
            page_height: A4_HEIGHT,
            margin: 40.0,
            font_size: 12.0,
            line_height_factor: 1.15,
        }
    }
}

/// Source of rendered text widths.
///
/// The drawing collaborator owns the real font metrics; implement this to
/// wrap them when exact wrap points matter. The default estimator is good
/// enough for proportional body text.
pub trait TextMeasurer {
    /// Width of `text` in points when set at `font_size`.
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Width estimator assuming an average glyph width relative to font size.
#[derive(Debug, Clone)]
pub struct AverageCharMeasurer {
    /// Average glyph width as a fraction of the font size
    pub width_ratio: f32,
}

impl AverageCharMeasurer {
    /// Create a measurer with the default ratio.
    pub fn new() -> Self {
        Self { width_ratio: 0.5 }
    }
}

impl Default for AverageCharMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for AverageCharMeasurer {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.width_ratio
    }
}
