//! Page and layout-line types.

use serde::{Deserialize, Serialize};

/// A single laid-out page of wrapped text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in points (1 point = 1/72 inch)
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Wrapped lines in top-to-bottom order
    pub lines: Vec<LayoutLine>,
}

impl PageLayout {
    /// Create a new empty page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            lines: Vec::new(),
        }
    }

    /// Add a line to the page.
    pub fn add_line(&mut self, line: LayoutLine) {
        self.lines.push(line);
    }

    /// Get the page text, one wrapped line per row.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the page holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get page dimensions as (width, height) tuple.
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// One wrapped line positioned on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutLine {
    /// Line text with wrap points resolved
    pub text: String,

    /// Vertical offset from the top of the page in points
    pub y: f32,

    /// Alignment the drawing collaborator should apply
    pub alignment: Alignment,
}

impl LayoutLine {
    /// Create a justified line at the given vertical offset.
    pub fn justified(text: impl Into<String>, y: f32) -> Self {
        Self {
            text: text.into(),
            y,
            alignment: Alignment::Justify,
        }
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}
