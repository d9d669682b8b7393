//! Element and text-run types for reconstructed documents.

use serde::{Deserialize, Serialize};

/// A run of text with one bold/italic combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,
}

impl TextRun {
    /// Create a plain (unstyled) text run.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: false,
        }
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: true,
        }
    }

    /// Create a run with explicit style flags.
    pub fn styled(text: impl Into<String>, bold: bool, italic: bool) -> Self {
        Self {
            text: text.into(),
            bold,
            italic,
        }
    }

    /// Check if this run carries no styling.
    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// One structural unit of a reconstructed document.
///
/// Elements appear in document order; there are no cross-references between
/// them. Headings and list items keep their text raw, paragraphs carry the
/// styled runs produced by inline parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentElement {
    /// A heading at level 1-3
    Heading {
        /// Heading level (1 = most prominent)
        level: u8,
        /// Heading text with the marker prefix stripped
        text: String,
    },

    /// A single list item
    ListItem {
        /// Item text with the marker prefix stripped
        text: String,
        /// Nesting level (0 = top level)
        level: u8,
    },

    /// A paragraph of styled text runs
    Paragraph {
        /// Runs in display order
        runs: Vec<TextRun>,
    },
}

impl DocumentElement {
    /// Create a heading element; the level is clamped to 1-3.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level: level.clamp(1, 3),
            text: text.into(),
        }
    }

    /// Create a top-level list item element.
    pub fn list_item(text: impl Into<String>) -> Self {
        Self::ListItem {
            text: text.into(),
            level: 0,
        }
    }

    /// Create a paragraph element from styled runs.
    pub fn paragraph(runs: Vec<TextRun>) -> Self {
        Self::Paragraph { runs }
    }

    /// Get the plain text of this element, styling dropped.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Heading { text, .. } => text.clone(),
            Self::ListItem { text, .. } => text.clone(),
            Self::Paragraph { runs } => runs.iter().map(|r| r.text.as_str()).collect(),
        }
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Self::Heading { .. })
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        matches!(self, Self::ListItem { .. })
    }

    /// Check if this is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Self::Paragraph { .. })
    }
}
