//! # rebind
//!
//! Rebuilds structured, paginated documents from flat translated manuscript
//! text.
//!
//! Machine-translation backends accept bounded plain-text payloads and return
//! flat text. This library handles both ends of that exchange: it splits a
//! manuscript into paragraph-safe chunks before translation, and afterwards
//! it repairs capitalization, recovers Markdown structure, and lays the text
//! out as print-ready pages.
//!
//! ## Quick Start
//!
//! ```
//! use rebind::{Result, TranslationPipeline, Translator};
//!
//! // Stand-in for a real machine-translation backend.
//! struct EchoTranslator;
//!
//! impl Translator for EchoTranslator {
//!     fn translate_chunk(&self, chunk: &str, _target_language: &str) -> Result<String> {
//!         Ok(chunk.to_string())
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let manuscript = "# The Voyage\n\nIt began **quietly**, at dawn.";
//!
//!     let pipeline = TranslationPipeline::new();
//!     let doc = pipeline.translate(manuscript, "en", &EchoTranslator)?;
//!
//!     let elements = doc.elements(); // structured document tree
//!     let pages = doc.pages()?; // paginated print layout
//!
//!     assert_eq!(elements.len(), 2);
//!     assert_eq!(pages.len(), 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Paragraph-safe chunking**: splits on blank lines, never mid-paragraph
//! - **Capitalization repair**: rewrites all-caps sentences left behind by
//!   translation backends
//! - **Structure recovery**: headings, list items, bold/italic inline runs
//! - **Print pagination**: greedy word wrap and page breaks, justified lines
//! - **Parallel translation**: uses Rayon to fan chunks out across threads
//! - **JSON handoff**: serializes elements and page layouts with Serde

pub mod chunk;
pub mod error;
pub mod json;
pub mod layout;
pub mod model;
pub mod normalize;
pub mod parse;
pub mod pipeline;

// Re-export commonly used types
pub use chunk::{chunk_text, join_chunks, DEFAULT_MAX_CHUNK_SIZE, PARAGRAPH_DELIMITER};
pub use error::{Error, Result};
pub use json::{to_json, JsonFormat};
pub use layout::{
    AverageCharMeasurer, LayoutEngine, LayoutOptions, TextMeasurer, A4_HEIGHT, A4_WIDTH,
    LETTER_HEIGHT, LETTER_WIDTH,
};
pub use model::{Alignment, DocumentElement, LayoutLine, PageLayout, TextRun};
pub use normalize::{normalize_capitalization, CapitalizationNormalizer};
pub use parse::{parse_document, parse_inline, MarkdownParser};
pub use pipeline::{PipelineOptions, TranslatedDocument, TranslationPipeline, Translator};

/// Translate manuscript text and return the rejoined result.
///
/// Chunks the input, routes every chunk through `translator`, and joins the
/// translated chunks back in order. Shorthand for running a
/// [`TranslationPipeline`] with default options and discarding the wrapper.
///
/// # Arguments
///
/// * `text` - Manuscript text with paragraphs separated by blank lines
/// * `target_language` - Language code forwarded to the translator
/// * `translator` - The translation backend
///
/// # Example
///
/// ```
/// use rebind::{translate_text, Result, Translator};
///
/// struct Shout;
///
/// impl Translator for Shout {
///     fn translate_chunk(&self, chunk: &str, _target_language: &str) -> Result<String> {
///         Ok(chunk.to_uppercase())
///     }
/// }
///
/// let text = translate_text("hello world", "en", &Shout).unwrap();
/// assert_eq!(text, "HELLO WORLD");
/// ```
pub fn translate_text(
    text: &str,
    target_language: &str,
    translator: &dyn Translator,
) -> Result<String> {
    let pipeline = TranslationPipeline::new();
    Ok(pipeline.translate(text, target_language, translator)?.into_text())
}

/// Lay manuscript text out as paginated lines.
///
/// # Arguments
///
/// * `text` - Manuscript text with paragraphs separated by blank lines
/// * `options` - Page geometry and typography settings
///
/// # Example
///
/// ```
/// use rebind::{layout_pages, LayoutOptions};
///
/// let pages = layout_pages("A short paragraph.", &LayoutOptions::default()).unwrap();
/// assert_eq!(pages.len(), 1);
/// assert_eq!(pages[0].lines[0].text, "A short paragraph.");
/// ```
pub fn layout_pages(text: &str, options: &LayoutOptions) -> Result<Vec<PageLayout>> {
    LayoutEngine::new(options.clone()).layout(text)
}
