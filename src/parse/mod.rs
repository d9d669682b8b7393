//! Structure recovery from flat translated text.

mod document;
mod inline;

pub use document::{parse_document, MarkdownParser};
pub use inline::parse_inline;
