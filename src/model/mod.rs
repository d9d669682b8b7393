//! Document model types for reconstructed manuscript content.
//!
//! This module defines the intermediate representation that bridges the
//! structure parser and the external rendering collaborators: styled text
//! runs grouped into elements on the document-builder side, positioned
//! lines grouped into pages on the drawing side.

mod element;
mod page;

pub use element::{DocumentElement, TextRun};
pub use page::{Alignment, LayoutLine, PageLayout};
