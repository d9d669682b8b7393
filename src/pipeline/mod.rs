//! End-to-end translation orchestration.
//!
//! Chunks a manuscript, fans the chunks out to an external translation
//! service, and reassembles the results in original order. Translation
//! itself lives behind the [`Translator`] trait; everything on this side
//! of the seam is pure text transformation.

use rayon::prelude::*;

use crate::chunk::{chunk_text, join_chunks, DEFAULT_MAX_CHUNK_SIZE};
use crate::error::{Error, Result};
use crate::layout::{LayoutEngine, LayoutOptions};
use crate::model::{DocumentElement, PageLayout};
use crate::normalize::CapitalizationNormalizer;
use crate::parse::MarkdownParser;

/// Trait for external translation backends.
///
/// Implementations receive one chunk at a time together with an opaque
/// target-language token; the token is passed through unvalidated, so an
/// unsupported language is the caller's problem to surface. Chunks may be
/// translated concurrently, hence `Send + Sync`.
pub trait Translator: Send + Sync {
    /// Get the name of this translator, for diagnostics.
    fn name(&self) -> &str {
        "translator"
    }

    /// Translate one chunk into the target language.
    fn translate_chunk(&self, chunk: &str, target_language: &str) -> Result<String>;
}

/// Options for the translation pipeline.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Maximum chunk size in characters
    pub max_chunk_size: usize,

    /// Repair all-caps sentences before structure parsing
    pub normalize_capitalization: bool,

    /// Translate chunks in parallel
    pub parallel: bool,

    /// Page geometry for the layout path
    pub layout: LayoutOptions,
}

impl PipelineOptions {
    /// Create pipeline options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum chunk size in characters.
    pub fn with_max_chunk_size(mut self, max_chunk_size: usize) -> Self {
        self.max_chunk_size = max_chunk_size;
        self
    }

    /// Enable or disable capitalization repair before parsing.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize_capitalization = normalize;
        self
    }

    /// Translate chunks one at a time instead of in parallel.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the page geometry for the layout path.
    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            normalize_capitalization: true,
            parallel: true,
            layout: LayoutOptions::default(),
        }
    }
}

/// Orchestrates chunking, translation, and reassembly.
pub struct TranslationPipeline {
    options: PipelineOptions,
}

impl TranslationPipeline {
    /// Create a pipeline with default options.
    pub fn new() -> Self {
        Self {
            options: PipelineOptions::default(),
        }
    }

    /// Create a pipeline with the given options.
    pub fn with_options(options: PipelineOptions) -> Self {
        Self { options }
    }

    /// Get the pipeline options.
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Translate `text` into `target_language` through `translator`.
    ///
    /// The text is split at paragraph boundaries, every chunk is handed to
    /// the translator (concurrently unless [`PipelineOptions::sequential`]
    /// was set), and the results are rejoined in original chunk order no
    /// matter which finishes first. If any single chunk fails, the whole
    /// run fails with that chunk's index; no partial document is ever
    /// assembled from a mix of translated and untranslated chunks.
    pub fn translate(
        &self,
        text: &str,
        target_language: &str,
        translator: &dyn Translator,
    ) -> Result<TranslatedDocument> {
        let chunks = chunk_text(text, self.options.max_chunk_size)?;
        log::debug!(
            "dispatching {} chunks to {} (target language: {})",
            chunks.len(),
            translator.name(),
            target_language
        );

        let translate_one = |(index, chunk): (usize, &String)| {
            translator
                .translate_chunk(chunk, target_language)
                .map_err(|e| Error::Translation {
                    index,
                    message: e.to_string(),
                })
        };

        let translated: Vec<String> = if self.options.parallel {
            chunks.par_iter().enumerate().map(translate_one).collect::<Result<_>>()?
        } else {
            chunks.iter().enumerate().map(translate_one).collect::<Result<_>>()?
        };

        Ok(TranslatedDocument {
            text: join_chunks(&translated),
            chunk_count: chunks.len(),
            options: self.options.clone(),
        })
    }
}

impl Default for TranslationPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// A reassembled translation and its downstream products.
///
/// The document-builder path goes through [`elements`](Self::elements)
/// (capitalization repair, then structure recovery); the page-drawing path
/// goes through [`pages`](Self::pages) directly over the joined text.
#[derive(Debug, Clone)]
pub struct TranslatedDocument {
    text: String,
    chunk_count: usize,
    options: PipelineOptions,
}

impl TranslatedDocument {
    /// The joined translated text, exactly as the translator returned it.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the document, returning the joined translated text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Number of chunks sent for translation.
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    /// The translated text with all-caps sentences repaired.
    pub fn normalized_text(&self) -> String {
        CapitalizationNormalizer::new().normalize(&self.text)
    }

    /// Recover document structure for the word-processor target.
    pub fn elements(&self) -> Vec<DocumentElement> {
        let parser = MarkdownParser::new();
        if self.options.normalize_capitalization {
            parser.parse(&self.normalized_text())
        } else {
            parser.parse(&self.text)
        }
    }

    /// Lay the translated text onto pages for the PDF target.
    pub fn pages(&self) -> Result<Vec<PageLayout>> {
        LayoutEngine::new(self.options.layout.clone()).layout(&self.text)
    }
}
