//! Paragraph-aligned chunking of manuscript text.
//!
//! Translation services cap request sizes, so source text is split into
//! chunks before being sent out. Chunks break only at paragraph boundaries
//! (double line break) and rejoin losslessly after translation.

use crate::error::{Error, Result};

/// Default maximum chunk size in characters.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 100_000;

/// Delimiter between paragraphs, and between chunks when rejoining.
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// Split text into translation-sized chunks at paragraph boundaries.
///
/// Paragraphs are accumulated greedily: when appending the next paragraph
/// (delimiter included) would push the buffer past `max_chunk_size`, the
/// buffer is flushed as a completed chunk and the paragraph starts a new
/// one. A single paragraph longer than `max_chunk_size` becomes its own
/// oversized chunk; paragraphs are never split internally.
///
/// Joining the chunks with [`PARAGRAPH_DELIMITER`] reproduces the input
/// exactly. Empty input produces an empty sequence.
///
/// # Example
///
/// ```
/// let text = "First paragraph.\n\nSecond paragraph.";
/// let chunks = rebind::chunk_text(text, 20)?;
/// assert_eq!(chunks, vec!["First paragraph.", "Second paragraph."]);
/// assert_eq!(rebind::join_chunks(&chunks), text);
/// # Ok::<(), rebind::Error>(())
/// ```
pub fn chunk_text(text: &str, max_chunk_size: usize) -> Result<Vec<String>> {
    if max_chunk_size == 0 {
        return Err(Error::InvalidChunkSize);
    }
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut chunks = Vec::new();
    let mut buffer: Option<String> = None;

    for paragraph in text.split(PARAGRAPH_DELIMITER) {
        if paragraph.len() > max_chunk_size {
            log::warn!(
                "paragraph of {} chars exceeds max chunk size {}, emitting oversized chunk",
                paragraph.len(),
                max_chunk_size
            );
        }
        buffer = match buffer.take() {
            None => Some(paragraph.to_string()),
            Some(mut current) => {
                let appended = current.len() + PARAGRAPH_DELIMITER.len() + paragraph.len();
                if appended > max_chunk_size {
                    chunks.push(current);
                    Some(paragraph.to_string())
                } else {
                    current.push_str(PARAGRAPH_DELIMITER);
                    current.push_str(paragraph);
                    Some(current)
                }
            }
        };
    }

    if let Some(current) = buffer {
        chunks.push(current);
    }

    log::debug!(
        "chunked {} chars into {} chunks (max {})",
        text.len(),
        chunks.len(),
        max_chunk_size
    );
    Ok(chunks)
}

/// Rejoin translated chunks in order with the paragraph delimiter.
pub fn join_chunks<S: AsRef<str>>(chunks: &[S]) -> String {
    chunks
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_DELIMITER)
}
