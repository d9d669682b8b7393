//! Inline emphasis parsing for a single line of text.
//!
//! Recovers `**`/`__` bold and `*`/`_` italic spans from translator output.
//! Parsing is two-staged: the line is first scanned into a flat token
//! stream, then one pass over the tokens builds styled runs from two
//! independent toggles. Unknown or unbalanced syntax never fails; it
//! degrades to literal text or leaves a toggle on through end of line.

use crate::model::TextRun;

const ESCAPE: char = '\\';

/// One lexical unit of an inline-formatted line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum InlineToken {
    /// Literal text between markers
    Text(String),
    /// `**` or `__`
    BoldMarker,
    /// `*` or `_` not doubled
    ItalicMarker,
}

/// Scan a line into text and marker tokens.
///
/// A marker character directly preceded by a backslash is literal text.
/// The backslash itself is not consumed; it stays in the text token.
fn tokenize(line: &str) -> Vec<InlineToken> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let is_marker_char = c == '*' || c == '_';
        let escaped = i > 0 && chars[i - 1] == ESCAPE;

        if is_marker_char && !escaped {
            if !buffer.is_empty() {
                tokens.push(InlineToken::Text(std::mem::take(&mut buffer)));
            }
            if chars.get(i + 1) == Some(&c) {
                tokens.push(InlineToken::BoldMarker);
                i += 2;
            } else {
                tokens.push(InlineToken::ItalicMarker);
                i += 1;
            }
            continue;
        }

        buffer.push(c);
        i += 1;
    }

    if !buffer.is_empty() {
        tokens.push(InlineToken::Text(buffer));
    }
    tokens
}

/// Parse one line into styled text runs.
///
/// Every marker token flushes the accumulated text as a run carrying the
/// current bold/italic state, then toggles the matching flag; a final flush
/// closes the line. Flushes are unconditional, so empty input yields a
/// single empty run and adjacent markers yield empty runs between them.
/// Concatenating the run texts reproduces the line with markers removed.
///
/// # Example
///
/// ```
/// use rebind::{parse_inline, TextRun};
///
/// let runs = parse_inline("Plain **bold** and *italic*.");
/// assert_eq!(
///     runs,
///     vec![
///         TextRun::new("Plain "),
///         TextRun::bold("bold"),
///         TextRun::new(" and "),
///         TextRun::italic("italic"),
///         TextRun::new("."),
///     ]
/// );
/// ```
pub fn parse_inline(line: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut bold = false;
    let mut italic = false;
    let mut buffer = String::new();

    for token in tokenize(line) {
        match token {
            InlineToken::Text(text) => buffer.push_str(&text),
            InlineToken::BoldMarker => {
                runs.push(TextRun::styled(std::mem::take(&mut buffer), bold, italic));
                bold = !bold;
            }
            InlineToken::ItalicMarker => {
                runs.push(TextRun::styled(std::mem::take(&mut buffer), bold, italic));
                italic = !italic;
            }
        }
    }
    runs.push(TextRun::styled(buffer, bold, italic));

    runs
}
