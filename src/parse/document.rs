//! Line-oriented structure recovery for translated text.
//!
//! Translators hand back flat text in which the markdown-like cues of the
//! source survive as literal characters. This parser walks the text line
//! by line and rebuilds headings, list items, and paragraphs in document
//! order. It is best-effort by design: anything unrecognized becomes a
//! plain paragraph instead of an error, since translator output is not
//! guaranteed well-formed.

use regex::Regex;

use crate::model::DocumentElement;
use crate::parse::parse_inline;

// Checked most specific first so `### ` never reads as `# `.
const HEADING_PREFIXES: [(&str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

/// Parser recovering document structure from flat translated text.
pub struct MarkdownParser {
    numbered_item: Regex,
}

impl MarkdownParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self {
            numbered_item: Regex::new(r"^[0-9]+\. ").unwrap(),
        }
    }

    /// Parse `text` into an ordered sequence of document elements.
    ///
    /// Lines are trimmed, then classified: `# `/`## `/`### ` prefixes become
    /// headings, `- `/`* `/`<digits>. ` prefixes become list items, anything
    /// else non-empty becomes a paragraph of inline-parsed runs. Consecutive
    /// list items are buffered and flushed as one contiguous group; a blank
    /// line, heading, paragraph, or end of input closes the group, so two
    /// lists separated by other content never merge.
    pub fn parse(&self, text: &str) -> Vec<DocumentElement> {
        let mut elements = Vec::new();
        let mut pending_list: Vec<DocumentElement> = Vec::new();

        for raw_line in text.lines() {
            let line = raw_line.trim();

            if line.is_empty() {
                elements.append(&mut pending_list);
                continue;
            }

            if let Some(heading) = self.parse_heading(line) {
                elements.append(&mut pending_list);
                elements.push(heading);
                continue;
            }

            if let Some(item) = self.parse_list_item(line) {
                pending_list.push(item);
                continue;
            }

            elements.append(&mut pending_list);
            elements.push(DocumentElement::Paragraph {
                runs: parse_inline(line),
            });
        }
        elements.append(&mut pending_list);

        log::debug!("parsed {} document elements", elements.len());
        elements
    }

    fn parse_heading(&self, line: &str) -> Option<DocumentElement> {
        for (prefix, level) in HEADING_PREFIXES {
            if let Some(text) = line.strip_prefix(prefix) {
                return Some(DocumentElement::Heading {
                    level,
                    text: text.to_string(),
                });
            }
        }
        None
    }

    fn parse_list_item(&self, line: &str) -> Option<DocumentElement> {
        if let Some(text) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            return Some(DocumentElement::list_item(text));
        }
        if let Some(m) = self.numbered_item.find(line) {
            return Some(DocumentElement::list_item(&line[m.end()..]));
        }
        None
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse flat text into document elements with a one-off parser.
pub fn parse_document(text: &str) -> Vec<DocumentElement> {
    MarkdownParser::new().parse(text)
}
