//! Greedy line wrapping and pagination for flat text.
//!
//! Turns already-translated text into pages of positioned, justified lines
//! for an external drawing collaborator. Paragraphs are split on single
//! newlines (coarser than the chunker's double-newline split; this stage
//! sees flat translator output), word-wrapped greedily against the usable
//! width, and placed down the page until the bottom margin forces a break.

mod options;

pub use options::{
    AverageCharMeasurer, LayoutOptions, TextMeasurer, A4_HEIGHT, A4_WIDTH, LETTER_HEIGHT,
    LETTER_WIDTH,
};

use crate::error::Result;
use crate::model::{LayoutLine, PageLayout};

/// Pagination engine for flat paragraph text.
pub struct LayoutEngine<M: TextMeasurer = AverageCharMeasurer> {
    options: LayoutOptions,
    measurer: M,
}

impl LayoutEngine {
    /// Create an engine with the default width estimator.
    pub fn new(options: LayoutOptions) -> Self {
        Self {
            options,
            measurer: AverageCharMeasurer::new(),
        }
    }
}

impl<M: TextMeasurer> LayoutEngine<M> {
    /// Create an engine with caller-supplied font metrics.
    pub fn with_measurer(options: LayoutOptions, measurer: M) -> Self {
        Self { options, measurer }
    }

    /// Get the layout options.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Lay `text` out onto pages.
    ///
    /// Every wrapped line lands on exactly one page, in input order; no
    /// line is split across pages. The vertical cursor starts one line
    /// height below the top margin, advances one line height per line,
    /// and an extra half line height after each non-empty paragraph. A
    /// line that would cross the bottom margin starts a new page instead.
    /// Pages are created lazily, so empty input yields no pages.
    pub fn layout(&self, text: &str) -> Result<Vec<PageLayout>> {
        self.options.validate()?;

        let line_height = self.options.line_height();
        let usable_width = self.options.usable_width();
        let top = self.options.margin + line_height;
        let bottom = self.options.page_height - self.options.margin;

        let mut pages: Vec<PageLayout> = Vec::new();
        let mut y = top;

        for paragraph in text.split('\n') {
            let paragraph = paragraph.trim();
            if paragraph.is_empty() {
                continue;
            }

            for line in self.wrap_paragraph(paragraph, usable_width) {
                if pages.is_empty() || y + line_height > bottom {
                    pages.push(PageLayout::new(
                        pages.len() as u32 + 1,
                        self.options.page_width,
                        self.options.page_height,
                    ));
                    y = top;
                }
                if let Some(page) = pages.last_mut() {
                    page.add_line(LayoutLine::justified(line, y));
                }
                y += line_height;
            }

            // Inter-paragraph spacing.
            y += line_height / 2.0;
        }

        log::debug!("laid out {} chars onto {} pages", text.len(), pages.len());
        Ok(pages)
    }

    /// Greedily wrap one paragraph into lines within `usable_width`.
    ///
    /// A single word wider than the usable width still produces a line;
    /// it overflows the right margin rather than being truncated.
    fn wrap_paragraph(&self, paragraph: &str, usable_width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                if self.measurer.text_width(word, self.options.font_size) > usable_width {
                    log::warn!("word wider than usable width, line will overflow: {:?}", word);
                }
                current.push_str(word);
                continue;
            }

            let candidate = format!("{} {}", current, word);
            if self.measurer.text_width(&candidate, self.options.font_size) > usable_width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            } else {
                current = candidate;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Alignment;

    // 100pt of usable width and exact 12pt lines keep the arithmetic
    // representable, so page-break positions are deterministic.
    fn test_options() -> LayoutOptions {
        LayoutOptions::new()
            .with_page_size(180.0, 128.0)
            .with_margin(40.0)
            .with_font_size(12.0)
            .with_line_height_factor(1.0)
    }

    #[test]
    fn test_empty_input_no_pages() {
        let engine = LayoutEngine::new(LayoutOptions::default());
        assert!(engine.layout("").unwrap().is_empty());
        assert!(engine.layout("\n\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_single_line_position() {
        let engine = LayoutEngine::new(test_options());
        let pages = engine.layout("hello").unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[0].lines.len(), 1);
        assert_eq!(pages[0].lines[0].text, "hello");
        // Cursor starts one line height below the margin.
        assert_eq!(pages[0].lines[0].y, 52.0);
        assert_eq!(pages[0].lines[0].alignment, Alignment::Justify);
    }

    #[test]
    fn test_page_break_at_capacity() {
        // Two 7-char words per line (15 chars = 90pt of 100pt usable).
        // The bottom margin sits at 88pt, so lines fit at y = 52, 64, 76
        // (76 + 12 lands exactly on the margin) and the fourth wrapped
        // line opens page two.
        let engine = LayoutEngine::new(test_options());
        let text = "aaaaaaa bbbbbbb ccccccc ddddddd eeeeeee fffffff ggggggg hhhhhhh";
        let pages = engine.layout(text).unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].line_count(), 3);
        assert_eq!(pages[1].line_count(), 1);
        assert_eq!(pages[0].lines[0].text, "aaaaaaa bbbbbbb");
        assert_eq!(pages[0].lines[2].y, 76.0);
        assert_eq!(pages[1].lines[0].text, "ggggggg hhhhhhh");
        assert_eq!(pages[1].lines[0].y, 52.0);
        assert_eq!(pages[1].number, 2);
    }

    #[test]
    fn test_wrap_is_greedy() {
        // usable 100pt, 6pt per char: "aaaa bbbb" is 9 chars = 54pt, adding
        // " cccc" makes 14 chars = 84pt, adding " dddd" makes 19 = 114pt.
        let engine = LayoutEngine::new(test_options());
        let lines = engine.wrap_paragraph("aaaa bbbb cccc dddd", 100.0);
        assert_eq!(lines, vec!["aaaa bbbb cccc", "dddd"]);
    }

    #[test]
    fn test_overwide_word_still_produces_line() {
        let engine = LayoutEngine::new(test_options());
        let word = "w".repeat(40); // 240pt, far over the 100pt usable width
        let lines = engine.wrap_paragraph(&word, 100.0);
        assert_eq!(lines, vec![word]);
    }

    #[test]
    fn test_interparagraph_spacing() {
        let engine = LayoutEngine::new(test_options());
        let pages = engine.layout("one\ntwo").unwrap();
        assert_eq!(pages.len(), 1);
        let lines = &pages[0].lines;
        assert_eq!(lines[0].y, 52.0);
        // 52 + 12 (line) + 6 (half line between paragraphs).
        assert_eq!(lines[1].y, 70.0);
    }

    #[test]
    fn test_blank_paragraphs_add_no_spacing() {
        let engine = LayoutEngine::new(test_options());
        let with_blanks = engine.layout("one\n\n\ntwo").unwrap();
        let without = engine.layout("one\ntwo").unwrap();
        assert_eq!(with_blanks, without);
    }
}
