//! Integration tests for the pagination engine.

use rebind::{
    layout_pages, Alignment, LayoutEngine, LayoutOptions, TextMeasurer, A4_HEIGHT, A4_WIDTH,
    LETTER_HEIGHT, LETTER_WIDTH,
};

/// Geometry chosen so every coordinate is exact in f32: line height 12,
/// text area from y=52 down to y=88, usable width 100 (6pt per character).
fn test_options() -> LayoutOptions {
    LayoutOptions::new()
        .with_page_size(180.0, 128.0)
        .with_margin(40.0)
        .with_font_size(12.0)
        .with_line_height_factor(1.0)
}

#[test]
fn test_single_short_paragraph() {
    let pages = layout_pages("short words", &test_options()).unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].number, 1);
    assert_eq!(pages[0].lines.len(), 1);
    assert_eq!(pages[0].lines[0].text, "short words");
    assert_eq!(pages[0].lines[0].y, 52.0);
    assert_eq!(pages[0].lines[0].alignment, Alignment::Justify);
}

#[test]
fn test_line_breaks_before_overflowing_word() {
    // "aaaa bbbb cccc" fills 84 of 100 points; adding " dddd" would need 114.
    let pages = layout_pages("aaaa bbbb cccc dddd", &test_options()).unwrap();
    let lines = &pages[0].lines;

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "aaaa bbbb cccc");
    assert_eq!(lines[1].text, "dddd");
}

#[test]
fn test_page_break_at_exact_capacity() {
    // Eight 7-character words wrap two per line; a page holds three lines.
    let words = vec!["woooord"; 8].join(" ");
    let pages = layout_pages(&words, &test_options()).unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].lines.len(), 3);
    assert_eq!(pages[1].lines.len(), 1);

    let ys: Vec<f32> = pages[0].lines.iter().map(|l| l.y).collect();
    assert_eq!(ys, vec![52.0, 64.0, 76.0]);
    assert_eq!(pages[1].lines[0].y, 52.0);
}

#[test]
fn test_half_line_spacing_between_paragraphs() {
    let pages = layout_pages("one\n\ntwo", &test_options()).unwrap();
    let lines = &pages[0].lines;

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].y, 52.0);
    // 52 + line height 12 + half line 6
    assert_eq!(lines[1].y, 70.0);
}

#[test]
fn test_blank_paragraphs_take_no_space() {
    let spaced = layout_pages("one\n\n\n\n\n\ntwo", &test_options()).unwrap();
    let plain = layout_pages("one\n\ntwo", &test_options()).unwrap();

    assert_eq!(spaced, plain);
}

#[test]
fn test_word_wider_than_line_gets_its_own_line() {
    // 20 characters need 120 points against a usable width of 100.
    let pages = layout_pages("aaaaaaaaaaaaaaaaaaaa", &test_options()).unwrap();

    assert_eq!(pages[0].lines.len(), 1);
    assert_eq!(pages[0].lines[0].text, "aaaaaaaaaaaaaaaaaaaa");
}

#[test]
fn test_no_line_crosses_the_bottom_margin() {
    let options = test_options();
    let bottom = 128.0 - 40.0;
    let line_height = options.line_height();

    let words = vec!["word"; 120].join(" ");
    let pages = layout_pages(&words, &options).unwrap();

    assert!(pages.len() > 1);
    for page in &pages {
        for line in &page.lines {
            assert!(line.y + line_height <= bottom);
        }
    }
}

#[test]
fn test_page_numbers_are_sequential() {
    let words = vec!["woooord"; 20].join(" ");
    let pages = layout_pages(&words, &test_options()).unwrap();

    assert!(pages.len() > 2);
    for (i, page) in pages.iter().enumerate() {
        assert_eq!(page.number, i as u32 + 1);
        assert_eq!(page.width, 180.0);
        assert_eq!(page.height, 128.0);
    }
}

#[test]
fn test_empty_input_produces_no_pages() {
    assert!(layout_pages("", &test_options()).unwrap().is_empty());
    assert!(layout_pages("   \n\n  ", &test_options()).unwrap().is_empty());
}

#[test]
fn test_paper_presets() {
    let a4 = LayoutOptions::a4();
    assert_eq!((a4.page_width, a4.page_height), (A4_WIDTH, A4_HEIGHT));

    let letter = LayoutOptions::letter();
    assert_eq!(
        (letter.page_width, letter.page_height),
        (LETTER_WIDTH, LETTER_HEIGHT)
    );

    // A4 is the default paper.
    assert_eq!(LayoutOptions::default().page_width, A4_WIDTH);
}

#[test]
fn test_invalid_geometry_is_rejected() {
    let result = layout_pages("text", &test_options().with_margin(90.0));
    assert!(result.is_err());

    let result = layout_pages("text", &test_options().with_font_size(0.0));
    assert!(result.is_err());
}

/// Measurer that charges a full line per word, regardless of length.
struct OneWordPerLine;

impl TextMeasurer for OneWordPerLine {
    fn text_width(&self, text: &str, _font_size: f32) -> f32 {
        if text.contains(' ') {
            f32::MAX
        } else {
            1.0
        }
    }
}

#[test]
fn test_custom_measurer_drives_wrapping() {
    let engine = LayoutEngine::with_measurer(test_options(), OneWordPerLine);
    let pages = engine.layout("three words here").unwrap();

    let texts: Vec<&str> = pages[0].lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["three", "words", "here"]);
}

#[test]
fn test_page_json_shape() {
    let pages = layout_pages("short words", &test_options()).unwrap();
    let json = rebind::to_json(&pages, rebind::JsonFormat::Compact).unwrap();

    assert!(json.contains(r#""number":1"#));
    assert!(json.contains(r#""alignment":"justify""#));
    assert!(json.contains(r#""text":"short words""#));
}
