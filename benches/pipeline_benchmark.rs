//! Benchmarks for rebind text-processing performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks run each pipeline stage over synthetic manuscripts.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rebind::{
    chunk_text, layout_pages, normalize_capitalization, parse_document, parse_inline,
    LayoutOptions,
};

/// Creates a synthetic manuscript with the given number of paragraphs.
fn create_manuscript(paragraph_count: usize) -> String {
    let mut text = String::new();

    for i in 0..paragraph_count {
        if i % 10 == 0 {
            text.push_str(&format!("## Section {}\n\n", i / 10 + 1));
        }
        if i % 7 == 0 {
            text.push_str("- a recurring list item\n- another list item\n\n");
        }
        text.push_str(&format!(
            "Paragraph {} carries some **bold** text, an *aside*, AND ONE SHOUTED CLAUSE. \
             The quick brown fox jumps over the lazy dog while the typesetter watches.\n\n",
            i + 1
        ));
    }

    text
}

/// Benchmark paragraph chunking at various manuscript sizes.
fn bench_chunking(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunking");

    for paragraph_count in [10, 100, 1000].iter() {
        let text = create_manuscript(*paragraph_count);

        group.bench_function(format!("{}_paragraphs", paragraph_count), |b| {
            b.iter(|| chunk_text(black_box(&text), 4096).unwrap());
        });
    }

    group.finish();
}

/// Benchmark capitalization repair over shouted prose.
fn bench_normalization(c: &mut Criterion) {
    let text = create_manuscript(100);

    c.bench_function("normalize_capitalization", |b| {
        b.iter(|| normalize_capitalization(black_box(&text)));
    });
}

/// Benchmark inline tokenization on a marker-heavy line.
fn bench_inline_parsing(c: &mut Criterion) {
    let line = "Plain **bold** and *italic* with __more bold__ and _more italic_ mixed in.";

    c.bench_function("parse_inline", |b| {
        b.iter(|| parse_inline(black_box(line)));
    });
}

/// Benchmark document structure recovery at various sizes.
fn bench_document_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_parsing");

    for paragraph_count in [10, 100, 1000].iter() {
        let text = create_manuscript(*paragraph_count);

        group.bench_function(format!("{}_paragraphs", paragraph_count), |b| {
            b.iter(|| parse_document(black_box(&text)));
        });
    }

    group.finish();
}

/// Benchmark pagination onto A4 pages.
fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    for paragraph_count in [10, 100].iter() {
        let text = create_manuscript(*paragraph_count);
        let options = LayoutOptions::a4();

        group.bench_function(format!("{}_paragraphs", paragraph_count), |b| {
            b.iter(|| layout_pages(black_box(&text), &options).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_chunking,
    bench_normalization,
    bench_inline_parsing,
    bench_document_parsing,
    bench_layout,
);
criterion_main!(benches);
