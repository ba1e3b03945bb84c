//! Benchmarks for text chunking strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use strata::{Chunker, DelimiterChunker, HierarchicalChunker, MarkdownHeaderSplitter};

fn sample_text(size: usize) -> String {
    // Generate realistic text with sentence and paragraph structure
    let sentences = [
        "The quick brown fox jumps over the lazy dog. ",
        "Pack my box with five dozen liquor jugs. ",
        "How vexingly quick daft zebras jump! ",
        "The five boxing wizards jump quickly. ",
        "Sphinx of black quartz, judge my vow. ",
    ];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(sentences[i % sentences.len()]);
        if i % 4 == 3 {
            text.push_str("\n\n");
        }
        i += 1;
    }
    text.truncate(size);
    text
}

fn sample_markdown(size: usize) -> String {
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(&format!("## Section {i}\n\n"));
        text.push_str("Some content under the heading, long enough to matter. ");
        text.push_str("More content that keeps the section body realistic.\n\n");
        i += 1;
    }
    text.truncate(size);
    text
}

fn bench_hierarchical_chunker(c: &mut Criterion) {
    let mut group = c.benchmark_group("hierarchical_chunker");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);
        let chunker = HierarchicalChunker::prose(500, 50).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("hierarchical", size), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text)))
        });
    }

    group.finish();
}

fn bench_hierarchical_token_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("hierarchical_token_measure");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);
        // Whitespace word count stands in for a real tokenizer
        let chunker = HierarchicalChunker::new(128, 16, &["\n\n", " ", ""])
            .unwrap()
            .with_measure_fn(|s| s.split_whitespace().count());

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("token_budget", size), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text)))
        });
    }

    group.finish();
}

fn bench_delimiter_chunker(c: &mut Criterion) {
    let mut group = c.benchmark_group("delimiter_chunker");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);
        let chunker = DelimiterChunker::paragraphs();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("delimiter", size), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text)))
        });
    }

    group.finish();
}

fn bench_markdown_splitter(c: &mut Criterion) {
    let mut group = c.benchmark_group("markdown_splitter");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_markdown(size);
        let splitter = MarkdownHeaderSplitter::new();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("markdown", size), &text, |b, text| {
            b.iter(|| splitter.split(black_box(text)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_hierarchical_chunker,
    bench_hierarchical_token_measure,
    bench_delimiter_chunker,
    bench_markdown_splitter
);
criterion_main!(benches);
