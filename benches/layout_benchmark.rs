//! Benchmarks for design selection and layout.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use azkar_story::{
    compose_story, create_design, generate_designs, load_str, render, ContentItem,
    DisplayOptions, JsonFormat, StoryRequest,
};

/// Creates a synthetic library JSON with one section of `item_count` items.
fn create_test_library(item_count: usize) -> String {
    let items: Vec<String> = (0..item_count)
        .map(|i| {
            format!(
                r#"{{"text": "سبحان الله وبحمده {}", "count": {}, "benefit": "فائدة {}"}}"#,
                i,
                i % 7 + 1,
                i
            )
        })
        .collect();
    format!(
        r#"{{"sections": [{{"id": "bench", "title": "Benchmark", "content": [{}]}}]}}"#,
        items.join(",")
    )
}

/// Benchmark single design selection.
fn bench_design(c: &mut Criterion) {
    c.bench_function("create_design", |b| {
        let mut seed = 0u32;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            create_design(black_box(seed))
        });
    });

    let seeds: Vec<u32> = (0..10_000).collect();
    c.bench_function("generate_designs_10k", |b| {
        b.iter(|| generate_designs(black_box(&seeds)));
    });
}

/// Benchmark story composition at various group sizes.
fn bench_compose(c: &mut Criterion) {
    let library = load_str(&create_test_library(200)).unwrap();
    let options = DisplayOptions::new().with_columns(2).with_max_items(12);
    let mut group = c.benchmark_group("compose_story");

    for size in [None, Some(4), Some(12)] {
        let request = StoryRequest::new(0x1234).with_offset(3);
        let request = match size {
            Some(n) => request.with_group(n),
            None => request,
        };
        let name = size.map_or_else(|| "single".to_string(), |n| format!("group_{}", n));

        group.bench_function(name, |b| {
            b.iter(|| compose_story(black_box(&library), black_box(&request), &options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark library loading and tree output.
fn bench_io(c: &mut Criterion) {
    let json = create_test_library(500);
    c.bench_function("load_500_items", |b| {
        b.iter(|| load_str(black_box(&json)).unwrap());
    });

    let item = ContentItem::new("لا إله إلا الله ".repeat(40));
    let design = create_design(42);
    let tree = azkar_story::compute_layout(
        &design,
        "Benchmark",
        &[item],
        &DisplayOptions::default(),
        1080,
    )
    .unwrap();
    c.bench_function("tree_to_json", |b| {
        b.iter(|| render::to_json(black_box(&tree), JsonFormat::Compact).unwrap());
    });
}

criterion_group!(benches, bench_design, bench_compose, bench_io);
criterion_main!(benches);
