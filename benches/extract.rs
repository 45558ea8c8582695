// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use criterion_pls::{picker, specs::films};

fn load_sample() -> String {
    // A saved copy of the live listing is the realistic case; fall back to the test fixture.
    std::fs::read_to_string(".ignore/page_samples/listing.html")
        .unwrap_or_else(|_| include_str!("../tests/fixtures/listing.html").to_string())
}

fn bench_extract(c: &mut Criterion) {
    let doc = load_sample();

    c.bench_function("extract_listing", |b| {
        b.iter(|| {
            let table = films::extract(black_box(&doc));
            black_box(table.len())
        })
    });
}

fn bench_pick(c: &mut Criterion) {
    let mut rng = picker::make_rng(Some(1));

    // Full shuffle per draw; the listing has a few thousand rows
    c.bench_function("pick_index_3000", |b| {
        b.iter(|| black_box(picker::pick_index(black_box(3000), &mut rng)))
    });
}

criterion_group!(benches, bench_extract, bench_pick);
criterion_main!(benches);
