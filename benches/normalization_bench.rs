//! Normalizer throughput benchmarks.
//!
//! Every load runs each sheet row through the normalizer once, so this is
//! the per-row cost of a load once the bytes are decoded.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `row` | One complete, minimal, or rejected row |
//! | `dates` | `postedDate` parsing across the accepted layouts |
//! | `catalog` | Building a catalog from batches of rows |
//! | `filter` | Case-insensitive catalog filtering |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench normalization_bench
//! open target/criterion/report/index.html
//! ```

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jobboard_core::normalizer::{parse_posted_date, try_normalize};
use jobboard_core::{CellValue, JobCatalog, RawRow, COLUMNS};
use std::hint::black_box;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()
}

fn complete_row(n: usize) -> RawRow {
    let values: [CellValue; 13] = [
        n.to_string().into(),
        "Senior Rust Engineer".into(),
        "Ferrous Systems".into(),
        "Berlin, Germany".into(),
        "FULL_TIME".into(),
        "Build the storage engine.".into(),
        "5+ years Rust\nTokio\n\nDistributed systems".into(),
        90000i64.into(),
        "120000".into(),
        "EUR".into(),
        "2024-06-13".into(),
        "https://ferrous.example/apply".into(),
        "https://ferrous.example/logo.png".into(),
    ];
    COLUMNS.into_iter().zip(values).collect()
}

// ---------------------------------------------------------------------------
// Single rows
// ---------------------------------------------------------------------------

fn row_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("row");
    group.throughput(Throughput::Elements(1));

    let complete = complete_row(1);
    let minimal: RawRow = [("id", "7"), ("title", "Barista"), ("company", "Bean There"), ("location", "Lisbon")]
        .into_iter()
        .collect();
    let mut rejected = complete.clone();
    rejected.remove("id");

    for (name, row) in [("complete", &complete), ("minimal", &minimal), ("rejected", &rejected)] {
        group.bench_with_input(BenchmarkId::new(name, ""), row, |b, row| {
            b.iter(|| black_box(try_normalize(black_box(row), today()).ok()))
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

fn dates_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("dates");
    let cells = [
        ("iso", CellValue::from("2024-03-15")),
        ("rfc3339", CellValue::from("2024-03-15T23:30:00-05:00")),
        ("us", CellValue::from("03/15/2024")),
        ("long_month", CellValue::from("March 15, 2024")),
        ("serial", CellValue::Number(45458.0)),
        ("garbage", CellValue::from("not a date")),
    ];
    for (name, cell) in &cells {
        group.bench_with_input(BenchmarkId::new(*name, ""), cell, |b, cell| {
            b.iter(|| black_box(parse_posted_date(black_box(cell))))
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

fn catalog_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    for size in [10usize, 100, 1_000, 10_000] {
        let rows: Vec<RawRow> = (0..size).map(complete_row).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("from_rows", size), &rows, |b, rows| {
            b.iter(|| JobCatalog::from_rows_at(rows.clone(), today()).map(|c| c.len()))
        });
    }
    group.finish();
}

fn filter_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let rows: Vec<RawRow> = (0..5_000).map(complete_row).collect();
    let catalog = JobCatalog::from_rows_at(rows, today()).expect("bench catalog");
    group.throughput(Throughput::Elements(catalog.len() as u64));

    for query in ["", "rust", "full time", "no match at all"] {
        group.bench_with_input(BenchmarkId::new("query", query), &query, |b, query| {
            b.iter(|| black_box(catalog.filter(query)).len())
        });
    }
    group.finish();
}

criterion_group!(benches, row_bench, dates_bench, catalog_bench, filter_bench);
criterion_main!(benches);
