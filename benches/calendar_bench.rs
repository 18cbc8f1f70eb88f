//! Criterion benchmarks for calendar construction

use chrono::{Days, NaiveDate};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use workcal::calendar::{build_grid, month_labels, ActivityIndex, CalendarMemo, CalendarView};
use workcal::types::DailyActivity;

const TYPES: [&str; 6] = ["run", "cycle", "swim", "strength", "yoga", "hike"];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

/// One record on every `stride`-th day of the window
fn make_records(stride: usize) -> Vec<DailyActivity> {
    (0..365)
        .step_by(stride)
        .filter_map(|offset| {
            let date = today().checked_sub_days(Days::new(offset as u64))?;
            let kind = TYPES[offset % TYPES.len()];
            Some(DailyActivity::new(
                date,
                (offset % 4) as u32 + 1,
                vec![kind.to_string()],
            ))
        })
        .collect()
}

fn bench_build_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar");

    for stride in [1, 3, 30] {
        let records = make_records(stride);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("build_grid", format!("{} records", records.len())),
            &records,
            |b, records| {
                let index = ActivityIndex::from_records(records);
                b.iter(|| build_grid(black_box(&index), black_box(today())));
            },
        );
    }

    group.finish();
}

fn bench_full_view(c: &mut Criterion) {
    let records = make_records(1);
    let mut group = c.benchmark_group("calendar");

    group.bench_function("view_build (cold)", |b| {
        b.iter(|| CalendarView::build(black_box(&records), black_box(today())));
    });

    group.bench_function("month_labels", |b| {
        let grid = build_grid(&ActivityIndex::from_records(&records), today());
        b.iter(|| month_labels(black_box(&grid)));
    });

    group.bench_function("memo_view (warm)", |b| {
        let mut memo = CalendarMemo::new();
        memo.view(&records, today());
        b.iter(|| {
            let view = memo.view(black_box(&records), black_box(today()));
            black_box(view.grid.len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_build_grid, bench_full_view);
criterion_main!(benches);
