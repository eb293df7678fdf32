//! Benchmarks for selectivity application and rendering.

use criterion::{Criterion, criterion_group, criterion_main};
use optstats_core::statistics::{ColStatsMap, ColumnStatistic, ColumnStatisticsMap, Statistics};
use std::hint::black_box;

fn build_statistics(columns: u32) -> Statistics {
    let col_stats: ColStatsMap = (1..=columns)
        .map(|i| {
            let cols = [i, i + columns].into_iter().collect();
            ColumnStatistic::new(cols, f64::from(i) * 10.0)
        })
        .collect();
    Statistics::from_parts(1_000_000.0, 1.0, col_stats)
}

fn bench_apply_selectivity(c: &mut Criterion) {
    let base = build_statistics(32);
    c.bench_function("apply_selectivity_32_columns", |b| {
        b.iter(|| {
            let mut stats = base.copy();
            stats.apply_selectivity(black_box(0.01));
            for i in 0..stats.col_stats.count() {
                stats.col_stats.get_mut(i).apply_selectivity(0.01, 1_000_000.0);
            }
            black_box(stats)
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let stats = build_statistics(32);
    c.bench_function("render_32_columns", |b| {
        b.iter(|| black_box(stats.render()));
    });
}

criterion_group!(benches, bench_apply_selectivity, bench_render);
criterion_main!(benches);
