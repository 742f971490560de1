//! Criterion benchmarks for the heat map color table.
//!
//! Benchmarks:
//!   - building the default comfort-emphasized table
//!   - building a wide uniform table (-100..100)
//!   - per-cell lookup across a 256x256 temperature grid
//!
//! Run with: cargo bench -p heatmap --bench color_lookup

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use heatmap::{build_table, build_table_with_profile, HeatMapSettings, TemperatureRange};

const GRID_SIDE: usize = 256;

// ---------------------------------------------------------------------------
// Benchmark: table construction
// ---------------------------------------------------------------------------

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("heatmap_build");
    let settings = HeatMapSettings::default();
    let points = settings.control_points();

    group.bench_function("default_comfort_profile", |b| {
        let range = settings.temperature_range();
        let profile = settings.step_profile();
        b.iter(|| {
            black_box(build_table_with_profile(
                black_box(&points),
                black_box(range),
                black_box(&profile),
            ))
        });
    });

    group.bench_function("uniform_200_steps", |b| {
        let range = TemperatureRange::new(-100, 100);
        b.iter(|| black_box(build_table(black_box(&points), black_box(range))));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: lookups
// ---------------------------------------------------------------------------

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("heatmap_lookup");
    let settings = HeatMapSettings::default();
    let Ok(table) = build_table(&settings.control_points(), TemperatureRange::new(-50, 60)) else {
        panic!("default palette must build");
    };

    let temperatures: Vec<f32> = (0..GRID_SIDE * GRID_SIDE)
        .map(|i| ((i % 997) as f32 * 0.13) - 60.0)
        .collect();

    group.bench_function("grid_256x256", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &t in &temperatures {
                acc += table.color_for_temperature(black_box(t)).red;
            }
            black_box(acc)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_lookup);
criterion_main!(benches);
