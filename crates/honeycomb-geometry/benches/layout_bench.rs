//! Benchmarks for Honeycomb Geometry
//!
//! Measures performance of:
//! - Packing search across item counts and panel sizes
//! - Single candidate probes
//! - Coordinate conversions (cube → offset → pixel and back)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use honeycomb_geometry::{
    axial_to_pixel, cube_to_offset, hexes_fit, offset_to_cube, optimize, pixel_to_axial, Cube,
};

/// Benchmark the packing search for growing item counts in a fixed panel
fn bench_optimize_items(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize_items");

    for &n in &[1usize, 10, 100, 1000, 5000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| optimize(black_box(800.0), black_box(600.0), black_box(n)))
        });
    }
    group.finish();
}

/// Benchmark the packing search for growing panels with a fixed item count
fn bench_optimize_panel(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize_panel");

    for &(w, h) in &[(200.0f64, 150.0f64), (800.0, 600.0), (1920.0, 1080.0), (3840.0, 2160.0)] {
        group.bench_with_input(
            BenchmarkId::new("size", format!("{}x{}", w, h)),
            &(w, h),
            |b, &(w, h)| b.iter(|| optimize(black_box(w), black_box(h), black_box(250))),
        );
    }
    group.finish();
}

/// Benchmark a single feasibility probe
fn bench_hexes_fit(c: &mut Criterion) {
    c.bench_function("hexes_fit", |b| {
        b.iter(|| hexes_fit(black_box(12.34), black_box(800.0), black_box(600.0), black_box(500)))
    });
}

/// Benchmark placing every cell of a grid
fn bench_cell_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell_placement");

    for &n in &[100usize, 1000, 10_000] {
        let cols = (n as f64).sqrt().ceil() as usize;
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                (0..n)
                    .map(|i| {
                        let cube = Cube::from_xz((i % cols) as i64, (i / cols) as i64);
                        axial_to_pixel(cube_to_offset(cube), black_box(10.0))
                    })
                    .fold(0.0, |acc, p| acc + p.x + p.y)
            })
        });
    }
    group.finish();
}

/// Benchmark round-trip conversion
fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    let cubes = [Cube::ORIGIN, Cube::from_xz(5, -3), Cube::from_xz(-120, 77)];

    for cube in cubes {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("cube", cube.to_string()), &cube, |b, &c| {
            b.iter(|| {
                let hex = cube_to_offset(black_box(c));
                let point = axial_to_pixel(hex, 10.0);
                (offset_to_cube(hex), pixel_to_axial(point, 10.0).round())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_optimize_items,
    bench_optimize_panel,
    bench_hexes_fit,
    bench_cell_placement,
    bench_roundtrip,
);

criterion_main!(benches);
