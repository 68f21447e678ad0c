//! Benchmarks for pigment conversions.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use pigment::{Color, ColorSpace};
use pigment_convert::{cmyk, convert, hsl, hsv, rgb};

fn rgb_colors(n: usize) -> Vec<[f64; 4]> {
    (0..n)
        .map(|i| {
            let v = i as f64;
            [(v * 7.0) % 256.0, (v * 13.0) % 256.0, (v * 29.0) % 256.0, 1.0]
        })
        .collect()
}

fn hue_colors(n: usize) -> Vec<[f64; 4]> {
    (0..n)
        .map(|i| {
            let v = i as f64;
            [(v * 11.0) % 360.0, (v * 3.0) % 101.0, (v * 5.0) % 101.0, 1.0]
        })
        .collect()
}

fn cmyk_colors(n: usize) -> Vec<[f64; 5]> {
    (0..n)
        .map(|i| {
            let v = i as f64;
            [
                (v * 3.0) % 100.0,
                (v * 7.0) % 100.0,
                (v * 11.0) % 100.0,
                (v * 13.0) % 100.0,
                1.0,
            ]
        })
        .collect()
}

/// Benchmark each primitive conversion routine.
fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    let rgbs = rgb_colors(10000);
    let hues = hue_colors(10000);
    let cmyks = cmyk_colors(10000);

    group.throughput(Throughput::Elements(10000));

    group.bench_function("rgb_to_hsv", |b| {
        b.iter(|| {
            rgbs.iter().map(|&px| rgb::to_hsv(black_box(px))).collect::<Vec<_>>()
        })
    });

    group.bench_function("rgb_to_hsl", |b| {
        b.iter(|| {
            rgbs.iter().map(|&px| rgb::to_hsl(black_box(px))).collect::<Vec<_>>()
        })
    });

    group.bench_function("rgb_to_cmyk", |b| {
        b.iter(|| {
            rgbs.iter().map(|&px| rgb::to_cmyk(black_box(px))).collect::<Vec<_>>()
        })
    });

    group.bench_function("hsv_to_rgb", |b| {
        b.iter(|| {
            hues.iter().map(|&px| hsv::to_rgb(black_box(px))).collect::<Vec<_>>()
        })
    });

    group.bench_function("hsl_to_rgb", |b| {
        b.iter(|| {
            hues.iter().map(|&px| hsl::to_rgb(black_box(px))).collect::<Vec<_>>()
        })
    });

    group.bench_function("cmyk_to_rgb", |b| {
        b.iter(|| {
            cmyks.iter().map(|&px| cmyk::to_rgb(black_box(px))).collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark the routed entry point against the typed call it wraps.
fn bench_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing");

    for size in [1000, 10000].iter() {
        let colors = rgb_colors(*size);

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("typed_rgb_to_hsv", size), &colors, |b, colors| {
            b.iter(|| {
                colors.iter().map(|&px| rgb::to_hsv(black_box(px))).collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("routed_rgb_to_hsv", size), &colors, |b, colors| {
            b.iter(|| {
                colors
                    .iter()
                    .map(|px| convert(ColorSpace::Rgb, ColorSpace::Hsv, black_box(&px[..])).unwrap())
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark the value object's cache against a fresh conversion.
fn bench_color_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("color_cache");

    group.bench_function("cold_hsv", |b| {
        b.iter(|| {
            let color = Color::new(black_box(&[200.0, 100.0, 50.0]), ColorSpace::Rgb).unwrap();
            color.hsv().to_vec()
        })
    });

    let warm = Color::new(&[200.0, 100.0, 50.0], ColorSpace::Rgb).unwrap();
    warm.hsv();
    group.bench_function("warm_hsv", |b| {
        b.iter(|| black_box(warm.hsv()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_primitives,
    bench_routing,
    bench_color_cache,
);

criterion_main!(benches);
