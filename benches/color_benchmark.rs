#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for color space conversions and contrast math.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swatchsmith::color::{hex_to_hsl, hex_to_oklab, hsl_to_hex, oklab_to_hex, HexColor};
use swatchsmith::contrast::{better_contrast_color, contrast_ratio, perceptual_distance};
use swatchsmith::variation::{generate_dark_mode_color, generate_variations};

fn sample_colors(n: usize) -> Vec<HexColor> {
    (0..n)
        .map(|i| {
            let v = (i as u32).wrapping_mul(2_654_435_761);
            HexColor::from_rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
        })
        .collect()
}

fn conversion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    let colors = sample_colors(256);
    let strings: Vec<String> = colors.iter().map(ToString::to_string).collect();

    group.bench_function("hsl_round_trip", |b| {
        b.iter(|| {
            for s in &strings {
                let hsl = hex_to_hsl(black_box(s)).expect("valid hex");
                black_box(hsl_to_hex(hsl.h, hsl.s, hsl.l));
            }
        });
    });

    group.bench_function("oklab_round_trip", |b| {
        b.iter(|| {
            for s in &strings {
                let lab = hex_to_oklab(black_box(s)).expect("valid hex");
                black_box(oklab_to_hex(lab.l, lab.a, lab.b));
            }
        });
    });

    group.finish();
}

fn contrast_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("contrast");

    for n in [16, 256, 4096] {
        let colors = sample_colors(n);
        group.bench_with_input(BenchmarkId::new("ratio_vs_white", n), &colors, |b, colors| {
            b.iter(|| {
                colors
                    .iter()
                    .map(|&c| contrast_ratio(black_box(c), HexColor::WHITE))
                    .sum::<f64>()
            });
        });
        group.bench_with_input(BenchmarkId::new("better_text", n), &colors, |b, colors| {
            b.iter(|| {
                for &c in colors {
                    black_box(better_contrast_color(black_box(c)));
                }
            });
        });
    }

    let colors = sample_colors(64);
    group.bench_function("perceptual_distance_pairs", |b| {
        b.iter(|| {
            colors
                .iter()
                .zip(colors.iter().skip(1))
                .map(|(&x, &y)| perceptual_distance(black_box(x), black_box(y)))
                .sum::<f64>()
        });
    });

    group.finish();
}

fn variation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("variation");
    let colors = sample_colors(256);

    group.bench_function("ramp", |b| {
        b.iter(|| {
            for &c in &colors {
                black_box(generate_variations(black_box(c)));
            }
        });
    });

    group.bench_function("dark_mode", |b| {
        b.iter(|| {
            for &c in &colors {
                black_box(generate_dark_mode_color(black_box(c)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, conversion_benchmark, contrast_benchmark, variation_benchmark);
criterion_main!(benches);
