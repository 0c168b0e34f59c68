#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for gradient formatting and pointer mapping.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gradient_picker::prelude::*;

fn stops(count: usize) -> Vec<ColorStop> {
    (0..count)
        .map(|i| {
            let left = ((i * 37) % 101) as f32;
            ColorStop::new(format!("rgba({}, {}, 200, 1)", i % 256, (i * 7) % 256), left)
        })
        .collect()
}

fn gradient_format_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient_format");

    for count in [2, 8, 32, 128] {
        let gradient = Gradient::linear(90, stops(count));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(&gradient).to_css_string());
        });
    }

    group.finish();
}

fn gradient_parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient_parse");

    for count in [2, 8, 32, 128] {
        let css = Gradient::linear(45, stops(count)).to_css_string();

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| Gradient::parse(black_box(&css)).expect("serialized gradient should parse"));
        });
    }

    group.finish();
}

fn square_drag_benchmark(c: &mut Criterion) {
    let config = PickerConfig::default();
    let bounds = Rect::new(0.0, 0.0, config.square_width, config.square_height);

    c.bench_function("square_drag_1000_moves", |b| {
        b.iter(|| {
            let mut gesture = SquareGesture::new(&config, Hsva::new(200.0, 50.0, 50.0, 1.0));
            gesture.handle_down();
            for i in 0..1000 {
                let t = f64::from(i) * 4.0;
                let event = PointerEvent::mouse((i % 300) as f32, (i % 160) as f32).at(t);
                black_box(gesture.pointer_move(&event, bounds));
            }
            gesture.pointer_up()
        });
    });
}

criterion_group!(
    benches,
    gradient_format_benchmark,
    gradient_parse_benchmark,
    square_drag_benchmark
);
criterion_main!(benches);
