#[macro_use]
extern crate criterion;

use criterion::Criterion;
use ribbon::math::point;
use ribbon::path::builder::LineBuilder;
use ribbon::path::recorder::Recorder;
use ribbon::path::LineMarker;
use ribbon::stroke::{stroke_polyline, LineStroker, StrokeOptions};
use ribbon_tests::*;

const N: usize = 10;

fn stroke_zigzag(bench: &mut Criterion) {
    let points = zigzag(10_000, 1.0, 5.0);
    let options = StrokeOptions::line_width(2.0);

    bench.bench_function("stroke zigzag 10k", |b| {
        b.iter(|| {
            let mut counter = Counter::default();
            for _ in 0..N {
                stroke_polyline(&points, false, &options, &mut counter).unwrap();
            }
            criterion::black_box(counter);
        })
    });
}

fn stroke_star_recorded(bench: &mut Criterion) {
    let points = star(point(0.0, 0.0), 500.0, 200.0, 64);
    let options = StrokeOptions::DEFAULT;

    bench.bench_function("stroke star into recorder", |b| {
        b.iter(|| {
            let mut output = Recorder::with_capacity(1024);
            stroke_polyline(&points, true, &options, &mut output).unwrap();
            criterion::black_box(output.events().len());
        })
    });
}

fn reuse_stroker(bench: &mut Criterion) {
    // The buffers keep their capacity between outlines.
    let points = zigzag(500, 2.0, 2.0);

    bench.bench_function("reuse stroker", |b| {
        let mut stroker = LineStroker::new(&StrokeOptions::DEFAULT, Counter::default());
        b.iter(|| {
            stroker.move_to(points[0]);
            for &p in &points[1..] {
                stroker.next_command(LineMarker::Join);
                stroker.line_to(p);
            }
            stroker.end();
        });
        criterion::black_box(stroker.output().end);
    });
}

criterion_group!(benches, stroke_zigzag, stroke_star_recorded, reuse_stroker);
criterion_main!(benches);
