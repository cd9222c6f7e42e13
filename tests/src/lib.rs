//! Shapes shared by the tests and the benchmarks.

use ribbon::math::{point, vector, Point};
use ribbon::path::builder::LineBuilder;
use ribbon::path::LineMarker;

/// A star polygon with `branches` outer points, not closed.
pub fn star(center: Point, outer_radius: f64, inner_radius: f64, branches: u32) -> Vec<Point> {
    let mut points = Vec::with_capacity(branches as usize * 2);
    let step = std::f64::consts::PI / branches as f64;
    for i in 0..(branches * 2) {
        let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
        let angle = step * i as f64;
        points.push(center + vector(angle.cos(), angle.sin()) * radius);
    }

    points
}

/// A polyline going right, alternating between `y = 0` and `y = amplitude`.
pub fn zigzag(count: usize, step: f64, amplitude: f64) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let y = if i % 2 == 0 { 0.0 } else { amplitude };
            point(i as f64 * step, y)
        })
        .collect()
}

/// An output that only counts what it receives.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Counter {
    pub move_to: usize,
    pub line_to: usize,
    pub markers: usize,
    pub end: usize,
}

impl LineBuilder for Counter {
    fn move_to(&mut self, _: Point) {
        self.move_to += 1;
    }

    fn line_to(&mut self, _: Point) {
        self.line_to += 1;
    }

    fn next_command(&mut self, _: LineMarker) {
        self.markers += 1;
    }

    fn end(&mut self) {
        self.end += 1;
    }
}

#[cfg(test)]
mod outline_tests {
    use super::*;
    use ribbon::math::Transform;
    use ribbon::path::builder::Demux;
    use ribbon::path::recorder::Recorder;
    use ribbon::path::{polyline_events, LineEvent};
    use ribbon::stroke::{stroke_path, stroke_polyline, LineStroker, StrokeOptions};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn segment_outline_area() {
        let segments = [
            (point(0.0, 0.0), point(10.0, 0.0)),
            (point(1.0, 2.0), point(-3.0, 5.0)),
            (point(-4.0, -4.0), point(-4.0, -12.0)),
            (point(0.5, 0.5), point(7.25, -3.0)),
        ];

        for &half_width in &[0.25, 1.0, 3.0] {
            for &(from, to) in &segments {
                let mut output = Recorder::new();
                stroke_polyline(
                    &[from, to],
                    false,
                    &StrokeOptions::half_width(half_width),
                    &mut output,
                )
                .unwrap();

                let outlines = output.outlines();
                assert_eq!(outlines.len(), 1);
                let outline = &outlines[0];
                assert!(outline.is_closed());

                let expected = 2.0 * half_width * (to - from).length();
                let area = outline.signed_area();
                assert!(
                    (area - expected).abs() < 1e-9,
                    "area {} expected {}",
                    area,
                    expected
                );
            }
        }
    }

    #[test]
    fn star_outline() {
        init_logging();

        let points = star(point(0.0, 0.0), 100.0, 40.0, 7);
        let mut counter = Counter::default();
        stroke_polyline(&points, true, &StrokeOptions::line_width(4.0), &mut counter).unwrap();

        // 14 segments, the closing pair, then the whole ring:
        // one move_to, 28 forward line_to, 29 rewind line_to and the final one.
        let n = 14 * 2 + 1;
        assert_eq!(counter.move_to, 1);
        assert_eq!(counter.line_to, 2 * n);
        assert_eq!(counter.markers, counter.line_to);
        assert_eq!(counter.end, 1);
    }

    #[test]
    fn long_zigzag() {
        let points = zigzag(1000, 1.0, 1.0);
        let mut output = Recorder::new();
        stroke_polyline(&points, false, &StrokeOptions::DEFAULT, &mut output).unwrap();

        let outlines = output.outlines();
        assert_eq!(outlines.len(), 1);
        // 999 segments of two points on each side, plus the final point.
        assert_eq!(outlines[0].len(), 999 * 4 + 1);
        assert!(outlines[0].is_closed());
    }

    #[test]
    fn replay_recorded_outline() {
        let mut first = Recorder::new();
        stroke_polyline(
            &star(point(5.0, 5.0), 10.0, 3.0, 5),
            true,
            &StrokeOptions::DEFAULT,
            &mut first,
        )
        .unwrap();

        let mut second = Recorder::new();
        second.extend(first.events().iter().cloned());

        assert_eq!(first, second);
    }

    #[test]
    fn demux_stroked_and_raw() {
        let points = zigzag(5, 2.0, 1.0);

        let mut raw = Recorder::new();
        let mut stroked = Recorder::new();
        {
            let mut stroker = LineStroker::new(&StrokeOptions::DEFAULT, &mut stroked);
            let mut demux = Demux::new();
            demux.add(&mut raw);
            demux.add(&mut stroker);

            demux.move_to(points[0]);
            for (i, &p) in points[1..].iter().enumerate() {
                if i > 0 {
                    demux.next_command(LineMarker::Join);
                }
                demux.line_to(p);
            }
            demux.end();
        }

        // The raw recorder sees the skeleton, the stroker emits the outline.
        assert_eq!(raw.outlines()[0].points(), &points[..]);
        assert_eq!(stroked.outlines()[0].len(), 4 * 4 + 1);
        assert_eq!(raw.end_count(), 1);
        assert_eq!(stroked.end_count(), 1);
    }

    #[test]
    fn transformed_skeleton() {
        // Translating the skeleton translates the outline.
        let points = zigzag(4, 3.0, 2.0);
        let transform = Transform::translation(-7.0, 11.0);

        let mut reference = Recorder::new();
        stroke_polyline(&points, false, &StrokeOptions::DEFAULT, &mut reference).unwrap();

        let mut moved = Recorder::new();
        {
            let mut stroker = LineStroker::new(&StrokeOptions::DEFAULT, &mut moved);
            let mut skeleton = (&mut stroker).transformed(transform);
            for evt in polyline_events(&points, false) {
                match evt {
                    ribbon::path::PathEvent::Begin { at } => skeleton.move_to(at),
                    ribbon::path::PathEvent::Line { to } => skeleton.line_to(to),
                    ribbon::path::PathEvent::End { .. } => skeleton.end(),
                }
            }
        }

        let expected: Vec<LineEvent> = reference
            .events()
            .iter()
            .map(|evt| evt.transformed(&transform))
            .collect();

        assert_eq!(moved.events().len(), expected.len());
        for (a, b) in moved.events().iter().zip(expected.iter()) {
            match (a.position(), b.position()) {
                (Some(pa), Some(pb)) => assert!((pa - pb).length() < 1e-9),
                (None, None) => assert_eq!(a, b),
                _ => panic!("mismatched events {:?} {:?}", a, b),
            }
        }
    }

    #[test]
    fn stroke_path_many_sub_paths() {
        let mut events = Vec::new();
        for i in 0..50 {
            let offset = vector(0.0, i as f64 * 10.0);
            events.extend(polyline_events(
                &[
                    point(0.0, 0.0) + offset,
                    point(5.0, 0.0) + offset,
                    point(5.0, 5.0) + offset,
                ],
                i % 2 == 0,
            ));
        }

        let mut counter = Counter::default();
        stroke_path(events, &StrokeOptions::DEFAULT, &mut counter).unwrap();

        assert_eq!(counter.end, 50);
        assert_eq!(counter.move_to, 50);
    }
}
