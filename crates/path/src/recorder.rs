//! A line builder that keeps track of everything it receives.

use crate::builder::LineBuilder;
use crate::events::LineEvent;
use crate::math::Point;
use crate::LineMarker;

/// Stores every call it receives as a `LineEvent`.
///
/// Useful to inspect the output of a stroker, or to replay it later into another
/// builder with `LineBuilder::extend`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recorder {
    events: Vec<LineEvent>,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder { events: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Recorder {
            events: Vec::with_capacity(cap),
        }
    }

    #[inline]
    pub fn events(&self) -> &[LineEvent] {
        &self.events
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn into_events(self) -> Vec<LineEvent> {
        self.events
    }

    /// Number of `end` calls received so far.
    pub fn end_count(&self) -> usize {
        self.events
            .iter()
            .filter(|evt| **evt == LineEvent::End)
            .count()
    }

    /// Rebuilds the outlines described by the recorded events.
    ///
    /// A `move_to` starts a new outline, a `line_to` appends to the current one and
    /// `end` terminates it. Markers carry no geometry and are skipped. `line_to` calls
    /// received before any `move_to` start an outline of their own.
    pub fn outlines(&self) -> Vec<Outline> {
        let mut outlines = Vec::new();
        let mut current: Option<Vec<Point>> = None;

        for evt in &self.events {
            match *evt {
                LineEvent::MoveTo { to } => {
                    if let Some(points) = current.take() {
                        outlines.push(Outline { points });
                    }
                    current = Some(vec![to]);
                }
                LineEvent::LineTo { to } => {
                    current.get_or_insert_with(Vec::new).push(to);
                }
                LineEvent::Marker { .. } => {}
                LineEvent::End => {
                    if let Some(points) = current.take() {
                        outlines.push(Outline { points });
                    }
                }
            }
        }

        if let Some(points) = current {
            outlines.push(Outline { points });
        }

        outlines
    }
}

impl LineBuilder for Recorder {
    fn move_to(&mut self, to: Point) {
        self.events.push(LineEvent::MoveTo { to });
    }

    fn line_to(&mut self, to: Point) {
        self.events.push(LineEvent::LineTo { to });
    }

    fn next_command(&mut self, marker: LineMarker) {
        self.events.push(LineEvent::Marker { marker });
    }

    fn end(&mut self) {
        self.events.push(LineEvent::End);
    }
}

/// A sequence of points produced between a `move_to` and an `end`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    points: Vec<Point>,
}

impl Outline {
    pub fn new(points: Vec<Point>) -> Self {
        Outline { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the last point is equal to the first one.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() >= 2 && first == last,
            _ => false,
        }
    }

    /// Signed area of the outline, using the shoelace formula.
    ///
    /// The outline is treated as implicitly closed. The sign tells the winding:
    /// positive when the points turn counter-clockwise in a y-up coordinate system.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }

        let mut area = 0.0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            area += a.x * b.y - b.x * a.y;
        }

        area * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;

    #[test]
    fn outlines_split_on_move_and_end() {
        let mut recorder = Recorder::new();
        recorder.move_to(point(0.0, 0.0));
        recorder.next_command(LineMarker::None);
        recorder.line_to(point(1.0, 0.0));
        recorder.next_command(LineMarker::None);
        recorder.line_to(point(0.0, 0.0));
        recorder.end();

        recorder.move_to(point(5.0, 5.0));
        recorder.line_to(point(6.0, 5.0));
        recorder.end();

        // An end without geometry doesn't produce an outline.
        recorder.end();

        let outlines = recorder.outlines();
        assert_eq!(outlines.len(), 2);
        assert_eq!(
            outlines[0].points(),
            &[point(0.0, 0.0), point(1.0, 0.0), point(0.0, 0.0)]
        );
        assert!(outlines[0].is_closed());
        assert!(!outlines[1].is_closed());
        assert_eq!(recorder.end_count(), 3);
    }

    #[test]
    fn signed_area_of_square() {
        let ccw = Outline::new(vec![
            point(0.0, 0.0),
            point(2.0, 0.0),
            point(2.0, 2.0),
            point(0.0, 2.0),
            point(0.0, 0.0),
        ]);
        assert_eq!(ccw.signed_area(), 4.0);

        let mut reversed = ccw.points().to_vec();
        reversed.reverse();
        assert_eq!(Outline::new(reversed).signed_area(), -4.0);

        assert_eq!(Outline::new(vec![point(1.0, 1.0)]).signed_area(), 0.0);
        assert!(!Outline::new(vec![point(1.0, 1.0)]).is_closed());
    }

    #[test]
    fn clear_recorder() {
        let mut recorder = Recorder::with_capacity(4);
        recorder.move_to(point(0.0, 0.0));
        assert!(!recorder.is_empty());
        recorder.clear();
        assert!(recorder.is_empty());
        assert!(recorder.outlines().is_empty());
    }
}
