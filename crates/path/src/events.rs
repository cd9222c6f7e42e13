use crate::math::{Point, Transform};
use crate::LineMarker;

/// One call of the [LineBuilder](builder/trait.LineBuilder.html) interface.
///
/// Recording and replaying line builder calls goes through this type.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LineEvent {
    MoveTo { to: Point },
    LineTo { to: Point },
    Marker { marker: LineMarker },
    End,
}

impl LineEvent {
    /// The position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match *self {
            LineEvent::MoveTo { to } | LineEvent::LineTo { to } => Some(to),
            LineEvent::Marker { .. } | LineEvent::End => None,
        }
    }

    pub fn is_geometry(&self) -> bool {
        self.position().is_some()
    }

    pub fn transformed(&self, transform: &Transform) -> Self {
        match *self {
            LineEvent::MoveTo { to } => LineEvent::MoveTo {
                to: transform.transform_point(to),
            },
            LineEvent::LineTo { to } => LineEvent::LineTo {
                to: transform.transform_point(to),
            },
            evt => evt,
        }
    }
}

/// Represents an event of a flattened path (a sequence of polylines).
///
/// This is the input of the path driver: sub-paths start with `Begin`, continue with
/// any number of `Line` events and stop with `End`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathEvent {
    Begin { at: Point },
    Line { to: Point },
    End { close: bool },
}

impl PathEvent {
    /// The position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match *self {
            PathEvent::Begin { at } => Some(at),
            PathEvent::Line { to } => Some(to),
            PathEvent::End { .. } => None,
        }
    }
}

/// Returns an iterator of `PathEvent`s describing a single polyline.
///
/// ## Example
///
/// ```
/// use ribbon_path::{polyline_events, PathEvent};
/// use ribbon_path::math::point;
///
/// let points = [point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)];
/// let events: Vec<PathEvent> = polyline_events(&points, true).collect();
///
/// assert_eq!(events.len(), 4);
/// assert_eq!(events[3], PathEvent::End { close: true });
/// ```
pub fn polyline_events(points: &[Point], closed: bool) -> PolylineEvents<'_> {
    PolylineEvents {
        points: points.iter(),
        started: false,
        done: points.is_empty(),
        closed,
    }
}

/// An iterator of `PathEvent` over a slice of points.
///
/// See `polyline_events`.
pub struct PolylineEvents<'l> {
    points: std::slice::Iter<'l, Point>,
    started: bool,
    done: bool,
    closed: bool,
}

impl<'l> Iterator for PolylineEvents<'l> {
    type Item = PathEvent;

    fn next(&mut self) -> Option<PathEvent> {
        if self.done {
            return None;
        }

        match self.points.next() {
            Some(&at) if !self.started => {
                self.started = true;
                Some(PathEvent::Begin { at })
            }
            Some(&to) => Some(PathEvent::Line { to }),
            None => {
                self.done = true;
                Some(PathEvent::End {
                    close: self.closed,
                })
            }
        }
    }
}

#[test]
fn polyline_event_sequence() {
    use crate::math::point;

    let points = [point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)];
    let events: Vec<PathEvent> = polyline_events(&points, false).collect();

    assert_eq!(
        events,
        vec![
            PathEvent::Begin { at: point(0.0, 0.0) },
            PathEvent::Line { to: point(1.0, 0.0) },
            PathEvent::Line { to: point(1.0, 1.0) },
            PathEvent::End { close: false },
        ]
    );

    assert_eq!(polyline_events(&[], true).count(), 0);
}

#[test]
fn transformed_line_event() {
    use crate::math::{point, vector};

    let transform = Transform::translation(1.0, 2.0);
    let evt = LineEvent::LineTo { to: point(1.0, 1.0) };
    assert_eq!(
        evt.transformed(&transform),
        LineEvent::LineTo { to: point(1.0, 1.0) + vector(1.0, 2.0) }
    );

    let marker = LineEvent::Marker { marker: LineMarker::Join };
    assert_eq!(marker.transformed(&transform), marker);
    assert!(!marker.is_geometry());
}
