use crate::buffers::PairedBuffers;
use crate::math::*;
use crate::path::builder::LineBuilder;
use crate::path::{polyline_events, LineMarker, PathEvent};
use crate::{LineCap, LineJoin, StrokeError, StrokeOptions, StrokeResult};

#[cfg(debug_assertions)]
macro_rules! stroke_log {
    ($obj:ident, $fmt:expr) => (
        if $obj.log {
            log::debug!($fmt);
        }
    );
    ($obj:ident, $fmt:expr, $($arg:tt)*) => (
        if $obj.log {
            log::debug!($fmt, $($arg)*);
        }
    );
}

#[cfg(not(debug_assertions))]
macro_rules! stroke_log {
    ($obj:ident, $fmt:expr) => {};
    ($obj:ident, $fmt:expr, $($arg:tt)*) => {};
}

/// Turns a polyline into the closed outline of its stroke.
///
/// ## Overview
///
/// The stroker receives the skeleton of the path through the
/// [LineBuilder](../ribbon_path/builder/trait.LineBuilder.html) interface. Each segment
/// is offset by the half width on both sides and the two offset points of each side are
/// stored in a pair of buffers (see [PairedBuffers](struct.PairedBuffers.html)). Nothing
/// is forwarded to the output until `end` is called, at which point the stroker emits a
/// single ring: the forward side in path order, then the rewind side in reverse order,
/// then the first point again.
///
/// The offset normal of a segment going from `a` to `b` with half width `w` is
/// `(dy, -dx) * w / length`, where `(dx, dy) = b - a`. Forward points are `a + n` and
/// `b + n`, rewind points are `a - n` and `b - n`.
///
/// `next_command` sets the role of the next `line_to`:
///
/// - `LineMarker::None`: plain segment from the current position.
/// - `LineMarker::Join`: the segment continues from the previous one. Joins are
///   currently offset like plain segments, regardless of the `LineJoin` option.
/// - `LineMarker::Close`: the segment closes the sub-path and the first offset pair is
///   repeated so that both sides end where they started.
///
/// Zero-length segments are skipped without changing the current position or normal.
///
/// A stroker is meant to be used by a single producer at a time; it has no internal
/// synchronization.
///
/// # Examples
///
/// ```
/// use ribbon_stroke::{LineStroker, StrokeOptions};
/// use ribbon_stroke::path::builder::LineBuilder;
/// use ribbon_stroke::path::recorder::Recorder;
/// use ribbon_stroke::math::point;
///
/// let options = StrokeOptions::half_width(1.0);
/// let mut stroker = LineStroker::new(&options, Recorder::new());
///
/// stroker.move_to(point(0.0, 0.0));
/// stroker.line_to(point(10.0, 0.0));
///
/// assert_eq!(stroker.buffers().forward(), &[point(0.0, -1.0), point(10.0, -1.0)]);
/// assert_eq!(stroker.buffers().rewind(), &[point(0.0, 1.0), point(10.0, 1.0)]);
///
/// stroker.end();
///
/// let outlines = stroker.output().outlines();
/// assert_eq!(
///     outlines[0].points(),
///     &[
///         point(0.0, -1.0),
///         point(10.0, -1.0),
///         point(10.0, 1.0),
///         point(0.0, 1.0),
///         point(0.0, -1.0),
///     ]
/// );
/// ```
pub struct LineStroker<Output> {
    output: Output,
    options: StrokeOptions,
    buffers: PairedBuffers,
    position: Point,
    normal: Vector,
    command: LineMarker,
    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    log: bool,
}

impl<Output: LineBuilder> LineStroker<Output> {
    /// Constructor.
    pub fn new(options: &StrokeOptions, output: Output) -> Self {
        #[cfg(debug_assertions)]
        let log = std::env::var("RIBBON_FORCE_LOGGING").is_ok();
        #[cfg(not(debug_assertions))]
        let log = false;

        LineStroker {
            output,
            options: *options,
            buffers: PairedBuffers::new(),
            position: Point::origin(),
            normal: Vector::zero(),
            command: LineMarker::None,
            log,
        }
    }

    /// Enable/disable some verbose logging while stroking, for debugging purposes.
    ///
    /// Messages are sent to the `log` crate at the debug level, in debug builds only.
    pub fn set_logging(&mut self, is_enabled: bool) {
        #[cfg(debug_assertions)]
        let forced = std::env::var("RIBBON_FORCE_LOGGING").is_ok();

        #[cfg(not(debug_assertions))]
        let forced = false;

        self.log = is_enabled || forced;
    }

    #[inline]
    pub fn options(&self) -> &StrokeOptions {
        &self.options
    }

    /// Replaces the options used by the next segments.
    pub fn set_options(&mut self, options: &StrokeOptions) {
        self.options = *options;
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        self.options.half_width
    }

    pub fn set_half_width(&mut self, half_width: f64) {
        self.options.half_width = half_width;
    }

    #[inline]
    pub fn cap(&self) -> LineCap {
        self.options.cap
    }

    #[inline]
    pub fn join(&self) -> LineJoin {
        self.options.join
    }

    /// End of the last segment that produced geometry (or the last `move_to`).
    #[inline]
    pub fn current_position(&self) -> Point {
        self.position
    }

    /// Offset normal of the last segment that produced geometry.
    #[inline]
    pub fn current_normal(&self) -> Vector {
        self.normal
    }

    /// The marker that the next `line_to` will consume.
    #[inline]
    pub fn pending_marker(&self) -> LineMarker {
        self.command
    }

    #[inline]
    pub fn buffers(&self) -> &PairedBuffers {
        &self.buffers
    }

    #[inline]
    pub fn output(&self) -> &Output {
        &self.output
    }

    #[inline]
    pub fn output_mut(&mut self) -> &mut Output {
        &mut self.output
    }

    pub fn into_output(self) -> Output {
        self.output
    }

    /// Drops the sub-path in progress without emitting anything.
    ///
    /// The pending marker is cleared and the current position goes back to the origin.
    pub fn reset(&mut self) {
        self.buffers.clear();
        self.position = Point::origin();
        self.normal = Vector::zero();
        self.command = LineMarker::None;
    }

    /// Offsets the segment `from -> to` and records it.
    ///
    /// Returns false if the segment has no length, in which case nothing changes.
    fn segment(&mut self, from: Point, to: Point) -> bool {
        let d = to - from;
        let length = distance(d.x, d.y);
        if length == 0.0 {
            stroke_log!(self, "skipping zero-length segment at {:?}", to);
            return false;
        }

        let w = self.options.half_width;
        let n = vector(d.y * w / length, -(d.x * w / length));

        self.buffers
            .push_segment([from + n, to + n], [from - n, to - n]);
        self.position = to;
        self.normal = n;

        true
    }

    /// Offsets the segment starting at a join.
    ///
    /// The join geometry itself is not generated, so the previous normal does not
    /// contribute and this records the same offset segment as `segment`.
    fn join_segment(&mut self, from: Point, _previous_normal: Vector, to: Point) -> bool {
        self.segment(from, to)
    }

    fn close_ring(&mut self) {
        self.buffers.close();
    }
}

impl<Output: LineBuilder> LineBuilder for LineStroker<Output> {
    /// Only records the position: a single point has no direction to be offset against.
    fn move_to(&mut self, to: Point) {
        self.position = to;
    }

    fn line_to(&mut self, to: Point) {
        let from = self.position;
        match self.command {
            LineMarker::None => {
                self.segment(from, to);
            }
            LineMarker::Join => {
                let normal = self.normal;
                self.join_segment(from, normal, to);
            }
            LineMarker::Close => {
                self.segment(from, to);
                let (from, normal) = (self.position, self.normal);
                self.join_segment(from, normal, to);
                self.close_ring();
            }
        }

        self.command = LineMarker::None;
    }

    fn next_command(&mut self, marker: LineMarker) {
        self.command = marker;
    }

    /// Emits the outline accumulated since the last `end`, then resets the stroker.
    ///
    /// `end` is always forwarded to the output, even when nothing was accumulated.
    fn end(&mut self) {
        let forward = self.buffers.forward();
        let rewind = self.buffers.rewind();

        stroke_log!(
            self,
            "emitting outline: {} forward points, {} rewind points",
            forward.len(),
            rewind.len()
        );

        let ring = forward.len() >= 2;

        if ring {
            self.output.move_to(forward[0]);
            for &p in &forward[1..] {
                self.output.next_command(LineMarker::None);
                self.output.line_to(p);
            }
        }

        for &p in rewind.iter().rev() {
            self.output.next_command(LineMarker::None);
            self.output.line_to(p);
        }

        if ring {
            self.output.next_command(LineMarker::None);
            self.output.line_to(forward[0]);
        }

        self.output.end();

        self.buffers.clear();
        self.position = Point::origin();
        self.normal = Vector::zero();
    }
}

/// Strokes a sequence of path events into `output`.
///
/// Each sub-path produces one outline:
///
/// - `Begin` moves the stroker to the start of the sub-path,
/// - the first `Line` is a plain segment, the following ones start with a join,
/// - `End { close: true }` adds a closing segment back to the first point,
/// - `End` terminates the outline.
///
/// A sub-path left open when the input runs out is ended as if an `End { close: false }`
/// had been received.
///
/// Returns an error if the options are invalid, if a position is not finite or if a
/// `Line` event is not part of a sub-path (before any `Begin` or after an `End`). In the
/// latter two cases the outlines of the previous sub-paths have already been emitted and
/// the sub-path in progress is dropped.
///
/// # Example
///
/// ```
/// use ribbon_stroke::{stroke_path, StrokeOptions, PathEvent};
/// use ribbon_stroke::path::recorder::Recorder;
/// use ribbon_stroke::math::point;
///
/// let events = [
///     PathEvent::Begin { at: point(0.0, 0.0) },
///     PathEvent::Line { to: point(10.0, 0.0) },
///     PathEvent::Line { to: point(10.0, 10.0) },
///     PathEvent::End { close: true },
/// ];
///
/// let mut output = Recorder::new();
/// stroke_path(events.iter().cloned(), &StrokeOptions::default(), &mut output).unwrap();
///
/// assert_eq!(output.outlines().len(), 1);
/// ```
pub fn stroke_path(
    input: impl IntoIterator<Item = PathEvent>,
    options: &StrokeOptions,
    output: &mut dyn LineBuilder,
) -> StrokeResult {
    options.validate()?;

    let mut stroker = LineStroker::new(options, output);
    let mut first: Option<Point> = None;
    let mut edges = 0;

    for evt in input {
        if let Some(p) = evt.position() {
            if let Err(e) = check_position(p) {
                stroke_log!(stroker, "stroke failed with error: {}", e);
                stroker.reset();
                return Err(e);
            }
        }

        match evt {
            PathEvent::Begin { at } => {
                if first.is_some() {
                    stroker.end();
                }
                stroker.move_to(at);
                first = Some(at);
                edges = 0;
            }
            PathEvent::Line { to } => {
                if first.is_none() {
                    stroke_log!(stroker, "line to {:?} without a sub-path", to);
                    stroker.reset();
                    return Err(StrokeError::MissingBegin);
                }
                if edges > 0 {
                    stroker.next_command(LineMarker::Join);
                }
                stroker.line_to(to);
                edges += 1;
            }
            PathEvent::End { close } => {
                if let (true, Some(first)) = (close, first) {
                    stroker.next_command(LineMarker::Close);
                    stroker.line_to(first);
                }
                stroker.end();
                first = None;
            }
        }
    }

    if first.is_some() {
        stroker.end();
    }

    Ok(())
}

/// Strokes a single polyline into `output`.
///
/// See `stroke_path`.
pub fn stroke_polyline(
    points: &[Point],
    closed: bool,
    options: &StrokeOptions,
    output: &mut dyn LineBuilder,
) -> StrokeResult {
    stroke_path(polyline_events(points, closed), options, output)
}

fn check_position(p: Point) -> StrokeResult {
    if !p.x.is_finite() || !p.y.is_finite() {
        return Err(StrokeError::NonFinitePosition { x: p.x, y: p.y });
    }

    Ok(())
}
