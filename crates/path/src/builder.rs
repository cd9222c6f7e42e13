//! Line building utilities.
//!
//! ## `LineBuilder`
//!
//! [LineBuilder](trait.LineBuilder.html) is the interface between producers and
//! consumers of polylines. It only has four operations:
//!
//! - `move_to` starts a new sub-path,
//! - `line_to` extends the current sub-path,
//! - `next_command` annotates the next `line_to` with a [LineMarker](../enum.LineMarker.html),
//! - `end` finalizes whatever the consumer is accumulating.
//!
//! Strokers, recorders and filters all implement it, which lets them be chained:
//!
//! ```
//! use ribbon_path::builder::LineBuilder;
//! use ribbon_path::math::{point, Transform};
//! use ribbon_path::recorder::Recorder;
//!
//! let mut recorder = Recorder::new();
//!
//! {
//!     // Scale everything by two before it reaches the recorder.
//!     let mut builder = (&mut recorder).transformed(Transform::scale(2.0, 2.0));
//!     builder.move_to(point(1.0, 1.0));
//!     builder.line_to(point(2.0, 1.0));
//!     builder.end();
//! }
//!
//! assert_eq!(recorder.outlines()[0].points(), &[point(2.0, 2.0), point(4.0, 2.0)]);
//! ```
//!

use crate::events::LineEvent;
use crate::math::*;
use crate::LineMarker;

/// The base line building interface.
///
/// All positions are provided in absolute coordinates. Implementations are not
/// expected to validate their input: every sequence of calls is accepted.
pub trait LineBuilder {
    /// Starts a new sub-path at a given position.
    fn move_to(&mut self, to: Point);

    /// Adds a line segment to the current sub-path.
    fn line_to(&mut self, to: Point);

    /// Sets the role of the next `line_to` call.
    fn next_command(&mut self, marker: LineMarker);

    /// Finalizes what has been built since the last `end`.
    fn end(&mut self);

    /// Applies the operation matching a `LineEvent`.
    fn line_event(&mut self, event: LineEvent) {
        match event {
            LineEvent::MoveTo { to } => {
                self.move_to(to);
            }
            LineEvent::LineTo { to } => {
                self.line_to(to);
            }
            LineEvent::Marker { marker } => {
                self.next_command(marker);
            }
            LineEvent::End => {
                self.end();
            }
        }
    }

    /// Applies a sequence of events.
    fn extend<Evts>(&mut self, events: Evts)
    where
        Evts: IntoIterator<Item = LineEvent>,
        Self: Sized,
    {
        for evt in events {
            self.line_event(evt);
        }
    }

    /// Returns a builder that applies a transformation to all positions before
    /// forwarding them to this one.
    fn transformed(self, transform: Transform) -> Transformed<Self>
    where
        Self: Sized,
    {
        Transformed::new(self, transform)
    }
}

impl<'l, B: LineBuilder + ?Sized> LineBuilder for &'l mut B {
    #[inline]
    fn move_to(&mut self, to: Point) {
        (**self).move_to(to);
    }

    #[inline]
    fn line_to(&mut self, to: Point) {
        (**self).line_to(to);
    }

    #[inline]
    fn next_command(&mut self, marker: LineMarker) {
        (**self).next_command(marker);
    }

    #[inline]
    fn end(&mut self) {
        (**self).end();
    }
}

/// Builds lines with a transformation applied.
pub struct Transformed<Builder> {
    builder: Builder,
    transform: Transform,
}

impl<Builder> Transformed<Builder> {
    #[inline]
    pub fn new(builder: Builder, transform: Transform) -> Self {
        Transformed { builder, transform }
    }

    #[inline]
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[inline]
    pub fn into_inner(self) -> Builder {
        self.builder
    }
}

impl<Builder: LineBuilder> LineBuilder for Transformed<Builder> {
    #[inline]
    fn move_to(&mut self, to: Point) {
        self.builder.move_to(self.transform.transform_point(to));
    }

    #[inline]
    fn line_to(&mut self, to: Point) {
        self.builder.line_to(self.transform.transform_point(to));
    }

    #[inline]
    fn next_command(&mut self, marker: LineMarker) {
        self.builder.next_command(marker);
    }

    #[inline]
    fn end(&mut self) {
        self.builder.end();
    }
}

/// Forwards every call to several builders, in the order they were added.
///
/// ## Example
///
/// ```
/// use ribbon_path::builder::{Demux, LineBuilder};
/// use ribbon_path::math::point;
/// use ribbon_path::recorder::Recorder;
///
/// let mut a = Recorder::new();
/// let mut b = Recorder::new();
///
/// let mut demux = Demux::new();
/// demux.add(&mut a);
/// demux.add(&mut b);
/// demux.move_to(point(0.0, 0.0));
/// demux.line_to(point(1.0, 0.0));
/// demux.end();
/// drop(demux);
///
/// assert_eq!(a.events(), b.events());
/// ```
#[derive(Default)]
pub struct Demux<'l> {
    outputs: Vec<&'l mut dyn LineBuilder>,
}

impl<'l> Demux<'l> {
    pub fn new() -> Self {
        Demux {
            outputs: Vec::new(),
        }
    }

    pub fn with_outputs(outputs: Vec<&'l mut dyn LineBuilder>) -> Self {
        Demux { outputs }
    }

    pub fn add(&mut self, output: &'l mut dyn LineBuilder) {
        self.outputs.push(output);
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

impl<'l> LineBuilder for Demux<'l> {
    fn move_to(&mut self, to: Point) {
        for output in &mut self.outputs {
            output.move_to(to);
        }
    }

    fn line_to(&mut self, to: Point) {
        for output in &mut self.outputs {
            output.line_to(to);
        }
    }

    fn next_command(&mut self, marker: LineMarker) {
        for output in &mut self.outputs {
            output.next_command(marker);
        }
    }

    fn end(&mut self) {
        for output in &mut self.outputs {
            output.end();
        }
    }
}
