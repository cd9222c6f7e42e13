#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]

//! Data structures and traits to describe polylines and feed them to line consumers.
//!
//! The central piece of this crate is the [LineBuilder](builder/trait.LineBuilder.html)
//! trait: a minimal interface made of `move_to`, `line_to`, `next_command` and `end`.
//! Strokers, recorders and transform filters all implement it, so they can be chained
//! freely.
//!
//! This crate is reexported in [ribbon](https://docs.rs/ribbon/).
//!
//! # Examples
//!
//! ```
//! use ribbon_path::math::point;
//! use ribbon_path::builder::LineBuilder;
//! use ribbon_path::recorder::Recorder;
//! use ribbon_path::LineMarker;
//!
//! let mut recorder = Recorder::new();
//!
//! recorder.move_to(point(0.0, 0.0));
//! recorder.next_command(LineMarker::None);
//! recorder.line_to(point(1.0, 2.0));
//! recorder.next_command(LineMarker::None);
//! recorder.line_to(point(0.0, 0.0));
//! recorder.end();
//!
//! for event in recorder.events() {
//!     println!("{:?}", event);
//! }
//!
//! assert_eq!(recorder.outlines().len(), 1);
//! ```
//!

pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod builder;
mod events;
pub mod recorder;

pub use crate::events::*;

pub mod math {
    //! f64 version of the euclid types used everywhere. Most other ribbon crates
    //! reexport them.

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// Alias for ```euclid::default::Transform2D<f64>```
    pub type Transform = euclid::default::Transform2D<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Euclidean length of the vector `(dx, dy)`.
    ///
    /// Returns exactly `0.0` for a null vector, which callers rely on to detect
    /// degenerate segments.
    #[inline]
    pub fn distance(dx: f64, dy: f64) -> f64 {
        if dx == 0.0 && dy == 0.0 {
            return 0.0;
        }

        vector(dx, dy).length()
    }
}

/// The role of the next `line_to` call.
///
/// Markers are announced with `next_command` and consumed by the following
/// `line_to`, after which the pending marker goes back to `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LineMarker {
    /// A plain segment.
    None,
    /// The segment starts at an interior vertex joining it to the previous segment.
    Join,
    /// The segment closes the sub-path.
    Close,
}

impl Default for LineMarker {
    fn default() -> Self {
        LineMarker::None
    }
}

impl LineMarker {
    #[inline]
    pub fn is_none(self) -> bool {
        self == LineMarker::None
    }
}

/// Line cap as defined by the SVG specification.
///
/// See: <https://svgwg.org/specs/strokes/#StrokeLinecapProperty>
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LineCap {
    /// A rounded cap centered at the end of the sub-path.
    Round,
    /// The stroke stops at the endpoints of the sub-path.
    Butt,
    /// A square cap extending beyond the endpoints by half the line width.
    Square,
}

impl Default for LineCap {
    fn default() -> Self {
        LineCap::Round
    }
}

/// Line join as defined by the SVG specification.
///
/// See: <https://svgwg.org/specs/strokes/#StrokeLinejoinProperty>
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LineJoin {
    /// The corner is cut off by a straight line.
    Bevel,
    /// A round corner centered at the join point.
    Round,
    /// A sharp corner extending the outer edges until they meet.
    Miter,
}

impl Default for LineJoin {
    fn default() -> Self {
        LineJoin::Bevel
    }
}

#[test]
fn distance_of_null_vector_is_zero() {
    assert_eq!(math::distance(0.0, 0.0), 0.0);
    assert_eq!(math::distance(-0.0, 0.0), 0.0);
    assert_eq!(math::distance(3.0, 4.0), 5.0);
    assert_eq!(math::distance(-3.0, -4.0), 5.0);
}

#[test]
fn marker_defaults() {
    assert_eq!(LineMarker::default(), LineMarker::None);
    assert!(LineMarker::default().is_none());
    assert!(!LineMarker::Close.is_none());
    assert_eq!(LineCap::default(), LineCap::Round);
    assert_eq!(LineJoin::default(), LineJoin::Bevel);
}
