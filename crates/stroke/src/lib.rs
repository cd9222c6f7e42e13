#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]

//! Stroking of polylines into closed outlines.
//!
//! This crate is reexported in [ribbon](https://docs.rs/ribbon/).
//!
//! ## Overview
//!
//! The most interesting types and functions of this crate are:
//!
//! * [LineStroker](struct.LineStroker.html) - Offsets a polyline on both sides by half of
//!   the line width and forwards the resulting closed outline to a
//!   [`LineBuilder`](../ribbon_path/builder/trait.LineBuilder.html).
//! * [stroke_path](fn.stroke_path.html) and [stroke_polyline](fn.stroke_polyline.html) -
//!   Drive a `LineStroker` from a sequence of path events or from a slice of points.
//! * [StrokeOptions](struct.StrokeOptions.html) - The stroking parameters.
//!
//! ## How the outline is built
//!
//! For each segment of the input the stroker computes the two offset segments, one on
//! each side of the path, and stores them in two parallel buffers: the *forward* buffer
//! and the *rewind* buffer. When the sub-path ends, the forward buffer is emitted in
//! order, followed by the rewind buffer in reverse order, which forms a single closed
//! ring around the stroked path.
//!
//! ## Caps and joins
//!
//! `StrokeOptions` records a [LineCap](enum.LineCap.html) and a
//! [LineJoin](enum.LineJoin.html), however the stroker does not generate cap or join
//! geometry: joins are offset exactly like plain segments and open ends are left butt.
//!
//! ## Example
//!
//! ```
//! use ribbon_stroke::{stroke_polyline, StrokeOptions};
//! use ribbon_stroke::math::point;
//! use ribbon_stroke::path::recorder::Recorder;
//!
//! let mut output = Recorder::new();
//!
//! stroke_polyline(
//!     &[point(0.0, 0.0), point(10.0, 0.0)],
//!     false,
//!     &StrokeOptions::default().with_half_width(1.0),
//!     &mut output,
//! ).unwrap();
//!
//! let outlines = output.outlines();
//! assert_eq!(outlines.len(), 1);
//! assert!(outlines[0].is_closed());
//! ```
//!

pub use ribbon_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod buffers;
mod error;
mod stroke;


pub use crate::path::math;

#[doc(inline)]
pub use crate::buffers::*;

#[doc(inline)]
pub use crate::error::*;

#[doc(inline)]
pub use crate::stroke::*;

pub use crate::path::builder::LineBuilder;
pub use crate::path::{LineCap, LineJoin, LineMarker, PathEvent};

/// Parameters for the stroker.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct StrokeOptions {
    /// Distance between the path and each side of the outline.
    ///
    /// Must be finite and greater than zero.
    /// Default value: `StrokeOptions::DEFAULT_HALF_WIDTH`.
    pub half_width: f64,

    /// What cap to use at the ends of open sub-paths.
    ///
    /// Recorded only, see the crate documentation.
    /// Default value: `LineCap::Round`.
    pub cap: LineCap,

    /// What join to use between segments.
    ///
    /// Recorded only, see the crate documentation.
    /// Default value: `LineJoin::Bevel`.
    pub join: LineJoin,
}

impl StrokeOptions {
    pub const DEFAULT_HALF_WIDTH: f64 = 0.5;
    pub const DEFAULT_LINE_CAP: LineCap = LineCap::Round;
    pub const DEFAULT_LINE_JOIN: LineJoin = LineJoin::Bevel;

    pub const DEFAULT: Self = StrokeOptions {
        half_width: Self::DEFAULT_HALF_WIDTH,
        cap: Self::DEFAULT_LINE_CAP,
        join: Self::DEFAULT_LINE_JOIN,
    };

    #[inline]
    pub fn half_width(half_width: f64) -> Self {
        Self::DEFAULT.with_half_width(half_width)
    }

    /// Options for a stroke of the given total width.
    #[inline]
    pub fn line_width(width: f64) -> Self {
        Self::DEFAULT.with_line_width(width)
    }

    #[inline]
    pub const fn with_half_width(mut self, half_width: f64) -> Self {
        self.half_width = half_width;
        self
    }

    #[inline]
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.half_width = width * 0.5;
        self
    }

    #[inline]
    pub const fn with_line_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    #[inline]
    pub const fn with_line_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    /// Checks that the options can produce a meaningful outline.
    pub fn validate(&self) -> Result<(), StrokeError> {
        if !self.half_width.is_finite() || self.half_width <= 0.0 {
            return Err(StrokeError::InvalidHalfWidth(self.half_width));
        }

        Ok(())
    }
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn stroke_options_builders() {
    let options = StrokeOptions::default();
    assert_eq!(options.half_width, 0.5);
    assert_eq!(options.cap, LineCap::Round);
    assert_eq!(options.join, LineJoin::Bevel);
    assert_eq!(options.validate(), Ok(()));

    let options = StrokeOptions::line_width(3.0)
        .with_line_cap(LineCap::Square)
        .with_line_join(LineJoin::Miter);
    assert_eq!(options.half_width, 1.5);
    assert_eq!(options.cap, LineCap::Square);
    assert_eq!(options.join, LineJoin::Miter);
    assert_eq!(StrokeOptions::half_width(2.0).half_width, 2.0);
}

#[test]
fn stroke_options_validation() {
    assert_eq!(
        StrokeOptions::half_width(0.0).validate(),
        Err(StrokeError::InvalidHalfWidth(0.0))
    );
    assert_eq!(
        StrokeOptions::half_width(-1.0).validate(),
        Err(StrokeError::InvalidHalfWidth(-1.0))
    );
    assert!(StrokeOptions::half_width(f64::NAN).validate().is_err());
    assert!(StrokeOptions::half_width(f64::INFINITY).validate().is_err());
}
