#![deny(bare_trait_objects)]

//! Stroking of 2D polylines into closed outlines.
//!
//! # Crates
//!
//! This meta-crate (`ribbon`) reexports the following sub-crates for convenience:
//!
//! * **ribbon_stroke** - The stroker and the functions driving it.
//! * **ribbon_path** - The `LineBuilder` interface, markers, adapters and recorders.
//!
//! Each `ribbon_<name>` crate is reexported as a `<name>` module in `ribbon`. For example:
//!
//! ```ignore
//! extern crate ribbon_stroke;
//! use ribbon_stroke::LineStroker;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate ribbon;
//! use ribbon::stroke::LineStroker;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Logging
//!
//! The crates use the [log](https://docs.rs/log/) facade. Verbose traces of the
//! stroker can be enabled per instance with `LineStroker::set_logging`, or for all
//! instances in debug builds by setting the `RIBBON_FORCE_LOGGING` environment variable.
//!
//! # Examples
//!
//! ```
//! use ribbon::math::point;
//! use ribbon::path::recorder::Recorder;
//! use ribbon::stroke::{stroke_polyline, StrokeOptions};
//!
//! let mut output = Recorder::new();
//! stroke_polyline(
//!     &[point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)],
//!     false,
//!     &StrokeOptions::line_width(2.0),
//!     &mut output,
//! ).unwrap();
//!
//! for outline in output.outlines() {
//!     println!("{:?}", outline.points());
//! }
//! ```
//!

pub use ribbon_path as path;
pub use ribbon_stroke as stroke;

pub use ribbon_path::math;
