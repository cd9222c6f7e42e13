/// The stroker's result type.
pub type StrokeResult = Result<(), StrokeError>;

/// Reasons why the stroke drivers refuse their input.
///
/// The `LineStroker` itself accepts every sequence of calls; only the drivers
/// (`stroke_path`, `stroke_polyline`) validate what they are given.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum StrokeError {
    #[error("Invalid half width ({0}), expected a finite value greater than zero")]
    InvalidHalfWidth(f64),
    #[error("Position is not finite ({x}, {y})")]
    NonFinitePosition { x: f64, y: f64 },
    #[error("Line event outside of a sub-path, expected a Begin event first")]
    MissingBegin,
}

#[test]
fn error_messages() {
    assert_eq!(
        StrokeError::InvalidHalfWidth(-2.0).to_string(),
        "Invalid half width (-2), expected a finite value greater than zero"
    );
    assert_eq!(
        StrokeError::NonFinitePosition { x: 1.0, y: f64::INFINITY }.to_string(),
        "Position is not finite (1, inf)"
    );
    assert_eq!(
        StrokeError::MissingBegin.to_string(),
        "Line event outside of a sub-path, expected a Begin event first"
    );
}
