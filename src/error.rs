use thiserror::Error;

/// Errors reported when validating styles and geometry before drawing.
///
/// Drawing itself never fails: degenerate input renders a degenerate glyph.
/// These are for callers that want to reject bad configuration upfront.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    /// Marker size is zero, negative, or not finite.
    #[error("marker size must be positive and finite, got {0}")]
    InvalidMarkerSize(f32),
    /// Line width is negative or not finite.
    #[error("line width must be non-negative and finite, got {0}")]
    InvalidLineWidth(f32),
    /// Rectangle was given a negative width or height.
    #[error("rectangle extent must be non-negative, got {width}x{height}")]
    NegativeExtent { width: f32, height: f32 },
    /// Sweep gradient start and end angles describe an empty range.
    #[error("gradient angle range {start}..{end} is empty")]
    EmptyAngleRange { start: f32, end: f32 },
    /// A marker name did not match any known shape.
    #[error("unknown marker shape `{0}`")]
    UnknownMarker(String),
}
