//! Error types for the geometry kernel and the generation pipeline

use crate::float_types::Real;
use thiserror::Error;

/// Failures raised by a geometry kernel while building or combining solids.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    /// A cross-section has fewer than three distinct points
    #[error("(TooFewPoints) cross-section has {0} distinct points, at least 3 are required")]
    TooFewPoints(usize),

    /// A coordinate is NaN or infinite
    #[error("(InvalidCoordinate) the coordinate ({x}, {y}) is NaN or infinite")]
    InvalidCoordinate { x: Real, y: Real },

    /// The polygon encloses no area
    #[error("(ZeroArea) cross-section encloses no area")]
    ZeroArea,

    /// Two non-adjacent edges of the outline cross
    #[error("(SelfIntersection) cross-section self-intersects at ({x}, {y})")]
    SelfIntersection { x: Real, y: Real },

    /// Extrusion height must be positive and finite
    #[error("(InvalidHeight) extrusion height {0} must be positive and finite")]
    InvalidHeight(Real),

    /// The transform has no inverse, so normals cannot be carried through it
    #[error("(SingularTransform) transform matrix is not invertible")]
    SingularTransform,

    /// A plane normal of zero length
    #[error("(DegeneratePlane) plane normal has zero length")]
    DegeneratePlane,

    /// Anything else a kernel backend reports
    #[error("kernel operation failed: {0}")]
    Backend(String),
}

/// Hard failures of a generation pass.
///
/// Vent failures never show up here: they degrade the pass instead,
/// see [`crate::assembly::Outcome`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    /// The hollow shell could not be built
    #[error("shell construction failed: {0}")]
    Shell(#[source] KernelError),

    /// A mounting clip could not be built or attached
    #[error("clip placement failed: {0}")]
    Clips(#[source] KernelError),
}

/// Box parameters that violate the dimensional invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} must be positive and finite")]
    NotPositive { parameter: &'static str, value: Real },

    #[error("wall thickness {wall} must be below half the smaller footprint side ({limit})")]
    WallTooThick { wall: Real, limit: Real },

    #[error("bottom thickness {bottom} must be below the height {height}")]
    BottomTooThick { bottom: Real, height: Real },

    #[error("corner radius {0} must not be negative")]
    NegativeCornerRadius(Real),
}
