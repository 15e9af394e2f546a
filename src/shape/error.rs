use crate::mesh::MeshError;

/// Errors raised while building, configuring, or querying a shape.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// A collision margin must be non-negative.
    #[error("the collision margin must not be negative.")]
    NegativeMargin,
    /// The margin does not fit inside the margin-inclusive extents of the shape.
    #[error("the collision margin exceeds the extents of the shape.")]
    MarginExceedsExtents,
    /// A size parameter (radius, height, half-extent) is negative or not finite.
    #[error("the shape dimensions must be finite and non-negative.")]
    InvalidDimensions,
    /// Every component of a local scaling must be finite and non-zero.
    #[error("the local scaling must have finite, non-zero components.")]
    InvalidScaling,
    /// A mass must be finite and positive.
    #[error("the mass must be finite and positive.")]
    InvalidMass,
    /// A convex hull needs at least one point.
    #[error("a convex hull must contain at least one point.")]
    EmptyHull,
    /// A compound without children has no bounding volume.
    #[error("the compound shape has no children.")]
    EmptyCompound,
    /// The operation is not defined for this kind of shape.
    #[error("{operation} is not supported by {shape}.")]
    Unsupported {
        /// Name of the shape.
        shape: &'static str,
        /// Name of the operation.
        operation: &'static str,
    },
    /// The mesh data backing the shape is invalid.
    #[error("invalid mesh: {0}")]
    Mesh(#[from] MeshError),
}

impl ShapeError {
    pub(crate) fn unsupported(shape: &'static str, operation: &'static str) -> Self {
        Self::Unsupported { shape, operation }
    }
}
