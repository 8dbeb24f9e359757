//! Error types for ndfold

use crate::tensor::Shape;
use thiserror::Error;

/// Result type alias using ndfold's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ndfold operations
///
/// Every variant is a validation failure about caller-supplied shapes or
/// dimension indices. Failures are raised before any state changes, so an
/// operation that errors leaves its tensor exactly as it was.
#[derive(Error, Debug)]
pub enum Error {
    /// Data length does not match the product of the shape extents
    #[error("Shape mismatch: shape {shape} requires {expected} elements, got {got}")]
    ShapeMismatch {
        /// The attempted shape
        shape: Shape,
        /// Element count implied by the shape
        expected: usize,
        /// Actual data length
        got: usize,
    },

    /// Negative dimension index passed to a per-dimension operation
    #[error("Invalid dimension {dim}: dimensions are indexed from 0")]
    InvalidDimension {
        /// The rejected dimension argument
        dim: isize,
    },

    /// Dimension index at or beyond the tensor's rank
    #[error("Dimension {dim} out of range for tensor with {ndim} dimensions")]
    DimensionOutOfRange {
        /// The rejected dimension index
        dim: usize,
        /// Number of dimensions in the tensor
        ndim: usize,
    },

    /// Broadcast target conflicts with a native extent that is not 1
    #[error("Cannot expand shape {native:?} to {target:?}")]
    IncompatibleExpand {
        /// Native shape of the tensor
        native: Vec<usize>,
        /// Requested target shape
        target: Vec<usize>,
    },

    /// Broadcast target extent below 1
    #[error("Invalid expand size {size}: target extents must be at least 1")]
    InvalidExpandSize {
        /// The rejected extent
        size: usize,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(shape: &[usize], got: usize) -> Self {
        Self::ShapeMismatch {
            shape: Shape::from(shape),
            expected: shape.iter().product(),
            got,
        }
    }

    /// Create an incompatible expand error
    pub fn incompatible_expand(native: &[usize], target: &[usize]) -> Self {
        Self::IncompatibleExpand {
            native: native.to_vec(),
            target: target.to_vec(),
        }
    }
}
