//! # ndfold
//!
//! **Minimal n-dimensional float tensors with strided indexing, zero-copy
//! broadcast views, and callback-driven reductions.**
//!
//! ndfold is the storage-and-traversal core of a tensor library: a dense
//! buffer addressed through shape/stride arithmetic, with nothing layered
//! on top. It favors a small, explicit API over an operator zoo.
//!
//! ## Features
//!
//! - **Strided index model**: bidirectional linear-index/coordinate
//!   mapping with row-major strides derived at construction
//! - **Broadcast views**: [`expand`](tensor::Tensor::expand) stretches
//!   size-1 dimensions without copying; reads wrap modulo the native
//!   buffer
//! - **Iteration**: whole-tensor and per-dimension traversal with a
//!   deterministic visit order
//! - **Reductions**: global and per-dimension folds with an optional
//!   count-aware finalizer and `keep_dim` control
//! - **Two float widths**: `f32` and `f64` per tensor, chosen through the
//!   [`Element`](dtype::Element) trait
//!
//! ## Quick Start
//!
//! ```
//! use ndfold::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[1, 3])?;
//!
//! // Stretch the size-1 dimension across four logical rows.
//! t.expand(&[4, 3])?;
//!
//! // Sum down the stretched dimension; every column repeats its value.
//! let sums = t.reduce_dim(0, false, |a, v| a + v)?;
//! assert_eq!(sums.to_vec(), vec![4.0, 8.0, 12.0]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::tensor::{Layout, Nested, Shape, Tensor};
}
