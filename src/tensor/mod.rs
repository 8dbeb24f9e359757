//! Tensor types and operations
//!
//! This module provides the core [`Tensor`] type: an n-dimensional view
//! over a flat float buffer, with strided index arithmetic, zero-copy
//! broadcast views, and callback-driven iteration and reduction.

mod core;
mod iter;
mod layout;
mod nested;
mod reduce;
mod shape;
mod strides;
mod view;

pub use self::core::Tensor;
pub use self::layout::{Coords, Layout};
pub use self::nested::Nested;
pub use self::shape::Shape;
pub use self::strides::Strides;
pub use self::view::View;
