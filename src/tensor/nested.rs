//! Nested-array materialization for inspection

use super::core::Tensor;
use super::layout::Coords;
use crate::dtype::Element;
use smallvec::smallvec;
use std::fmt;

/// Fully-materialized nested snapshot of a tensor's logical contents
///
/// Produced by [`Tensor::to_nested`] for inspection and debugging; the
/// computation paths never consume it.
#[derive(Clone, Debug, PartialEq)]
pub enum Nested<T> {
    /// A single element
    Value(T),
    /// One nesting level
    List(Vec<Nested<T>>),
}

impl<T: fmt::Display> fmt::Display for Nested<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nested::Value(v) => write!(f, "{}", v),
            Nested::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl<T: Element> Tensor<T> {
    /// Materialize the logical contents as nested lists
    ///
    /// Levels nest from the last dimension outward: the outermost list
    /// runs along the final dimension and positions inside the innermost
    /// lists are selected by the first coordinate. Each leaf is the stored
    /// value resolved through the current layout, so an expanded view
    /// materializes its repeats.
    ///
    /// # Example
    ///
    /// ```
    /// use ndfold::tensor::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(t.to_nested().to_string(), "[[1, 4], [2, 5], [3, 6]]");
    /// ```
    pub fn to_nested(&self) -> Nested<T> {
        let rank = self.ndim();
        if rank == 0 {
            return Nested::Value(self.as_slice()[0]);
        }

        let mut coords: Coords = smallvec![0; rank];
        self.nested_level(rank - 1, &mut coords)
    }

    /// Build the list for `dim`, recursing inward toward dimension 0
    fn nested_level(&self, dim: usize, coords: &mut Coords) -> Nested<T> {
        let extent = self.shape()[dim];
        let native = self.as_slice().len();
        let mut items = Vec::with_capacity(extent);

        for c in 0..extent {
            coords[dim] = c;
            if dim == 0 {
                let at = self.index_of(coords) % native;
                items.push(Nested::Value(self.as_slice()[at]));
            } else {
                items.push(self.nested_level(dim - 1, coords));
            }
        }
        Nested::List(items)
    }
}
