//! Layout: shape, strides, and cached size for tensor addressing

use super::shape::{Shape, STACK_DIMS};
use super::strides::Strides;
use smallvec::SmallVec;
use std::fmt;

/// Coordinate sequence produced by linear-index decomposition
pub type Coords = SmallVec<[usize; STACK_DIMS]>;

/// Layout describes how linear storage is addressed as an n-dimensional array
///
/// The element at coordinates `[i0, i1, ..., in]` lives at linear offset
/// `i0 * strides[0] + i1 * strides[1] + ... + in * strides[n]`.
///
/// Strides follow the row-major convention: the last dimension has stride 1
/// and each earlier dimension's stride is the product of all later extents,
/// so the innermost dimension varies fastest in storage.
#[derive(Clone, PartialEq, Eq)]
pub struct Layout {
    /// Extent along each dimension
    shape: Shape,
    /// Element offset between consecutive positions along each dimension
    strides: Strides,
    /// Total number of addressable elements (product of the extents)
    size: usize,
}

impl Layout {
    /// Create a contiguous (row-major) layout from a shape
    ///
    /// # Example
    /// ```
    /// use ndfold::tensor::Layout;
    ///
    /// let layout = Layout::contiguous(&[2, 3, 4]);
    /// assert_eq!(layout.shape(), &[2, 3, 4]);
    /// assert_eq!(layout.strides(), &[12, 4, 1]);
    /// assert_eq!(layout.size(), 24);
    /// ```
    pub fn contiguous(shape: &[usize]) -> Self {
        let mut strides = Strides::with_capacity(shape.len());
        let mut stride = 1usize;

        // Accumulate from the last dimension inward; the running product
        // ends as the total element count.
        for &dim in shape.iter().rev() {
            strides.push(stride);
            stride *= dim;
        }
        strides.reverse();

        Self {
            shape: Shape::from(shape),
            strides,
            size: stride,
        }
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Total number of elements
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Decompose a linear index into per-dimension coordinates
    ///
    /// Walks the dimensions from the outermost (largest stride), taking
    /// the integer quotient against each stride and carrying the remainder
    /// inward. Exactly inverts [`Layout::linear_index`] for `linear` below
    /// [`Layout::size`]; larger inputs produce out-of-range coordinates
    /// rather than a failure.
    pub fn coords_of(&self, linear: usize) -> Coords {
        let mut coords = Coords::with_capacity(self.ndim());
        let mut remaining = linear;

        for &stride in self.strides.iter() {
            // Zero strides only occur alongside zero extents.
            let tick = if stride == 0 { 0 } else { remaining / stride };
            coords.push(tick);
            remaining -= tick * stride;
        }
        coords
    }

    /// Compose per-dimension coordinates into a linear index
    ///
    /// Plain stride dot product with no bounds checks; out-of-range
    /// coordinates give an out-of-range index.
    pub fn linear_index(&self, coords: &[usize]) -> usize {
        debug_assert_eq!(coords.len(), self.ndim());
        coords
            .iter()
            .zip(self.strides.iter())
            .map(|(&c, &s)| c * s)
            .sum()
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Layout {{ shape: {:?}, strides: {:?}, size: {} }}",
            self.shape.as_slice(),
            self.strides.as_slice(),
            self.size
        )
    }
}
