//! Core Tensor type

use super::layout::{Coords, Layout};
use super::view::{self, View};
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::fmt;

/// N-dimensional array over an immutable float buffer
///
/// `Tensor` owns a flat buffer and addresses it through two layouts:
///
/// - **Native**: shape, row-major strides, and size fixed at construction.
/// - **View**: an optional broadcast overlay installed by
///   [`expand`](Tensor::expand), which takes over the answers of
///   [`shape`](Tensor::shape), [`strides`](Tensor::strides), and
///   [`size`](Tensor::size) until [`unexpand`](Tensor::unexpand) removes it.
///
/// The buffer is never mutated after construction and is never handed out
/// mutably, so a broadcast view cannot observe writes through an alias.
/// Iteration, reduction, and element access resolve every logical offset
/// into the buffer modulo its length; with the fresh contiguous strides an
/// expand installs, that wraparound is exactly the broadcast repeat.
///
/// # Example
///
/// ```
/// use ndfold::tensor::Tensor;
///
/// # fn main() -> ndfold::error::Result<()> {
/// let mut t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[1, 3])?;
/// t.expand(&[4, 3])?;
/// assert_eq!(t.shape(), &[4, 3]);
/// assert_eq!(t.size(), 12);
/// assert_eq!(t.to_vec()[..6], [1.0, 2.0, 3.0, 1.0, 2.0, 3.0]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Tensor<T: Element> {
    /// Flat storage, immutable after construction
    data: Vec<T>,
    /// Layout fixed at construction
    native: Layout,
    /// Optional broadcast overlay
    view: View,
}

impl<T: Element> Tensor<T> {
    /// Create a tensor that takes ownership of its buffer
    ///
    /// Strides are derived from `shape` with the row-major convention and
    /// the total size is the product of the extents. Returns
    /// [`Error::ShapeMismatch`] when `data.len()` does not equal that
    /// product.
    ///
    /// # Example
    ///
    /// ```
    /// use ndfold::tensor::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(t.shape(), &[2, 3]);
    /// assert_eq!(t.strides(), &[3, 1]);
    /// assert_eq!(t.size(), 6);
    /// ```
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let native = Layout::contiguous(shape);
        if native.size() != data.len() {
            return Err(Error::shape_mismatch(shape, data.len()));
        }

        Ok(Self {
            data,
            native,
            view: View::Plain,
        })
    }

    /// Create a tensor by copying a slice
    ///
    /// Returns an error if `data.len()` does not equal the product of the
    /// `shape` extents.
    pub fn from_slice(data: &[T], shape: &[usize]) -> Result<Self> {
        Self::from_vec(data.to_vec(), shape)
    }

    /// Create a tensor filled with a single value
    pub fn full(shape: &[usize], value: T) -> Self {
        let native = Layout::contiguous(shape);
        let data = vec![value; native.size()];
        Self {
            data,
            native,
            view: View::Plain,
        }
    }

    /// Create a tensor filled with zeros
    pub fn zeros(shape: &[usize]) -> Self {
        Self::full(shape, T::zero())
    }

    /// Create a tensor filled with ones
    pub fn ones(shape: &[usize]) -> Self {
        Self::full(shape, T::one())
    }

    /// Wrap a buffer and layout already known to agree
    pub(crate) fn from_parts(data: Vec<T>, native: Layout) -> Self {
        debug_assert_eq!(data.len(), native.size());
        Self {
            data,
            native,
            view: View::Plain,
        }
    }

    // ===== Accessors =====

    /// The layout currently answering geometry queries
    #[inline]
    pub(crate) fn current(&self) -> &Layout {
        match &self.view {
            View::Expanded(layout) => layout,
            View::Plain => &self.native,
        }
    }

    /// Get the logical shape (view-aware)
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.current().shape()
    }

    /// Get the logical strides (view-aware)
    #[inline]
    pub fn strides(&self) -> &[usize] {
        self.current().strides()
    }

    /// Get the logical number of elements (view-aware)
    #[inline]
    pub fn size(&self) -> usize {
        self.current().size()
    }

    /// Get the number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.current().ndim()
    }

    /// Get the extent along one dimension, or `None` past the rank
    #[inline]
    pub fn dim(&self, d: usize) -> Option<usize> {
        self.shape().get(d).copied()
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Whether a broadcast view is active
    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.view.is_expanded()
    }

    /// View the native storage in buffer order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    // ===== Broadcasting =====

    /// Install a broadcast view for `target`, reinterpreting the storage
    ///
    /// Target dimensions are compared against the native shape from the
    /// trailing end; a native extent of 1 (or a missing leading dimension)
    /// stretches to the target extent, anything else must match exactly.
    /// On success the view takes over `shape`/`strides`/`size` with fresh
    /// contiguous strides for `target`, and every data access wraps modulo
    /// the native buffer length, repeating the stretched dimensions
    /// without a copy. Expanding an already-expanded tensor validates
    /// against the native shape and replaces the view.
    ///
    /// Returns [`Error::IncompatibleExpand`] on a conflicting extent or a
    /// target with fewer dimensions than the native shape, and
    /// [`Error::InvalidExpandSize`] on a target extent below 1. A failed
    /// expand leaves the previous view state unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use ndfold::tensor::Tensor;
    ///
    /// # fn main() -> ndfold::error::Result<()> {
    /// let mut t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[1, 3])?;
    /// t.expand(&[4, 3])?;
    /// assert_eq!(t.shape(), &[4, 3]);
    /// assert_eq!(t.size(), 12);
    ///
    /// t.unexpand();
    /// assert_eq!(t.shape(), &[1, 3]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn expand(&mut self, target: &[usize]) -> Result<()> {
        view::check_expand(self.native.shape(), target)?;
        self.view = View::Expanded(Layout::contiguous(target));
        Ok(())
    }

    /// Remove the broadcast view; accessors revert to the native layout
    pub fn unexpand(&mut self) {
        self.view = View::Plain;
    }

    // ===== Index model =====

    /// Decompose a logical linear index into coordinates (view-aware)
    ///
    /// Inverts [`index_of`](Tensor::index_of) for any `linear` below
    /// [`size`](Tensor::size).
    pub fn indices_of(&self, linear: usize) -> Coords {
        self.current().coords_of(linear)
    }

    /// Compose coordinates into a logical linear index (view-aware)
    ///
    /// The dot product of `coords` with the current strides. No bounds
    /// checks; out-of-range coordinates give an out-of-range index.
    pub fn index_of(&self, coords: &[usize]) -> usize {
        self.current().linear_index(coords)
    }

    // ===== Data access =====

    /// Read one element by coordinates, `None` when out of bounds
    pub fn get(&self, coords: &[usize]) -> Option<T> {
        if coords.len() != self.ndim() {
            return None;
        }
        for (&c, &extent) in coords.iter().zip(self.shape().iter()) {
            if c >= extent {
                return None;
            }
        }

        let linear = self.index_of(coords);
        Some(self.data[linear % self.data.len()])
    }

    /// Extract the value of a single-element tensor
    ///
    /// Returns `None` unless the logical size is exactly 1.
    pub fn item(&self) -> Option<T> {
        if self.size() == 1 {
            Some(self.data[0])
        } else {
            None
        }
    }

    /// Materialize the logical element sequence in iteration order
    pub fn to_vec(&self) -> Vec<T> {
        let native = self.data.len();
        (0..self.size()).map(|i| self.data[i % native]).collect()
    }
}

impl<T: Element> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("dtype", &self.dtype())
            .field("expanded", &self.is_expanded())
            .finish()
    }
}

impl<T: Element> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor({:?}, dtype={})", self.shape(), self.dtype())
    }
}
