//! Whole-tensor and per-dimension iteration
//!
//! Traversal always walks logical indices in ascending order and resolves
//! each one into the native buffer modulo its length, so a broadcast view
//! replays its storage instead of copying it. Per-dimension traversal
//! visits, for every combination of the other coordinates, the full run
//! of elements along the chosen dimension.

use super::core::Tensor;
use crate::dtype::Element;
use crate::error::{Error, Result};

impl<T: Element> Tensor<T> {
    /// Resolve a dimension argument against the current rank
    pub(crate) fn check_dim(&self, dim: isize) -> Result<usize> {
        if dim < 0 {
            return Err(Error::InvalidDimension { dim });
        }
        let d = dim as usize;
        if d >= self.ndim() {
            return Err(Error::DimensionOutOfRange {
                dim: d,
                ndim: self.ndim(),
            });
        }
        Ok(d)
    }

    /// Storage offset of the first element of run `n` along dimension `d`
    ///
    /// `d` must already be validated against the rank.
    pub(crate) fn dim_offset_raw(&self, n: usize, d: usize) -> usize {
        let v = self.shape()[d];
        let s = self.strides()[d];
        (v * s * (n / s) + n % s) % self.as_slice().len()
    }

    /// Run index along dimension `d` of the element at logical index `i`
    pub(crate) fn dim_index_raw(&self, i: usize, d: usize) -> usize {
        let v = self.shape()[d];
        let s = self.strides()[d];
        let i = i % self.size();
        s * (i / (v * s)) + i % s
    }

    /// Storage offset of the first element of the `n`-th run along `dim`
    ///
    /// A run is one full sweep of positions along `dim` with every other
    /// coordinate held fixed; a tensor has `size / extent` of them,
    /// indexed in iteration order. The returned offset is already folded
    /// into the native buffer.
    ///
    /// Returns [`Error::InvalidDimension`] for a negative `dim` and
    /// [`Error::DimensionOutOfRange`] for `dim >= ndim()`.
    ///
    /// # Panics
    ///
    /// Panics if the tensor has no elements.
    pub fn dim_offset(&self, n: usize, dim: isize) -> Result<usize> {
        let d = self.check_dim(dim)?;
        Ok(self.dim_offset_raw(n, d))
    }

    /// Run index along `dim` of the element at logical index `i`
    ///
    /// Maps a logical flat index (reduced modulo the current size) to the
    /// index of the run along `dim` containing it, without a full
    /// coordinate decomposition.
    ///
    /// Returns [`Error::InvalidDimension`] for a negative `dim` and
    /// [`Error::DimensionOutOfRange`] for `dim >= ndim()`.
    ///
    /// # Panics
    ///
    /// Panics if the tensor has no elements.
    pub fn dim_index(&self, i: usize, dim: isize) -> Result<usize> {
        let d = self.check_dim(dim)?;
        Ok(self.dim_index_raw(i, d))
    }

    /// Visit every logical element in ascending index order
    ///
    /// The callback receives the element value and its resolved offset in
    /// the native buffer. Over an expanded view the logical size exceeds
    /// the buffer length and offsets wrap, replaying the stored values.
    ///
    /// # Example
    ///
    /// ```
    /// use ndfold::tensor::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![5.0f32, 6.0, 7.0], &[3]).unwrap();
    /// let mut seen = Vec::new();
    /// t.for_each(|value, offset| seen.push((value, offset)));
    /// assert_eq!(seen, vec![(5.0, 0), (6.0, 1), (7.0, 2)]);
    /// ```
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(T, usize),
    {
        let data = self.as_slice();
        let native = data.len();
        for i in 0..self.size() {
            let at = i % native;
            f(data[at], at);
        }
    }

    /// Visit every element run by run along `dim`
    ///
    /// For each run index `n` in `0..size / extent`, the callback is
    /// invoked once per position along `dim` in ascending order, with the
    /// element value, its native buffer offset, and `n`. A tensor with no
    /// elements produces no calls.
    ///
    /// Returns [`Error::InvalidDimension`] for a negative `dim` and
    /// [`Error::DimensionOutOfRange`] for `dim >= ndim()`.
    ///
    /// # Example
    ///
    /// ```
    /// use ndfold::tensor::Tensor;
    ///
    /// # fn main() -> ndfold::error::Result<()> {
    /// let t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], &[2, 2])?;
    /// let mut columns = vec![Vec::new(), Vec::new()];
    /// t.for_each_dim(0, |value, _, n| columns[n].push(value))?;
    /// assert_eq!(columns, vec![vec![1.0, 3.0], vec![2.0, 4.0]]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn for_each_dim<F>(&self, dim: isize, mut f: F) -> Result<()>
    where
        F: FnMut(T, usize, usize),
    {
        let d = self.check_dim(dim)?;
        if self.size() == 0 {
            return Ok(());
        }

        let extent = self.shape()[d];
        let stride = self.strides()[d];
        let data = self.as_slice();
        let native = data.len();
        let runs = self.size() / extent;

        for n in 0..runs {
            let offset = self.dim_offset_raw(n, d);
            for v in 0..extent {
                let at = (offset + v * stride) % native;
                f(data[at], at, n);
            }
        }
        Ok(())
    }
}
