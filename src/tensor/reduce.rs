//! Whole-tensor and per-dimension reductions
//!
//! Reductions fold logical elements with a caller-supplied combining
//! operator, then pass the accumulator and the folded element count to a
//! finalizer. Results always materialize into fresh storage; a reduction
//! output is never itself a view, even when its input is expanded.

use super::core::Tensor;
use super::layout::Layout;
use super::shape::Shape;
use crate::dtype::Element;
use crate::error::Result;

/// Output shape of a per-dimension reduction
///
/// With `keep_dim` the reduced dimension stays with extent 1; otherwise it
/// is removed, and reducing away the last dimension leaves shape `[1]`.
fn reduced_shape(shape: &[usize], dim: usize, keep_dim: bool) -> Shape {
    if keep_dim {
        shape
            .iter()
            .enumerate()
            .map(|(i, &s)| if i == dim { 1 } else { s })
            .collect()
    } else {
        let out: Shape = shape
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != dim)
            .map(|(_, &s)| s)
            .collect();
        if out.is_empty() {
            Shape::from([1])
        } else {
            out
        }
    }
}

impl<T: Element> Tensor<T> {
    /// Fold all logical elements into a single value
    ///
    /// Seeds the accumulator from the first element, then combines the
    /// remaining elements in ascending logical order. The result is a
    /// fresh tensor of shape `[1]`.
    ///
    /// # Panics
    ///
    /// Panics if the tensor has no elements.
    ///
    /// # Example
    ///
    /// ```
    /// use ndfold::tensor::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[3]).unwrap();
    /// let total = t.reduce(|a, v| a + v);
    /// assert_eq!(total.shape(), &[1]);
    /// assert_eq!(total.item(), Some(6.0));
    /// ```
    pub fn reduce<F>(&self, combine: F) -> Tensor<T>
    where
        F: Fn(T, T) -> T,
    {
        self.reduce_with(combine, |acc, _| acc)
    }

    /// Fold all logical elements, then finalize with the element count
    ///
    /// `finalize` receives the accumulator and the number of folded
    /// elements, which is what mean-style reductions need.
    ///
    /// # Panics
    ///
    /// Panics if the tensor has no elements.
    ///
    /// # Example
    ///
    /// ```
    /// use ndfold::tensor::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![2.0f32, 4.0, 6.0], &[3]).unwrap();
    /// let mean = t.reduce_with(|a, v| a + v, |acc, n| acc / n as f32);
    /// assert_eq!(mean.item(), Some(4.0));
    /// ```
    pub fn reduce_with<F, G>(&self, combine: F, finalize: G) -> Tensor<T>
    where
        F: Fn(T, T) -> T,
        G: Fn(T, usize) -> T,
    {
        let size = self.size();
        assert!(size > 0, "reduce requires at least one element");

        let data = self.as_slice();
        let native = data.len();
        let mut acc = data[0];
        for i in 1..size {
            acc = combine(acc, data[i % native]);
        }

        Tensor::from_parts(vec![finalize(acc, size)], Layout::contiguous(&[1]))
    }

    /// Fold every run of elements along `dim` into one output element
    ///
    /// The output keeps the reduced dimension with extent 1 when
    /// `keep_dim` is set and removes it otherwise; either way it is a
    /// fresh tensor with `size / extent` elements, one per run, in run
    /// iteration order.
    ///
    /// Returns [`Error::InvalidDimension`](crate::error::Error::InvalidDimension)
    /// for a negative `dim` and
    /// [`Error::DimensionOutOfRange`](crate::error::Error::DimensionOutOfRange)
    /// for `dim >= ndim()`.
    ///
    /// # Panics
    ///
    /// Panics if the tensor has no elements.
    ///
    /// # Example
    ///
    /// ```
    /// use ndfold::tensor::Tensor;
    ///
    /// # fn main() -> ndfold::error::Result<()> {
    /// let t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], &[2, 2])?;
    /// let sums = t.reduce_dim(0, false, |a, v| a + v)?;
    /// assert_eq!(sums.shape(), &[2]);
    /// assert_eq!(sums.to_vec(), vec![4.0, 6.0]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn reduce_dim<F>(&self, dim: isize, keep_dim: bool, combine: F) -> Result<Tensor<T>>
    where
        F: Fn(T, T) -> T,
    {
        self.reduce_dim_with(dim, keep_dim, combine, |acc, _| acc)
    }

    /// Per-dimension reduction with a count-aware finalizer
    ///
    /// Every run folds like [`reduce_with`](Tensor::reduce_with): the
    /// accumulator seeds from the run's first element and combines the
    /// rest in ascending position order; `finalize` then receives the
    /// accumulator and the run length (the extent along `dim`).
    ///
    /// # Panics
    ///
    /// Panics if the tensor has no elements.
    pub fn reduce_dim_with<F, G>(
        &self,
        dim: isize,
        keep_dim: bool,
        combine: F,
        finalize: G,
    ) -> Result<Tensor<T>>
    where
        F: Fn(T, T) -> T,
        G: Fn(T, usize) -> T,
    {
        let d = self.check_dim(dim)?;
        assert!(self.size() > 0, "reduce requires at least one element");

        let extent = self.shape()[d];
        let stride = self.strides()[d];
        let data = self.as_slice();
        let native = data.len();
        let runs = self.size() / extent;

        let mut out = Vec::with_capacity(runs);
        for n in 0..runs {
            let offset = self.dim_offset_raw(n, d);
            let mut acc = data[offset];
            for v in 1..extent {
                acc = combine(acc, data[(offset + v * stride) % native]);
            }
            out.push(finalize(acc, extent));
        }

        let shape = reduced_shape(self.shape(), d, keep_dim);
        Ok(Tensor::from_parts(out, Layout::contiguous(&shape)))
    }
}
