//! Strides type: element offsets for tensor memory layout

use super::shape::STACK_DIMS;
use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;

/// Strides type: offsets between consecutive positions along each dimension
///
/// Unsigned, because every layout in this engine is derived with the
/// contiguous row-major convention and never runs backwards.
/// NOTE: strides are in elements, not bytes.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Strides(SmallVec<[usize; STACK_DIMS]>);

impl Strides {
    /// Create empty strides
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Create empty strides with a capacity hint
    pub fn with_capacity(capacity: usize) -> Self {
        Self(SmallVec::with_capacity(capacity))
    }

    /// Add a stride value
    pub fn push(&mut self, stride: usize) {
        self.0.push(stride);
    }

    /// Reverse the stride order in place
    pub fn reverse(&mut self) {
        self.0.reverse();
    }

    /// Get the strides as a slice
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_slice()
    }

    /// Number of stride entries
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no stride entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for Strides {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl AsRef<[usize]> for Strides {
    fn as_ref(&self) -> &[usize] {
        self.0.as_slice()
    }
}

impl fmt::Debug for Strides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<SmallVec<[usize; STACK_DIMS]>> for Strides {
    fn from(v: SmallVec<[usize; STACK_DIMS]>) -> Self {
        Self(v)
    }
}

impl From<Vec<usize>> for Strides {
    fn from(v: Vec<usize>) -> Self {
        Self(SmallVec::from_vec(v))
    }
}

impl From<&[usize]> for Strides {
    fn from(v: &[usize]) -> Self {
        Self(SmallVec::from_slice(v))
    }
}

impl<const N: usize> From<[usize; N]> for Strides {
    fn from(v: [usize; N]) -> Self {
        Self(SmallVec::from_slice(&v))
    }
}

impl FromIterator<usize> for Strides {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(SmallVec::from_iter(iter))
    }
}
