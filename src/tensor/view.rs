//! Broadcast view overlay

use super::layout::Layout;
use crate::error::{Error, Result};

/// Addressing overlay installed by a broadcasting expand
///
/// `Plain` tensors answer every geometry query from their native layout.
/// `Expanded` tensors carry a replacement layout that takes over shape,
/// stride, and size queries while the native buffer keeps supplying the
/// data; offsets are folded back into the buffer modulo its length, which
/// is what realizes the repeat without copying.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// No overlay; the native layout is authoritative
    Plain,
    /// Overlay layout from an active expand
    Expanded(Layout),
}

impl View {
    /// Whether an expand overlay is active
    #[inline]
    pub fn is_expanded(&self) -> bool {
        matches!(self, View::Expanded(_))
    }
}

/// Validate a broadcast of `native` to `target`
///
/// The target must have at least as many dimensions as the native shape.
/// Dimensions are then paired from the trailing end, with the native
/// extent defaulting to 1 where the native shape is shorter; every pair
/// must either agree or stretch a native extent of 1, and target extents
/// below 1 are rejected. All checks run before any state changes, so a
/// failed expand leaves its tensor untouched.
pub(crate) fn check_expand(native: &[usize], target: &[usize]) -> Result<()> {
    if target.len() < native.len() {
        return Err(Error::incompatible_expand(native, target));
    }

    for (k, &t) in target.iter().rev().enumerate() {
        let n = if k < native.len() {
            native[native.len() - 1 - k]
        } else {
            1
        };
        if n != 1 && t != n {
            return Err(Error::incompatible_expand(native, target));
        }
        if t < 1 {
            return Err(Error::InvalidExpandSize { size: t });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_stretches_ones() {
        assert!(check_expand(&[1, 3], &[4, 3]).is_ok());
        assert!(check_expand(&[3], &[2, 5, 3]).is_ok());
        assert!(check_expand(&[2, 3], &[2, 3]).is_ok());
        assert!(check_expand(&[1, 1], &[7, 9]).is_ok());
    }

    #[test]
    fn test_expand_conflict() {
        let err = check_expand(&[1, 3], &[2, 4]).unwrap_err();
        assert!(matches!(err, Error::IncompatibleExpand { .. }));
    }

    #[test]
    fn test_expand_zero_extent() {
        let err = check_expand(&[1, 3], &[0, 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidExpandSize { size: 0 }));
    }

    #[test]
    fn test_expand_conflict_beats_zero() {
        // Within a pair, the extent conflict is reported before the
        // zero-extent check.
        let err = check_expand(&[2, 3], &[2, 0]).unwrap_err();
        assert!(matches!(err, Error::IncompatibleExpand { .. }));
    }

    #[test]
    fn test_expand_rejects_fewer_dims() {
        let err = check_expand(&[2, 3], &[3]).unwrap_err();
        assert!(matches!(err, Error::IncompatibleExpand { .. }));
    }
}
