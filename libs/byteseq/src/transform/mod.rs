//! Transformer protocol.
//!
//! A [`Transform`] turns one byte buffer into another; an
//! [`InPlaceTransform`] can additionally rewrite a length-preserving result
//! into the existing buffer. Which entry point runs is decided by the
//! sequence variant, never by the transformer:
//! [`MutableBytes::apply_mut`](crate::MutableBytes::apply_mut) is the only
//! caller of the in-place path, while [`Sequence::apply`](crate::Sequence::apply)
//! on any variant allocates a fresh buffer.
//!
//! Transformers are grouped by what they do to the content:
//!
//! - [`bitwise`]: XOR/OR/AND/NOT, single-bit edits, bit shifts
//! - [`arrange`]: byte reversal, sorting, shuffling
//! - [`resize`]: length changes, concatenation, sub-range copies
//! - [`service`]: digest, HMAC, checksum, and compression adapters

pub mod arrange;
pub mod bitwise;
pub mod resize;
pub mod service;

use crate::Error;

/// An operation from one byte buffer to another.
///
/// Transformers are stateless aside from their own parameters. They hold no
/// reference to any sequence and may be applied any number of times.
pub trait Transform {
    /// Computes the transformed bytes into a fresh buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the transform's contract is violated, for example
    /// by a mismatched operand length. The input is never modified.
    fn apply(&self, input: &[u8]) -> Result<Box<[u8]>, Error>;
}

/// A [`Transform`] that preserves length and can rewrite a buffer directly.
pub trait InPlaceTransform: Transform {
    /// Rewrites `buf` in place.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Transform::apply`]. On [`Err`] the buffer is
    /// left unchanged.
    fn apply_mut(&self, buf: &mut [u8]) -> Result<(), Error>;
}

/// Provides the [`Transform`] implementation for a type implementing
/// [`InPlaceTransform`] by copying the input and rewriting the copy.
macro_rules! impl_transform_via_mut {
    (for [$($gen:tt)*] $Ty:ty) => {
        impl <$($gen)*> $crate::transform::Transform for $Ty {
            fn apply(&self, input: &[u8]) -> Result<Box<[u8]>, $crate::Error> {
                let mut buf = Box::<[u8]>::from(input);
                $crate::transform::InPlaceTransform::apply_mut(self, &mut buf)?;
                Ok(buf)
            }
        }
    };
    ($Ty:ty) => {
        impl $crate::transform::Transform for $Ty {
            fn apply(&self, input: &[u8]) -> Result<Box<[u8]>, $crate::Error> {
                let mut buf = Box::<[u8]>::from(input);
                $crate::transform::InPlaceTransform::apply_mut(self, &mut buf)?;
                Ok(buf)
            }
        }
    };
}

pub(crate) use impl_transform_via_mut;
