//! Length-changing transformers. None of these can work in place.

use crate::Error;
use crate::transform::Transform;

/// Grows or truncates to a fixed length.
///
/// The default anchor keeps the end of the sequence: growth zero-pads in
/// front and truncation drops leading bytes, which preserves the numeric
/// value of a big-endian sequence when growing. [`Resize::keep_from_start`]
/// anchors the beginning instead.
#[derive(Debug, Clone, Copy)]
pub struct Resize {
    len: usize,
    keep_start: bool,
}

impl Resize {
    /// Resizes while keeping the end of the sequence.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            keep_start: false,
        }
    }

    /// Resizes while keeping the start of the sequence.
    #[must_use]
    pub const fn keep_from_start(len: usize) -> Self {
        Self {
            len,
            keep_start: true,
        }
    }
}

impl Transform for Resize {
    fn apply(&self, input: &[u8]) -> Result<Box<[u8]>, Error> {
        let mut out = vec![0u8; self.len];
        let copy = input.len().min(self.len);
        if self.keep_start {
            out[..copy].copy_from_slice(&input[..copy]);
        } else {
            out[self.len - copy..].copy_from_slice(&input[input.len() - copy..]);
        }

        Ok(out.into_boxed_slice())
    }
}

/// Appends bytes after the end of the sequence.
#[derive(Debug, Clone, Copy)]
pub struct Append<'a>(pub &'a [u8]);

impl Transform for Append<'_> {
    fn apply(&self, input: &[u8]) -> Result<Box<[u8]>, Error> {
        let mut out = Vec::with_capacity(input.len() + self.0.len());
        out.extend_from_slice(input);
        out.extend_from_slice(self.0);
        Ok(out.into_boxed_slice())
    }
}

/// Copies out a sub-range.
#[derive(Debug, Clone, Copy)]
pub struct Extract {
    offset: usize,
    len: usize,
}

impl Extract {
    /// Creates a transformer copying `len` bytes starting at `offset`.
    #[must_use]
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }
}

impl Transform for Extract {
    fn apply(&self, input: &[u8]) -> Result<Box<[u8]>, Error> {
        let end = self.offset.saturating_add(self.len);
        if end > input.len() {
            return Err(Error::OutOfRange {
                index: end,
                len: input.len(),
            });
        }

        Ok(Box::from(&input[self.offset..end]))
    }
}
