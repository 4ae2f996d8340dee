//! The read-only sequence variant over shared storage.

use std::sync::Arc;

use radix_text::ByteOrder;

use crate::sequence::impl_sequence_value_traits;
use crate::transform::Transform;
use crate::{Error, ImmutableBytes, MutableBytes, Sequence};

/// A read-only view over shared storage.
///
/// Wrapping aliases the provided storage without copying, and [`Clone`]
/// produces another view of the same storage. No handle can write through
/// the view: reading goes through [`as_slice`](Sequence::as_slice), and the
/// only way to a writable buffer is an explicit copy
/// ([`to_mutable`](Self::to_mutable)). Every transform allocates a fresh
/// buffer (the aliased storage is never touched) and returns a new
/// read-only sequence over the result.
///
/// Mutable access doesn't exist on this type:
///
/// ```compile_fail
/// use byteseq::ReadOnlyBytes;
///
/// let mut b = ReadOnlyBytes::wrap(vec![1, 2, 3]);
/// b.as_mut_slice(); // no such method
/// ```
#[derive(Clone)]
pub struct ReadOnlyBytes {
    buf: Arc<[u8]>,
    order: ByteOrder,
}

impl ReadOnlyBytes {
    /// Wraps existing storage without a defensive copy.
    ///
    /// Accepts anything that converts into shared storage: an existing
    /// `Arc<[u8]>` aliases, a `Vec<u8>` moves, a `&[u8]` copies once.
    pub fn wrap(storage: impl Into<Arc<[u8]>>) -> Self {
        Self {
            buf: storage.into(),
            order: ByteOrder::BigEndian,
        }
    }

    pub(crate) fn with_storage(buf: Arc<[u8]>, order: ByteOrder) -> Self {
        Self { buf, order }
    }

    /// Re-tags the byte order without touching storage.
    #[must_use]
    pub fn with_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    /// Whether two views alias the same storage.
    #[must_use]
    pub fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.buf, &other.buf)
    }

    /// Copies into a mutable sequence.
    ///
    /// The read-only storage is never handed out for mutation; a copy is
    /// the only way back to a writable buffer.
    #[must_use]
    pub fn to_mutable(&self) -> MutableBytes {
        MutableBytes::with_storage(Box::from(&*self.buf), self.order)
    }

    /// Copies into an immutable sequence.
    #[must_use]
    pub fn to_immutable(&self) -> ImmutableBytes {
        ImmutableBytes::with_storage(Box::from(&*self.buf), self.order)
    }
}

impl Sequence for ReadOnlyBytes {
    fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    fn order(&self) -> ByteOrder {
        self.order
    }

    fn apply<T: Transform + ?Sized>(&self, transform: &T) -> Result<Self, Error> {
        Ok(Self {
            buf: Arc::from(transform.apply(&self.buf)?),
            order: self.order,
        })
    }
}

impl_sequence_value_traits!(ReadOnlyBytes);
