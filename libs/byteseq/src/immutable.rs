//! The always-copying immutable sequence variant.

use radix_text::ByteOrder;

use crate::num::impl_num_constructors;
use crate::sequence::impl_sequence_value_traits;
use crate::transform::Transform;
use crate::{Error, MutableBytes, ReadOnlyBytes, Sequence};

/// A byte sequence that owns a private buffer and never changes it.
///
/// Construction always copies, so no outside handle can reach the storage.
/// Every transform allocates a fresh buffer regardless of the transformer's
/// in-place capability and returns a new immutable sequence; the original
/// is byte-for-byte untouched. Instances can be shared across threads
/// without synchronization.
///
/// Mutation and wiping don't exist on this type:
///
/// ```compile_fail
/// use byteseq::ImmutableBytes;
///
/// let mut b = ImmutableBytes::copy_of(&[1, 2, 3]);
/// b.secure_wipe(); // no such method
/// ```
#[derive(Clone)]
pub struct ImmutableBytes {
    buf: Box<[u8]>,
    order: ByteOrder,
}

impl ImmutableBytes {
    /// Copies the given bytes into a new immutable sequence.
    #[must_use]
    pub fn copy_of(bytes: &[u8]) -> Self {
        Self {
            buf: Box::from(bytes),
            order: ByteOrder::BigEndian,
        }
    }

    pub(crate) fn with_storage(buf: Box<[u8]>, order: ByteOrder) -> Self {
        Self { buf, order }
    }

    impl_num_constructors! {
        from_u8 => u8,
        from_i8 => i8,
        from_u16 => u16,
        from_i16 => i16,
        from_u32 => u32,
        from_i32 => i32,
        from_u64 => u64,
        from_i64 => i64,
        from_u128 => u128,
        from_i128 => i128,
        from_f32 => f32,
        from_f64 => f64,
    }

    /// Re-tags the byte order without touching storage.
    #[must_use]
    pub fn with_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    /// Copies into a mutable sequence; this sequence stays usable and
    /// unaffected by whatever happens to the copy.
    #[must_use]
    pub fn to_mutable(&self) -> MutableBytes {
        MutableBytes::with_storage(self.buf.clone(), self.order)
    }

    /// Converts into a read-only view over this storage without copying.
    #[must_use]
    pub fn into_read_only(self) -> ReadOnlyBytes {
        ReadOnlyBytes::with_storage(self.buf.into(), self.order)
    }
}

impl Sequence for ImmutableBytes {
    fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    fn order(&self) -> ByteOrder {
        self.order
    }

    fn apply<T: Transform + ?Sized>(&self, transform: &T) -> Result<Self, Error> {
        Ok(Self {
            buf: transform.apply(&self.buf)?,
            order: self.order,
        })
    }
}

impl_sequence_value_traits!(ImmutableBytes);
