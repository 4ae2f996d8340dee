//! The freely mutable sequence variant.

use radix_text::ByteOrder;

use crate::num::impl_num_constructors;
use crate::sequence::impl_sequence_value_traits;
use crate::transform::{InPlaceTransform, Transform};
use crate::wipe::WipeOnDrop;
use crate::{Error, ImmutableBytes, ReadOnlyBytes, Sequence};

/// A byte sequence with a freely mutable, privately owned buffer.
///
/// In-place-capable transformers applied through
/// [`apply_mut`](Self::apply_mut) rewrite the storage directly and keep the
/// backing allocation; [`apply`](Sequence::apply) allocates like on every
/// other variant but still yields a mutable result. The length is fixed at
/// construction; transforms that change length return a new sequence.
///
/// This is the only variant that can hand out `&mut` storage or scrub
/// itself; the operations simply don't exist on the other variants. As
/// with any `&mut`-based API, mutation requires exclusive access; there is
/// no internal synchronization.
#[derive(Clone)]
pub struct MutableBytes {
    buf: Box<[u8]>,
    order: ByteOrder,
}

impl MutableBytes {
    /// Takes ownership of existing storage without copying.
    ///
    /// The new sequence is tagged big-endian; re-tag with
    /// [`with_order`](Self::with_order).
    #[must_use]
    pub fn wrap(storage: Vec<u8>) -> Self {
        Self {
            buf: storage.into_boxed_slice(),
            order: ByteOrder::BigEndian,
        }
    }

    /// Copies the given bytes into a new sequence.
    #[must_use]
    pub fn copy_of(bytes: &[u8]) -> Self {
        Self {
            buf: Box::from(bytes),
            order: ByteOrder::BigEndian,
        }
    }

    /// Allocates a zero-filled sequence.
    #[must_use]
    pub fn alloc(len: usize) -> Self {
        Self::wrap(vec![0; len])
    }

    /// Allocates a sequence filled from the cryptographically strong thread
    /// RNG.
    #[must_use]
    pub fn random(len: usize) -> Self {
        use rand::RngCore as _;

        let mut buf = vec![0; len];
        rand::rng().fill_bytes(&mut buf);
        Self::wrap(buf)
    }

    /// Allocates a sequence filled from a seeded generator; the same seed
    /// reproduces the same bytes.
    #[must_use]
    pub fn pseudo_random(len: usize, seed: u64) -> Self {
        use rand::{RngCore as _, SeedableRng as _};

        let mut buf = vec![0; len];
        rand::rngs::StdRng::seed_from_u64(seed).fill_bytes(&mut buf);
        Self::wrap(buf)
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

    /// Mutable access to the live backing storage.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Unwraps into the backing storage.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.buf.into_vec()
    }

    /// Applies an in-place-capable transformer directly to the storage.
    ///
    /// The backing allocation is kept (no copy is made) and the call is
    /// chainable.
    ///
    /// # Errors
    ///
    /// Propagates the transformer's error; on [`Err`] the storage is
    /// unchanged.
    pub fn apply_mut<T: InPlaceTransform + ?Sized>(
        &mut self,
        transform: &T,
    ) -> Result<&mut Self, Error> {
        transform.apply_mut(&mut self.buf)?;
        Ok(self)
    }

    /// Overwrites the storage with zeroes.
    ///
    /// Uses volatile writes so the scrub isn't optimized away when the
    /// sequence is dropped right after. Length and order tag are preserved.
    pub fn secure_wipe(&mut self) {
        for b in self.buf.iter_mut() {
            // SAFETY: the pointer comes from a live `&mut` and is valid for
            // a one-byte write.
            unsafe { std::ptr::write_volatile(b, 0) };
        }

        std::sync::atomic::compiler_fence(std::sync::atomic::Ordering::SeqCst);
    }

    /// Overwrites the storage with fresh random bytes.
    pub fn secure_wipe_random(&mut self) {
        use rand::RngCore as _;

        rand::rng().fill_bytes(&mut self.buf);
    }

    /// Overwrites the storage from a seeded generator; the same seed
    /// reproduces the same bytes.
    pub fn fill_pseudo_random(&mut self, seed: u64) {
        use rand::{RngCore as _, SeedableRng as _};

        rand::rngs::StdRng::seed_from_u64(seed).fill_bytes(&mut self.buf);
    }

    /// Wraps the sequence in a guard that wipes it on scope exit.
    pub fn wipe_on_drop(self) -> WipeOnDrop {
        WipeOnDrop::new(self)
    }

    /// Copies into an immutable sequence; the original stays usable.
    #[must_use]
    pub fn to_immutable(&self) -> ImmutableBytes {
        ImmutableBytes::with_storage(self.buf.clone(), self.order)
    }

    /// Converts into an immutable sequence without copying; handing over
    /// ownership makes the defensive copy unnecessary.
    #[must_use]
    pub fn into_immutable(self) -> ImmutableBytes {
        ImmutableBytes::with_storage(self.buf, self.order)
    }

    /// Converts into a read-only view over this storage; no handle can
    /// mutate it afterwards.
    #[must_use]
    pub fn into_read_only(self) -> ReadOnlyBytes {
        ReadOnlyBytes::with_storage(self.buf.into(), self.order)
    }
}

impl Sequence for MutableBytes {
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

impl_sequence_value_traits!(MutableBytes);

macro_rules! impl_bit_assign {
    ($Tr:ident::$fn:ident => $T:ident) => {
        impl ::std::ops::$Tr<&[u8]> for MutableBytes {
            /// Applies the operation in place.
            ///
            /// # Panics
            ///
            /// Panics if the operand length differs from the sequence
            /// length; use [`MutableBytes::apply_mut`] with the matching
            /// transformer to get an error instead.
            fn $fn(&mut self, rhs: &[u8]) {
                self.apply_mut(&$crate::transform::bitwise::$T(rhs))
                    .expect("operand length must match the sequence length");
            }
        }
    };
}

impl_bit_assign!(BitXorAssign::bitxor_assign => Xor);
impl_bit_assign!(BitOrAssign::bitor_assign => Or);
impl_bit_assign!(BitAndAssign::bitand_assign => And);

impl std::ops::Not for MutableBytes {
    type Output = Self;

    fn not(mut self) -> Self {
        self.apply_mut(&crate::transform::bitwise::Not)
            .expect("inverting bytes cannot fail");
        self
    }
}
