//! The read-side contract shared by all sequence variants.

use std::cmp::Ordering;

use num_bigint::BigUint;
use radix_text::radix::Radix;
use radix_text::{ByteOrder, Codec, base64, hex};

use crate::Error;
use crate::num::impl_num_views;
use crate::transform::Transform;

/// Read access, text encodings, numeric views, and variant-preserving
/// transform application.
///
/// What a transform application does with the storage is decided by the
/// implementing variant, never by the transformer: this trait's
/// [`apply`](Self::apply) always allocates, and only
/// [`MutableBytes::apply_mut`](crate::MutableBytes::apply_mut) ever rewrites
/// storage.
pub trait Sequence: Sized {
    /// Read access to the backing storage.
    fn as_slice(&self) -> &[u8];

    /// The logical byte-order tag.
    ///
    /// The tag decides how numeric views and text encodings read the
    /// sequence; it never reorders the storage itself.
    fn order(&self) -> ByteOrder;

    /// Applies a transformer, allocating a fresh buffer for the result.
    ///
    /// The result is the same variant (and keeps the order tag) of the
    /// receiver; the receiver's storage is not modified.
    ///
    /// # Errors
    ///
    /// Propagates the transformer's error; the receiver is unchanged either
    /// way.
    fn apply<T: Transform + ?Sized>(&self, transform: &T) -> Result<Self, Error>;

    /// Byte length of the sequence.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Bit length of the sequence.
    fn bit_len(&self) -> usize {
        self.len() * 8
    }

    /// Encodes the sequence as lower-case hex.
    fn to_hex(&self) -> String {
        hex::to_string(self.as_slice(), self.order())
    }

    /// Encodes the sequence as upper-case hex.
    fn to_hex_upper(&self) -> String {
        hex::to_string_upper(self.as_slice(), self.order())
    }

    /// Encodes the sequence as standard-alphabet base64.
    fn to_base64(&self) -> String {
        base64::to_string(self.as_slice(), self.order())
    }

    /// Encodes the sequence as URL-safe base64.
    fn to_base64_url_safe(&self) -> String {
        base64::to_string_url_safe(self.as_slice(), self.order())
    }

    /// Encodes the sequence as digits of an arbitrary radix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Codec`] if the radix is outside `2..=36`.
    fn to_radix(&self, radix: u8) -> Result<String, Error> {
        Ok(Radix::new(radix)?.encode(self.as_slice(), self.order()))
    }

    /// Encodes the sequence through any [`Codec`].
    fn encode_with<C: Codec + ?Sized>(&self, codec: &C) -> String {
        codec.encode(self.as_slice(), self.order())
    }

    /// Whether another sequence holds the same bytes, ignoring byte order
    /// and variant.
    fn equals_content<S: Sequence>(&self, other: &S) -> bool {
        self.as_slice() == other.as_slice()
    }

    /// Compares content as unsigned bytes, lexicographically; on a common
    /// prefix the shorter sequence is smaller. Byte order and variant are
    /// ignored.
    fn compare_content<S: Sequence>(&self, other: &S) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }

    /// Reads the sequence as an arbitrarily large unsigned integer per its
    /// byte order. Works at any length.
    fn to_biguint(&self) -> BigUint {
        match self.order() {
            ByteOrder::BigEndian => BigUint::from_bytes_be(self.as_slice()),
            ByteOrder::LittleEndian => BigUint::from_bytes_le(self.as_slice()),
        }
    }

    /// Reads the sequence as a [`char`] from exactly four bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LenMismatch`] for the wrong width and
    /// [`Error::InvalidChar`] if the value is not a Unicode scalar.
    fn to_char(&self) -> Result<char, Error> {
        let code = self.to_u32()?;
        char::from_u32(code).ok_or(Error::InvalidChar(code))
    }

    impl_num_views! {
        to_u8 => u8,
        to_i8 => i8,
        to_u16 => u16,
        to_i16 => i16,
        to_u32 => u32,
        to_i32 => i32,
        to_u64 => u64,
        to_i64 => i64,
        to_u128 => u128,
        to_i128 => i128,
        to_f32 => f32,
        to_f64 => f64,
    }
}

/// Provides the value-type standard traits for a sequence variant:
/// equality and hashing over content *and* order tag, plus a [`Debug`]
/// form that shows the raw storage as hex.
///
/// [`Debug`]: std::fmt::Debug
macro_rules! impl_sequence_value_traits {
    ($Ty:ident) => {
        impl PartialEq for $Ty {
            fn eq(&self, other: &Self) -> bool {
                use $crate::Sequence as _;
                self.order() == other.order() && self.as_slice() == other.as_slice()
            }
        }

        impl Eq for $Ty {}

        impl ::std::hash::Hash for $Ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                use $crate::Sequence as _;
                self.order().hash(state);
                self.as_slice().hash(state);
            }
        }

        impl ::std::fmt::Debug for $Ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                use $crate::Sequence as _;
                f.debug_struct(stringify!($Ty))
                    .field("order", &self.order())
                    .field(
                        "storage",
                        &::radix_text::hex::to_string(
                            self.as_slice(),
                            ::radix_text::ByteOrder::BigEndian,
                        ),
                    )
                    .finish()
            }
        }
    };
}

pub(crate) use impl_sequence_value_traits;
