//! Binary-to-text codecs over byte sequences.
//!
//! Renders byte sequences as positional-notation strings and parses them
//! back. Three codecs share one [`Codec`] contract:
//!
//! - [`radix`]: any base from 2 to 36, digits `0-9a-z`, computed with
//!   byte-array long division since those bases don't align with bytes.
//! - [`hex`]: base 16 via per-byte lookup, case selectable on encode.
//! - [`base64`]: standard and URL-safe alphabets, `=` padding, per-triplet
//!   lookup.
//!
//! Every codec takes a [`ByteOrder`]. A little-endian sequence is logically
//! reversed around the conversion while its storage stays untouched, so
//! `encode(bytes, LittleEndian)` equals `encode(reversed bytes, BigEndian)`
//! for all three codecs.
//!
//! Decoding is strict: input outside the codec's alphabet or with an
//! impossible length is rejected with an [`Error`], never silently dropped
//! or partially decoded.

// for benchmarks
#[cfg(test)]
use criterion as _;

pub mod base64;
pub mod hex;
pub mod radix;

mod alphabet;
mod magnitude;
mod order;
#[cfg(test)]
mod tests;

pub use order::ByteOrder;

/// Error decoding text into bytes or configuring a codec.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested radix is outside the supported range.
    #[error("radix {0} is outside the supported range 2..=36")]
    InvalidRadix(u8),
    /// The input contained a character outside the codec's alphabet.
    #[error("{char:?} is not a digit in base {radix}")]
    InvalidDigit {
        /// The offending character.
        char: char,
        /// The radix it was decoded against.
        radix: u8,
    },
    /// Hex input must come in digit pairs.
    #[error("hex input has an odd number of digits")]
    OddLength,
    /// Base64 input length is impossible for any byte sequence.
    #[error("base64 input length is invalid")]
    BadPadding,
}

/// Shared contract of the text codecs.
///
/// Encoding cannot fail; decoding rejects malformed input rather than
/// returning a best-effort result.
pub trait Codec {
    /// Renders bytes as text, reading the sequence in the given order.
    fn encode(&self, bytes: &[u8], order: ByteOrder) -> String;

    /// Parses text back into bytes, storing them per the given order.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is not valid for this codec.
    fn decode(&self, input: &str, order: ByteOrder) -> Result<Vec<u8>, Error>;
}
