//! Arbitrary-radix positional codec.
//!
//! Renders a byte sequence as an unsigned number in any base from 2 to 36,
//! using the digits `0-9` then `a-z`. None of these bases line up with byte
//! boundaries in general, so encoding peels digits off with byte-array long
//! division and decoding rebuilds the value with Horner's method.
//!
//! A magnitude alone cannot represent leading zero bytes (`[0x00, 0x07]`
//! has the same value as `[0x07]`). Each leading zero byte of the logical
//! sequence is therefore rendered as one extra `0` digit in front of the
//! value's digits, and decoding turns each leading `0` digit back into one
//! zero byte. This keeps round trips exact for every input length and
//! radix, including all-zero and empty sequences.

use crate::magnitude::{self, Magnitude};
use crate::{ByteOrder, Codec, Error, alphabet};

/// A validated radix in the range `2..=36`.
///
/// The configuration for the generic positional codec. Construction fails
/// for unsupported radices; an existing value is always usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Radix {
    radix: u8,
}

impl Radix {
    /// The smallest supported radix.
    pub const MIN: u8 = 2;

    /// The largest supported radix.
    pub const MAX: u8 = alphabet::MAX_RADIX;

    /// Creates a codec for the given radix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRadix`] if `radix` is outside `2..=36`.
    pub const fn new(radix: u8) -> Result<Self, Error> {
        if radix >= Self::MIN && radix <= Self::MAX {
            Ok(Self { radix })
        } else {
            Err(Error::InvalidRadix(radix))
        }
    }

    /// Gets the configured radix.
    #[must_use]
    pub const fn radix(self) -> u8 {
        self.radix
    }

    /// Encodes bytes as a digit string, reading them in the given order.
    #[must_use]
    pub fn encode(self, bytes: &[u8], order: ByteOrder) -> String {
        let logical = order.to_logical_be(bytes);
        let mut mag = magnitude::from_be_bytes(&logical);
        let leading_zeros = logical.len() - mag.len();

        // digit values, least significant first
        let mut digits = Vec::new();
        while !magnitude::is_zero(&mag) {
            digits.push(magnitude::div_rem_small(&mut mag, self.radix));
        }

        let mut out = String::with_capacity(leading_zeros + digits.len());
        for _ in 0..leading_zeros {
            out.push('0');
        }

        out.extend(digits.iter().rev().map(|&d| alphabet::digit_char(d)));
        out
    }

    /// Decodes a digit string, storing the bytes per the given order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDigit`] if the input contains a character
    /// that is not a digit of this radix. Decoding never produces a partial
    /// result.
    pub fn decode(self, input: &str, order: ByteOrder) -> Result<Vec<u8>, Error> {
        let mut mag = Magnitude::new();
        let mut leading_zeros = 0usize;
        let mut in_magnitude = false;

        for c in input.chars() {
            let value = alphabet::digit_value(c)
                .filter(|&v| v < self.radix)
                .ok_or(Error::InvalidDigit {
                    char: c,
                    radix: self.radix,
                })?;

            if !in_magnitude {
                if value == 0 {
                    leading_zeros += 1;
                    continue;
                }

                in_magnitude = true;
            }

            magnitude::mul_add_small(&mut mag, self.radix, value);
        }

        let mut out = vec![0u8; leading_zeros];
        magnitude::extend_be_bytes(&mag, &mut out);

        if order == ByteOrder::LittleEndian {
            out.reverse();
        }

        Ok(out)
    }
}

impl Codec for Radix {
    fn encode(&self, bytes: &[u8], order: ByteOrder) -> String {
        Self::encode(*self, bytes, order)
    }

    fn decode(&self, input: &str, order: ByteOrder) -> Result<Vec<u8>, Error> {
        Self::decode(*self, input, order)
    }
}

/// Encodes bytes in the given radix, returning the digit string.
///
/// This is equivalent to [`Radix::new`] followed by [`Radix::encode`].
///
/// # Errors
///
/// Returns [`Error::InvalidRadix`] if `radix` is outside `2..=36`.
pub fn to_string(bytes: &[u8], order: ByteOrder, radix: u8) -> Result<String, Error> {
    Ok(Radix::new(radix)?.encode(bytes, order))
}

/// Decodes a digit string in the given radix.
///
/// This is equivalent to [`Radix::new`] followed by [`Radix::decode`].
///
/// # Errors
///
/// Returns [`Error::InvalidRadix`] for an unsupported radix and
/// [`Error::InvalidDigit`] for input characters outside that radix.
pub fn from_str(input: &str, order: ByteOrder, radix: u8) -> Result<Vec<u8>, Error> {
    Radix::new(radix)?.decode(input, order)
}
