//! Byte-magnitude arithmetic for the positional codecs.
//!
//! A magnitude is an unsigned base-256 number stored as little-endian digits
//! with no high zero digits; the empty magnitude is zero. Encoding peels off
//! output digits with [`div_rem_small`] and decoding rebuilds the value with
//! [`mul_add_small`] (one Horner step per input digit). Both directions only
//! ever divide or multiply by values below 256, so the schoolbook
//! byte-at-a-time forms are enough; no fixed-width integer could hold
//! arbitrary input lengths.

use smallvec::SmallVec;

/// Inline capacity covers typical key and hash material (32 bytes) without
/// spilling to the heap.
pub(crate) type Magnitude = SmallVec<[u8; 32]>;

/// Builds a magnitude from logical big-endian bytes.
///
/// High zero bytes are not representable in a magnitude and are dropped;
/// the caller accounts for them separately.
pub(crate) fn from_be_bytes(bytes: &[u8]) -> Magnitude {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    bytes[first..].iter().rev().copied().collect()
}

/// Whether the magnitude is zero.
pub(crate) fn is_zero(mag: &[u8]) -> bool {
    mag.is_empty()
}

/// Appends the magnitude's bytes to `out`, most significant first.
pub(crate) fn extend_be_bytes(mag: &[u8], out: &mut Vec<u8>) {
    out.extend(mag.iter().rev());
}

/// Divides the magnitude by `divisor` in place, returning the remainder.
///
/// This is schoolbook division of a base-256 number by a small divisor:
/// scanning from the most significant digit, each step divides the running
/// remainder times 256 plus the current digit.
///
/// # Panics
///
/// Panics in debug builds if `divisor` is zero.
#[expect(
    clippy::cast_possible_truncation,
    reason = "quotient and remainder are bounded by the u8 divisor"
)]
pub(crate) fn div_rem_small(mag: &mut Magnitude, divisor: u8) -> u8 {
    debug_assert!(divisor != 0, "division by zero");

    let divisor = u16::from(divisor);
    let mut rem = 0u16;
    for digit in mag.iter_mut().rev() {
        let acc = (rem << 8) | u16::from(*digit);
        *digit = (acc / divisor) as u8;
        rem = acc % divisor;
    }

    trim(mag);
    rem as u8
}

/// Computes `mag * factor + addend` in place.
#[expect(
    clippy::cast_possible_truncation,
    reason = "only the low byte of the accumulator is kept per step"
)]
pub(crate) fn mul_add_small(mag: &mut Magnitude, factor: u8, addend: u8) {
    let mut carry = u16::from(addend);
    for digit in mag.iter_mut() {
        let acc = u16::from(*digit) * u16::from(factor) + carry;
        *digit = acc as u8;
        carry = acc >> 8;
    }

    while carry != 0 {
        mag.push(carry as u8);
        carry >>= 8;
    }
}

fn trim(mag: &mut Magnitude) {
    while mag.last() == Some(&0) {
        mag.pop();
    }
}
