//! Hex (base-16) codec.
//!
//! Two characters per byte with no markers or padding, so no big-number
//! arithmetic is needed; each byte maps through a 16-entry table. Encoding
//! emits lower case by default and upper case through the `_upper` variants;
//! decoding accepts both cases but requires an even digit count.

use std::fmt;

use crate::{ByteOrder, Codec, Error, alphabet};

const LOWER: &[u8; 16] = b"0123456789abcdef";
const UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Encodes bytes as lower-case hex, returning a [`String`].
///
/// Use [`from_str`] to reverse the operation.
#[must_use]
pub fn to_string(bytes: &[u8], order: ByteOrder) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    encode(&mut out, bytes, order).expect("write to String cannot fail");
    out
}

/// Encodes bytes as upper-case hex, returning a [`String`].
#[must_use]
pub fn to_string_upper(bytes: &[u8], order: ByteOrder) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    encode_upper(&mut out, bytes, order).expect("write to String cannot fail");
    out
}

/// Encodes bytes as lower-case hex, writing them to a buffer.
///
/// # Errors
///
/// Returns [`Err`] if and only if `writer` returns [`Err`].
pub fn encode<W: fmt::Write>(writer: W, bytes: &[u8], order: ByteOrder) -> fmt::Result {
    encode_table(writer, bytes, order, LOWER)
}

/// Encodes bytes as upper-case hex, writing them to a buffer.
///
/// # Errors
///
/// Returns [`Err`] if and only if `writer` returns [`Err`].
pub fn encode_upper<W: fmt::Write>(writer: W, bytes: &[u8], order: ByteOrder) -> fmt::Result {
    encode_table(writer, bytes, order, UPPER)
}

fn encode_table<W: fmt::Write>(
    mut writer: W,
    bytes: &[u8],
    order: ByteOrder,
    table: &[u8; 16],
) -> fmt::Result {
    fn emit<W: fmt::Write>(writer: &mut W, table: &[u8; 16], b: u8) -> fmt::Result {
        writer.write_char(char::from(table[usize::from(b >> 4)]))?;
        writer.write_char(char::from(table[usize::from(b & 0xF)]))
    }

    match order {
        ByteOrder::BigEndian => {
            for &b in bytes {
                emit(&mut writer, table, b)?;
            }
        },
        ByteOrder::LittleEndian => {
            for &b in bytes.iter().rev() {
                emit(&mut writer, table, b)?;
            }
        },
    }

    Ok(())
}

/// Decodes a hex string, storing the bytes per the given order.
///
/// Both character cases are accepted.
///
/// # Errors
///
/// Returns [`Error::InvalidDigit`] for characters outside `0-9a-fA-F` and
/// [`Error::OddLength`] if a nibble is left over at the end.
pub fn from_str(input: &str, order: ByteOrder) -> Result<Vec<u8>, Error> {
    let mut out = Vec::with_capacity(input.len() / 2);
    let mut high = None::<u8>;

    for c in input.chars() {
        let value = alphabet::digit_value(c)
            .filter(|&v| v < 16)
            .ok_or(Error::InvalidDigit { char: c, radix: 16 })?;

        match high.take() {
            None => high = Some(value),
            Some(h) => out.push((h << 4) | value),
        }
    }

    if high.is_some() {
        return Err(Error::OddLength);
    }

    if order == ByteOrder::LittleEndian {
        out.reverse();
    }

    Ok(out)
}

/// Hex codec handle, usable through [`Codec`]. Encodes lower case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hex;

impl Codec for Hex {
    fn encode(&self, bytes: &[u8], order: ByteOrder) -> String {
        to_string(bytes, order)
    }

    fn decode(&self, input: &str, order: ByteOrder) -> Result<Vec<u8>, Error> {
        from_str(input, order)
    }
}
