//! Base64 codec.
//!
//! Byte-aligned radix-64: every 3 input bytes map to 4 output characters
//! through a 64-entry table, so no big-number arithmetic is needed.
//! Encoding offers the standard (`+/`) and URL-safe (`-_`) alphabets and
//! pads with `=` to a multiple of four characters. Decoding accepts either
//! alphabet interchangeably, skips ASCII whitespace, and tolerates missing
//! or excess trailing padding.

use crate::{ByteOrder, Codec, Error};

const STANDARD: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const URL_SAFE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Encodes bytes as standard-alphabet base64, returning a [`String`].
///
/// Use [`from_str`] to reverse the operation.
#[must_use]
pub fn to_string(bytes: &[u8], order: ByteOrder) -> String {
    encode_table(bytes, order, STANDARD)
}

/// Encodes bytes as URL-safe base64, returning a [`String`].
#[must_use]
pub fn to_string_url_safe(bytes: &[u8], order: ByteOrder) -> String {
    encode_table(bytes, order, URL_SAFE)
}

fn encode_table(bytes: &[u8], order: ByteOrder, table: &[u8; 64]) -> String {
    #[expect(clippy::cast_possible_truncation, reason = "sextets are six bits")]
    fn sextet(table: &[u8; 64], group: u32, shift: u32) -> char {
        char::from(table[(group >> shift) as usize & 0x3F])
    }

    let logical = order.to_logical_be(bytes);
    let mut out = String::with_capacity(logical.len().div_ceil(3) * 4);

    let (groups, rest) = logical.as_chunks::<3>();
    for &[a, b, c] in groups {
        let group = (u32::from(a) << 16) | (u32::from(b) << 8) | u32::from(c);
        out.push(sextet(table, group, 18));
        out.push(sextet(table, group, 12));
        out.push(sextet(table, group, 6));
        out.push(sextet(table, group, 0));
    }

    match *rest {
        [] => {},
        [a] => {
            let group = u32::from(a) << 16;
            out.push(sextet(table, group, 18));
            out.push(sextet(table, group, 12));
            out.push_str("==");
        },
        [a, b] => {
            let group = (u32::from(a) << 16) | (u32::from(b) << 8);
            out.push(sextet(table, group, 18));
            out.push(sextet(table, group, 12));
            out.push(sextet(table, group, 6));
            out.push('=');
        },
        _ => unreachable!(),
    }

    out
}

/// Decodes a base64 string, storing the bytes per the given order.
///
/// Characters from the standard and URL-safe alphabets may be mixed. ASCII
/// whitespace is skipped anywhere; `=` is only allowed after the last data
/// character and any amount is tolerated.
///
/// # Errors
///
/// Returns [`Error::InvalidDigit`] for characters outside both alphabets or
/// data after padding, and [`Error::BadPadding`] if a lone trailing
/// character cannot hold a whole byte.
#[expect(
    clippy::cast_possible_truncation,
    reason = "group bytes are masked to eight bits"
)]
pub fn from_str(input: &str, order: ByteOrder) -> Result<Vec<u8>, Error> {
    let mut out = Vec::with_capacity(input.len() / 4 * 3 + 2);
    let mut group = 0u32;
    let mut pending = 0u8;
    let mut padded = false;

    for c in input.chars() {
        if c.is_ascii_whitespace() {
            continue;
        }

        if c == '=' {
            padded = true;
            continue;
        }

        if padded {
            // data after padding cannot be part of the same value
            return Err(Error::InvalidDigit { char: c, radix: 64 });
        }

        let value = sextet_value(c).ok_or(Error::InvalidDigit { char: c, radix: 64 })?;
        group = (group << 6) | u32::from(value);
        pending += 1;

        if pending == 4 {
            out.push((group >> 16) as u8);
            out.push((group >> 8) as u8);
            out.push(group as u8);
            group = 0;
            pending = 0;
        }
    }

    match pending {
        0 => {},
        // 6 bits cannot hold a byte
        1 => return Err(Error::BadPadding),
        2 => out.push((group >> 4) as u8),
        3 => {
            out.push((group >> 10) as u8);
            out.push((group >> 2) as u8);
        },
        _ => unreachable!(),
    }

    if order == ByteOrder::LittleEndian {
        out.reverse();
    }

    Ok(out)
}

#[expect(clippy::cast_possible_truncation, reason = "arms are ASCII-only")]
fn sextet_value(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(c as u8 - b'A'),
        'a'..='z' => Some(c as u8 - b'a' + 26),
        '0'..='9' => Some(c as u8 - b'0' + 52),
        '+' | '-' => Some(62),
        '/' | '_' => Some(63),
        _ => None,
    }
}

/// Base64 codec handle, usable through [`Codec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base64 {
    url_safe: bool,
}

impl Base64 {
    /// Standard alphabet (`+/`).
    pub const STANDARD: Self = Self { url_safe: false };

    /// URL-safe alphabet (`-_`).
    pub const URL_SAFE: Self = Self { url_safe: true };
}

impl Codec for Base64 {
    fn encode(&self, bytes: &[u8], order: ByteOrder) -> String {
        if self.url_safe {
            to_string_url_safe(bytes, order)
        } else {
            to_string(bytes, order)
        }
    }

    fn decode(&self, input: &str, order: ByteOrder) -> Result<Vec<u8>, Error> {
        from_str(input, order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_known_vector() {
        assert_eq!(to_string(b"foobar", ByteOrder::BigEndian), "Zm9vYmFy");
        assert_eq!(to_string(b"foob", ByteOrder::BigEndian), "Zm9vYg==");
        assert_eq!(to_string(b"fooba", ByteOrder::BigEndian), "Zm9vYmE=");
    }

    #[test]
    fn decode_known_vector() {
        assert_eq!(
            from_str("Zm9vYmFy", ByteOrder::BigEndian).expect("valid base64"),
            b"foobar"
        );
    }

    #[test]
    fn url_safe_and_standard_interchange() {
        let bytes = [0xFB, 0xEF, 0xFF];
        let standard = to_string(&bytes, ByteOrder::BigEndian);
        let url_safe = to_string_url_safe(&bytes, ByteOrder::BigEndian);
        assert_eq!(standard, "++//");
        assert_eq!(url_safe, "--__");

        for text in [standard, url_safe, "+-_/".to_owned()] {
            assert_eq!(
                from_str(&text, ByteOrder::BigEndian).expect("valid base64"),
                bytes
            );
        }
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(
            from_str("Zm9v\n  Ym Fy\t", ByteOrder::BigEndian).expect("valid base64"),
            b"foobar"
        );
    }

    #[test]
    fn padding_is_tolerated_in_excess() {
        for text in ["Zm9vYg==", "Zm9vYg", "Zm9vYg====", "Zm9vYg==\n"] {
            assert_eq!(
                from_str(text, ByteOrder::BigEndian).expect("valid base64"),
                b"foob",
                "input {text:?}"
            );
        }
    }

    #[test]
    fn data_after_padding_fails() {
        assert!(matches!(
            from_str("Zm==9v", ByteOrder::BigEndian),
            Err(Error::InvalidDigit { char: '9', radix: 64 })
        ));
    }

    #[test]
    fn lone_trailing_digit_fails() {
        assert!(matches!(
            from_str("Zm9vY", ByteOrder::BigEndian),
            Err(Error::BadPadding)
        ));
    }

    #[test]
    fn foreign_chars_fail() {
        assert!(matches!(
            from_str("Zm9v!", ByteOrder::BigEndian),
            Err(Error::InvalidDigit { char: '!', radix: 64 })
        ));
    }

    #[test]
    fn little_endian_reverses_logical_sequence() {
        let bytes = [0x01, 0x02, 0x03];
        let mut reversed = bytes;
        reversed.reverse();
        assert_eq!(
            to_string(&bytes, ByteOrder::LittleEndian),
            to_string(&reversed, ByteOrder::BigEndian)
        );

        let back = from_str(
            &to_string(&bytes, ByteOrder::LittleEndian),
            ByteOrder::LittleEndian,
        )
        .expect("valid base64");
        assert_eq!(back, bytes);
    }

    #[test]
    fn empty_round_trip() {
        assert_eq!(to_string(&[], ByteOrder::BigEndian), "");
        assert_eq!(from_str("", ByteOrder::BigEndian).expect("empty is valid"), [0u8; 0]);
    }
}
