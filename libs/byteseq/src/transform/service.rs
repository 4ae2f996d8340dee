//! Adapters over external digest, HMAC, checksum, and compression services.
//!
//! Each adapter is a plain [`Transform`] whose output replaces the sequence
//! content; none of them can work in place. The underlying primitives are
//! opaque to this crate; nothing here evaluates cryptographic strength.

use std::io::Write as _;
use std::str::FromStr;

use flate2::Compression;
use flate2::write::{DeflateDecoder, DeflateEncoder};
use hmac::Mac as _;
use sha2::digest::Digest as _;

use crate::Error;
use crate::transform::Transform;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DigestKind {
    /// MD5, 16 byte output. Broken for collision resistance; kept for
    /// interop with formats that still use it.
    Md5,
    /// SHA-1, 20 byte output.
    Sha1,
    /// SHA-256, 32 byte output.
    Sha256,
    /// SHA-512, 64 byte output.
    Sha512,
}

impl DigestKind {
    /// Digest output width in bytes.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    fn digest(self, data: &[u8]) -> Box<[u8]> {
        match self {
            Self::Md5 => Box::from(md5::Md5::digest(data).as_slice()),
            Self::Sha1 => Box::from(sha1::Sha1::digest(data).as_slice()),
            Self::Sha256 => Box::from(sha2::Sha256::digest(data).as_slice()),
            Self::Sha512 => Box::from(sha2::Sha512::digest(data).as_slice()),
        }
    }
}

impl FromStr for DigestKind {
    type Err = Error;

    /// Parses common algorithm spellings, ignoring case (`"SHA-256"`,
    /// `"sha256"`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlgorithm`] for any other name.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "md5" | "md-5" => Ok(Self::Md5),
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            _ => Err(Error::UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// Replaces the sequence with its digest.
#[derive(Debug, Clone, Copy)]
pub struct MessageDigest(pub DigestKind);

impl Transform for MessageDigest {
    fn apply(&self, input: &[u8]) -> Result<Box<[u8]>, Error> {
        Ok(self.0.digest(input))
    }
}

/// Replaces the sequence with its keyed-hash message authentication code.
///
/// Any key length is accepted, per the HMAC construction.
#[derive(Debug, Clone, Copy)]
pub struct HmacSign<'a> {
    kind: DigestKind,
    key: &'a [u8],
}

impl<'a> HmacSign<'a> {
    /// Creates an HMAC transformer over the given hash and key.
    #[must_use]
    pub const fn new(kind: DigestKind, key: &'a [u8]) -> Self {
        Self { kind, key }
    }
}

impl Transform for HmacSign<'_> {
    fn apply(&self, input: &[u8]) -> Result<Box<[u8]>, Error> {
        macro_rules! tag {
            ($D:ty) => {{
                let mut mac = <hmac::Hmac<$D> as hmac::Mac>::new_from_slice(self.key)
                    .expect("HMAC accepts keys of any length");
                mac.update(input);
                Box::from(mac.finalize().into_bytes().as_slice())
            }};
        }

        Ok(match self.kind {
            DigestKind::Md5 => tag!(md5::Md5),
            DigestKind::Sha1 => tag!(sha1::Sha1),
            DigestKind::Sha256 => tag!(sha2::Sha256),
            DigestKind::Sha512 => tag!(sha2::Sha512),
        })
    }
}

/// Supported checksum algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ChecksumKind {
    /// CRC-32 (IEEE), 4 byte natural width.
    Crc32,
}

impl ChecksumKind {
    /// The checksum's natural output width in bytes.
    #[must_use]
    pub const fn natural_width(self) -> usize {
        match self {
            Self::Crc32 => 4,
        }
    }
}

/// Replaces the sequence with a checksum of its content.
///
/// The output can be narrowed to the checksum's least significant bytes,
/// emitted big-endian.
#[derive(Debug, Clone, Copy)]
pub struct Checksum {
    kind: ChecksumKind,
    width: usize,
}

impl Checksum {
    /// Creates a checksum transformer with an explicit output width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChecksumWidth`] if `width` is zero or larger than
    /// the algorithm's natural width.
    pub fn new(kind: ChecksumKind, width: usize) -> Result<Self, Error> {
        let max = kind.natural_width();
        if (1..=max).contains(&width) {
            Ok(Self { kind, width })
        } else {
            Err(Error::ChecksumWidth { width, max })
        }
    }

    /// Full-width CRC-32.
    #[must_use]
    pub const fn crc32() -> Self {
        Self {
            kind: ChecksumKind::Crc32,
            width: 4,
        }
    }
}

impl Transform for Checksum {
    fn apply(&self, input: &[u8]) -> Result<Box<[u8]>, Error> {
        let sum = match self.kind {
            ChecksumKind::Crc32 => crc32fast::hash(input),
        };

        let bytes = sum.to_be_bytes();
        Ok(Box::from(&bytes[bytes.len() - self.width..]))
    }
}

/// Compresses with raw deflate.
#[derive(Debug, Clone, Copy)]
pub struct Deflate;

impl Transform for Deflate {
    fn apply(&self, input: &[u8]) -> Result<Box<[u8]>, Error> {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(input)?;
        Ok(encoder.finish()?.into_boxed_slice())
    }
}

/// Decompresses raw deflate data.
///
/// Malformed input surfaces as an [`Error::Io`] failure; there is no
/// partial output.
#[derive(Debug, Clone, Copy)]
pub struct Inflate;

impl Transform for Inflate {
    fn apply(&self, input: &[u8]) -> Result<Box<[u8]>, Error> {
        let mut decoder = DeflateDecoder::new(Vec::new());
        decoder.write_all(input)?;
        Ok(decoder.finish()?.into_boxed_slice())
    }
}

#[cfg(test)]
mod tests {
    use radix_text::{ByteOrder, hex};

    use super::*;

    fn hex_of(bytes: &[u8]) -> String {
        hex::to_string(bytes, ByteOrder::BigEndian)
    }

    #[test]
    fn digest_known_vectors() {
        let out = MessageDigest(DigestKind::Md5).apply(b"abc").expect("cannot fail");
        assert_eq!(hex_of(&out), "900150983cd24fb0d6963f7d28e17f72");

        let out = MessageDigest(DigestKind::Sha1).apply(b"abc").expect("cannot fail");
        assert_eq!(hex_of(&out), "a9993e364706816aba3e25717850c26c9cd0d89d");

        let out = MessageDigest(DigestKind::Sha256).apply(b"abc").expect("cannot fail");
        assert_eq!(
            hex_of(&out),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn digest_empty_input() {
        let out = MessageDigest(DigestKind::Sha256).apply(b"").expect("cannot fail");
        assert_eq!(
            hex_of(&out),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn digest_output_len_matches() {
        for kind in [
            DigestKind::Md5,
            DigestKind::Sha1,
            DigestKind::Sha256,
            DigestKind::Sha512,
        ] {
            let out = MessageDigest(kind).apply(b"x").expect("cannot fail");
            assert_eq!(out.len(), kind.output_len(), "{kind:?}");
        }
    }

    #[test]
    fn digest_names_parse() {
        assert_eq!("SHA-256".parse::<DigestKind>().expect("known name"), DigestKind::Sha256);
        assert_eq!("sha512".parse::<DigestKind>().expect("known name"), DigestKind::Sha512);
        assert_eq!("MD5".parse::<DigestKind>().expect("known name"), DigestKind::Md5);

        let err = "sha3-256".parse::<DigestKind>().expect_err("unsupported");
        assert!(matches!(err, Error::UnknownAlgorithm(name) if name == "sha3-256"));
    }

    #[test]
    fn hmac_rfc4231_case_2() {
        // key "Jefe", data "what do ya want for nothing?"
        let out = HmacSign::new(DigestKind::Sha256, b"Jefe")
            .apply(b"what do ya want for nothing?")
            .expect("cannot fail");
        assert_eq!(
            hex_of(&out),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn crc32_check_value() {
        let out = Checksum::crc32().apply(b"123456789").expect("cannot fail");
        assert_eq!(*out, 0xCBF4_3926u32.to_be_bytes());
    }

    #[test]
    fn crc32_narrowed_width() {
        let narrow = Checksum::new(ChecksumKind::Crc32, 2).expect("valid width");
        let out = narrow.apply(b"123456789").expect("cannot fail");
        assert_eq!(*out, [0x39, 0x26]);
    }

    #[test]
    fn checksum_width_is_validated() {
        assert!(matches!(
            Checksum::new(ChecksumKind::Crc32, 0),
            Err(Error::ChecksumWidth { width: 0, max: 4 })
        ));
        assert!(matches!(
            Checksum::new(ChecksumKind::Crc32, 5),
            Err(Error::ChecksumWidth { width: 5, max: 4 })
        ));
    }

    #[test]
    fn deflate_inflate_round_trip() {
        let data = b"the quick brown fox jumps over the lazy dog, twice over \
                     the quick brown fox jumps over the lazy dog";
        let packed = Deflate.apply(data).expect("compression cannot fail");
        assert!(packed.len() < data.len(), "repetitive data should shrink");

        let unpacked = Inflate.apply(&packed).expect("valid deflate data");
        assert_eq!(*unpacked, *data.as_slice());
    }

    #[test]
    fn inflate_rejects_garbage() {
        Inflate
            .apply(&[0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01, 0x02])
            .expect_err("not deflate data");
    }
}
