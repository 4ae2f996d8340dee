use std::io;

/// Errors from sequence operations and transforms.
///
/// Every failure is surfaced at the violating call; nothing is retried or
/// clamped, and the receiver is left unchanged.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A text codec rejected its input or configuration.
    #[error(transparent)]
    Codec(#[from] radix_text::Error),
    /// A numeric view was requested on a sequence of the wrong length.
    #[error("sequence is {actual} bytes, conversion needs exactly {expected}")]
    LenMismatch {
        /// The byte width the conversion needs.
        expected: usize,
        /// The sequence's actual length.
        actual: usize,
    },
    /// A bitwise operand did not match the sequence length.
    #[error("operand is {operand} bytes, sequence is {len}")]
    OperandLen {
        /// The operand's length.
        operand: usize,
        /// The sequence's length.
        len: usize,
    },
    /// A bit or byte index was outside the sequence.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange {
        /// The requested index, or exclusive end of the requested range.
        index: usize,
        /// The length it was checked against.
        len: usize,
    },
    /// A digest or HMAC algorithm name was not recognized.
    #[error("unknown digest algorithm {0:?}")]
    UnknownAlgorithm(String),
    /// A checksum output width was outside the algorithm's natural width.
    #[error("checksum width {width} is outside 1..={max}")]
    ChecksumWidth {
        /// The requested width.
        width: usize,
        /// The algorithm's natural width.
        max: usize,
    },
    /// Four bytes held a value that is not a Unicode scalar.
    #[error("code {0:#x} is not a valid char")]
    InvalidChar(u32),
    /// Compression or decompression failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
