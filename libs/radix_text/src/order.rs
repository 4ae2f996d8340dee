use std::borrow::Cow;

/// Logical byte-order interpretation of a byte sequence.
///
/// The order never changes how bytes are stored; it only decides how a
/// sequence is read when it is converted to a number or rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Most significant byte first. The default.
    #[default]
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

impl ByteOrder {
    /// Gets the opposite order.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::BigEndian => Self::LittleEndian,
            Self::LittleEndian => Self::BigEndian,
        }
    }

    /// Views the bytes in logical big-endian order.
    ///
    /// Borrows the input as-is for big-endian, allocates a reversed copy for
    /// little-endian. The input storage is never modified.
    pub(crate) fn to_logical_be<'a>(self, bytes: &'a [u8]) -> Cow<'a, [u8]> {
        match self {
            Self::BigEndian => Cow::Borrowed(bytes),
            Self::LittleEndian => {
                let mut reversed = bytes.to_vec();
                reversed.reverse();
                Cow::Owned(reversed)
            },
        }
    }
}
