//! Macro support for the fixed-width numeric views and constructors.
//!
//! Conversions demand the exact byte width of the target type (a length
//! mismatch is an error, never a truncation) and honor the sequence's
//! byte-order tag in both directions.

/// Generates the `to_*` views as [`Sequence`](crate::Sequence) methods.
macro_rules! impl_num_views {
    ($($name:ident => $Ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Reads the sequence as a [`", stringify!($Ty), "`] per its byte order.")]
            ///
            /// # Errors
            ///
            /// Returns [`Error::LenMismatch`](crate::Error::LenMismatch)
            /// unless the length matches the type's width exactly.
            fn $name(&self) -> Result<$Ty, $crate::Error> {
                let bytes = self.as_slice();
                let Ok(bytes) = <[u8; size_of::<$Ty>()]>::try_from(bytes) else {
                    return Err($crate::Error::LenMismatch {
                        expected: size_of::<$Ty>(),
                        actual: bytes.len(),
                    });
                };

                Ok(match self.order() {
                    $crate::ByteOrder::BigEndian => <$Ty>::from_be_bytes(bytes),
                    $crate::ByteOrder::LittleEndian => <$Ty>::from_le_bytes(bytes),
                })
            }
        )*
    };
}

/// Generates `from_*` constructors on an owning sequence variant.
///
/// The variant must provide `with_storage(Box<[u8]>, ByteOrder) -> Self`.
macro_rules! impl_num_constructors {
    ($($name:ident => $Ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Creates a sequence from a [`", stringify!($Ty), "`] at its natural byte width.")]
            #[must_use]
            pub fn $name(value: $Ty, order: $crate::ByteOrder) -> Self {
                let bytes = match order {
                    $crate::ByteOrder::BigEndian => <$Ty>::to_be_bytes(value),
                    $crate::ByteOrder::LittleEndian => <$Ty>::to_le_bytes(value),
                };

                Self::with_storage(Box::from(bytes.as_slice()), order)
            }
        )*
    };
}

pub(crate) use {impl_num_constructors, impl_num_views};
