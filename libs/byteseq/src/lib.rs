//! Byte sequences as value types.
//!
//! A sequence couples a fixed-length byte buffer with a logical
//! [`ByteOrder`] tag and comes in three ownership variants sharing one read
//! contract ([`Sequence`]):
//!
//! - [`MutableBytes`] owns its buffer and may rewrite it in place.
//! - [`ImmutableBytes`] owns a private copy that never changes.
//! - [`ReadOnlyBytes`] aliases shared storage and never writes to it.
//!
//! Operations are [`Transform`] values: bitwise algebra, shifts, resizing,
//! sorting, and adapters over digest, HMAC, checksum, and compression
//! primitives (see [`transform`]). The receiving variant, not the
//! transformer, decides whether storage is rewritten or a fresh buffer is
//! allocated, and applying a transform always yields the same variant as
//! the receiver. Mutation-only operations (`as_mut_slice`, `apply_mut`,
//! `secure_wipe`, [`WipeOnDrop`]) exist only on [`MutableBytes`], so using
//! them on the wrong variant is a compile error rather than a runtime one.
//!
//! Text rendering (hex, base64, arbitrary radix 2..=36) comes from
//! [`radix_text`] and is exposed through [`Sequence`] methods; numeric
//! views require the exact byte width of the target type.
//!
//! The library never logs and never retries; every contract violation
//! surfaces immediately as an [`Error`] while the receiver stays unchanged.

mod error;
mod immutable;
mod mutable;
mod num;
mod read_only;
mod sequence;
pub mod transform;
mod wipe;

pub use radix_text::{ByteOrder, Codec};

pub use self::error::Error;
pub use self::immutable::ImmutableBytes;
pub use self::mutable::MutableBytes;
pub use self::read_only::ReadOnlyBytes;
pub use self::sequence::Sequence;
pub use self::transform::{InPlaceTransform, Transform};
pub use self::wipe::WipeOnDrop;
