//! Rearrangement transformers: byte reversal, sorting, shuffling.
//!
//! All of these permute the existing bytes and implement
//! [`InPlaceTransform`](super::InPlaceTransform).

use std::cmp::Ordering;

use rand::SeedableRng as _;
use rand::rngs::StdRng;
use rand::seq::SliceRandom as _;

use crate::Error;
use crate::transform::{InPlaceTransform, impl_transform_via_mut};

/// Reverses the byte order of the storage.
///
/// Combined with flipping the order tag this preserves a sequence's numeric
/// value; on its own it mirrors the content.
#[derive(Debug, Clone, Copy)]
pub struct Reverse;

impl InPlaceTransform for Reverse {
    fn apply_mut(&self, buf: &mut [u8]) -> Result<(), Error> {
        buf.reverse();
        Ok(())
    }
}

impl_transform_via_mut!(Reverse);

/// Sorts bytes as unsigned values, ascending.
#[derive(Debug, Clone, Copy)]
pub struct Sort;

impl InPlaceTransform for Sort {
    fn apply_mut(&self, buf: &mut [u8]) -> Result<(), Error> {
        buf.sort_unstable();
        Ok(())
    }
}

impl_transform_via_mut!(Sort);

/// Sorts bytes by a caller-provided comparison.
#[derive(Clone)]
pub struct SortBy<F>(pub F);

impl<F: Fn(&u8, &u8) -> Ordering> InPlaceTransform for SortBy<F> {
    fn apply_mut(&self, buf: &mut [u8]) -> Result<(), Error> {
        buf.sort_unstable_by(|a, b| (self.0)(a, b));
        Ok(())
    }
}

impl_transform_via_mut!(for [F: Fn(&u8, &u8) -> Ordering] SortBy<F>);

/// Shuffles bytes into a random permutation.
///
/// [`Shuffle::new`] draws from the thread RNG; [`Shuffle::seeded`] uses a
/// fixed seed and produces the same permutation on every application.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shuffle {
    seed: Option<u64>,
}

impl Shuffle {
    /// Creates a shuffle backed by the thread RNG.
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: None }
    }

    /// Creates a reproducible shuffle from a seed.
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl InPlaceTransform for Shuffle {
    fn apply_mut(&self, buf: &mut [u8]) -> Result<(), Error> {
        match self.seed {
            Some(seed) => buf.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => buf.shuffle(&mut rand::rng()),
        }

        Ok(())
    }
}

impl_transform_via_mut!(Shuffle);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Transform as _;

    #[test]
    fn reverse_mirrors() {
        let out = Reverse.apply(&[1, 2, 3]).expect("cannot fail");
        assert_eq!(*out, [3, 2, 1]);
    }

    #[test]
    fn sort_ascending_unsigned() {
        let out = Sort.apply(&[0xFF, 0x00, 0x7F, 0x80]).expect("cannot fail");
        assert_eq!(*out, [0x00, 0x7F, 0x80, 0xFF]);
    }

    #[test]
    fn sort_by_custom_order() {
        let out = SortBy(|a: &u8, b: &u8| b.cmp(a))
            .apply(&[1, 3, 2])
            .expect("cannot fail");
        assert_eq!(*out, [3, 2, 1]);
    }

    #[test]
    fn shuffle_permutes_content() {
        let data: Vec<u8> = (0..=63).collect();
        let mut shuffled = Shuffle::seeded(7)
            .apply(&data)
            .expect("cannot fail")
            .into_vec();

        // same multiset of bytes
        shuffled.sort_unstable();
        assert_eq!(shuffled, data);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let data: Vec<u8> = (0..=63).collect();
        let a = Shuffle::seeded(42).apply(&data).expect("cannot fail");
        let b = Shuffle::seeded(42).apply(&data).expect("cannot fail");
        assert_eq!(a, b);
        assert_ne!(
            a.as_ref(),
            data.as_slice(),
            "64 distinct bytes should not shuffle to themselves"
        );
    }
}
