//! Scope-based wiping for mutable sequences.

use std::fmt;
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};

use crate::MutableBytes;

/// Guard that wipes the wrapped [`MutableBytes`] when it goes out of scope.
///
/// Dereferences to the sequence, so it can be used in place of one. Only a
/// mutable sequence can be wrapped, since the other variants have no wipe, so
/// scope-based scrubbing is available exactly where a privately owned,
/// safely mutable buffer is guaranteed.
#[must_use = "dropping the guard immediately wipes the sequence"]
pub struct WipeOnDrop {
    inner: ManuallyDrop<MutableBytes>,
}

impl WipeOnDrop {
    pub(crate) fn new(inner: MutableBytes) -> Self {
        Self {
            inner: ManuallyDrop::new(inner),
        }
    }

    /// Releases the sequence without wiping it.
    #[must_use]
    pub fn into_inner(self) -> MutableBytes {
        let mut this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so `inner` cannot be taken twice.
        unsafe { ManuallyDrop::take(&mut this.inner) }
    }
}

impl Deref for WipeOnDrop {
    type Target = MutableBytes;

    fn deref(&self) -> &MutableBytes {
        &self.inner
    }
}

impl DerefMut for WipeOnDrop {
    fn deref_mut(&mut self) -> &mut MutableBytes {
        &mut self.inner
    }
}

impl Drop for WipeOnDrop {
    fn drop(&mut self) {
        self.inner.secure_wipe();
        // SAFETY: drop runs at most once and `into_inner` skips it entirely.
        unsafe { ManuallyDrop::drop(&mut self.inner) };
    }
}

impl fmt::Debug for WipeOnDrop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WipeOnDrop").field(&*self.inner).finish()
    }
}
