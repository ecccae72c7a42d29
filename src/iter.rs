//! The [`Iterator`] types that can be created from a [`SparseVec`]

mod into_iter;
mod values;

pub use into_iter::IntoIter;
pub use values::Values;

use core::iter::FromIterator;

use crate::{Slot, SparseVec};

impl<T> FromIterator<Slot<T>> for SparseVec<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Slot<T>>>(iter: I) -> Self {
        Self::from_slots(iter.into_iter().collect())
    }
}

impl<T> FromIterator<T> for SparseVec<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().map(Slot::Value).collect()
    }
}

impl<T> FromIterator<Option<T>> for SparseVec<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        iter.into_iter().map(Slot::from).collect()
    }
}

impl<T> Extend<Slot<T>> for SparseVec<T> {
    fn extend<I: IntoIterator<Item = Slot<T>>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        iter.for_each(|slot| self.push_slot(slot));
    }
}

impl<T> Extend<T> for SparseVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(Slot::Value));
    }
}
