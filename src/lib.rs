#![cfg_attr(not(any(doc, feature = "std")), no_std)]
#![forbid(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

//! Immutable splicing over sparse sequences.
//!
//! A [`SparseVec`] is an ordered sequence of [`Slot`]s: every position either
//! holds a value or is an explicit [`Hole`](Slot::Hole). Holes are ordinary
//! elements, so sequences stay dense in memory and two of them compare equal
//! exactly when they agree on both values and holes.
//!
//! The editing operations never modify the sequence they are called on:
//! [`SparseVec::splice`] (and the [`removed`](SparseVec::removed) /
//! [`inserted`](SparseVec::inserted) conveniences built on it) clone the
//! surviving elements into a freshly allocated result, so every previously
//! taken reference keeps seeing the original contents.
//!
//! This crate is `no_std` compatible, just turn off all default features.
//!
//! # Features
//!
//! * `std` (default) - implies `alloc`
//! * `alloc` - enables [`SparseVec`] and the splicing operations,
//!     which allocate their results
//!
//! # Basic Usage
//!
//! Splicing removes a run of slots and can insert a single slot in its place:
//!
//! ```rust
//! use sparse_splice::{sparse, Slot};
//!
//! let vec = sparse!['a', 'b', 'c', 'd'];
//!
//! // remove one element at index 1, insert 'e' in its place
//! let out = vec.splice(1, 1, Some(Slot::Value('e')));
//! assert_eq!(out, sparse!['a', 'e', 'c', 'd']);
//!
//! // the original is untouched
//! assert_eq!(vec, sparse!['a', 'b', 'c', 'd']);
//! ```
//!
//! Inserting past the end pads the gap with holes instead of failing:
//!
//! ```rust
//! use sparse_splice::{sparse, Slot};
//!
//! let vec = sparse!['a', 'b', 'c'];
//! let out = vec.splice(5, 0, Some(Slot::Value('x')));
//! assert_eq!(out, sparse!['a', 'b', 'c', _, _, 'x']);
//! ```
//!
//! The free function [`splice`] additionally models a sequence that was never
//! initialized: `None` behaves as the empty sequence.
//!
//! ```rust
//! use sparse_splice::{splice, sparse, Slot, SparseVec};
//!
//! let out = splice(None, 2, 0, Some(Slot::Value(10)));
//! assert_eq!(out, sparse![_, _, 10]);
//!
//! let out: SparseVec<i32> = splice(None, 2, 1, None);
//! assert_eq!(out, sparse![]);
//! ```

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc as std;

#[cfg(any(doc, feature = "alloc"))]
use core::ops::{Deref, DerefMut};

mod slot;

#[cfg(any(doc, feature = "alloc"))]
mod impls;
#[cfg(any(doc, feature = "alloc"))]
mod splice;

#[cfg(any(doc, feature = "alloc"))]
pub mod iter;

pub use slot::Slot;

#[cfg(any(doc, feature = "alloc"))]
pub use splice::splice;

#[cfg(any(doc, feature = "alloc"))]
use std::vec::Vec;

#[doc(hidden)]
#[macro_export]
macro_rules! count {
    () => { 0 };
    ($($a:tt $b:tt)*) => { $crate::count!($($a)*) << 1 };
    ($c:tt $($a:tt $b:tt)*) => { ($crate::count!($($a)*) << 1) | 1 };
}

/// Create a new sparse vector
///
/// Elements are expressions, except that a bare `_` denotes a hole.
/// The `[value; n]` and `[_; n]` repetition forms fill a whole run at once.
///
/// ```rust
/// use sparse_splice::{sparse, Slot, SparseVec};
///
/// let vec = sparse![1, _, 3];
/// assert_eq!(vec, [Slot::Value(1), Slot::Hole, Slot::Value(3)]);
///
/// let empty: SparseVec<i32> = sparse![];
/// assert!(empty.is_empty());
///
/// assert_eq!(sparse![7; 2], [Slot::Value(7), Slot::Value(7)]);
/// assert_eq!(sparse![_; 2], [Slot::<i32>::Hole, Slot::Hole]);
/// ```
#[cfg(any(doc, feature = "alloc"))]
#[macro_export]
macro_rules! sparse {
    () => { <$crate::SparseVec<_>>::new() };
    (_; $n:expr) => { <$crate::SparseVec<_>>::holes($n) };
    ($value:expr; $n:expr) => { $crate::SparseVec::filled($value, $n) };
    ($($elems:tt)+) => { $crate::sparse_internal!(@munch [] $($elems)+) };
}

#[doc(hidden)]
#[cfg(any(doc, feature = "alloc"))]
#[macro_export]
macro_rules! sparse_internal {
    (@munch [$($acc:tt)*]) => { $crate::sparse_internal!(@build $($acc)*) };
    (@munch [$($acc:tt)*] _ $(, $($rest:tt)*)?) => {
        $crate::sparse_internal!(@munch [$($acc)* ($crate::Slot::Hole)] $($($rest)*)?)
    };
    (@munch [$($acc:tt)*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::sparse_internal!(@munch [$($acc)* ($crate::Slot::Value($value))] $($($rest)*)?)
    };
    (@build $(($slot:expr))*) => {{
        let mut vec = $crate::SparseVec::with_capacity($crate::count!($(($slot))*));
        $(vec.push_slot($slot);)*
        vec
    }};
}

/// An ordered sequence of [`Slot`]s, the sparse counterpart of a vector.
///
/// Positions with no value hold an explicit [`Slot::Hole`], so indexing,
/// length, and equality all see holes as ordinary elements. The splicing
/// operations on this type are immutable: they return a new `SparseVec` and
/// leave the receiver untouched.
#[cfg(any(doc, feature = "alloc"))]
pub struct SparseVec<T> {
    slots: Vec<Slot<T>>,
}

#[cfg(any(doc, feature = "alloc"))]
impl<T> SparseVec<T> {
    /// Create a new empty `SparseVec`
    pub fn new() -> Self { Self { slots: Vec::new() } }

    /// Create a new empty `SparseVec` with at least the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Create a `SparseVec` from its backing slots
    pub fn from_slots(slots: Vec<Slot<T>>) -> Self { Self { slots } }

    /// Create a `SparseVec` of `len` holes
    ///
    /// ```rust
    /// use sparse_splice::{sparse, SparseVec};
    /// let vec = SparseVec::<i32>::holes(3);
    /// assert_eq!(vec, sparse![_, _, _]);
    /// ```
    pub fn holes(len: usize) -> Self {
        Self {
            slots: core::iter::repeat_with(|| Slot::Hole).take(len).collect(),
        }
    }

    /// Create a `SparseVec` of `len` clones of `value`
    pub fn filled(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        Self {
            slots: std::vec![Slot::Value(value); len],
        }
    }

    /// Returns the number of slots in the sequence, holes included.
    pub fn len(&self) -> usize { self.slots.len() }

    /// Returns true if and only if the sequence contains no slots.
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    /// Returns the number of slots the sequence can hold without reallocating.
    pub fn capacity(&self) -> usize { self.slots.capacity() }

    /// Extracts a slice containing the entire sequence.
    ///
    /// Equivalent to &s[..].
    pub fn as_slots(&self) -> &[Slot<T>] { self }

    /// Extracts a mutable slice containing the entire sequence.
    ///
    /// Equivalent to &mut s[..].
    pub fn as_mut_slots(&mut self) -> &mut [Slot<T>] { self }

    /// Returns the backing slots
    pub fn into_slots(self) -> Vec<Slot<T>> { self.slots }

    /// Reserve enough space for at least `additional` more slots
    pub fn reserve(&mut self, additional: usize) { self.slots.reserve(additional); }

    /// Shortens the sequence, keeping the first `len` slots and dropping the rest.
    ///
    /// If `len` is greater than the current length, this has no effect.
    pub fn truncate(&mut self, len: usize) { self.slots.truncate(len); }

    /// Clears the sequence, removing all slots.
    pub fn clear(&mut self) { self.slots.clear(); }

    /// Appends a value to the back of the sequence.
    pub fn push(&mut self, value: T) { self.slots.push(Slot::Value(value)); }

    /// Appends a hole to the back of the sequence.
    pub fn push_hole(&mut self) { self.slots.push(Slot::Hole); }

    /// Appends a slot to the back of the sequence.
    pub fn push_slot(&mut self, slot: Slot<T>) { self.slots.push(slot); }

    /// Removes the last slot from the sequence and returns it,
    /// or `None` if the sequence is empty.
    pub fn pop_slot(&mut self) -> Option<Slot<T>> { self.slots.pop() }

    /// Returns an iterator over the values in the sequence, skipping holes.
    ///
    /// ```rust
    /// use sparse_splice::sparse;
    ///
    /// let vec = sparse![1, _, 3];
    /// assert_eq!(vec.values().copied().collect::<Vec<_>>(), [1, 3]);
    /// ```
    pub fn values(&self) -> iter::Values<'_, T> { iter::Values::new(self) }

    /// Clones and appends all slots in a slice to the `SparseVec`.
    pub fn extend_from_slots(&mut self, slots: &[Slot<T>])
    where
        T: Clone,
    {
        self.slots.extend_from_slice(slots);
    }

    /// Removes `delete_count` slots starting at `start`, then inserts
    /// `insertion` in their place if one was supplied, all without touching
    /// `self`: the result is a newly allocated sequence and the receiver is
    /// left exactly as it was.
    ///
    /// * `start` may exceed the current length. Removal then takes nothing,
    ///   and an insertion pads the gap between the current end and `start`
    ///   with holes before the inserted slot.
    /// * If `start + delete_count` exceeds the length, removal stops at the
    ///   end.
    /// * `insertion` distinguishes "no fourth argument" from "insert a hole":
    ///   `None` performs pure removal, while `Some(Slot::Hole)` inserts one
    ///   hole element.
    ///
    /// Every `start` / `delete_count` combination is accepted; out-of-range
    /// indices are clamped or padded rather than rejected.
    ///
    /// # Panics
    ///
    /// May panic or abort if it isn't possible to allocate enough space for
    /// the result
    ///
    /// ```rust
    /// use sparse_splice::{sparse, Slot};
    ///
    /// let vec = sparse!['b', 'c', 'd'];
    ///
    /// // insert at the front
    /// assert_eq!(vec.splice(0, 0, Some(Slot::Value('a'))), sparse!['a', 'b', 'c', 'd']);
    ///
    /// // insert past the end: the gap becomes holes
    /// assert_eq!(vec.splice(5, 0, Some(Slot::Value('x'))), sparse!['b', 'c', 'd', _, _, 'x']);
    ///
    /// // pure removal never pads
    /// assert_eq!(vec.splice(1, 1, None), sparse!['b', 'd']);
    /// ```
    pub fn splice(&self, start: usize, delete_count: usize, insertion: Option<Slot<T>>) -> Self
    where
        T: Clone,
    {
        let len = self.len();
        let head = len.min(start);
        let tail = len.min(start.saturating_add(delete_count));

        // holes only ever fill the gap in front of an insertion
        let pad = match insertion {
            Some(_) => start.saturating_sub(len),
            None => 0,
        };

        let mut out = Self::with_capacity(head + pad + usize::from(insertion.is_some()) + (len - tail));
        out.extend_from_slots(&self.slots[..head]);

        if let Some(slot) = insertion {
            for _ in 0..pad {
                out.push_hole();
            }
            out.push_slot(slot);
        }

        out.extend_from_slots(&self.slots[tail..]);
        out
    }

    /// Returns a new sequence with `delete_count` slots removed starting at
    /// `start`, equivalent to [`splice`](Self::splice) with no insertion.
    ///
    /// ```rust
    /// use sparse_splice::sparse;
    ///
    /// let vec = sparse!['a', 'b', 'c', 'd'];
    /// assert_eq!(vec.removed(0, 1), sparse!['b', 'c', 'd']);
    /// assert_eq!(vec.removed(3, 1), sparse!['a', 'b', 'c']);
    /// ```
    pub fn removed(&self, start: usize, delete_count: usize) -> Self
    where
        T: Clone,
    {
        self.splice(start, delete_count, None)
    }

    /// Returns a new sequence with `slot` inserted at `start`, equivalent to
    /// [`splice`](Self::splice) with a removal count of zero.
    ///
    /// ```rust
    /// use sparse_splice::{sparse, Slot};
    ///
    /// let vec = sparse!['a', 'b', 'd'];
    /// assert_eq!(vec.inserted(2, Slot::Value('c')), sparse!['a', 'b', 'c', 'd']);
    /// ```
    pub fn inserted(&self, start: usize, slot: Slot<T>) -> Self
    where
        T: Clone,
    {
        self.splice(start, 0, Some(slot))
    }

    /// Returns a copy of the sequence padded with holes to at least `len`
    /// slots. A sequence that is already long enough is returned unchanged.
    ///
    /// ```rust
    /// use sparse_splice::sparse;
    ///
    /// let vec = sparse![1, 2];
    /// assert_eq!(vec.padded_to(4), sparse![1, 2, _, _]);
    /// assert_eq!(vec.padded_to(1), sparse![1, 2]);
    /// ```
    pub fn padded_to(&self, len: usize) -> Self
    where
        T: Clone,
    {
        let mut out = Self::with_capacity(self.len().max(len));
        out.extend_from_slots(self);
        while out.len() < len {
            out.push_hole();
        }
        out
    }
}

#[cfg(any(doc, feature = "alloc"))]
impl<T> Deref for SparseVec<T> {
    type Target = [Slot<T>];

    fn deref(&self) -> &Self::Target { &self.slots }
}

#[cfg(any(doc, feature = "alloc"))]
impl<T> DerefMut for SparseVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.slots }
}
