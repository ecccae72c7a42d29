use crate::{Slot, SparseVec};

/// Immutable splice over a possibly absent sequence.
///
/// Behaves exactly like [`SparseVec::splice`], except that the sequence
/// itself is optional: `None` stands for a sequence that was never
/// initialized and is treated as empty. Pure removal on an absent sequence
/// therefore returns the empty sequence for any `start` / `delete_count`,
/// while an insertion builds a fresh sequence of `start` holes followed by
/// the inserted slot.
///
/// ```rust
/// use sparse_splice::{splice, sparse, Slot, SparseVec};
///
/// // insertion into an absent sequence pads with holes
/// let out = splice(None, 2, 0, Some(Slot::Value('v')));
/// assert_eq!(out, sparse![_, _, 'v']);
///
/// // an explicit hole still counts as an insertion
/// let out: SparseVec<char> = splice(None, 2, 0, Some(Slot::Hole));
/// assert_eq!(out, sparse![_, _, _]);
///
/// // pure removal on an absent sequence is empty
/// let out: SparseVec<char> = splice(None, 2, 1, None);
/// assert_eq!(out, sparse![]);
/// ```
pub fn splice<T: Clone>(
    array: Option<&SparseVec<T>>,
    start: usize,
    delete_count: usize,
    insertion: Option<Slot<T>>,
) -> SparseVec<T> {
    match array {
        Some(array) => array.splice(start, delete_count, insertion),
        None => SparseVec::new().splice(start, delete_count, insertion),
    }
}
