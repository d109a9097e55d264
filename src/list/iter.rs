//! Lazy iteration over a [`SparseList`](crate::SparseList).

use super::sparse_list::SparseList;

/// Iterator returned by [`SparseList::iter`].
///
/// Yields `get(0)`, `get(1)`, … by value, re-reading `len()` before every
/// step, so holes come out as `T::default()`. Nothing is snapshotted: if
/// another thread mutates the list mid-iteration, the sequence reflects
/// whatever state each step happens to observe. Calling `iter()` again
/// restarts from index 0.
pub struct Iter<'a, T: Default + PartialEq + Clone> {
    list: &'a SparseList<T>,
    index: usize,
}

impl<'a, T: Default + PartialEq + Clone> Iter<'a, T> {
    #[inline(always)]
    pub(crate) fn new(list: &'a SparseList<T>) -> Self {
        Iter { list, index: 0 }
    }
}

impl<T: Default + PartialEq + Clone> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.index < self.list.len() {
            let elem = self.list.get(self.index);
            self.index += 1;
            Some(elem)
        } else {
            None
        }
    }
}
