use num::PrimInt;

/// Caller-side index accepted by [`SparseList`](crate::SparseList).
///
/// Any primitive integer works. Negative values (and `usize::MAX`, whose
/// `index + 1` length cannot be represented) have no slot; each operation
/// decides on its own what a missing slot means.
pub trait ListIndex: PrimInt {
    #[inline(always)]
    fn slot(&self) -> Option<usize> {
        self.to_usize().filter(|&i| i != usize::MAX)
    }
}

impl<I: PrimInt> ListIndex for I {}
