use super::{error::Result, index::ListIndex, sparse_list::SparseList};

/// The ordered-list capability set: index get/set, count, append, clear,
/// search, copy, insert and removal.
///
/// Mutation goes through `&self`; implementors provide their own interior
/// synchronization.
pub trait ListMethods<T> {
    fn get<I: ListIndex>(&self, index: I) -> T;
    fn set<I: ListIndex>(&self, index: I, value: T) -> Result<()>;
    fn count(&self) -> usize;
    fn is_read_only(&self) -> bool;
    fn add(&self, value: T);
    fn clear(&self);
    fn contains(&self, value: &T) -> bool;
    fn copy_to<I: ListIndex>(&self, dest: Option<&mut [T]>, offset: I) -> Result<()>;
    fn index_of(&self, value: &T) -> Option<usize>;
    fn insert<I: ListIndex>(&self, index: I, value: T) -> Result<()>;
    fn remove(&self, value: &T) -> bool;
    fn remove_at<I: ListIndex>(&self, index: I);
}

impl<T: Default + PartialEq + Clone> ListMethods<T> for SparseList<T> {
    #[inline(always)]
    fn get<I: ListIndex>(&self, index: I) -> T {
        SparseList::get(self, index)
    }

    #[inline(always)]
    fn set<I: ListIndex>(&self, index: I, value: T) -> Result<()> {
        SparseList::set(self, index, value)
    }

    #[inline(always)]
    fn count(&self) -> usize {
        SparseList::count(self)
    }

    #[inline(always)]
    fn is_read_only(&self) -> bool {
        SparseList::is_read_only(self)
    }

    #[inline(always)]
    fn add(&self, value: T) {
        SparseList::add(self, value)
    }

    #[inline(always)]
    fn clear(&self) {
        SparseList::clear(self)
    }

    #[inline(always)]
    fn contains(&self, value: &T) -> bool {
        SparseList::contains(self, value)
    }

    #[inline(always)]
    fn copy_to<I: ListIndex>(&self, dest: Option<&mut [T]>, offset: I) -> Result<()> {
        SparseList::copy_to(self, dest, offset)
    }

    #[inline(always)]
    fn index_of(&self, value: &T) -> Option<usize> {
        SparseList::index_of(self, value)
    }

    #[inline(always)]
    fn insert<I: ListIndex>(&self, index: I, value: T) -> Result<()> {
        SparseList::insert(self, index, value)
    }

    #[inline(always)]
    fn remove(&self, value: &T) -> bool {
        SparseList::remove(self, value)
    }

    #[inline(always)]
    fn remove_at<I: ListIndex>(&self, index: I) {
        SparseList::remove_at(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::ListMethods;
    use crate::SparseList;

    fn fill<L: ListMethods<u8>>(list: &L) {
        list.add(1);
        list.add(2);
        list.insert(0, 9).unwrap();
    }

    #[test]
    fn test_generic_caller() {
        let list = SparseList::<u8>::new();
        fill(&list);
        assert_eq!(ListMethods::count(&list), 3);
        assert_eq!(ListMethods::index_of(&list, &2), Some(2));
        assert!(!ListMethods::is_read_only(&list));

        let mut buf = [0_u8; 3];
        ListMethods::copy_to(&list, Some(&mut buf[..]), 0).unwrap();
        assert_eq!(buf, [9, 1, 2]);
    }
}
