use std::{
    collections::HashMap as StdHashMap,
    fmt::{self, Debug},
    sync::atomic::{AtomicUsize, Ordering},
};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace};

use super::{
    error::{Result, SparseListError},
    hash_map::{HashMap, RandomState},
    index::ListIndex,
    iter::Iter,
};

/// 書き込みで自動的に伸びる、穴あき (sparse) のリスト
///
/// Any index `>= 0` can be written; the logical length grows to cover it.
/// Indices that were never written (holes) read as `T::default()`.
///
/// # Removal does not compact
///
/// [`remove`](Self::remove) and [`remove_at`](Self::remove_at) punch a hole
/// at the removed position. Later elements keep their indices. The logical
/// length only drops when the tail becomes default-valued, at which point
/// trailing holes (and stored defaults) are trimmed:
///
/// ```
/// use sparse_list::SparseList;
///
/// let list: SparseList<i32> = vec![10, 20, 30].into();
/// list.remove_at(1);
/// assert_eq!(list.to_vec(), vec![10, 0, 30]);
/// list.remove_at(2);
/// assert_eq!(list.to_vec(), vec![10]);
/// ```
///
/// # Concurrency
///
/// Mutating calls (`set`, `add`, `clear`, `remove`, `remove_at`) take `&self`
/// and are serialized against each other by a single write guard. Reads
/// never wait on that guard. A read that spans several elements
/// (`index_of`, `copy_to`, `contains`, iteration) sees whatever the writers
/// have done so far and is not a snapshot. `insert` is a sequence of
/// individually guarded writes and is not atomic as a whole.
pub struct SparseList<T: Default + PartialEq + Clone> {
    store: RwLock<HashMap<usize, T>>,
    len: AtomicUsize,
    write: Mutex<()>,
    default: T,
}

impl<T: Default + PartialEq + Clone> SparseList<T> {
    /// newメソッドの実装
    #[inline(always)]
    pub fn new() -> Self {
        SparseList {
            store: RwLock::new(HashMap::default()),
            len: AtomicUsize::new(0),
            write: Mutex::new(()),
            default: Default::default(),
        }
    }

    /// Creates an empty list whose backing store can hold `cap` entries
    /// without reallocating.
    #[inline(always)]
    pub fn with_capacity(cap: usize) -> Self {
        SparseList {
            store: RwLock::new(HashMap::with_capacity_and_hasher(cap, RandomState::new())),
            len: AtomicUsize::new(0),
            write: Mutex::new(()),
            default: Default::default(),
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.store.read().capacity()
    }

    /// Logical length: one past the highest index still considered set.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    #[inline(always)]
    pub fn count(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// nnzメソッドの実装
    /// 物理的に保持しているエントリ数
    #[inline(always)]
    pub fn nnz(&self) -> usize {
        self.store.read().len()
    }

    /// Always `false`: every list accepts mutation.
    #[inline(always)]
    pub fn is_read_only(&self) -> bool {
        false
    }

    #[inline(always)]
    fn read_at(&self, index: usize) -> T {
        self.store
            .read()
            .get(&index)
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }

    /// Returns the value at `index`, or `T::default()` for a hole.
    ///
    /// Reads are not bounds checked: a negative index simply has no entry
    /// and reads as the default.
    #[inline(always)]
    pub fn get<I: ListIndex>(&self, index: I) -> T {
        match index.slot() {
            Some(i) => self.read_at(i),
            None => self.default.clone(),
        }
    }

    /// Stores `value` at `index`, growing the logical length to `index + 1`
    /// when needed. Writing never shrinks the list, even for a default value.
    pub fn set<I: ListIndex>(&self, index: I, value: T) -> Result<()> {
        let index = index.slot().ok_or(SparseListError::InvalidIndex)?;

        let _guard = self.write.lock();
        let mut store = self.store.write();
        store.insert(index, value);
        let len = self.len.load(Ordering::Acquire);
        if index >= len {
            self.len.store(index + 1, Ordering::Release);
            trace!(target: "sparse_list", event = "grow", from = len, to = index + 1);
        }
        Ok(())
    }

    /// Appends `value` at index `len()`.
    pub fn add(&self, value: T) {
        let _guard = self.write.lock();
        let mut store = self.store.write();
        let len = self.len.load(Ordering::Acquire);
        // may overwrite a default that shrink left stored past the tail
        store.insert(len, value);
        self.len.store(len + 1, Ordering::Release);
        trace!(target: "sparse_list", event = "add", index = len);
    }

    /// pushメソッドの実装
    #[inline(always)]
    pub fn push(&self, value: T) {
        self.add(value)
    }

    /// Drops every entry and resets the length to zero.
    pub fn clear(&self) {
        let _guard = self.write.lock();
        let mut store = self.store.write();
        let dropped = store.len();
        store.clear();
        self.len.store(0, Ordering::Release);
        debug!(target: "sparse_list", event = "clear", dropped);
    }

    /// Whether some *stored* entry equals `value`.
    ///
    /// Holes are not entries: `contains(&T::default())` is only true when a
    /// default value was written explicitly. Compare [`index_of`](Self::index_of).
    pub fn contains(&self, value: &T) -> bool {
        self.store.read().values().any(|v| v == value)
    }

    /// First logical index whose value equals `value`.
    ///
    /// Holes read as `T::default()` here, so searching for the default finds
    /// the first hole.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == *value)
    }

    /// Copies the logical sequence into `dest` starting at `offset`.
    ///
    /// Fails with [`NullArgument`](SparseListError::NullArgument) for a
    /// missing buffer, [`OutOfRange`](SparseListError::OutOfRange) for a
    /// negative offset and
    /// [`InsufficientCapacity`](SparseListError::InsufficientCapacity) when
    /// `dest` has fewer than `len()` slots left after `offset`.
    pub fn copy_to<I: ListIndex>(&self, dest: Option<&mut [T]>, offset: I) -> Result<()> {
        let dest = dest.ok_or(SparseListError::NullArgument)?;
        let offset = offset.to_usize().ok_or(SparseListError::OutOfRange)?;

        let count = self.len();
        let available = dest.len().saturating_sub(offset);
        if offset > dest.len() || available < count {
            return Err(SparseListError::InsufficientCapacity {
                needed: count,
                available,
            });
        }

        for (i, slot) in dest[offset..offset + count].iter_mut().enumerate() {
            *slot = self.read_at(i);
        }
        Ok(())
    }

    /// insertメソッド
    /// `index` 以降の要素を 1 つ後ろへずらしてから `value` を書き込む
    ///
    /// Inserting past `len()` leaves the gap as holes. Each shifted element is
    /// a separate guarded write, so a concurrent writer can interleave.
    pub fn insert<I: ListIndex>(&self, index: I, value: T) -> Result<()> {
        let index = index.slot().ok_or(SparseListError::InvalidIndex)?;

        let mut i = self.len();
        while i > index {
            self.set(i, self.read_at(i - 1))?;
            i -= 1;
        }
        self.set(index, value)
    }

    /// Removes the first element equal to `value`, leaving a hole behind.
    ///
    /// Returns `false` when no logical index matches. Since the search goes
    /// through [`index_of`](Self::index_of), removing the default value
    /// targets the first hole, which is a no-op apart from the tail trim.
    pub fn remove(&self, value: &T) -> bool {
        let Some(index) = self.index_of(value) else {
            return false;
        };

        let _guard = self.write.lock();
        let mut store = self.store.write();
        store.remove(&index);
        trace!(target: "sparse_list", event = "remove", index);
        self.shrink(&store);
        true
    }

    /// Removes the entry at `index`, leaving a hole behind.
    ///
    /// Negative, absent and out-of-range indices are ignored.
    pub fn remove_at<I: ListIndex>(&self, index: I) {
        let _guard = self.write.lock();
        let mut store = self.store.write();
        if let Some(index) = index.slot() {
            if store.remove(&index).is_some() {
                trace!(target: "sparse_list", event = "remove_at", index);
            }
        }
        self.shrink(&store);
    }

    // Caller holds the write guard. Trims by value equality, so stored
    // defaults at the tail go too.
    fn shrink(&self, store: &HashMap<usize, T>) {
        let from = self.len.load(Ordering::Acquire);
        let mut len = from;
        while len > 0 && store.get(&(len - 1)).map_or(true, |v| *v == self.default) {
            len -= 1;
        }
        if len != from {
            self.len.store(len, Ordering::Release);
            debug!(target: "sparse_list", event = "shrink", from, to = len);
        }
    }

    /// Lazily reads indices `0..len()`; see [`Iter`].
    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Stored `(index, value)` pairs in ascending index order. Holes are
    /// skipped; explicitly stored defaults are not.
    pub fn entries(&self) -> Vec<(usize, T)> {
        let mut entries: Vec<(usize, T)> = self
            .store
            .read()
            .iter()
            .map(|(&index, value)| (index, value.clone()))
            .collect();
        entries.sort_unstable_by_key(|(index, _)| *index);
        entries
    }

    /// Dense copy of the logical sequence, holes filled with defaults.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T: Default + PartialEq + Clone> Clone for SparseList<T> {
    fn clone(&self) -> Self {
        // Writers update `len` while holding the store lock, so this pair is consistent.
        let store = self.store.read();
        SparseList {
            store: RwLock::new(store.clone()),
            len: AtomicUsize::new(self.len.load(Ordering::Acquire)),
            write: Mutex::new(()),
            default: self.default.clone(),
        }
    }
}

impl<T: Default + PartialEq + Clone + Debug> Debug for SparseList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.sign_plus() {
            f.debug_struct("SparseList")
                .field("store", &*self.store.read())
                .field("len", &self.len())
                .field("default", &self.default)
                .finish()
        } else if f.alternate() {
            write!(f, "SparseList({:?})", self.entries())
        } else {
            f.debug_list().entries(self.iter()).finish()
        }
    }
}

/// Lists are equal when their logical sequences are; a stored default and
/// a hole compare the same.
impl<T: Default + PartialEq + Clone> PartialEq for SparseList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Default + PartialEq + Clone> Default for SparseList<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default + PartialEq + Clone> From<Vec<T>> for SparseList<T> {
    #[inline(always)]
    fn from(vec: Vec<T>) -> Self {
        let list = SparseList::with_capacity(vec.len());
        vec.into_iter().for_each(|elem| list.add(elem));
        list
    }
}

impl<T: Default + PartialEq + Clone> TryFrom<StdHashMap<usize, T>> for SparseList<T> {
    type Error = SparseListError;

    /// Writes each `(index, value)` pair; the length covers the largest key.
    fn try_from(map: StdHashMap<usize, T>) -> Result<Self> {
        let list = SparseList::with_capacity(map.len());
        for (index, elem) in map {
            list.set(index, elem)?;
        }
        Ok(list)
    }
}

impl<T: Default + PartialEq + Clone> From<SparseList<T>> for Vec<T> {
    #[inline(always)]
    fn from(list: SparseList<T>) -> Self {
        list.to_vec()
    }
}

impl<T: Default + PartialEq + Clone> FromIterator<T> for SparseList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let list = SparseList::new();
        iter.into_iter().for_each(|elem| list.add(elem));
        list
    }
}

impl<T: Default + PartialEq + Clone> Extend<T> for SparseList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.add(elem);
        }
    }
}

impl<'a, T: Default + PartialEq + Clone> IntoIterator for &'a SparseList<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Default + PartialEq + Clone> IntoIterator for SparseList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}
