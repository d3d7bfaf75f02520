use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops::{BitAndAssign, BitOrAssign, Not, SubAssign};

use crate::error::BitSetError;
use crate::popcount::PopCount;
use crate::store::Store;
use crate::word::{WORD_BITS, split, tail_mask, word_count};

/// A fixed-capacity set of small non-negative integers.
///
/// `capacity` is chosen at construction and never changes. Storage is rounded
/// up to whole 32-bit words: a set that fits in one word keeps it inline
/// (scalar form), anything wider uses a boxed word array (array form). Both
/// forms behave identically; [`is_scalar`] reports which one backs a set.
///
/// Bits at indices `>= capacity` are always zero.
///
/// The number of set bits is cached. Mutations only mark the cache stale, and
/// [`recount`] (or any query that needs the count) recomputes it once.
///
/// Point operations check their index with `debug_assert!` only. Operations
/// combining two sets always panic on a capacity mismatch. The `try_*`
/// variants report both conditions as [`BitSetError`] instead.
///
/// [`is_scalar`]: BitSet::is_scalar
/// [`recount`]: BitSet::recount
#[derive(Clone)]
pub struct BitSet {
    len: usize,
    store: Store,
    count: PopCount,
}

impl BitSet {
    /// Creates a set of `capacity` bits with all bits unset.
    ///
    /// # Panics
    /// Panics if `capacity == 0` or the word storage cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut set = BitSet::new(40);
    /// assert!(!set.is_scalar());
    /// assert!(set.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(set) => set,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a set of `capacity` bits with all bits unset, reporting
    /// construction failures instead of panicking.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::{BitSet, BitSetError};
    ///
    /// assert_eq!(BitSet::try_new(0).unwrap_err(), BitSetError::ZeroCapacity);
    /// assert!(BitSet::try_new(10).unwrap().is_scalar());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, BitSetError> {
        if capacity == 0 {
            return Err(BitSetError::ZeroCapacity);
        }
        let words = word_count(capacity);
        let store = Store::try_zeroed(words).inspect_err(|err| {
            tracing::debug!(capacity, words, %err, "bit-set allocation failed");
        })?;
        tracing::trace!(
            capacity,
            words,
            scalar = store.is_scalar(),
            "created bit-set"
        );
        Ok(Self {
            len: capacity,
            store,
            count: PopCount::known(0),
        })
    }

    /// Creates a set of `capacity` bits with every bit set.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut set = BitSet::with_all_set(10);
    /// assert_eq!(set.count(), 10);
    /// ```
    pub fn with_all_set(capacity: usize) -> Self {
        let mut set = Self::new(capacity);
        set.set_all();
        set
    }

    /// Creates a set of `capacity` bits holding exactly the given indices.
    ///
    /// # Panics
    /// Panics if any index is `>= capacity`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let set = BitSet::from_ones_iter(8, [1, 3, 5]);
    /// assert_eq!(set.to_index_vec(), vec![1, 3, 5]);
    /// ```
    pub fn from_ones_iter<I: IntoIterator<Item = usize>>(capacity: usize, iter: I) -> Self {
        let mut set = Self::new(capacity);
        for idx in iter {
            assert!(idx < capacity, "Bit index {idx} out of bounds");
            set.set(idx);
        }
        set
    }

    /// Returns the number of addressable bits.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.len
    }

    /// Returns the number of 32-bit storage words.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.store.words().len()
    }

    /// Returns `true` if the set is backed by a single inline word.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.store.is_scalar()
    }

    /// Sets the bit at `idx`.
    ///
    /// The index is only checked in debug builds; see [`try_set`] for a
    /// checked version. In release builds an index past the capacity of a
    /// scalar set wraps onto bit `idx % 32`, which may be a valid bit.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut set = BitSet::new(8);
    /// set.set(3);
    /// assert!(set.get(3));
    /// ```
    ///
    /// [`try_set`]: BitSet::try_set
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < self.len, "Bit index {idx} out of bounds");
        let (n, bit) = split(idx);
        let (before, after) = self.store.update(n, |w| w | 1 << bit);
        self.count.mark(before, after);
    }

    /// Unsets the bit at `idx`.
    ///
    /// Like [`set`](BitSet::set), the index is only checked in debug builds.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut set = BitSet::with_all_set(8);
    /// set.clear(3);
    /// assert!(!set.get(3));
    /// ```
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < self.len, "Bit index {idx} out of bounds");
        let (n, bit) = split(idx);
        let (before, after) = self.store.update(n, |w| w & !(1 << bit));
        self.count.mark(before, after);
    }

    /// Returns `true` if the bit at `idx` is set.
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < self.len, "Bit index {idx} out of bounds");
        let (n, bit) = split(idx);
        self.store.word(n) & 1 << bit != 0
    }

    /// Checked version of [`set`](BitSet::set).
    pub fn try_set(&mut self, idx: usize) -> Result<(), BitSetError> {
        self.check_index(idx)?;
        self.set(idx);
        Ok(())
    }

    /// Checked version of [`clear`](BitSet::clear).
    pub fn try_clear(&mut self, idx: usize) -> Result<(), BitSetError> {
        self.check_index(idx)?;
        self.clear(idx);
        Ok(())
    }

    /// Checked version of [`get`](BitSet::get).
    ///
    /// # Examples
    /// ```
    /// use word_bitset::{BitSet, BitSetError};
    ///
    /// let set = BitSet::new(10);
    /// assert_eq!(set.try_get(9), Ok(false));
    /// assert_eq!(
    ///     set.try_get(10),
    ///     Err(BitSetError::IndexOutOfRange { index: 10, capacity: 10 })
    /// );
    /// ```
    pub fn try_get(&self, idx: usize) -> Result<bool, BitSetError> {
        self.check_index(idx)?;
        Ok(self.get(idx))
    }

    /// Sets every bit in `[0, capacity)`. The count becomes `capacity`
    /// without a scan.
    pub fn set_all(&mut self) {
        self.store.fill(!0, tail_mask(self.len));
        self.count.reset(self.len);
    }

    /// Unsets every bit. The count becomes zero without a scan.
    pub fn clear_all(&mut self) {
        self.store.fill(0, tail_mask(self.len));
        self.count.reset(0);
    }

    /// Overwrites `self` with the contents and cached count of `other`.
    ///
    /// # Panics
    /// Panics if the capacities differ.
    pub fn assign(&mut self, other: &BitSet) {
        self.assert_same_capacity(other);
        self.store.copy_from(&other.store);
        self.count = other.count;
    }

    /// Adds every bit of `other` to `self`.
    ///
    /// # Panics
    /// Panics if the capacities differ.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut a = BitSet::from_ones_iter(8, [1, 3, 5]);
    /// let b = BitSet::from_ones_iter(8, [3, 5, 7]);
    /// a.union(&b);
    /// assert_eq!(a.to_index_vec(), vec![1, 3, 5, 7]);
    /// ```
    pub fn union(&mut self, other: &BitSet) {
        self.assert_same_capacity(other);
        let changes = self.store.combine(&other.store, |a, b| a | b);
        self.count.mark_changes(changes);
    }

    /// Keeps only the bits of `self` that are also set in `other`.
    ///
    /// # Panics
    /// Panics if the capacities differ.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut a = BitSet::from_ones_iter(8, [1, 3, 5]);
    /// let b = BitSet::from_ones_iter(8, [3, 5, 7]);
    /// a.intersect(&b);
    /// assert_eq!(a.to_index_vec(), vec![3, 5]);
    /// ```
    pub fn intersect(&mut self, other: &BitSet) {
        self.assert_same_capacity(other);
        let changes = self.store.combine(&other.store, |a, b| a & b);
        self.count.mark_changes(changes);
    }

    /// Removes every bit of `other` from `self`.
    ///
    /// # Panics
    /// Panics if the capacities differ.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut a = BitSet::from_ones_iter(8, [1, 3, 5]);
    /// let b = BitSet::from_ones_iter(8, [3, 5, 7]);
    /// a.subtract(&b);
    /// assert_eq!(a.to_index_vec(), vec![1]);
    /// ```
    pub fn subtract(&mut self, other: &BitSet) {
        self.assert_same_capacity(other);
        let changes = self.store.combine(&other.store, |a, b| a & !b);
        self.count.mark_changes(changes);
    }

    /// Inverts every bit in `[0, capacity)`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut set = BitSet::with_all_set(10);
    /// set.negate();
    /// assert!(set.is_empty());
    /// ```
    pub fn negate(&mut self) {
        let changes = self.store.map(tail_mask(self.len), |w| !w);
        self.count.mark_changes(changes);
    }

    /// Checked version of [`union`](BitSet::union).
    pub fn try_union(&mut self, other: &BitSet) -> Result<(), BitSetError> {
        self.check_capacity(other)?;
        self.union(other);
        Ok(())
    }

    /// Checked version of [`intersect`](BitSet::intersect).
    pub fn try_intersect(&mut self, other: &BitSet) -> Result<(), BitSetError> {
        self.check_capacity(other)?;
        self.intersect(other);
        Ok(())
    }

    /// Checked version of [`subtract`](BitSet::subtract).
    pub fn try_subtract(&mut self, other: &BitSet) -> Result<(), BitSetError> {
        self.check_capacity(other)?;
        self.subtract(other);
        Ok(())
    }

    /// Checked version of [`assign`](BitSet::assign).
    ///
    /// # Examples
    /// ```
    /// use word_bitset::{BitSet, BitSetError};
    ///
    /// let mut a = BitSet::new(8);
    /// let b = BitSet::new(40);
    /// assert_eq!(
    ///     a.try_assign(&b),
    ///     Err(BitSetError::CapacityMismatch { left: 8, right: 40 })
    /// );
    /// ```
    pub fn try_assign(&mut self, other: &BitSet) -> Result<(), BitSetError> {
        self.check_capacity(other)?;
        self.assign(other);
        Ok(())
    }

    /// Brings the cached count up to date. Does nothing if no mutation
    /// changed a bit since the last recount.
    pub fn recount(&mut self) {
        self.count.refresh(self.store.words());
    }

    /// Returns the number of set bits, recounting first if needed.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut set = BitSet::new(40);
    /// set.set(0);
    /// set.set(39);
    /// set.set(17);
    /// assert_eq!(set.count(), 3);
    /// ```
    pub fn count(&mut self) -> usize {
        self.count.refresh(self.store.words())
    }

    /// Returns the cached count, or `None` if it is stale.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut set = BitSet::new(8);
    /// set.set(2);
    /// assert_eq!(set.cached_count(), None);
    /// set.recount();
    /// assert_eq!(set.cached_count(), Some(1));
    /// ```
    #[inline]
    pub fn cached_count(&self) -> Option<usize> {
        self.count.cached()
    }

    /// Returns `true` if no bit is set, recounting first if needed.
    pub fn is_empty(&mut self) -> bool {
        self.count() == 0
    }

    /// Calls `visit` with the index of every set bit, in ascending order.
    pub fn for_each<F: FnMut(usize)>(&self, visit: F) {
        self.iter_ones().for_each(visit);
    }

    /// Collects the indices of all set bits in ascending order.
    pub fn to_index_vec(&self) -> Vec<usize> {
        self.iter_ones().collect()
    }

    /// Returns an iterator over the indices of all set bits, in ascending
    /// order.
    ///
    /// Iterating through the entire iterator runs in O(max(k, w)) where k is
    /// the number of set bits and w is the number of words.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let set = BitSet::from_ones_iter(70, [0, 33, 69]);
    /// let mut ones = set.iter_ones();
    /// assert_eq!(ones.next(), Some(0));
    /// assert_eq!(ones.next(), Some(33));
    /// assert_eq!(ones.next(), Some(69));
    /// assert_eq!(ones.next(), None);
    /// ```
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_> {
        let words = self.store.words();
        IterOnes {
            words,
            word_idx: 0,
            current: words[0],
            base_bit_idx: 0,
        }
    }

    /// Returns the lowest set index or `None` if all bits are unset.
    pub fn first_set_bit(&self) -> Option<usize> {
        for (n, &word) in self.store.words().iter().enumerate() {
            if word != 0 {
                return Some(n * WORD_BITS + word.trailing_zeros() as usize);
            }
        }
        None
    }

    /// Returns `true` if every bit set in `other` is also set in `self`.
    ///
    /// Sets of different capacity never contain each other.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let a = BitSet::from_ones_iter(8, [1, 3, 5]);
    /// let b = BitSet::from_ones_iter(8, [3, 5]);
    /// assert!(a.contains_all(&b));
    /// assert!(!b.contains_all(&a));
    /// assert!(!a.contains_all(&BitSet::new(16)));
    /// ```
    pub fn contains_all(&self, other: &BitSet) -> bool {
        self.len == other.len
            && self
                .store
                .words()
                .iter()
                .zip(other.store.words())
                .all(|(&a, &b)| a | b == a)
    }

    #[cfg(test)]
    pub(crate) fn words(&self) -> &[u32] {
        self.store.words()
    }

    fn check_index(&self, idx: usize) -> Result<(), BitSetError> {
        if idx < self.len {
            Ok(())
        } else {
            Err(BitSetError::IndexOutOfRange {
                index: idx,
                capacity: self.len,
            })
        }
    }

    fn check_capacity(&self, other: &BitSet) -> Result<(), BitSetError> {
        if self.len == other.len {
            Ok(())
        } else {
            Err(BitSetError::CapacityMismatch {
                left: self.len,
                right: other.len,
            })
        }
    }

    #[inline]
    fn assert_same_capacity(&self, other: &BitSet) {
        assert_eq!(self.len, other.len, "BitSet capacities must match.");
    }
}

/// Two sets are equal if they have the same capacity and the same bits. The
/// state of the cached count is not compared.
impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.store.words() == other.store.words()
    }
}

impl Eq for BitSet {}

impl core::hash::Hash for BitSet {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        self.store.words().hash(state);
    }
}

impl<'set> IntoIterator for &'set BitSet {
    type Item = usize;
    type IntoIter = IterOnes<'set>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_ones()
    }
}

impl BitOrAssign<&BitSet> for BitSet {
    fn bitor_assign(&mut self, rhs: &BitSet) {
        self.union(rhs)
    }
}

impl BitAndAssign<&BitSet> for BitSet {
    fn bitand_assign(&mut self, rhs: &BitSet) {
        self.intersect(rhs)
    }
}

impl SubAssign<&BitSet> for BitSet {
    fn sub_assign(&mut self, rhs: &BitSet) {
        self.subtract(rhs)
    }
}

impl Not for &BitSet {
    type Output = BitSet;

    fn not(self) -> Self::Output {
        let mut negated = self.clone();
        negated.negate();
        negated
    }
}

/// Iterator over the indices of set bits in a [`BitSet`].
///
/// Yields the positions of all bits that are set, in ascending order.
///
/// Returned by [`BitSet::iter_ones()`].
#[derive(Clone)]
pub struct IterOnes<'set> {
    words: &'set [u32],
    word_idx: usize,
    current: u32,
    base_bit_idx: usize,
}

impl Iterator for IterOnes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        // padding bits past the capacity are always zero, so no bound check
        while self.word_idx < self.words.len() {
            if self.current != 0 {
                let tz = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1; // unset LSB
                return Some(self.base_bit_idx + tz);
            }

            self.word_idx += 1;
            self.base_bit_idx += WORD_BITS;
            self.current = *self.words.get(self.word_idx).unwrap_or(&0);
        }
        None
    }
}

impl FusedIterator for IterOnes<'_> {}
