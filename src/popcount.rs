use crate::word::popcount;

/// Cached population count of a bit-set.
///
/// The count is trusted while `dirty` is zero. Every mutation folds the XOR of
/// the old and new word into `dirty`, so a mutation that changes nothing
/// leaves the cache trusted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PopCount {
    count: usize,
    dirty: u32,
}

impl PopCount {
    /// A trusted cache holding `count`.
    pub(crate) const fn known(count: usize) -> Self {
        Self { count, dirty: 0 }
    }

    /// Records a word transition from `before` to `after`.
    #[inline]
    pub(crate) fn mark(&mut self, before: u32, after: u32) {
        self.dirty |= before ^ after;
    }

    /// Records an already accumulated change mask.
    #[inline]
    pub(crate) fn mark_changes(&mut self, changes: u32) {
        self.dirty |= changes;
    }

    #[inline]
    pub(crate) fn is_stale(&self) -> bool {
        self.dirty != 0
    }

    /// Stores a count known without scanning and trusts it.
    #[inline]
    pub(crate) fn reset(&mut self, count: usize) {
        self.count = count;
        self.dirty = 0;
    }

    /// Recomputes the count from `words` unless it is already trusted, and
    /// returns it.
    pub(crate) fn refresh(&mut self, words: &[u32]) -> usize {
        if self.is_stale() {
            self.count = words.iter().map(|&w| popcount(w) as usize).sum();
            self.dirty = 0;
        }
        self.count
    }

    /// Returns the count if it is trusted.
    #[inline]
    pub(crate) fn cached(&self) -> Option<usize> {
        if self.is_stale() {
            None
        } else {
            Some(self.count)
        }
    }
}
