use alloc::boxed::Box;
use alloc::vec::Vec;
use core::slice;

use crate::error::BitSetError;

/// Word storage of a bit-set.
///
/// The form is chosen once from the word count: a single word is held inline,
/// anything wider lives in a boxed slice. Both forms expose their words as a
/// slice so read-only code never has to care which one it is looking at.
#[derive(Clone)]
pub(crate) enum Store {
    Scalar(u32),
    Array(Box<[u32]>),
}

impl Store {
    /// Allocates `words` zeroed words, picking the scalar form for one word.
    pub(crate) fn try_zeroed(words: usize) -> Result<Self, BitSetError> {
        if words == 1 {
            return Ok(Store::Scalar(0));
        }
        let mut buf = Vec::new();
        buf.try_reserve_exact(words)
            .map_err(|_| BitSetError::Allocation { words })?;
        buf.resize(words, 0);
        Ok(Store::Array(buf.into_boxed_slice()))
    }

    #[inline]
    pub(crate) fn is_scalar(&self) -> bool {
        matches!(self, Store::Scalar(_))
    }

    #[inline]
    pub(crate) fn words(&self) -> &[u32] {
        match self {
            Store::Scalar(word) => slice::from_ref(word),
            Store::Array(words) => words,
        }
    }

    #[inline]
    pub(crate) fn word(&self, n: usize) -> u32 {
        match self {
            Store::Scalar(word) => {
                debug_assert_eq!(n, 0);
                *word
            }
            Store::Array(words) => words[n],
        }
    }

    /// Rewrites word `n` with `op`, returning the word before and after.
    #[inline]
    pub(crate) fn update(&mut self, n: usize, op: impl FnOnce(u32) -> u32) -> (u32, u32) {
        let slot = match self {
            Store::Scalar(word) => {
                debug_assert_eq!(n, 0);
                word
            }
            Store::Array(words) => &mut words[n],
        };
        let before = *slot;
        *slot = op(before);
        (before, *slot)
    }

    /// Writes `value` into every word, keeping only `tail` in the last one.
    pub(crate) fn fill(&mut self, value: u32, tail: u32) {
        match self {
            Store::Scalar(word) => *word = value & tail,
            Store::Array(words) => {
                words.fill(value);
                if let Some(last) = words.last_mut() {
                    *last &= tail;
                }
            }
        }
    }

    /// Copies every word of `other` into `self`.
    pub(crate) fn copy_from(&mut self, other: &Store) {
        match (self, other) {
            (Store::Scalar(word), Store::Scalar(src)) => *word = *src,
            (Store::Array(words), Store::Array(src)) => words.copy_from_slice(src),
            _ => panic!("storage forms differ"),
        }
    }

    /// Replaces each word `a` with `op(a, b)` where `b` is the matching word of
    /// `other`. Returns the OR of every per-word change.
    pub(crate) fn combine(&mut self, other: &Store, op: impl Fn(u32, u32) -> u32) -> u32 {
        match (self, other) {
            (Store::Scalar(word), Store::Scalar(src)) => {
                let before = *word;
                *word = op(before, *src);
                before ^ *word
            }
            (Store::Array(words), Store::Array(src)) => {
                let mut changes = 0;
                for (word, &src) in words.iter_mut().zip(src.iter()) {
                    let before = *word;
                    *word = op(before, src);
                    changes |= before ^ *word;
                }
                changes
            }
            _ => panic!("storage forms differ"),
        }
    }

    /// Replaces each word `a` with `op(a)`, keeping only `tail` in the last
    /// word. Returns the OR of every per-word change.
    pub(crate) fn map(&mut self, tail: u32, op: impl Fn(u32) -> u32) -> u32 {
        match self {
            Store::Scalar(word) => {
                let before = *word;
                *word = op(before) & tail;
                before ^ *word
            }
            Store::Array(words) => {
                let last = words.len() - 1;
                let mut changes = 0;
                for (n, word) in words.iter_mut().enumerate() {
                    let before = *word;
                    let mut after = op(before);
                    if n == last {
                        after &= tail;
                    }
                    *word = after;
                    changes |= before ^ after;
                }
                changes
            }
        }
    }
}
