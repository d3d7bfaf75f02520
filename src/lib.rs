//! A fixed-capacity bit-set over 32-bit words with a lazily cached population
//! count.
//!
//! Designed for analysis passes and allocators that track small integer ids
//! (variable indices, basic blocks, registers): liveness sets, visited sets,
//! dominator sets.
//!
//! [`BitSet`] is the main struct in this library. Its [features](#features)
//! are listed below.
//!
//! # Examples
//! ```
//! use word_bitset::BitSet;
//!
//! let mut live = BitSet::new(40);
//! live.set(0);
//! live.set(39);
//! live.set(17);
//! assert_eq!(live.to_index_vec(), vec![0, 17, 39]);
//! assert!(!live.is_empty());
//! assert_eq!(live.count(), 3);
//! ```
//!
//! # Storage forms
//!
//! The capacity is rounded up to whole words once, at construction. A set that
//! fits in a single word stores it inline (scalar form); wider sets store a
//! boxed word array (array form). Both forms expose the same operations with
//! the same results.
//!
//! # Cached count
//!
//! Every mutation records whether it actually changed a bit. The population
//! count is only recomputed (with a constant-time-per-word SWAR count) when it
//! is asked for and something changed since the last time, so a burst of set
//! algebra costs one scan instead of one per operation.
//!
//! # Features
//!
//! - `#![no_std]` compatible (needs `alloc` for sets wider than one word)
//! - Point operations: `set`, `clear`, `get`
//! - Bulk operations: `set_all`, `clear_all`, `assign`
//! - In-place set algebra: `union`, `intersect`, `subtract`, `negate`
//!   (also as `|=`, `&=`, `-=` and `!`)
//! - Lazily cached population count: `recount`, `count`, `is_empty`
//! - Ascending enumeration: `iter_ones`, `for_each`, `to_index_vec`
//! - Comparison: `==`, `contains_all`
//! - Checked `try_*` variants returning [`BitSetError`]
//! - Diagnostic rendering: `Display`, `display_with`, `to_bit_string`

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod bitset;
mod display;
mod error;
mod popcount;
mod store;
mod word;

#[cfg(test)]
mod tests_props;

pub use bitset::{BitSet, IterOnes};
pub use display::Labeled;
pub use error::BitSetError;
pub use word::{ADDRESS_BITS_PER_WORD, BIT_INDEX_MASK, WORD_BITS, popcount, word_count};
