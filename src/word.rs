//! Word-level arithmetic shared by both storage forms.

/// Number of bits needed to address a bit inside one word.
pub const ADDRESS_BITS_PER_WORD: u32 = 5;

/// Number of flag bits held by one storage word.
pub const WORD_BITS: usize = 1 << ADDRESS_BITS_PER_WORD;

/// Mask selecting the in-word bit offset of an index.
pub const BIT_INDEX_MASK: usize = WORD_BITS - 1;

/// Computes the number of words needed to store `bits` bits.
///
/// # Examples
/// ```
/// use word_bitset::word_count;
///
/// assert_eq!(word_count(1), 1);
/// assert_eq!(word_count(32), 1);
/// assert_eq!(word_count(33), 2);
/// assert_eq!(word_count(40), 2);
/// ```
pub const fn word_count(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// Mask of the bits of the last word that lie below `bits`.
pub(crate) const fn tail_mask(bits: usize) -> u32 {
    let used = bits & BIT_INDEX_MASK;
    if used == 0 {
        !0u32
    } else {
        (1u32 << used) - 1
    }
}

/// Splits an absolute bit index into its word index and in-word offset.
#[inline]
pub(crate) const fn split(idx: usize) -> (usize, u32) {
    (
        idx >> ADDRESS_BITS_PER_WORD,
        (idx & BIT_INDEX_MASK) as u32,
    )
}

/// Counts the set bits of `word` with the parallel (SWAR) reduction.
///
/// Pairs, nibbles and bytes are summed in place, then the four byte sums are
/// folded into the top byte by one multiplication.
///
/// # Examples
/// ```
/// use word_bitset::popcount;
///
/// assert_eq!(popcount(0), 0);
/// assert_eq!(popcount(0b1011), 3);
/// assert_eq!(popcount(u32::MAX), 32);
/// ```
#[inline]
pub const fn popcount(word: u32) -> u32 {
    let v = word - ((word >> 1) & 0x5555_5555);
    let v = (v & 0x3333_3333) + ((v >> 2) & 0x3333_3333);
    (((v + (v >> 4)) & 0x0F0F_0F0F).wrapping_mul(0x0101_0101)) >> 24
}
