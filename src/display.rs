use alloc::string::String;
use core::fmt::{self, Debug, Display, Formatter};

use crate::bitset::BitSet;

impl BitSet {
    /// Renders one character per index in `[0, capacity)`, `on` for set bits
    /// and `off` for unset ones, lowest index first.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let set = BitSet::from_ones_iter(6, [0, 2, 3]);
    /// assert_eq!(set.to_bit_string('1', '0'), "101100");
    /// ```
    pub fn to_bit_string(&self, on: char, off: char) -> String {
        (0..self.capacity())
            .map(|idx| if self.get(idx) { on } else { off })
            .collect()
    }

    /// Returns a [`Display`] adapter that renders each set index through
    /// `names`. Indices without a name are rendered as numbers.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let set = BitSet::from_ones_iter(4, [0, 2, 3]);
    /// let names = ["a", "b", "c"];
    /// assert_eq!(set.display_with(&names).to_string(), "a, c, 3");
    /// ```
    pub fn display_with<'a, L: Display>(&'a self, names: &'a [L]) -> Labeled<'a, L> {
        Labeled { set: self, names }
    }
}

/// Comma separated list of the set indices in ascending order.
///
/// # Examples
/// ```
/// use word_bitset::BitSet;
///
/// let set = BitSet::from_ones_iter(40, [0, 17, 39]);
/// assert_eq!(set.to_string(), "0, 17, 39");
/// ```
impl Display for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (n, idx) in self.iter_ones().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{idx}")?;
        }
        Ok(())
    }
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let form = if self.is_scalar() { "scalar" } else { "array" };
        write!(f, "BitSet<{}, {form}> LSB -> ", self.capacity())?;
        for idx in 0..self.capacity() {
            if idx > 0 && idx % 8 == 0 {
                f.write_str(" ")?;
            }
            f.write_str(if self.get(idx) { "1" } else { "0" })?;
        }
        f.write_str(" <- MSB")
    }
}

/// Renders the set indices of a [`BitSet`] through a name table.
///
/// Returned by [`BitSet::display_with()`].
pub struct Labeled<'a, L> {
    set: &'a BitSet,
    names: &'a [L],
}

impl<L: Display> Display for Labeled<'_, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (n, idx) in self.set.iter_ones().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            match self.names.get(idx) {
                Some(name) => write!(f, "{name}")?,
                None => write!(f, "{idx}")?,
            }
        }
        Ok(())
    }
}
