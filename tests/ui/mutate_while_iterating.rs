use word_bitset::BitSet;

fn main() {
    let mut set = BitSet::from_ones_iter(40, [1, 2, 3]);
    for idx in &set {
        set.clear(idx);
    }
}
