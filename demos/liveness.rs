//! Backward liveness over a tiny control-flow graph.
//!
//! Run with `RUST_LOG=word_bitset=trace` to see the storage form picked for
//! every set.

use word_bitset::BitSet;

struct Block {
    uses: &'static [usize],
    defs: &'static [usize],
    succs: &'static [usize],
}

const VARS: [&str; 5] = ["a", "b", "c", "d", "i"];

// b0: a = 0; i = 0
// b1: if i < 10 goto b2 else b3
// b2: b = a + i; a = b; i = i + 1; goto b1
// b3: c = a; d = c; return d
const BLOCKS: [Block; 4] = [
    Block { uses: &[], defs: &[0, 4], succs: &[1] },
    Block { uses: &[4], defs: &[], succs: &[2, 3] },
    Block { uses: &[0, 4], defs: &[0, 1, 4], succs: &[1] },
    Block { uses: &[0], defs: &[2, 3], succs: &[] },
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_bitset=info".into()),
        )
        .init();

    let uses: Vec<BitSet> = BLOCKS
        .iter()
        .map(|b| BitSet::from_ones_iter(VARS.len(), b.uses.iter().copied()))
        .collect();
    let defs: Vec<BitSet> = BLOCKS
        .iter()
        .map(|b| BitSet::from_ones_iter(VARS.len(), b.defs.iter().copied()))
        .collect();
    let mut live_in = vec![BitSet::new(VARS.len()); BLOCKS.len()];
    let mut live_out = vec![BitSet::new(VARS.len()); BLOCKS.len()];

    let mut rounds = 0;
    let mut changed = true;
    while changed {
        changed = false;
        rounds += 1;
        for (idx, block) in BLOCKS.iter().enumerate().rev() {
            let mut out = BitSet::new(VARS.len());
            for &succ in block.succs {
                out |= &live_in[succ];
            }

            let mut inn = out.clone();
            inn -= &defs[idx];
            inn |= &uses[idx];

            if inn != live_in[idx] || out != live_out[idx] {
                live_in[idx].assign(&inn);
                live_out[idx].assign(&out);
                changed = true;
            }
        }
    }

    println!("converged after {rounds} rounds");
    for idx in 0..BLOCKS.len() {
        let live = live_in[idx].count();
        println!(
            "b{idx}: in = {{{}}} ({live} live), out = {{{}}}",
            live_in[idx].display_with(&VARS),
            live_out[idx].display_with(&VARS),
        );
    }
}
