use super::*;
use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use proptest::prelude::*;

/// Largest capacity exercised by the property tests. Covers the scalar form
/// and array forms of several words.
const MAX_CAPACITY: usize = 200;

/// Strategy: a capacity plus `n` member lists, every member below capacity.
fn arb_sets(n: usize) -> impl Strategy<Value = (usize, Vec<Vec<usize>>)> {
    (1..=MAX_CAPACITY).prop_flat_map(move |capacity| {
        let members = proptest::collection::vec(0..capacity, 0..=capacity.min(64));
        (Just(capacity), proptest::collection::vec(members, n))
    })
}

fn build(capacity: usize, members: &[usize]) -> BitSet {
    BitSet::from_ones_iter(capacity, members.iter().copied())
}

fn model(members: &[usize]) -> BTreeSet<usize> {
    members.iter().copied().collect()
}

fn indices(set: &BTreeSet<usize>) -> Vec<usize> {
    set.iter().copied().collect()
}

proptest! {
    #[test]
    fn popcount_matches_count_ones(word in any::<u32>()) {
        prop_assert_eq!(popcount(word), word.count_ones());
    }

    #[test]
    fn enumeration_matches_model((capacity, sets) in arb_sets(1)) {
        let mut set = build(capacity, &sets[0]);
        let expected = model(&sets[0]);
        prop_assert_eq!(set.to_index_vec(), indices(&expected));
        prop_assert_eq!(set.count(), expected.len());
        prop_assert_eq!(set.is_empty(), expected.is_empty());
        prop_assert_eq!(set.first_set_bit(), expected.first().copied());
    }

    #[test]
    fn set_then_get_and_clear_then_get((capacity, sets) in arb_sets(1)) {
        let original = build(capacity, &sets[0]);
        for idx in 0..capacity {
            let mut set = original.clone();
            set.set(idx);
            prop_assert!(set.get(idx));
            set.clear(idx);
            prop_assert!(!set.get(idx));
        }
    }

    #[test]
    fn recount_is_idempotent((capacity, sets) in arb_sets(1)) {
        let mut set = build(capacity, &sets[0]);
        set.recount();
        let first = set.cached_count();
        set.recount();
        prop_assert!(first.is_some());
        prop_assert_eq!(set.cached_count(), first);
    }

    #[test]
    fn algebra_matches_model((capacity, sets) in arb_sets(2)) {
        let (a, b) = (model(&sets[0]), model(&sets[1]));
        let other = build(capacity, &sets[1]);

        let mut union = build(capacity, &sets[0]);
        union.union(&other);
        prop_assert_eq!(union.to_index_vec(), indices(&(&a | &b)));
        prop_assert_eq!(union.count(), (&a | &b).len());

        let mut intersection = build(capacity, &sets[0]);
        intersection.intersect(&other);
        prop_assert_eq!(intersection.to_index_vec(), indices(&(&a & &b)));
        prop_assert_eq!(intersection.count(), (&a & &b).len());

        let mut difference = build(capacity, &sets[0]);
        difference.subtract(&other);
        prop_assert_eq!(difference.to_index_vec(), indices(&(&a - &b)));
        prop_assert_eq!(difference.count(), (&a - &b).len());
    }

    #[test]
    fn negate_yields_complement((capacity, sets) in arb_sets(1)) {
        let members = model(&sets[0]);
        let mut set = build(capacity, &sets[0]);
        set.negate();
        let complement: Vec<usize> = (0..capacity).filter(|i| !members.contains(i)).collect();
        prop_assert_eq!(set.count(), complement.len());
        prop_assert_eq!(set.to_index_vec(), complement);

        set.negate();
        prop_assert_eq!(set, build(capacity, &sets[0]));
    }

    #[test]
    fn union_is_commutative_and_associative((capacity, sets) in arb_sets(3)) {
        let a = build(capacity, &sets[0]);
        let b = build(capacity, &sets[1]);
        let c = build(capacity, &sets[2]);

        let mut ab = a.clone();
        ab |= &b;
        let mut ba = b.clone();
        ba |= &a;
        prop_assert_eq!(&ab, &ba);

        let mut ab_c = ab;
        ab_c |= &c;
        let mut bc = b.clone();
        bc |= &c;
        let mut a_bc = a.clone();
        a_bc |= &bc;
        prop_assert_eq!(ab_c, a_bc);
    }

    #[test]
    fn intersect_distributes_over_union((capacity, sets) in arb_sets(3)) {
        let a = build(capacity, &sets[0]);
        let b = build(capacity, &sets[1]);
        let c = build(capacity, &sets[2]);

        let mut b_or_c = b.clone();
        b_or_c |= &c;
        let mut lhs = a.clone();
        lhs &= &b_or_c;

        let mut a_and_b = a.clone();
        a_and_b &= &b;
        let mut a_and_c = a.clone();
        a_and_c &= &c;
        let mut rhs = a_and_b;
        rhs |= &a_and_c;

        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn subtract_self_is_empty((capacity, sets) in arb_sets(1)) {
        let mut set = build(capacity, &sets[0]);
        let copy = set.clone();
        set -= &copy;
        prop_assert!(set.is_empty());
        prop_assert_eq!(set, BitSet::new(capacity));
    }

    #[test]
    fn contains_all_is_reflexive_and_transitive((capacity, sets) in arb_sets(3)) {
        let c = build(capacity, &sets[0]);
        let mut b = c.clone();
        b.union(&build(capacity, &sets[1]));
        let mut a = b.clone();
        a.union(&build(capacity, &sets[2]));

        prop_assert!(a.contains_all(&a));
        prop_assert!(a.contains_all(&b));
        prop_assert!(b.contains_all(&c));
        prop_assert!(a.contains_all(&c));
    }

    #[test]
    fn clone_is_equal_and_independent((capacity, sets) in arb_sets(1)) {
        let original = build(capacity, &sets[0]);
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);

        copy.negate();
        prop_assert_eq!(original.to_index_vec(), indices(&model(&sets[0])));
    }

    #[test]
    fn cached_count_survives_mixed_mutation((capacity, sets) in arb_sets(2)) {
        let other = build(capacity, &sets[1]);
        let mut set = build(capacity, &sets[0]);
        set.recount();
        set.union(&other);
        set.negate();
        set.clear(0);
        set.subtract(&other);
        set.set(capacity - 1);
        prop_assert_eq!(set.count(), set.iter_ones().count());
    }
}
