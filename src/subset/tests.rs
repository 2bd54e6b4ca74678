use crate::subset::{non_singleton_splits, ordered_splits, splits, subsets, Subset};

fn s(bits: u32) -> Subset {
    Subset::from_bits(bits)
}

#[test]
fn singleton_has_no_splits() {
    assert!(splits(s(0b1)).is_empty());
    assert!(splits(s(0b1000)).is_empty());
    assert!(splits(Subset::EMPTY).is_empty());
}

#[test]
fn pair_splits_both_orders() {
    let pairs = splits(s(0b11));
    assert_eq!(pairs, vec![(s(0b01), s(0b10)), (s(0b10), s(0b01))]);
}

#[test]
fn splits_cover_every_bipartition_once_per_order() {
    let pairs = splits(s(0b111));
    assert_eq!(pairs.len(), 6);
    assert!(pairs.contains(&(s(0b001), s(0b110))));
    assert!(pairs.contains(&(s(0b110), s(0b001))));
    for &(a, b) in &pairs {
        assert!(!a.is_empty());
        assert!(!b.is_empty());
        assert_eq!(a.union(b), s(0b111));
        assert_eq!(a.without(b), a);
    }
    let mut sorted = pairs.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), pairs.len(), "no pair repeats");
}

#[test]
fn splits_count_matches_subset_size() {
    for bits in [0b1111u32, 0b11111] {
        let k = bits.count_ones();
        assert_eq!(splits(s(bits)).len(), (1usize << k) - 2);
    }
}

#[test]
fn subsets_enumerates_all_ascending() {
    let all = subsets(s(0b111));
    let expected: Vec<Subset> = (0..8).map(s).collect();
    assert_eq!(all, expected);
}

#[test]
fn subsets_of_sparse_pattern() {
    let all = subsets(s(0b101));
    assert_eq!(all, vec![s(0b000), s(0b001), s(0b100), s(0b101)]);
}

#[test]
fn singleton_decomposition_is_ascending() {
    assert_eq!(s(0b1101).singletons(), vec![s(0b1), s(0b100), s(0b1000)]);
}

#[test]
fn ordered_splits_of_singleton_is_empty() {
    assert!(ordered_splits(s(0b100)).is_empty());
}

#[test]
fn ordered_splits_contains_expected_partitions() {
    assert!(ordered_splits(s(0b11)).contains(&vec![s(0b01), s(0b10)]));
    // A clump comes before a singleton part.
    assert!(ordered_splits(s(0b111)).contains(&vec![s(0b110), s(0b001)]));
}

#[test]
fn all_singleton_partition_appears_exactly_once() {
    let parts = ordered_splits(s(0b111));
    let singleton_only: Vec<_> = parts
        .iter()
        .filter(|p| p.iter().all(|part| part.is_singleton()))
        .collect();
    assert_eq!(singleton_only.len(), 1);
    assert_eq!(*singleton_only[0], vec![s(0b001), s(0b010), s(0b100)]);
}

#[test]
fn ordered_splits_parts_are_disjoint_and_cover() {
    for parts in ordered_splits(s(0b1111)) {
        assert!(parts.len() >= 2);
        let mut union = Subset::EMPTY;
        let mut total = 0;
        for &part in &parts {
            assert!(!part.is_empty());
            union = union.union(part);
            total += part.len();
        }
        assert_eq!(union, s(0b1111));
        assert_eq!(total, 4, "parts are pairwise disjoint");
    }
}

#[test]
fn ordered_splits_has_no_duplicates() {
    let parts = ordered_splits(s(0b1111));
    let mut sorted = parts.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), parts.len());
}

#[test]
fn non_singleton_splits_requires_clumps_of_two() {
    // Three elements only fit in one clump of three.
    assert_eq!(non_singleton_splits(s(0b111)), vec![vec![s(0b111)]]);
    // Four elements: one clump of four, or the two contiguous pairs. The
    // lowest element either merges into the open clump or closes it, so a
    // clump is always a run of ascending elements; interleaved pairings
    // like ({0,2}, {1,3}) never appear.
    let groupings = non_singleton_splits(s(0b1111));
    assert_eq!(groupings, vec![vec![s(0b1111)], vec![s(0b0011), s(0b1100)]]);
}

#[test]
fn ordered_splits_count_for_four_elements() {
    // One two-clump grouping, four (clump-of-3, singleton) tuples, six
    // (pair-clump, singleton, singleton) tuples, and the all-singleton
    // partition.
    assert_eq!(ordered_splits(s(0b1111)).len(), 12);
}

#[test]
fn non_singleton_splits_of_empty_or_singleton_is_empty() {
    assert!(non_singleton_splits(Subset::EMPTY).is_empty());
    assert!(non_singleton_splits(s(0b10)).is_empty());
}
