use crate::subset::{subsets, Subset};

/// Every way to partition `s` into two or more disjoint non-empty parts.
///
/// Part order within a tuple is meaningful downstream, so the same partition
/// must never appear under two orderings. The canonical rule: multi-element
/// clumps come first, then the singleton parts in ascending position order.
/// Clump boundaries carry the combinatorial content; singleton permutations
/// are collapsed. Singleton and empty inputs produce nothing (a partition
/// needs at least two parts).
pub fn ordered_splits(s: Subset) -> Vec<Vec<Subset>> {
    let mut out = Vec::new();
    if s.is_empty() || s.is_singleton() {
        return out;
    }
    for singles in subsets(s) {
        let canonical = singles.singletons();
        if singles == s {
            out.push(canonical.clone());
            continue;
        }
        for mut parts in non_singleton_splits(s.without(singles)) {
            parts.extend(canonical.iter().copied());
            if parts.len() > 1 {
                out.push(parts);
            }
        }
    }
    out
}

/// Groupings of `b` into clumps of two or more elements each.
///
/// The lowest element is either merged into the clump under construction or
/// closes it and opens a fresh decision point. Used only by `ordered_splits`.
pub fn non_singleton_splits(b: Subset) -> Vec<Vec<Subset>> {
    visit(b, Subset::EMPTY)
}

fn visit(b: Subset, acc: Subset) -> Vec<Vec<Subset>> {
    let mut out = Vec::new();
    if b.is_empty() {
        return out;
    }
    let lsb = b.lowest();
    let rest = b.without(lsb);
    if rest.is_empty() {
        // `b` is down to one element; it only forms a clump together with
        // the accumulated elements.
        if !acc.is_empty() {
            out.push(vec![acc.union(b)]);
        }
    } else {
        out.extend(visit(rest, acc.union(lsb)));
        if !acc.is_empty() {
            for mut parts in visit(rest, Subset::EMPTY) {
                parts.insert(0, acc.union(lsb));
                out.push(parts);
            }
        }
    }
    out
}
