use crate::subset::Subset;

/// Every ordered two-way split of `s` into disjoint non-empty halves.
///
/// Each unordered bipartition shows up exactly twice, once per order, so a
/// caller can try non-commutative operators both ways. A subset of size `k`
/// yields `2^k - 2` pairs; singletons and the empty subset yield none.
pub fn splits(s: Subset) -> Vec<(Subset, Subset)> {
    let mut out = Vec::new();
    if s.is_empty() || s.is_singleton() {
        return out;
    }
    let lsb = s.lowest();
    let rest = s.without(lsb);
    out.push((lsb, rest));
    out.push((rest, lsb));
    if !rest.is_singleton() {
        for (x, y) in splits(rest) {
            out.push((x.union(lsb), y));
            out.push((x, y.union(lsb)));
        }
    }
    out
}

/// Every sub-bit-set of `s`, including empty and `s` itself, in ascending
/// bit-pattern order.
pub fn subsets(s: Subset) -> Vec<Subset> {
    if s.is_empty() {
        return vec![Subset::EMPTY];
    }
    let lsb = s.lowest();
    if s == lsb {
        return vec![Subset::EMPTY, s];
    }
    let mut out = Vec::new();
    for x in subsets(s.without(lsb)) {
        out.push(x);
        out.push(x.union(lsb));
    }
    out
}
