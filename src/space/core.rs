use std::collections::BTreeSet;

use log::{debug, info};

use crate::space::errors::SpaceError;
use crate::subset::{splits, Subset};

/// Hard cap on the number of source numbers. The subset table has `2^N`
/// entries; anything near this cap is already far beyond practical use
/// (the classic game plays with 6).
pub const MAX_ITEMS: usize = 24;

/// For every subset of the source numbers, the set of integers reachable by
/// combining exactly that subset's numbers with `+ - * /`.
///
/// Built once by [`build_value_space`] and read-only afterwards. Sets are
/// ordered (`BTreeSet`) so downstream enumeration is deterministic.
pub struct ValueSpace {
    items: Vec<i64>,
    sets: Vec<BTreeSet<i64>>,
}

impl ValueSpace {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[i64] {
        &self.items
    }

    /// The subset containing every source number.
    pub fn full(&self) -> Subset {
        Subset::full(self.items.len())
    }

    pub fn values(&self, subset: Subset) -> &BTreeSet<i64> {
        &self.sets[subset.index()]
    }

    pub fn contains(&self, subset: Subset, value: i64) -> bool {
        self.sets[subset.index()].contains(&value)
    }
}

/// Bottom-up dynamic program over all `2^N` subsets.
///
/// Subsets are processed in increasing bit-pattern order, which visits every
/// proper sub-bit-set before the subsets containing it. Singletons are seeded
/// from their item; larger subsets combine the value sets of every ordered
/// two-way split. Subtraction is only recorded when strictly positive,
/// division only when exact, and combinations that overflow `i64` are
/// dropped rather than recorded wrapped.
///
/// # Errors
///
/// Fails fast on an empty item list or on more than [`MAX_ITEMS`] items,
/// before any enumeration starts.
pub fn build_value_space(items: &[i64]) -> Result<ValueSpace, SpaceError> {
    if items.is_empty() {
        return Err(SpaceError::NoItems);
    }
    if items.len() > MAX_ITEMS {
        return Err(SpaceError::TooManyItems {
            count: items.len(),
            max: MAX_ITEMS,
        });
    }

    let n = items.len();
    debug!("building value space for {} items: {:?}", n, items);

    let mut sets = vec![BTreeSet::new(); 1usize << n];
    for bits in 1..(1u32 << n) {
        let subset = Subset::from_bits(bits);
        if let Some(position) = subset.position() {
            sets[subset.index()].insert(items[position]);
            continue;
        }

        let mut reachable = BTreeSet::new();
        for (left, right) in splits(subset) {
            for &x in &sets[left.index()] {
                for &y in &sets[right.index()] {
                    if let Some(sum) = x.checked_add(y) {
                        reachable.insert(sum);
                    }
                    if let Some(product) = x.checked_mul(y) {
                        reachable.insert(product);
                    }
                    if x > y {
                        if let Some(difference) = x.checked_sub(y) {
                            reachable.insert(difference);
                        }
                    }
                    if y != 0 {
                        if let (Some(quotient), Some(0)) = (x.checked_div(y), x.checked_rem(y)) {
                            reachable.insert(quotient);
                        }
                    }
                }
            }
        }
        sets[subset.index()] = reachable;
    }

    info!(
        "value space built: {} subsets, {} values reachable from the full set",
        sets.len() - 1,
        sets[(1usize << n) - 1].len()
    );

    Ok(ValueSpace {
        items: items.to_vec(),
        sets,
    })
}
