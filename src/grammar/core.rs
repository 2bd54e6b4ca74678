use std::collections::BTreeSet;

use crate::expression::Expression;
use crate::space::ValueSpace;
use crate::subset::{ordered_splits, splits, Subset};

/// Re-derives, for a subset and a value already known to be reachable from
/// it, every textually distinct minimal-parenthesization expression.
///
/// Five mutually recursive producers (leaf, sums, differences, products,
/// quotients) plus dispatch unions that encode which expression shapes may
/// appear in which operand positions. Producers return owned vectors;
/// re-invoking one re-enumerates from scratch, and there is deliberately no
/// cross-call cache. Recursion terminates because every producer only
/// recurses into strictly smaller subsets.
pub struct ExpressionGrammar<'a> {
    space: &'a ValueSpace,
}

impl<'a> ExpressionGrammar<'a> {
    pub fn new(space: &'a ValueSpace) -> Self {
        Self { space }
    }

    /// Every derivation of `value` from `subset`, with no outer operator
    /// context. The entry point for the search driver.
    pub fn derivations(&self, subset: Subset, value: i64) -> Vec<Expression> {
        let mut out = self.leaf(subset, value);
        out.extend(self.sums(subset, value));
        out.extend(self.differences(subset, value));
        out.extend(self.products(subset, value));
        out.extend(self.quotients(subset, value));
        out
    }

    /// The literal numeral, iff `subset` is the singleton holding `value`.
    fn leaf(&self, subset: Subset, value: i64) -> Vec<Expression> {
        if subset.is_singleton() && self.space.contains(subset, value) {
            vec![Expression::Number(value)]
        } else {
            Vec::new()
        }
    }

    /// Flattened addition chains: for every multiway partition of `subset`,
    /// every per-part value assignment summing to `value`, and every
    /// combination of part derivations.
    fn sums(&self, subset: Subset, value: i64) -> Vec<Expression> {
        let mut out = Vec::new();
        for parts in ordered_splits(subset) {
            self.for_each_assignment(&parts, &mut |values| {
                let total = values
                    .iter()
                    .try_fold(0i64, |acc, &v| acc.checked_add(v));
                if total != Some(value) {
                    return;
                }
                let choices: Vec<Vec<Expression>> = parts
                    .iter()
                    .zip(values)
                    .map(|(&part, &v)| self.summands(part, v))
                    .collect();
                for terms in combinations(&choices) {
                    out.push(Expression::Sum(terms));
                }
            });
        }
        out
    }

    /// Flattened multiplication chains, symmetric to [`Self::sums`].
    fn products(&self, subset: Subset, value: i64) -> Vec<Expression> {
        let mut out = Vec::new();
        for parts in ordered_splits(subset) {
            self.for_each_assignment(&parts, &mut |values| {
                let total = values
                    .iter()
                    .try_fold(1i64, |acc, &v| acc.checked_mul(v));
                if total != Some(value) {
                    return;
                }
                let choices: Vec<Vec<Expression>> = parts
                    .iter()
                    .zip(values)
                    .map(|(&part, &v)| self.factors(part, v))
                    .collect();
                for factors in combinations(&choices) {
                    out.push(Expression::Product(factors));
                }
            });
        }
        out
    }

    /// Subtractions `x - y == value` over every ordered two-way split.
    fn differences(&self, subset: Subset, value: i64) -> Vec<Expression> {
        let mut out = Vec::new();
        for (left, right) in splits(subset) {
            for &x in self.space.values(left) {
                for &y in self.space.values(right) {
                    if x.checked_sub(y) != Some(value) {
                        continue;
                    }
                    // The right side admits sum chains too; Display adds the
                    // parentheses a sum needs in that position.
                    let mut rights = self.summands(right, y);
                    rights.extend(self.sums(right, y));
                    for l in self.minuends(left, x) {
                        for r in &rights {
                            out.push(Expression::Sub(Box::new(l.clone()), Box::new(r.clone())));
                        }
                    }
                }
            }
        }
        out
    }

    /// Exact divisions `x / y == value` over every ordered two-way split.
    /// The divisor is guarded against zero even though subset arithmetic
    /// rarely produces it.
    fn quotients(&self, subset: Subset, value: i64) -> Vec<Expression> {
        let mut out = Vec::new();
        for (left, right) in splits(subset) {
            for &x in self.space.values(left) {
                for &y in self.space.values(right) {
                    if y == 0 {
                        continue;
                    }
                    match (x.checked_div(y), x.checked_rem(y)) {
                        (Some(quotient), Some(0)) if quotient == value => {}
                        _ => continue,
                    }
                    let mut rights = self.factors(right, y);
                    rights.extend(self.products(right, y));
                    for l in self.dividends(left, x) {
                        for r in &rights {
                            out.push(Expression::Div(Box::new(l.clone()), Box::new(r.clone())));
                        }
                    }
                }
            }
        }
        out
    }

    /// What may stand bare inside an addition chain or on the right of a
    /// subtraction: a leaf, a product, or a quotient.
    fn summands(&self, subset: Subset, value: i64) -> Vec<Expression> {
        let mut out = self.leaf(subset, value);
        out.extend(self.products(subset, value));
        out.extend(self.quotients(subset, value));
        out
    }

    /// What may stand inside a multiplication chain or on the right of a
    /// division: a leaf, a sum, or a difference.
    fn factors(&self, subset: Subset, value: i64) -> Vec<Expression> {
        let mut out = self.leaf(subset, value);
        out.extend(self.sums(subset, value));
        out.extend(self.differences(subset, value));
        out
    }

    /// What may stand on the left of a division: factors plus products.
    fn dividends(&self, subset: Subset, value: i64) -> Vec<Expression> {
        let mut out = self.factors(subset, value);
        out.extend(self.products(subset, value));
        out
    }

    /// What may stand on the left of a subtraction: sums plus summands.
    fn minuends(&self, subset: Subset, value: i64) -> Vec<Expression> {
        let mut out = self.sums(subset, value);
        out.extend(self.summands(subset, value));
        out
    }

    /// Call `f` with every tuple of values drawn one-per-part from the
    /// parts' value-spaces, in the sets' ascending order.
    fn for_each_assignment(&self, parts: &[Subset], f: &mut dyn FnMut(&[i64])) {
        let spaces: Vec<&BTreeSet<i64>> = parts.iter().map(|&p| self.space.values(p)).collect();
        let mut chosen = Vec::with_capacity(parts.len());
        descend(&spaces, &mut chosen, f);

        fn descend(spaces: &[&BTreeSet<i64>], chosen: &mut Vec<i64>, f: &mut dyn FnMut(&[i64])) {
            match spaces.split_first() {
                None => f(chosen),
                Some((first, rest)) => {
                    for &v in *first {
                        chosen.push(v);
                        descend(rest, chosen, f);
                        chosen.pop();
                    }
                }
            }
        }
    }
}

/// Cartesian product of per-slot choice lists, preserving slot order.
fn combinations(choices: &[Vec<Expression>]) -> Vec<Vec<Expression>> {
    let mut out = vec![Vec::new()];
    for slot in choices {
        if slot.is_empty() {
            return Vec::new();
        }
        let mut next = Vec::with_capacity(out.len() * slot.len());
        for prefix in &out {
            for choice in slot {
                let mut combo = prefix.clone();
                combo.push(choice.clone());
                next.push(combo);
            }
        }
        out = next;
    }
    out
}
