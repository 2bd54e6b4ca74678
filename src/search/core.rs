use std::collections::{HashSet, VecDeque};
use std::fmt;

use log::{debug, error};

use crate::expression::Expression;
use crate::grammar::ExpressionGrammar;
use crate::search::errors::SearchError;
use crate::space::ValueSpace;
use crate::subset::Subset;

/// One verified solution: a target and an expression deriving it.
///
/// Renders as `"<target> == <expression>"`, which is also the text the
/// search deduplicates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    target: i64,
    expression: Expression,
}

impl Claim {
    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} == {}", self.target, self.expression)
    }
}

/// Enumerate every claim deriving `target` from the sources behind `space`.
///
/// Subsets are tried smallest-first (then ascending bit pattern), so taking
/// only the first few results is cheap. Duplicate claim texts are dropped;
/// those only arise when the input holds duplicate numbers. Each claim is
/// re-evaluated before being yielded, and a mismatch surfaces as a fatal
/// [`SearchError::Inconsistent`], after which the stream ends. A target
/// unreachable from every subset simply produces an empty stream.
pub fn search(space: &ValueSpace, target: i64) -> Search<'_> {
    let n = space.item_count();
    let mut queue: Vec<Subset> = (1..(1u32 << n)).map(Subset::from_bits).collect();
    queue.sort_by_key(|s| (s.len(), s.bits()));
    Search {
        space,
        target,
        queue: queue.into(),
        pending: VecDeque::new(),
        seen: HashSet::new(),
        failed: false,
    }
}

/// Lazy claim stream returned by [`search`]. Re-invoking [`search`] yields a
/// fresh, identical enumeration.
pub struct Search<'a> {
    space: &'a ValueSpace,
    target: i64,
    queue: VecDeque<Subset>,
    pending: VecDeque<Claim>,
    seen: HashSet<String>,
    failed: bool,
}

impl Search<'_> {
    fn verify(&self, claim: &Claim) -> Result<(), SearchError> {
        let actual = claim.expression.evaluate()?;
        if actual == self.target {
            Ok(())
        } else {
            Err(SearchError::Inconsistent {
                claim: claim.to_string(),
                actual,
                expected: self.target,
            })
        }
    }
}

impl Iterator for Search<'_> {
    type Item = Result<Claim, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some(claim) = self.pending.pop_front() {
                return Some(Ok(claim));
            }
            let subset = self.queue.pop_front()?;
            if !self.space.contains(subset, self.target) {
                continue;
            }
            debug!(
                "enumerating derivations of {} from {:?}",
                self.target, subset
            );
            let grammar = ExpressionGrammar::new(self.space);
            for expression in grammar.derivations(subset, self.target) {
                let claim = Claim {
                    target: self.target,
                    expression,
                };
                if !self.seen.insert(claim.to_string()) {
                    continue;
                }
                if let Err(err) = self.verify(&claim) {
                    error!("grammar produced an inconsistent claim: {}", err);
                    self.failed = true;
                    return Some(Err(err));
                }
                self.pending.push_back(claim);
            }
        }
    }
}
