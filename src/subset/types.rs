use std::fmt;

/// A selection of source-number positions, stored as a bit pattern.
///
/// Position `i` of the input list corresponds to bit `i`. Subsets are
/// compared and hashed by their bit pattern, and the pattern doubles as a
/// direct index into the value-space table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subset(u32);

impl Subset {
    pub const EMPTY: Subset = Subset(0);

    pub fn singleton(position: usize) -> Self {
        Subset(1 << position)
    }

    /// The subset holding every position below `count`.
    pub fn full(count: usize) -> Self {
        Subset((1u32 << count) - 1)
    }

    pub fn from_bits(bits: u32) -> Self {
        Subset(bits)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Index into a table of `2^N` per-subset entries.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_singleton(self) -> bool {
        self.0.is_power_of_two()
    }

    /// Number of positions in the subset.
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// The lowest position, as a singleton subset. Empty stays empty.
    pub fn lowest(self) -> Subset {
        Subset(self.0 & self.0.wrapping_neg())
    }

    pub fn union(self, other: Subset) -> Subset {
        Subset(self.0 | other.0)
    }

    pub fn without(self, other: Subset) -> Subset {
        Subset(self.0 & !other.0)
    }

    pub fn contains(self, other: Subset) -> bool {
        self.0 & other.0 == other.0
    }

    /// Position of a singleton subset's only element.
    pub fn position(self) -> Option<usize> {
        if self.is_singleton() {
            Some(self.0.trailing_zeros() as usize)
        } else {
            None
        }
    }

    /// Decompose into singleton subsets, ascending by position.
    pub fn singletons(self) -> Vec<Subset> {
        let mut out = Vec::with_capacity(self.len() as usize);
        let mut rest = self;
        while !rest.is_empty() {
            let lsb = rest.lowest();
            out.push(lsb);
            rest = rest.without(lsb);
        }
        out
    }
}

impl fmt::Debug for Subset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Subset({:#b})", self.0)
    }
}
