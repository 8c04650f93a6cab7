//! Piecewise-linear integer functions used to describe how one commit
//! reshuffles NI coordinates, and how two such reshuffles compose.
//!
//! A [`DeltaFunction`] is defined by a finite set of `(from, to)`
//! breakpoints: every coordinate `>= from` (up to the next breakpoint)
//! shifts by the same constant `to - from`. Storing the breakpoints in an
//! [`crate::seq::IndexedSeq`] keyed by `from` (and a mirror keyed by `to`
//! for the inverse direction) turns evaluation into a single floor-range
//! lookup.

use crate::config::Config;
use crate::ni::NiEdge;
use crate::seq::IndexedSeq;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaRange {
    pub from: u64,
    pub to: u64,
}

/// A composable coordinate remapping, plus the new upper bound on "live"
/// coordinate space (`max`) that applying it leaves behind.
#[derive(Clone)]
pub struct DeltaFunction {
    ranges: IndexedSeq<u64, DeltaRange>,
    ranges_inv: IndexedSeq<u64, DeltaRange>,
    pub max: u64,
}

impl DeltaFunction {
    pub fn new() -> DeltaFunction {
        Self::with_config(Config::default())
    }

    /// Build an empty delta whose breakpoint indexes use `config`'s
    /// fanout rather than the default.
    pub fn with_config(config: Config) -> DeltaFunction {
        DeltaFunction {
            ranges: IndexedSeq::with_config(config),
            ranges_inv: IndexedSeq::with_config(config),
            max: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn add_range(&mut self, range: DeltaRange) {
        self.ranges.insert(range.from, range);
        self.ranges_inv.insert(range.to, range);
    }

    /// Map a forward coordinate through the function.
    pub fn eval(&self, value: u64) -> u64 {
        match self.ranges.iter_from(&value).next() {
            Some(range) => shift(value, range.from, range.to),
            None => value,
        }
    }

    /// Map a coordinate back through the function (the inverse of [`eval`]).
    ///
    /// [`eval`]: DeltaFunction::eval
    pub fn eval_inv(&self, value: u64) -> u64 {
        match self.ranges_inv.iter_from(&value).next() {
            Some(range) => shift(value, range.to, range.from),
            None => value,
        }
    }

    pub fn apply<K: Clone>(&self, edge: &NiEdge<K>) -> NiEdge<K> {
        NiEdge {
            key: edge.key.clone(),
            lower: self.eval(edge.lower),
            upper: self.eval(edge.upper),
        }
    }

    /// Compose `self` then `other`: `result(x) = other(self(x))`.
    pub fn merge(&self, other: &DeltaFunction) -> DeltaFunction {
        if other.is_empty() {
            return self.clone();
        } else if self.is_empty() {
            return other.clone();
        }
        let mut merged = DeltaFunction::new();
        merged.max = other.max;
        for range in self.ranges.iter() {
            merged.add_range(DeltaRange {
                from: range.from,
                to: other.eval(range.to),
            });
        }
        for range in other.ranges.iter() {
            let from = self.eval_inv(range.from);
            if merged.ranges.count(&from) == 0 {
                merged.add_range(DeltaRange { from, to: range.to });
            }
        }
        merged
    }
}

impl Default for DeltaFunction {
    fn default() -> Self {
        Self::new()
    }
}

/// `value - from + to`, done in `i128` so a shrinking range (`to < from`)
/// cannot underflow the `u64` subtraction before the shift is added back.
fn shift(value: u64, from: u64, to: u64) -> u64 {
    let result = value as i128 - from as i128 + to as i128;
    result as u64
}

#[cfg(test)]
#[path = "delta_test.rs"]
mod delta_test;
