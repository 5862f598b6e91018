//! Generic first-match threshold classification.
//!
//! A rule set is plain data: an ordered slice of intervals, each carrying a
//! criterion label and an outcome. Every scoring component in this crate is
//! a [`RuleTable`] plus a lookup on the matched outcome.

use std::ops::{Bound, RangeBounds};

use crate::error::ScoringError;

/// One interval of a rule set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRule<T> {
    pub lower: Bound<f64>,
    pub upper: Bound<f64>,
    /// Human-readable boundary, e.g. `"10 < T < 25 %"`.
    pub criterion: &'static str,
    pub outcome: T,
}

impl<T> ThresholdRule<T> {
    pub const fn new(
        lower: Bound<f64>,
        upper: Bound<f64>,
        criterion: &'static str,
        outcome: T,
    ) -> Self {
        Self {
            lower,
            upper,
            criterion,
            outcome,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.lower, self.upper).contains(&value)
    }
}

/// Return the first rule whose interval contains `value`.
///
/// `value` must be a concrete number. NaN matches nothing.
pub fn classify<T>(value: f64, rules: &[ThresholdRule<T>]) -> Option<&ThresholdRule<T>> {
    rules.iter().find(|rule| rule.contains(value))
}

/// A named, ordered rule set.
#[derive(Debug)]
pub struct RuleTable<T: 'static> {
    pub name: &'static str,
    pub rules: &'static [ThresholdRule<T>],
}

impl<T: 'static> RuleTable<T> {
    pub fn classify(&self, value: f64) -> Result<&'static ThresholdRule<T>, ScoringError> {
        classify(value, self.rules).ok_or(ScoringError::NoMatchingRule {
            table: self.name,
            value,
        })
    }

    /// Whether consecutive rules tile the real line with no gap and no overlap.
    pub fn is_partition(&self) -> bool {
        let Some(first) = self.rules.first() else {
            return false;
        };
        let Some(last) = self.rules.last() else {
            return false;
        };
        if first.lower != Bound::Unbounded || last.upper != Bound::Unbounded {
            return false;
        }
        self.rules.windows(2).all(|pair| match (pair[0].upper, pair[1].lower) {
            (Bound::Included(a), Bound::Excluded(b))
            | (Bound::Excluded(a), Bound::Included(b)) => a == b,
            _ => false,
        })
    }
}
