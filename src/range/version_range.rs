//! Union of intervals minus excluded versions

use std::fmt;

use indexmap::IndexSet;
use serde::{Serialize, Serializer};

use crate::range::interval::Interval;
use crate::version::comparator::Comparator;
use crate::version::scheme::Scheme;

/// A version range: a union of [`Interval`]s minus a set of excluded versions.
///
/// Ranges are values; every combinator returns a new range. The comparator
/// carries the scheme whose ordering all membership checks use.
#[derive(Debug, Clone, Serialize)]
pub struct Range {
    intervals: Vec<Interval>,
    exclusions: IndexSet<String>,
    #[serde(rename = "scheme", serialize_with = "serialize_scheme")]
    comparator: Comparator,
}

fn serialize_scheme<S: Serializer>(comparator: &Comparator, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(comparator.scheme().as_str())
}

impl Range {
    /// Build a range from intervals as given, without merging them
    pub fn new(intervals: Vec<Interval>, comparator: Comparator) -> Self {
        Self {
            intervals,
            exclusions: IndexSet::new(),
            comparator,
        }
    }

    /// Build a range, merging overlapping and adjacent intervals
    pub fn from_intervals(intervals: Vec<Interval>, comparator: Comparator) -> Self {
        let intervals = merge_intervals(intervals, &comparator);
        Self::new(intervals, comparator)
    }

    pub fn empty(comparator: Comparator) -> Self {
        Self::new(Vec::new(), comparator)
    }

    pub fn unbounded(comparator: Comparator) -> Self {
        Self::new(vec![Interval::unbounded()], comparator)
    }

    pub fn exact(version: &str, comparator: Comparator) -> Self {
        Self::new(vec![Interval::exact(version)], comparator)
    }

    pub fn greater_than(version: &str, inclusive: bool, comparator: Comparator) -> Self {
        Self::new(vec![Interval::greater_than(version, inclusive)], comparator)
    }

    pub fn less_than(version: &str, inclusive: bool, comparator: Comparator) -> Self {
        Self::new(vec![Interval::less_than(version, inclusive)], comparator)
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn exclusions(&self) -> impl ExactSizeIterator<Item = &str> {
        self.exclusions.iter().map(String::as_str)
    }

    pub fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    pub fn scheme(&self) -> &Scheme {
        self.comparator.scheme()
    }

    /// A version is contained when no exclusion matches it and at least one
    /// interval does
    pub fn contains(&self, version: &str) -> bool {
        if self
            .exclusions
            .iter()
            .any(|excluded| self.comparator.equals(version, excluded))
        {
            return false;
        }

        self.intervals
            .iter()
            .any(|interval| interval.contains(version, &self.comparator))
    }

    pub fn is_empty(&self) -> bool {
        self.intervals
            .iter()
            .all(|interval| interval.is_empty(&self.comparator))
    }

    /// Matches every version. Never true once anything is excluded.
    pub fn is_unbounded(&self) -> bool {
        self.exclusions.is_empty() && self.intervals.iter().any(Interval::is_unbounded)
    }

    /// Versions matched by either range.
    ///
    /// A version stays excluded only when both ranges exclude it.
    pub fn union(&self, other: &Range) -> Range {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let intervals = self
            .intervals
            .iter()
            .chain(other.intervals.iter())
            .cloned()
            .collect();

        Range {
            intervals: merge_intervals(intervals, &self.comparator),
            exclusions: self
                .exclusions
                .intersection(&other.exclusions)
                .cloned()
                .collect(),
            comparator: self.comparator.clone(),
        }
    }

    /// Versions matched by both ranges.
    ///
    /// Exclusions from either range carry over.
    pub fn intersect(&self, other: &Range) -> Range {
        if self.is_empty() || other.is_empty() {
            return Range::empty(self.comparator.clone());
        }

        let mut intervals = Vec::new();
        for a in &self.intervals {
            for b in &other.intervals {
                let intersection = a.intersect(b, &self.comparator);
                if !intersection.is_empty(&self.comparator) {
                    intervals.push(intersection);
                }
            }
        }

        Range {
            intervals: merge_intervals(intervals, &self.comparator),
            exclusions: self.exclusions.union(&other.exclusions).cloned().collect(),
            comparator: self.comparator.clone(),
        }
    }

    /// Same intervals with `version` excluded
    pub fn exclude(&self, version: &str) -> Range {
        let mut range = self.clone();
        range.exclusions.insert(version.to_string());
        range
    }

    /// Same intervals and exclusions, ordered by another comparator
    pub fn with_comparator(self, comparator: Comparator) -> Range {
        Range { comparator, ..self }
    }
}

/// Fold intervals left to right, merging each into the first placed interval
/// it overlaps or touches and appending it otherwise. Empty intervals drop out.
fn merge_intervals(intervals: Vec<Interval>, cmp: &Comparator) -> Vec<Interval> {
    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());

    for interval in intervals {
        if interval.is_empty(cmp) {
            continue;
        }

        let slot = merged
            .iter()
            .enumerate()
            .find_map(|(i, existing)| existing.union(&interval, cmp).map(|u| (i, u)));
        match slot {
            Some((i, union)) => merged[i] = union,
            None => merged.push(interval),
        }
    }

    merged
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        self.intervals == other.intervals
            && self.exclusions == other.exclusions
            && self.scheme() == other.scheme()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("empty");
        }
        if self.is_unbounded() {
            return f.write_str("*");
        }

        let intervals: Vec<String> = self.intervals.iter().map(Interval::to_string).collect();
        f.write_str(&intervals.join(" | "))?;

        if !self.exclusions.is_empty() {
            let exclusions: Vec<&str> = self.exclusions().collect();
            write!(f, " excluding {}", exclusions.join(", "))?;
        }
        Ok(())
    }
}
