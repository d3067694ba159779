//! A single contiguous span of versions

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::version::comparator::Comparator;

/// `[min, max]` with independent inclusive/exclusive bounds.
///
/// A missing bound is unbounded on that side. Bounds are kept as the original
/// version text and ordered by the [`Comparator`] passed to each operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Interval {
    pub min: Option<String>,
    pub max: Option<String>,
    pub min_inclusive: bool,
    pub max_inclusive: bool,
}

impl Interval {
    pub fn new(
        min: Option<String>,
        max: Option<String>,
        min_inclusive: bool,
        max_inclusive: bool,
    ) -> Self {
        Self {
            min,
            max,
            min_inclusive,
            max_inclusive,
        }
    }

    /// Matches every version
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Matches no version
    pub fn empty() -> Self {
        Self::new(Some("1".to_string()), Some("0".to_string()), true, true)
    }

    pub fn exact(version: &str) -> Self {
        Self::new(
            Some(version.to_string()),
            Some(version.to_string()),
            true,
            true,
        )
    }

    pub fn greater_than(version: &str, inclusive: bool) -> Self {
        Self::new(Some(version.to_string()), None, inclusive, false)
    }

    pub fn less_than(version: &str, inclusive: bool) -> Self {
        Self::new(None, Some(version.to_string()), false, inclusive)
    }

    /// `[min, max)`, the shape every caret, tilde and wildcard range lowers to
    pub fn half_open(min: &str, max: &str) -> Self {
        Self::new(Some(min.to_string()), Some(max.to_string()), true, false)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Only a lower bound
    pub fn is_lower_bound_only(&self) -> bool {
        self.min.is_some() && self.max.is_none()
    }

    /// Only an upper bound
    pub fn is_upper_bound_only(&self) -> bool {
        self.min.is_none() && self.max.is_some()
    }

    pub fn is_empty(&self, cmp: &Comparator) -> bool {
        let (Some(min), Some(max)) = (&self.min, &self.max) else {
            return false;
        };
        match cmp.compare(min, max) {
            Ordering::Greater => true,
            Ordering::Equal => !self.min_inclusive || !self.max_inclusive,
            Ordering::Less => false,
        }
    }

    /// Matches exactly one version
    pub fn is_exact(&self, cmp: &Comparator) -> bool {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => {
                self.min_inclusive && self.max_inclusive && cmp.equals(min, max)
            }
            _ => false,
        }
    }

    pub fn contains(&self, version: &str, cmp: &Comparator) -> bool {
        if self.is_empty(cmp) {
            return false;
        }

        if let Some(min) = &self.min {
            let ord = cmp.compare(version, min);
            if ord == Ordering::Less || (ord == Ordering::Equal && !self.min_inclusive) {
                return false;
            }
        }

        if let Some(max) = &self.max {
            let ord = cmp.compare(version, max);
            if ord == Ordering::Greater || (ord == Ordering::Equal && !self.max_inclusive) {
                return false;
            }
        }

        true
    }

    /// The versions matched by both intervals
    pub fn intersect(&self, other: &Interval, cmp: &Comparator) -> Interval {
        if self.is_empty(cmp) || other.is_empty(cmp) {
            return Interval::empty();
        }

        let (min, min_inclusive) = tighter_bound(
            (&self.min, self.min_inclusive),
            (&other.min, other.min_inclusive),
            Ordering::Greater,
            cmp,
        );
        let (max, max_inclusive) = tighter_bound(
            (&self.max, self.max_inclusive),
            (&other.max, other.max_inclusive),
            Ordering::Less,
            cmp,
        );

        Interval::new(min, max, min_inclusive, max_inclusive)
    }

    pub fn overlaps(&self, other: &Interval, cmp: &Comparator) -> bool {
        if self.is_empty(cmp) || other.is_empty(cmp) {
            return false;
        }
        !self.intersect(other, cmp).is_empty(cmp)
    }

    /// True when one interval ends exactly where the other begins and the
    /// shared boundary is inclusive on exactly one side
    pub fn adjacent(&self, other: &Interval, cmp: &Comparator) -> bool {
        if self.is_empty(cmp) || other.is_empty(cmp) {
            return false;
        }

        if let (Some(max), Some(min)) = (&self.max, &other.min) {
            if cmp.equals(max, min) {
                return self.max_inclusive != other.min_inclusive;
            }
        }

        if let (Some(min), Some(max)) = (&self.min, &other.max) {
            if cmp.equals(min, max) {
                return self.min_inclusive != other.max_inclusive;
            }
        }

        false
    }

    /// Merge two overlapping or adjacent intervals.
    ///
    /// Returns `None` when they are disjoint; the caller keeps both.
    pub fn union(&self, other: &Interval, cmp: &Comparator) -> Option<Interval> {
        if self.is_empty(cmp) {
            return Some(other.clone());
        }
        if other.is_empty(cmp) {
            return Some(self.clone());
        }
        if !self.overlaps(other, cmp) && !self.adjacent(other, cmp) {
            return None;
        }

        let (min, min_inclusive) = looser_bound(
            (&self.min, self.min_inclusive),
            (&other.min, other.min_inclusive),
            Ordering::Less,
            cmp,
        );
        let (max, max_inclusive) = looser_bound(
            (&self.max, self.max_inclusive),
            (&other.max, other.max_inclusive),
            Ordering::Greater,
            cmp,
        );

        Some(Interval::new(min, max, min_inclusive, max_inclusive))
    }
}

type Bound<'a> = (&'a Option<String>, bool);

/// Pick the more restrictive of two bounds. `wins` is the ordering the
/// restrictive version has against the other one; a missing bound adopts
/// the other side.
fn tighter_bound(
    a: Bound<'_>,
    b: Bound<'_>,
    wins: Ordering,
    cmp: &Comparator,
) -> (Option<String>, bool) {
    match (a, b) {
        ((Some(va), ia), (Some(vb), ib)) => {
            let ord = cmp.compare(va, vb);
            if ord == Ordering::Equal {
                (Some(va.clone()), ia && ib)
            } else if ord == wins {
                (Some(va.clone()), ia)
            } else {
                (Some(vb.clone()), ib)
            }
        }
        ((Some(va), ia), (None, _)) => (Some(va.clone()), ia),
        ((None, _), (Some(vb), ib)) => (Some(vb.clone()), ib),
        ((None, _), (None, _)) => (None, false),
    }
}

/// Pick the more permissive of two bounds; a missing bound is unbounded and
/// therefore always wins.
fn looser_bound(
    a: Bound<'_>,
    b: Bound<'_>,
    wins: Ordering,
    cmp: &Comparator,
) -> (Option<String>, bool) {
    match (a, b) {
        ((Some(va), ia), (Some(vb), ib)) => {
            let ord = cmp.compare(va, vb);
            if ord == Ordering::Equal {
                (Some(va.clone()), ia || ib)
            } else if ord == wins {
                (Some(va.clone()), ia)
            } else {
                (Some(vb.clone()), ib)
            }
        }
        _ => (None, false),
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.min_inclusive { '[' } else { '(' };
        let close = if self.max_inclusive { ']' } else { ')' };
        write!(
            f,
            "{}{},{}{}",
            open,
            self.min.as_deref().unwrap_or("-inf"),
            self.max.as_deref().unwrap_or("+inf"),
            close
        )
    }
}
