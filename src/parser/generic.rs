//! `|`-separated clause lists shared by vers URIs and several native grammars

use tracing::trace;

use crate::parser::constraint::Constraint;
use crate::range::interval::Interval;
use crate::range::version_range::Range;
use crate::version::comparator::Comparator;
use crate::version::error::VersError;

/// Parse `clause(|clause)*` into a range ordered by `comparator`.
///
/// `!=` clauses become exclusions. A lower-only interval immediately followed
/// by an upper-only one (or the reverse) is intersected into one bounded
/// interval when the two overlap; every other interval joins the union on its
/// own. Only exclusions means everything but those; no clauses at all means
/// nothing.
pub fn parse_constraints(input: &str, comparator: &Comparator) -> Result<Range, VersError> {
    let mut intervals = Vec::new();
    let mut exclusions = Vec::new();

    for part in input.split('|').map(str::trim).filter(|p| !p.is_empty()) {
        let constraint = Constraint::parse_for_scheme(part, comparator.scheme())?;
        trace!("clause {part:?} -> {constraint}");
        match constraint.to_interval() {
            Some(interval) => intervals.push(interval),
            None => exclusions.push(constraint.version),
        }
    }

    let base = if intervals.is_empty() {
        if exclusions.is_empty() {
            return Ok(Range::empty(comparator.clone()));
        }
        Range::unbounded(comparator.clone())
    } else {
        Range::from_intervals(pair_half_bounded(intervals, comparator), comparator.clone())
    };

    Ok(exclusions
        .iter()
        .fold(base, |range, version| range.exclude(version)))
}

/// Intersect consecutive lower-only/upper-only pairs
fn pair_half_bounded(intervals: Vec<Interval>, cmp: &Comparator) -> Vec<Interval> {
    let mut paired = Vec::with_capacity(intervals.len());
    let mut iter = intervals.into_iter().peekable();

    while let Some(current) = iter.next() {
        let Some(next) = iter.peek() else {
            paired.push(current);
            break;
        };

        let complementary = (current.is_lower_bound_only() && next.is_upper_bound_only())
            || (current.is_upper_bound_only() && next.is_lower_bound_only());
        if complementary {
            let bounded = current.intersect(next, cmp);
            // disjoint halves such as `<1.0.0|>2.0.0` stay a union
            if !bounded.is_empty(cmp) {
                paired.push(bounded);
                iter.next();
                continue;
            }
        }
        paired.push(current);
    }

    paired
}
