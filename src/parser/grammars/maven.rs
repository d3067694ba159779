//! Maven/NuGet bracket grammar: `[1.0,2.0)`, `(,1.0]`, `[1.2]`, `1.0`

use crate::parser::generic::parse_constraints;
use crate::parser::traits::NativeGrammar;
use crate::range::interval::Interval;
use crate::range::version_range::Range;
use crate::version::comparator::Comparator;
use crate::version::error::VersError;

/// Shared by Maven and NuGet; the comparator decides the ordering
pub struct MavenGrammar;

impl NativeGrammar for MavenGrammar {
    fn parse(&self, input: &str, comparator: &Comparator) -> Result<Range, VersError> {
        let input = input.trim();

        if input.starts_with(['[', '(']) {
            let intervals = parse_bracket_groups(input)?;
            return Ok(Range::from_intervals(intervals, comparator.clone()));
        }

        // a bare version is a soft requirement: that version or anything newer
        if input.starts_with(|c: char| c.is_ascii_digit()) {
            return Ok(Range::greater_than(input, true, comparator.clone()));
        }

        parse_constraints(input, comparator)
    }
}

/// `[1.0,2.0),[3.0,)` -> one interval per bracket group
fn parse_bracket_groups(input: &str) -> Result<Vec<Interval>, VersError> {
    let invalid = || VersError::InvalidConstraint(input.to_string());
    let mut intervals = Vec::new();
    let mut rest = input;

    loop {
        rest = rest.trim_start();
        let open = rest.chars().next().ok_or_else(invalid)?;
        if open != '[' && open != '(' {
            return Err(invalid());
        }

        let close_at = rest.find([']', ')']).ok_or_else(invalid)?;
        let close = rest[close_at..].chars().next().ok_or_else(invalid)?;
        let inner = &rest[1..close_at];
        if inner.contains(['[', '(']) {
            return Err(invalid());
        }
        intervals.push(parse_group(open, inner, close).ok_or_else(invalid)?);

        rest = rest[close_at + 1..].trim_start();
        if rest.is_empty() {
            return Ok(intervals);
        }
        rest = rest.strip_prefix(',').ok_or_else(invalid)?;
    }
}

fn parse_group(open: char, inner: &str, close: char) -> Option<Interval> {
    let min_inclusive = open == '[';
    let max_inclusive = close == ']';

    let Some((min, max)) = inner.split_once(',') else {
        // `[1.0]` pins a single version; `(1.0)` means nothing
        let version = inner.trim();
        return (min_inclusive && max_inclusive && !version.is_empty())
            .then(|| Interval::exact(version));
    };

    let (min, max) = (min.trim(), max.trim());
    if max.contains(',') || (min.is_empty() && max.is_empty()) {
        return None;
    }

    let bound = |v: &str| (!v.is_empty()).then(|| v.to_string());
    Some(Interval::new(
        bound(min),
        bound(max),
        min_inclusive && !min.is_empty(),
        max_inclusive && !max.is_empty(),
    ))
}
