//! PEP 440 specifier grammar: `>=1.0,<2.0`, `~=1.4.2`, `==1.4.*`

use crate::parser::constraint::{Constraint, Operator};
use crate::parser::generic::parse_constraints;
use crate::parser::grammars::{intersect_all, pessimistic};
use crate::parser::traits::NativeGrammar;
use crate::range::interval::Interval;
use crate::range::version_range::Range;
use crate::version::comparator::Comparator;
use crate::version::error::VersError;

pub struct PypiGrammar;

impl NativeGrammar for PypiGrammar {
    /// `~=` and `==X.*` clauses become ranges of their own; every other
    /// clause is joined with `|` and read by the generic parser. All of them
    /// are then intersected.
    fn parse(&self, input: &str, comparator: &Comparator) -> Result<Range, VersError> {
        let input = input.trim();
        let mut ranges = Vec::new();
        let mut plain = Vec::new();

        for clause in input.split(',').map(str::trim) {
            if clause.is_empty() {
                if input.is_empty() {
                    continue;
                }
                return Err(VersError::InvalidConstraint(input.to_string()));
            }

            if let Some(version) = clause.strip_prefix("~=") {
                ranges.push(pessimistic(version, comparator)?);
                continue;
            }

            let clause = normalize_equality(clause);
            if let Some(range) = prefix_match(&clause, comparator)? {
                ranges.push(range);
                continue;
            }
            plain.push(clause);
        }

        if !plain.is_empty() {
            ranges.push(parse_constraints(&plain.join("|"), comparator)?);
        }

        Ok(intersect_all(ranges).unwrap_or_else(|| Range::empty(comparator.clone())))
    }
}

/// `==` and `===` mean the same as `=`
fn normalize_equality(clause: &str) -> String {
    match clause
        .strip_prefix("===")
        .or_else(|| clause.strip_prefix("=="))
    {
        Some(rest) => format!("={}", rest.trim_start()),
        None => clause.to_string(),
    }
}

/// `=1.4.*` matches `[1.4, 1.5)`; `None` when the clause has no `.*` suffix
fn prefix_match(clause: &str, comparator: &Comparator) -> Result<Option<Range>, VersError> {
    let constraint = Constraint::parse_for_scheme(clause, comparator.scheme())?;
    let Some(prefix) = constraint.version.strip_suffix(".*") else {
        return Ok(None);
    };

    let invalid = || VersError::InvalidConstraint(clause.to_string());
    if constraint.operator != Operator::Eq {
        return Err(invalid());
    }

    let mut segments = prefix
        .split('.')
        .map(|s| s.parse::<u64>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;
    if let Some(last) = segments.last_mut() {
        *last = last.checked_add(1).ok_or_else(invalid)?;
    }
    let upper = segments
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".");

    Ok(Some(Range::new(
        vec![Interval::half_open(prefix, &upper)],
        comparator.clone(),
    )))
}
