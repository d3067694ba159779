//! Go module version constraints: `>=v1.2.0, <v2.0.0`

use crate::parser::constraint::Constraint;
use crate::parser::generic::parse_constraints;
use crate::parser::grammars::intersect_all;
use crate::parser::traits::NativeGrammar;
use crate::range::version_range::Range;
use crate::version::comparator::Comparator;
use crate::version::error::VersError;

pub struct GoGrammar;

impl NativeGrammar for GoGrammar {
    /// Comma-separated clauses are intersected. Versions keep their `v`.
    fn parse(&self, input: &str, comparator: &Comparator) -> Result<Range, VersError> {
        if !input.contains(',') {
            return parse_constraints(input, comparator);
        }

        let mut ranges = Vec::new();
        let mut exclusions = Vec::new();
        for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let constraint = Constraint::parse_for_scheme(part, comparator.scheme())?;
            match constraint.to_interval() {
                Some(interval) => ranges.push(Range::new(vec![interval], comparator.clone())),
                None => exclusions.push(constraint.version),
            }
        }

        let base = match intersect_all(ranges) {
            Some(range) => range,
            None if exclusions.is_empty() => return Ok(Range::empty(comparator.clone())),
            None => Range::unbounded(comparator.clone()),
        };
        Ok(exclusions
            .iter()
            .fold(base, |range, version| range.exclude(version)))
    }
}
