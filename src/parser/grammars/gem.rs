//! RubyGems requirement grammar: `~> 1.2, >= 1.2.5`

use crate::parser::generic::parse_constraints;
use crate::parser::grammars::{intersect_all, pessimistic};
use crate::parser::traits::NativeGrammar;
use crate::range::version_range::Range;
use crate::version::comparator::Comparator;
use crate::version::error::VersError;

pub struct GemGrammar;

impl NativeGrammar for GemGrammar {
    /// Comma-separated requirements are intersected; each one may itself be
    /// pessimistic or a plain operator clause.
    fn parse(&self, input: &str, comparator: &Comparator) -> Result<Range, VersError> {
        let input = input.trim();

        if input.contains(',') {
            let ranges = input
                .split(',')
                .map(|part| match part.trim() {
                    "" => Err(VersError::InvalidConstraint(input.to_string())),
                    part => self.parse(part, comparator),
                })
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(intersect_all(ranges).unwrap_or_else(|| Range::empty(comparator.clone())));
        }

        if let Some(version) = input.strip_prefix("~>") {
            return pessimistic(version, comparator);
        }

        parse_constraints(input, comparator)
    }
}
