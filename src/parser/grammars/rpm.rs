//! RPM comparison clauses: `>= 1.0, <= 2.0`

use crate::parser::generic::parse_constraints;
use crate::parser::traits::NativeGrammar;
use crate::range::version_range::Range;
use crate::version::comparator::Comparator;
use crate::version::error::VersError;

pub struct RpmGrammar;

impl NativeGrammar for RpmGrammar {
    fn parse(&self, input: &str, comparator: &Comparator) -> Result<Range, VersError> {
        parse_constraints(&input.replace(',', "|"), comparator)
    }
}
