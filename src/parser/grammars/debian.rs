//! Debian relation operators: `>> 1.0`, `<< 2.0`, `>= 1.0`

use crate::parser::generic::parse_constraints;
use crate::parser::traits::NativeGrammar;
use crate::range::version_range::Range;
use crate::version::comparator::Comparator;
use crate::version::error::VersError;

pub struct DebianGrammar;

impl NativeGrammar for DebianGrammar {
    /// `>>`/`<<` are the strict operators; `,` separates clauses like `|`
    fn parse(&self, input: &str, comparator: &Comparator) -> Result<Range, VersError> {
        let rewritten = input
            .replace(">>", ">")
            .replace("<<", "<")
            .replace(',', "|");
        parse_constraints(&rewritten, comparator)
    }
}
