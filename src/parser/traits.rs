//! Native grammar trait definition

#[cfg(test)]
use mockall::automock;

use crate::version::comparator::Comparator;
use crate::version::error::VersError;

/// Trait for ecosystem-specific range syntax
///
/// Each ecosystem writes ranges differently:
/// - npm: `^1.2.3 || >=2.0.0 <3.0.0`
/// - RubyGems: `~> 1.2, >= 1.2.5`
/// - Maven: `[1.0,2.0),[3.0,)`
#[cfg_attr(test, automock)]
pub trait NativeGrammar: Send + Sync {
    /// Lower a native constraint string into a range ordered by `comparator`
    fn parse(&self, input: &str, comparator: &Comparator) -> Result<crate::range::version_range::Range, VersError>;
}
