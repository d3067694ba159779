//! Version ranges across package ecosystems
//!
//! Parses `vers:` URIs and native range syntax (npm, Cargo, RubyGems, PyPI,
//! Maven, NuGet, Go, Debian, RPM) into one [`Range`] type and answers
//! membership and ordering questions with each ecosystem's own rules.
//!
//! ```
//! let range = vers_range::parse("vers:npm/>=1.2.3|<2.0.0").unwrap();
//! assert!(range.contains("1.5.0"));
//!
//! let range = vers_range::parse_native("^1.2.3", "npm").unwrap();
//! assert_eq!(vers_range::to_vers_string(&range, "npm"), "vers:npm/>=1.2.3|<2.0.0");
//! ```
//!
//! The free functions use an uncached [`Parser`]. Build a parser with
//! [`Parser::from_config`] or [`Parser::with_cache`] to reuse parsed versions.

pub mod config;
pub mod parser;
pub mod range;
pub mod version;

use std::cmp::Ordering;

pub use config::{CacheConfig, VersConfig};
pub use parser::{Constraint, NativeGrammar, Operator, Parser};
pub use range::{Interval, Range};
pub use version::cache::{BoundedCache, VersionCache};
pub use version::comparator::Comparator;
pub use version::error::VersError;
pub use version::scheme::Scheme;
pub use version::semver::Version;

/// Parse a `vers:<scheme>/<constraints>` URI
pub fn parse(uri: &str) -> Result<Range, VersError> {
    Parser::new().parse(uri)
}

/// Parse native range syntax; unknown schemes use the generic grammar
pub fn parse_native(constraint: &str, scheme: &str) -> Result<Range, VersError> {
    Parser::new().parse_native(constraint, &Scheme::from_name(scheme))
}

pub fn contains(range: &Range, version: &str) -> bool {
    range.contains(version)
}

/// Compare with the generic ordering
pub fn compare(a: &str, b: &str) -> Ordering {
    Comparator::default().compare(a, b)
}

pub fn compare_with_scheme(a: &str, b: &str, scheme: &str) -> Ordering {
    Comparator::new(Scheme::from_name(scheme)).compare(a, b)
}

pub fn to_vers_string(range: &Range, scheme: &str) -> String {
    parser::vers_uri::to_vers_string(range, &Scheme::from_name(scheme))
}

pub fn exact(version: &str) -> Range {
    Range::exact(version, Comparator::default())
}

pub fn greater_than(version: &str, inclusive: bool) -> Range {
    Range::greater_than(version, inclusive, Comparator::default())
}

pub fn less_than(version: &str, inclusive: bool) -> Range {
    Range::less_than(version, inclusive, Comparator::default())
}

pub fn unbounded() -> Range {
    Range::unbounded(Comparator::default())
}

pub fn empty() -> Range {
    Range::empty(Comparator::default())
}

/// Check `version` against `constraint`.
///
/// With an empty `scheme` the constraint is a vers URI, otherwise native
/// syntax of that scheme.
pub fn satisfies(version: &str, constraint: &str, scheme: &str) -> Result<bool, VersError> {
    let range = if scheme.is_empty() {
        parse(constraint)?
    } else {
        parse_native(constraint, scheme)?
    };
    Ok(range.contains(version))
}

/// True when `version` parses under the generic rules
pub fn valid(version: &str) -> bool {
    Version::parse(version).is_ok()
}

/// `MAJOR.MINOR.PATCH[-PRERELEASE]` form of `version`
pub fn normalize(version: &str) -> Result<String, VersError> {
    Version::parse(version).map(|v| v.normalized())
}
