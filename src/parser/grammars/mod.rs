//! Ecosystem-specific range grammars
//!
//! Each grammar lowers native syntax into a [`Range`]; single clauses always
//! go through [`Constraint`](crate::parser::constraint::Constraint).

pub mod debian;
pub mod gem;
pub mod go;
pub mod maven;
pub mod npm;
pub mod pypi;
pub mod rpm;

use crate::parser::generic::parse_constraints;
use crate::parser::traits::NativeGrammar;
use crate::range::interval::Interval;
use crate::range::version_range::Range;
use crate::version::comparator::{Comparator, strip_v_prefix};
use crate::version::error::VersError;
use crate::version::scheme::Scheme;
use crate::version::semver::Version;

use debian::DebianGrammar;
use gem::GemGrammar;
use go::GoGrammar;
use maven::MavenGrammar;
use npm::NpmGrammar;
use pypi::PypiGrammar;
use rpm::RpmGrammar;

/// `|`-separated clauses, one operator each
pub struct GenericGrammar;

impl NativeGrammar for GenericGrammar {
    fn parse(&self, input: &str, comparator: &Comparator) -> Result<Range, VersError> {
        parse_constraints(input, comparator)
    }
}

static NPM: NpmGrammar = NpmGrammar::npm();
static CARGO: NpmGrammar = NpmGrammar::cargo();
static GENERIC: GenericGrammar = GenericGrammar;

/// The built-in grammar for `scheme`
pub fn grammar_for(scheme: &Scheme) -> &'static dyn NativeGrammar {
    match scheme {
        Scheme::Npm => &NPM,
        Scheme::Cargo => &CARGO,
        Scheme::Gem => &GemGrammar,
        Scheme::Pypi => &PypiGrammar,
        Scheme::Maven | Scheme::Nuget => &MavenGrammar,
        Scheme::Go => &GoGrammar,
        Scheme::Debian => &DebianGrammar,
        Scheme::Rpm => &RpmGrammar,
        Scheme::Other(_) | Scheme::Generic => &GENERIC,
    }
}

/// `~> X` / `~= X`: at least X, below the next release at the stated
/// precision. Three or more segments bump the minor, fewer bump the major.
pub(crate) fn pessimistic(version: &str, comparator: &Comparator) -> Result<Range, VersError> {
    let version = strip_v_prefix(version.trim());
    let parsed =
        Version::parse(version).map_err(|_| VersError::InvalidConstraint(version.to_string()))?;

    let overflow = || VersError::InvalidConstraint(version.to_string());
    let release = version.split(['-', '+']).next().unwrap_or(version);
    let upper = if release.split('.').count() >= 3 {
        let minor = parsed.minor.checked_add(1).ok_or_else(overflow)?;
        format!("{}.{minor}", parsed.major)
    } else {
        parsed.major.checked_add(1).ok_or_else(overflow)?.to_string()
    };

    Ok(Range::new(
        vec![Interval::half_open(version, &upper)],
        comparator.clone(),
    ))
}

/// Intersect every range, or `None` for no ranges
pub(crate) fn intersect_all(ranges: impl IntoIterator<Item = Range>) -> Option<Range> {
    ranges.into_iter().reduce(|acc, range| acc.intersect(&range))
}
