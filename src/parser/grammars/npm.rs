//! npm range grammar, also used for Cargo
//!
//! Supports npm semver range specifications:
//! - `1.2.3` - exact match
//! - `^1.2.3` - compatible with version (>=1.2.3 <2.0.0)
//! - `~1.2.3` - approximately equivalent (>=1.2.3 <1.3.0; `~1.0.0` is <2.0.0)
//! - `>=1.2.3`, `>1.2.3`, `<=1.2.3`, `<1.2.3` - comparison operators
//! - `1.2.x`, `1.x`, `*` - wildcards
//! - `1.2.3 - 2.3.4` - inclusive hyphen range
//! - `>=1.0.0 <2.0.0` - AND (space-separated), `^1.0.0 || ^2.0.0` - OR
//!
//! Cargo additionally separates AND clauses with `,`.

use tracing::trace;

use crate::parser::constraint::Constraint;
use crate::parser::traits::NativeGrammar;
use crate::range::interval::Interval;
use crate::range::version_range::Range;
use crate::version::comparator::{Comparator, strip_v_prefix};
use crate::version::error::VersError;
use crate::version::semver::Version;

pub struct NpmGrammar {
    comma_is_and: bool,
}

impl NpmGrammar {
    pub const fn npm() -> Self {
        Self {
            comma_is_and: false,
        }
    }

    pub const fn cargo() -> Self {
        Self { comma_is_and: true }
    }
}

impl NativeGrammar for NpmGrammar {
    fn parse(&self, input: &str, comparator: &Comparator) -> Result<Range, VersError> {
        let spec = if self.comma_is_and {
            VersionSpec::parse(&input.replace(',', " "))?
        } else {
            VersionSpec::parse(input)?
        };
        trace!("npm spec {input:?} -> {spec:?}");
        spec.lower(comparator)
    }
}

/// Top-level version specification
///
/// OR binds loosest, then AND, then a single term.
#[derive(Debug, Clone, PartialEq, Eq)]
enum VersionSpec {
    /// Single term (^1.0.0, >=1.0.0, 1.0.0 - 2.0.0, etc.)
    Single(Term),
    /// AND of terms (>=1.0.0 <2.0.0) - space-separated, all must satisfy
    And(Vec<VersionSpec>),
    /// OR of specs (^1.0.0 || ^2.0.0) - any must satisfy
    Or(Vec<VersionSpec>),
}

impl VersionSpec {
    fn parse(spec: &str) -> Result<Self, VersError> {
        let spec = spec.trim();

        if spec.contains("||") {
            let branches = spec
                .split("||")
                .map(Self::parse_and_or_single)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(VersionSpec::Or(branches));
        }

        Self::parse_and_or_single(spec)
    }

    /// A hyphen range, or whitespace-separated terms
    fn parse_and_or_single(spec: &str) -> Result<Self, VersError> {
        let spec = spec.trim();

        if let Some((from, to)) = spec.split_once(" - ") {
            return Term::hyphen(from, to).map(VersionSpec::Single);
        }

        let mut terms = split_and_parts(spec)
            .into_iter()
            .map(|part| Term::parse(&part).map(VersionSpec::Single))
            .collect::<Result<Vec<_>, _>>()?;

        match terms.len() {
            0 => Ok(VersionSpec::Single(Term::Any)),
            1 => Ok(terms.remove(0)),
            _ => Ok(VersionSpec::And(terms)),
        }
    }

    fn lower(&self, cmp: &Comparator) -> Result<Range, VersError> {
        match self {
            VersionSpec::Single(term) => term.lower(cmp),
            VersionSpec::And(specs) => fold(specs, cmp, |acc, r| acc.intersect(&r)),
            VersionSpec::Or(specs) => fold(specs, cmp, |acc, r| acc.union(&r)),
        }
    }
}

fn fold(
    specs: &[VersionSpec],
    cmp: &Comparator,
    combine: impl Fn(Range, Range) -> Range,
) -> Result<Range, VersError> {
    let mut result: Option<Range> = None;
    for spec in specs {
        let range = spec.lower(cmp)?;
        result = Some(match result {
            Some(acc) => combine(acc, range),
            None => range,
        });
    }
    Ok(result.unwrap_or_else(|| Range::empty(cmp.clone())))
}

/// Split on whitespace, gluing a bare operator to the token after it so
/// `>= 1.0.0` stays one term
fn split_and_parts(spec: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut pending: Option<&str> = None;

    for token in spec.split_whitespace() {
        match pending.take() {
            Some(op) => parts.push(format!("{op}{token}")),
            None if is_bare_operator(token) => pending = Some(token),
            None => parts.push(token.to_string()),
        }
    }
    if let Some(op) = pending {
        parts.push(op.to_string());
    }

    parts
}

fn is_bare_operator(token: &str) -> bool {
    matches!(token, "<" | "<=" | ">" | ">=" | "=" | "!=" | "^" | "~" | "~>")
}

/// One npm range term
#[derive(Debug, Clone, PartialEq, Eq)]
enum Term {
    /// `*`, `x`, or nothing
    Any,
    /// `^1.2.3`
    Caret(String),
    /// `~1.2.3`
    Tilde(String),
    /// `1.x` (minor `None`) or `1.2.x`
    Wildcard { major: u64, minor: Option<u64> },
    /// `1.0.0 - 2.0.0`
    Hyphen { from: String, to: String },
    /// Plain operator clause
    Clause(Constraint),
}

impl Term {
    fn parse(term: &str) -> Result<Self, VersError> {
        let term = term.trim();

        if matches!(term, "" | "*" | "x" | "X") {
            return Ok(Term::Any);
        }
        if let Some(rest) = term.strip_prefix('^') {
            return operand(rest, term).map(Term::Caret);
        }
        if let Some(rest) = term.strip_prefix("~>").or_else(|| term.strip_prefix('~')) {
            return operand(rest, term).map(Term::Tilde);
        }
        if let Some(wildcard) = Self::parse_wildcard(term)? {
            return Ok(wildcard);
        }

        Constraint::parse(term).map(Term::Clause)
    }

    fn hyphen(from: &str, to: &str) -> Result<Self, VersError> {
        let whole = format!("{from} - {to}");
        Ok(Term::Hyphen {
            from: operand(from, &whole)?,
            to: operand(to, &whole)?,
        })
    }

    /// `1.x`, `1.2.*`, `1.x.x`; `Ok(None)` when the term has no wildcard part
    fn parse_wildcard(term: &str) -> Result<Option<Self>, VersError> {
        let parts: Vec<&str> = strip_v_prefix(term).split('.').collect();
        let Some(first_wild) = parts.iter().position(|p| is_wildcard(p)) else {
            return Ok(None);
        };

        let invalid = || VersError::InvalidConstraint(term.to_string());
        if !parts[first_wild..].iter().all(|p| is_wildcard(p)) {
            return Err(invalid());
        }

        let numbers = parts[..first_wild]
            .iter()
            .map(|p| p.parse::<u64>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match numbers.as_slice() {
            [] => Ok(Some(Term::Any)),
            [major] => Ok(Some(Term::Wildcard {
                major: *major,
                minor: None,
            })),
            [major, minor] => Ok(Some(Term::Wildcard {
                major: *major,
                minor: Some(*minor),
            })),
            _ => Err(invalid()),
        }
    }

    fn lower(&self, cmp: &Comparator) -> Result<Range, VersError> {
        let single = |interval: Interval| Range::new(vec![interval], cmp.clone());

        match self {
            Term::Any => Ok(Range::unbounded(cmp.clone())),
            Term::Caret(version) => {
                let v = parse_operand(version)?;
                let upper = if v.major > 0 {
                    v.bump_major()
                } else if v.minor > 0 {
                    v.bump_minor()
                } else {
                    v.bump_patch()
                }
                .ok_or_else(|| overflow(version))?;
                Ok(single(Interval::half_open(version, &upper.to_string())))
            }
            Term::Tilde(version) => {
                let v = parse_operand(version)?;
                if v.is_prerelease() {
                    // prereleases are admitted only for the stated triple
                    let release = Version::new(v.major, v.minor, v.patch).to_string();
                    let next_patch = v.bump_patch().ok_or_else(|| overflow(version))?;
                    let next_patch = next_patch.to_string();
                    return Ok(Range::new(
                        vec![
                            Interval::half_open(version, &release),
                            Interval::half_open(&release, &next_patch),
                        ],
                        cmp.clone(),
                    ));
                }

                // `~1.0.0` and `~1` allow the whole major line
                let upper = if v.minor > 0 || v.patch > 0 {
                    v.bump_minor()
                } else {
                    v.bump_major()
                }
                .ok_or_else(|| overflow(version))?;
                Ok(single(Interval::half_open(version, &upper.to_string())))
            }
            Term::Wildcard { major, minor } => {
                let lower = Version::new(*major, minor.unwrap_or(0), 0);
                let upper = match minor {
                    None => lower.bump_major(),
                    Some(_) => lower.bump_minor(),
                }
                .ok_or_else(|| overflow(&lower.to_string()))?;
                Ok(single(Interval::half_open(
                    &lower.to_string(),
                    &upper.to_string(),
                )))
            }
            Term::Hyphen { from, to } => Ok(single(Interval::new(
                Some(from.clone()),
                Some(to.clone()),
                true,
                true,
            ))),
            Term::Clause(constraint) => Ok(match constraint.to_interval() {
                Some(interval) => single(interval),
                None => Range::unbounded(cmp.clone()).exclude(&constraint.version),
            }),
        }
    }
}

fn is_wildcard(part: &str) -> bool {
    matches!(part, "x" | "X" | "*")
}

/// Version text after an operator; empty is an error on the whole term
fn operand(rest: &str, term: &str) -> Result<String, VersError> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(VersError::InvalidConstraint(term.to_string()));
    }
    Ok(strip_v_prefix(rest).to_string())
}

fn parse_operand(version: &str) -> Result<Version, VersError> {
    Version::parse(version).map_err(|_| VersError::InvalidConstraint(version.to_string()))
}

fn overflow(version: &str) -> VersError {
    VersError::InvalidConstraint(version.to_string())
}
