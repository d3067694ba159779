//! `vers:<scheme>/<constraints>` parsing and rendering

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::constraint::{Constraint, Operator};
use crate::parser::generic::parse_constraints;
use crate::range::version_range::Range;
use crate::version::comparator::Comparator;
use crate::version::error::VersError;
use crate::version::scheme::Scheme;
use crate::version::semver::Version;

static VERS_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^vers:([^/]+)/(.*)$").expect("Invalid regex pattern for vers URI")
});

/// Split a vers URI into its scheme and raw constraint list
pub fn split(uri: &str) -> Result<(Scheme, &str), VersError> {
    let captures = VERS_URI
        .captures(uri)
        .ok_or_else(|| VersError::InvalidUri(uri.to_string()))?;

    let scheme = captures.get(1).map_or("", |m| m.as_str());
    let constraints = captures.get(2).map_or("", |m| m.as_str());
    if scheme.trim().is_empty() {
        return Err(VersError::InvalidUri(uri.to_string()));
    }

    Ok((Scheme::from_name(scheme), constraints))
}

/// Parse a vers URI. `comparator_for` supplies the ordering for the scheme
/// named in the URI.
pub fn parse(
    uri: &str,
    comparator_for: impl FnOnce(Scheme) -> Comparator,
) -> Result<Range, VersError> {
    let (scheme, constraints) = split(uri)?;
    let comparator = comparator_for(scheme);

    match constraints.trim() {
        "" | "*" => Ok(Range::unbounded(comparator)),
        constraints => parse_constraints(constraints, &comparator),
    }
}

/// Render `range` as a vers URI for `scheme`.
///
/// Clauses are sorted by version and joined with `|`. At a shared version an
/// upper bound comes first, then `=`/`!=`, then a lower bound, so each lower
/// bound is directly followed by the upper bound it pairs with on reparse.
pub fn to_vers_string(range: &Range, scheme: &Scheme) -> String {
    let name = scheme.as_str();
    if range.is_unbounded() {
        return format!("vers:{name}/*");
    }
    if range.is_empty() {
        return format!("vers:{name}/");
    }

    let cmp = if range.scheme() == scheme {
        range.comparator().clone()
    } else {
        Comparator::new(scheme.clone())
    };

    let mut clauses: Vec<Constraint> = Vec::new();
    for interval in range.intervals() {
        if interval.is_empty(&cmp) {
            continue;
        }
        if interval.is_exact(&cmp) {
            if let Some(version) = &interval.min {
                clauses.push(Constraint::new(Operator::Eq, version.as_str()));
            }
            continue;
        }
        if let Some(min) = &interval.min {
            let op = if interval.min_inclusive {
                Operator::Gte
            } else {
                Operator::Gt
            };
            clauses.push(Constraint::new(op, min.as_str()));
        }
        if let Some(max) = &interval.max {
            let op = if interval.max_inclusive {
                Operator::Lte
            } else {
                Operator::Lt
            };
            clauses.push(Constraint::new(op, max.as_str()));
        }
    }
    clauses.extend(
        range
            .exclusions()
            .map(|version| Constraint::new(Operator::NotEq, version)),
    );

    if scheme.is_semver_flavored() {
        for clause in &mut clauses {
            clause.version = normalize_semver(&clause.version);
        }
    }

    clauses.sort_by(|a, b| {
        cmp.compare(&a.version, &b.version)
            .then_with(|| tie_rank(a.operator).cmp(&tie_rank(b.operator)))
    });

    let rendered: Vec<String> = clauses.iter().map(Constraint::to_string).collect();
    format!("vers:{name}/{}", rendered.join("|"))
}

fn tie_rank(operator: Operator) -> u8 {
    match operator {
        Operator::Lt | Operator::Lte => 0,
        Operator::Eq | Operator::NotEq => 1,
        Operator::Gt | Operator::Gte => 2,
    }
}

/// `1.2` -> `1.2.0`; versions with a prerelease or build are left alone
fn normalize_semver(version: &str) -> String {
    match Version::parse(version) {
        Ok(v) if v.prerelease.is_empty() && v.build.is_empty() => {
            format!("{}.{}.{}", v.major, v.minor, v.patch)
        }
        _ => version.to_string(),
    }
}
