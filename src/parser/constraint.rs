//! Single operator + version clauses

use std::fmt;

use crate::range::interval::Interval;
use crate::version::comparator::{Comparator, strip_v_prefix};
use crate::version::error::VersError;
use crate::version::scheme::Scheme;

/// Comparison operator of a single clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    NotEq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl Operator {
    /// Two-character operators come first so the longest match wins
    const ALL: [Operator; 6] = [
        Operator::NotEq,
        Operator::Gte,
        Operator::Lte,
        Operator::Gt,
        Operator::Lt,
        Operator::Eq,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::NotEq => "!=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
        }
    }

    /// Split a leading operator off `s`
    fn strip_from(s: &str) -> Option<(Operator, &str)> {
        Self::ALL
            .into_iter()
            .find_map(|op| s.strip_prefix(op.as_str()).map(|rest| (op, rest)))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single clause such as `>=1.2.3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub operator: Operator,
    pub version: String,
}

impl Constraint {
    pub fn new(operator: Operator, version: impl Into<String>) -> Self {
        Self {
            operator,
            version: version.into(),
        }
    }

    /// Parse a clause, stripping a leading `v` from the version
    pub fn parse(s: &str) -> Result<Self, VersError> {
        Self::parse_for_scheme(s, &Scheme::Generic)
    }

    /// Parse a clause under `scheme`.
    ///
    /// A missing operator means `=`. Go keeps a leading `v` on the version.
    pub fn parse_for_scheme(s: &str, scheme: &Scheme) -> Result<Self, VersError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersError::InvalidConstraint(s.to_string()));
        }

        let (operator, version) = match Operator::strip_from(s) {
            Some((operator, rest)) => (operator, rest.trim()),
            None => (Operator::Eq, s),
        };
        if version.is_empty() {
            return Err(VersError::InvalidConstraint(s.to_string()));
        }

        let version = if scheme.preserves_v_prefix() {
            version
        } else {
            strip_v_prefix(version)
        };

        Ok(Self::new(operator, version))
    }

    pub fn is_exclusion(&self) -> bool {
        self.operator == Operator::NotEq
    }

    /// The interval this clause admits; `None` for an exclusion
    pub fn to_interval(&self) -> Option<Interval> {
        let v = self.version.as_str();
        match self.operator {
            Operator::Eq => Some(Interval::exact(v)),
            Operator::NotEq => None,
            Operator::Gt => Some(Interval::greater_than(v, false)),
            Operator::Gte => Some(Interval::greater_than(v, true)),
            Operator::Lt => Some(Interval::less_than(v, false)),
            Operator::Lte => Some(Interval::less_than(v, true)),
        }
    }

    /// Check `version` against this clause alone
    pub fn satisfies(&self, version: &str, cmp: &Comparator) -> bool {
        let ordering = cmp.compare(version, &self.version);
        match self.operator {
            Operator::Eq => ordering.is_eq(),
            Operator::NotEq => ordering.is_ne(),
            Operator::Lt => ordering.is_lt(),
            Operator::Lte => ordering.is_le(),
            Operator::Gt => ordering.is_gt(),
            Operator::Gte => ordering.is_ge(),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}
