//! Maven version parsing and comparison.
//!
//! Maven versions use a custom ordering that differs from semver:
//! - Components are split on `.`, `-` and on transitions between digits and letters
//! - A component introduced by `-` or by a digit/letter transition belongs to a
//!   sublist (a nested ordering level); components after `.` do not
//! - Numeric components compare as numbers
//! - Qualifiers have a special ordering:
//!   `alpha` < `beta` < `milestone` < `rc` < `snapshot` < `""` (release) < `sp`
//!   < unknown qualifiers (lexicographic among themselves) < numbers
//! - Trailing zeros are insignificant: `1.0.0` == `1` and `1.0-alpha` == `1-alpha`

use std::cmp::Ordering;

/// A parsed Maven version with comparable components.
#[derive(Debug, Clone)]
pub struct MavenVersion {
    components: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Component {
    kind: ComponentKind,
    /// True when the component sits in a sublist
    sublist: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ComponentKind {
    /// Decimal digits without leading zeros ("" is zero)
    Numeric(String),
    Qualifier(String),
}

/// Rank of the release qualifier (`""`); missing components compare against it
const RELEASE_RANK: u8 = 6;

/// Rank shared by every qualifier outside the well-known list
const UNKNOWN_RANK: u8 = 8;

fn qualifier_rank(qualifier: &str) -> u8 {
    match qualifier {
        "alpha" => 1,
        "beta" => 2,
        "milestone" => 3,
        "rc" => 4,
        "snapshot" => 5,
        "" => RELEASE_RANK,
        "sp" => 7,
        _ => UNKNOWN_RANK,
    }
}

impl MavenVersion {
    pub fn parse(version: &str) -> Self {
        let lowered = version.to_lowercase();
        let tokens = tokenize(&lowered);

        let mut components = Vec::with_capacity(tokens.len());
        for (i, (token, sublist)) in tokens.iter().enumerate() {
            let next_is_numeric = tokens
                .get(i + 1)
                .is_some_and(|(next, _)| is_numeric(next));
            let normalized = normalize_qualifier(token, next_is_numeric);
            if normalized.is_empty() {
                // ga, final and release are the release itself
                continue;
            }

            let kind = if is_numeric(normalized) {
                ComponentKind::Numeric(normalized.trim_start_matches('0').to_string())
            } else {
                ComponentKind::Qualifier(normalized.to_string())
            };
            components.push(Component {
                kind,
                sublist: *sublist,
            });
        }

        Self {
            components: strip_trailing_zeros(components),
        }
    }
}

impl PartialEq for MavenVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MavenVersion {}

impl Ord for MavenVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let max_len = self.components.len().max(other.components.len());
        for i in 0..max_len {
            let ord = match (self.components.get(i), other.components.get(i)) {
                (None, None) => Ordering::Equal,
                (Some(a), None) => compare_to_missing(a),
                (None, Some(b)) => compare_to_missing(b).reverse(),
                (Some(a), Some(b)) => compare_components(a, b),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for MavenVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn compare_maven(a: &str, b: &str) -> Ordering {
    MavenVersion::parse(a).cmp(&MavenVersion::parse(b))
}

/// A missing trailing component behaves like `0` or like the release qualifier
fn compare_to_missing(component: &Component) -> Ordering {
    match &component.kind {
        ComponentKind::Numeric(n) if n.is_empty() => Ordering::Equal,
        ComponentKind::Numeric(_) => Ordering::Greater,
        ComponentKind::Qualifier(q) => qualifier_rank(q).cmp(&RELEASE_RANK),
    }
}

fn compare_components(a: &Component, b: &Component) -> Ordering {
    if a.sublist != b.sublist {
        // A sublist is below a direct number and above a direct qualifier
        let direct = if a.sublist { b } else { a };
        let direct_wins = match direct.kind {
            ComponentKind::Numeric(_) => Ordering::Greater,
            ComponentKind::Qualifier(_) => Ordering::Less,
        };
        return if a.sublist {
            direct_wins.reverse()
        } else {
            direct_wins
        };
    }

    match (&a.kind, &b.kind) {
        (ComponentKind::Numeric(a), ComponentKind::Numeric(b)) => compare_digits(a, b),
        (ComponentKind::Numeric(_), ComponentKind::Qualifier(_)) => Ordering::Greater,
        (ComponentKind::Qualifier(_), ComponentKind::Numeric(_)) => Ordering::Less,
        (ComponentKind::Qualifier(a), ComponentKind::Qualifier(b)) => {
            let (rank_a, rank_b) = (qualifier_rank(a), qualifier_rank(b));
            if rank_a == UNKNOWN_RANK && rank_b == UNKNOWN_RANK {
                a.cmp(b)
            } else {
                rank_a.cmp(&rank_b)
            }
        }
    }
}

/// Compare digit strings without leading zeros, so arbitrarily long numbers work
fn compare_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

fn normalize_qualifier(token: &str, next_is_numeric: bool) -> &str {
    match token {
        // Single letters only expand when a number follows: 1.0a1 but not 1.0-a
        "a" if next_is_numeric => "alpha",
        "b" if next_is_numeric => "beta",
        "m" if next_is_numeric => "milestone",
        "cr" => "rc",
        "ga" | "final" | "release" => "",
        other => other,
    }
}

/// Split a lowercased version into tokens, flagging those that open or
/// continue a sublist.
fn tokenize(version: &str) -> Vec<(&str, bool)> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut sublist = false;
    let mut last_was_digit = false;

    for (i, c) in version.char_indices() {
        if c == '.' || c == '-' {
            if start < i {
                tokens.push((&version[start..i], sublist));
            }
            sublist = c == '-';
            start = i + c.len_utf8();
            continue;
        }

        let is_digit = c.is_ascii_digit();
        if start < i && is_digit != last_was_digit {
            tokens.push((&version[start..i], sublist));
            start = i;
            sublist = true;
        }
        last_was_digit = is_digit;
    }

    if start < version.len() {
        tokens.push((&version[start..], sublist));
    }

    tokens
}

fn is_zero(component: &Component) -> bool {
    matches!(&component.kind, ComponentKind::Numeric(n) if n.is_empty())
}

/// Drop trailing zeros from the base version (before the first sublist), or
/// from the end when there is no sublist at all.
fn strip_trailing_zeros(mut components: Vec<Component>) -> Vec<Component> {
    match components.iter().position(|c| c.sublist) {
        Some(0) => {}
        Some(first_sublist) => {
            let mut base_end = first_sublist;
            while base_end > 1 && is_zero(&components[base_end - 1]) {
                base_end -= 1;
            }
            components.drain(base_end..first_sublist);
        }
        None => {
            while components.last().is_some_and(is_zero) {
                components.pop();
            }
        }
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    // qualifier ordering
    #[case("1.0-alpha", "1.0", Ordering::Less)]
    #[case("1.0-alpha", "1.0-beta", Ordering::Less)]
    #[case("1.0-beta", "1.0-milestone", Ordering::Less)]
    #[case("1.0-milestone", "1.0-rc", Ordering::Less)]
    #[case("1.0-rc", "1.0-snapshot", Ordering::Less)]
    #[case("1.0-snapshot", "1.0", Ordering::Less)]
    #[case("1.0", "1.0-sp", Ordering::Less)]
    #[case("1.0-sp", "1.0-foo", Ordering::Less)]
    #[case("1.0-abc", "1.0-xyz", Ordering::Less)]
    #[case("1.0-foo", "1.0-1", Ordering::Less)]
    // aliases
    #[case("1.0-cr1", "1.0-rc1", Ordering::Equal)]
    #[case("1.0-ga", "1.0", Ordering::Equal)]
    #[case("1.0.final", "1", Ordering::Equal)]
    #[case("1-release", "1", Ordering::Equal)]
    #[case("1a1", "1-alpha-1", Ordering::Equal)]
    #[case("1b2", "1-beta-2", Ordering::Equal)]
    #[case("1m3", "1-milestone-3", Ordering::Equal)]
    #[case("1.0-a", "1.0-alpha", Ordering::Greater)]
    // trailing zeros and case
    #[case("1", "1.0.0", Ordering::Equal)]
    #[case("1.0-alpha", "1-alpha", Ordering::Equal)]
    #[case("1.0.0-ALPHA", "1.0-alpha", Ordering::Equal)]
    #[case("1.0-SNAPSHOT", "1.0-snapshot", Ordering::Equal)]
    // numbers and sublists
    #[case("1.0.1", "1.0", Ordering::Greater)]
    #[case("1.10", "1.9", Ordering::Greater)]
    #[case("1.0-alpha1", "1.0-alpha2", Ordering::Less)]
    #[case("1.0-alpha-10", "1.0-alpha-9", Ordering::Greater)]
    #[case("1-1", "1.1", Ordering::Less)]
    #[case("1.0.1", "1.0-sp", Ordering::Greater)]
    #[case("1.0.1", "1.0-1", Ordering::Greater)]
    #[case("1-foo", "1.foo", Ordering::Greater)]
    #[case("2.0.0.123456789012345678901", "2.0.0.99", Ordering::Greater)]
    fn compare_maven_orders_versions(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_maven(a, b), expected);
        assert_eq!(compare_maven(b, a), expected.reverse());
    }

    #[test]
    fn tokenize_marks_dash_and_transition_components_as_sublist() {
        assert_eq!(
            tokenize("1.0-alpha-1.2rc3"),
            vec![
                ("1", false),
                ("0", false),
                ("alpha", true),
                ("1", true),
                ("2", false),
                ("rc", true),
                ("3", true),
            ]
        );
    }

    #[test]
    fn parse_strips_trailing_zeros_from_base_only() {
        let version = MavenVersion::parse("1.0.0-0");

        assert_eq!(
            version.components,
            vec![
                Component {
                    kind: ComponentKind::Numeric("1".to_string()),
                    sublist: false,
                },
                Component {
                    kind: ComponentKind::Numeric(String::new()),
                    sublist: true,
                },
            ]
        );
    }
}
