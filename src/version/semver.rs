use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::VersError;

/// `MAJOR[.MINOR[.PATCH]][-PRERELEASE][+BUILD]`
static SEMANTIC_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:-([^+]+))?(?:\+(.+))?$")
        .expect("semantic version pattern is valid")
});

/// A version parsed with the generic (semver-like) rules.
///
/// Absent components default to 0. `original` keeps the input text for
/// schemes that need it verbatim.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: String,
    pub build: String,
    pub original: String,
}

impl Version {
    /// Parse a version string, accepting partial versions.
    ///
    /// Examples:
    /// - "1" -> 1.0.0
    /// - "1.2" -> 1.2.0
    /// - "1.2.3-beta.1+build" -> 1.2.3, prerelease "beta.1", build "build"
    /// - "1.2.3.4" -> 1.2.3, prerelease "4"
    /// - "7-rc1" -> 7.0.0, prerelease "rc1"
    pub fn parse(s: &str) -> Result<Self, VersError> {
        if s.is_empty() {
            return Err(VersError::InvalidVersion(s.to_string()));
        }

        if s.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Self::new_with_original(parse_component(s, s)?, 0, 0, s));
        }

        if let Some(caps) = SEMANTIC_VERSION.captures(s) {
            let component = |i: usize| match caps.get(i) {
                Some(m) => parse_component(m.as_str(), s),
                None => Ok(0),
            };
            return Ok(Self {
                major: component(1)?,
                minor: component(2)?,
                patch: component(3)?,
                prerelease: caps.get(4).map_or("", |m| m.as_str()).to_string(),
                build: caps.get(5).map_or("", |m| m.as_str()).to_string(),
                original: s.to_string(),
            });
        }

        if s.contains('.') {
            return Self::parse_dotted(s);
        }

        if let Some((major, prerelease)) = s.split_once('-') {
            let mut version = Self::new_with_original(parse_component(major, s)?, 0, 0, s);
            version.prerelease = prerelease.to_string();
            return Ok(version);
        }

        Err(VersError::InvalidVersion(s.to_string()))
    }

    /// Lenient form for dotted strings the strict pattern rejects, such as
    /// four-component versions. Only the major component must be numeric.
    fn parse_dotted(s: &str) -> Result<Self, VersError> {
        let parts: Vec<&str> = s.split('.').collect();
        let mut version = Self::new_with_original(parse_component(parts[0], s)?, 0, 0, s);

        if let Some(minor) = parts.get(1).filter(|p| !p.contains('-')) {
            version.minor = minor.parse().unwrap_or(0);
        }
        if let Some(patch) = parts.get(2) {
            match patch.split_once('-') {
                Some((patch, prerelease)) => {
                    version.patch = patch.parse().unwrap_or(0);
                    version.prerelease = prerelease.to_string();
                }
                None => version.patch = patch.parse().unwrap_or(0),
            }
        }
        if parts.len() > 3 && version.prerelease.is_empty() {
            version.prerelease = parts[3..].join(".");
        }

        Ok(version)
    }

    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self::new_with_original(major, minor, patch, &format!("{major}.{minor}.{patch}"))
    }

    fn new_with_original(major: u64, minor: u64, patch: u64, original: &str) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: String::new(),
            build: String::new(),
            original: original.to_string(),
        }
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    pub fn is_stable(&self) -> bool {
        self.prerelease.is_empty()
    }

    /// `MAJOR.MINOR.PATCH[-PRERELEASE]`, dropping build metadata
    pub fn normalized(&self) -> String {
        if self.prerelease.is_empty() {
            format!("{}.{}.{}", self.major, self.minor, self.patch)
        } else {
            format!(
                "{}.{}.{}-{}",
                self.major, self.minor, self.patch, self.prerelease
            )
        }
    }

    /// Next major release; `None` when the major component is `u64::MAX`
    pub fn bump_major(&self) -> Option<Self> {
        Some(Self::new(self.major.checked_add(1)?, 0, 0))
    }

    pub fn bump_minor(&self) -> Option<Self> {
        Some(Self::new(self.major, self.minor.checked_add(1)?, 0))
    }

    pub fn bump_patch(&self) -> Option<Self> {
        Some(Self::new(self.major, self.minor, self.patch.checked_add(1)?))
    }

    /// Generic ordering: numeric triple first, then a release beats any
    /// prerelease, then prerelease identifiers segment by segment.
    pub fn compare(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| {
                match (self.prerelease.is_empty(), other.prerelease.is_empty()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => compare_prerelease(&self.prerelease, &other.prerelease),
                }
            })
    }
}

fn parse_component(part: &str, input: &str) -> Result<u64, VersError> {
    part.parse()
        .map_err(|_| VersError::InvalidVersion(input.to_string()))
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized())
    }
}

/// Compare dot-separated prerelease identifiers.
///
/// Segments that are both integers compare numerically, anything else
/// compares as text. A side that runs out of segments is the lesser one.
pub fn compare_prerelease(a: &str, b: &str) -> Ordering {
    let parts_a: Vec<&str> = a.split('.').collect();
    let parts_b: Vec<&str> = b.split('.').collect();

    for i in 0..parts_a.len().max(parts_b.len()) {
        let part_a = parts_a.get(i).copied().unwrap_or("");
        let part_b = parts_b.get(i).copied().unwrap_or("");

        if part_a.is_empty() {
            return Ordering::Less;
        }
        if part_b.is_empty() {
            return Ordering::Greater;
        }

        let ord = match (part_a.parse::<u64>(), part_b.parse::<u64>()) {
            (Ok(num_a), Ok(num_b)) => num_a.cmp(&num_b),
            _ => part_a.cmp(part_b),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1, 0, 0, "", "")]
    #[case("1.2", 1, 2, 0, "", "")]
    #[case("1.2.3", 1, 2, 3, "", "")]
    #[case("1.2.3-beta.1", 1, 2, 3, "beta.1", "")]
    #[case("1.2.3-beta+exp.sha", 1, 2, 3, "beta", "exp.sha")]
    #[case("1.0-alpha-1", 1, 0, 0, "alpha-1", "")]
    #[case("1.2.3.4", 1, 2, 3, "4", "")]
    #[case("1.2.3-rc.1.5", 1, 2, 3, "rc.1.5", "")]
    #[case("7-rc1", 7, 0, 0, "rc1", "")]
    fn parse_extracts_components(
        #[case] input: &str,
        #[case] major: u64,
        #[case] minor: u64,
        #[case] patch: u64,
        #[case] prerelease: &str,
        #[case] build: &str,
    ) {
        let version = Version::parse(input).unwrap();

        assert_eq!(
            (version.major, version.minor, version.patch),
            (major, minor, patch)
        );
        assert_eq!(version.prerelease, prerelease);
        assert_eq!(version.build, build);
        assert_eq!(version.original, input);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("v1.2.3")]
    #[case("latest-beta")]
    #[case("99999999999999999999999")]
    fn parse_rejects_unrecognized_input(#[case] input: &str) {
        assert_eq!(
            Version::parse(input),
            Err(VersError::InvalidVersion(input.to_string()))
        );
    }

    #[rstest]
    #[case("1.0.0", "2.0.0", Ordering::Less)]
    #[case("1.2.0", "1.10.0", Ordering::Less)]
    #[case("1.0.1", "1.0.0", Ordering::Greater)]
    #[case("1.0", "1.0.0", Ordering::Equal)]
    #[case("1.0.0-alpha", "1.0.0", Ordering::Less)]
    #[case("1.0.0", "1.0.0-rc.1", Ordering::Greater)]
    #[case("1.0.0-alpha", "1.0.0-alpha.1", Ordering::Less)]
    #[case("1.0.0-alpha.1", "1.0.0-alpha.beta", Ordering::Less)]
    #[case("1.0.0-beta.2", "1.0.0-beta.11", Ordering::Less)]
    #[case("1.0.0-rc.1", "1.0.0-beta.11", Ordering::Greater)]
    #[case("1.0.0+build.1", "1.0.0+build.2", Ordering::Equal)]
    fn compare_follows_generic_ordering(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        let a = Version::parse(a).unwrap();
        let b = Version::parse(b).unwrap();
        assert_eq!(a.compare(&b), expected);
        assert_eq!(b.compare(&a), expected.reverse());
    }

    #[rstest]
    #[case("1.2.3", "1.2.3")]
    #[case("1.2", "1.2.0")]
    #[case("1.2.3-rc.1+build", "1.2.3-rc.1")]
    fn normalized_renders_three_components(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Version::parse(input).unwrap().normalized(), expected);
    }

    #[test]
    fn bump_resets_lower_components() {
        let version = Version::parse("1.2.3-beta").unwrap();

        assert_eq!(version.bump_major().unwrap().to_string(), "2.0.0");
        assert_eq!(version.bump_minor().unwrap().to_string(), "1.3.0");
        assert_eq!(version.bump_patch().unwrap().to_string(), "1.2.4");
        assert!(version.is_prerelease());
        assert!(version.bump_patch().unwrap().is_stable());
    }

    #[test]
    fn bump_past_max_component_is_none() {
        let max = u64::MAX;
        let version = Version::parse(&format!("{max}.{max}.{max}")).unwrap();

        assert!(version.bump_major().is_none());
        assert!(version.bump_minor().is_none());
        assert!(version.bump_patch().is_none());
    }
}
