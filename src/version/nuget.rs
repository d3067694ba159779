//! NuGet version ordering
//!
//! NuGet versions have up to four numeric components (missing ones are 0),
//! ignore build metadata, and compare prerelease labels case-insensitively.

use std::cmp::Ordering;

use crate::version::semver::compare_prerelease;

#[derive(Debug, Default, PartialEq, Eq)]
struct NugetVersion {
    numeric: [u64; 4],
    prerelease: String,
}

impl NugetVersion {
    fn parse(s: &str) -> Self {
        let s = s.split_once('+').map_or(s, |(version, _)| version);
        let (s, prerelease) = s.split_once('-').unwrap_or((s, ""));

        let mut numeric = [0; 4];
        for (slot, part) in numeric.iter_mut().zip(s.split('.')) {
            *slot = part.parse().unwrap_or(0);
        }

        Self {
            numeric,
            prerelease: prerelease.to_lowercase(),
        }
    }
}

pub fn compare_nuget(a: &str, b: &str) -> Ordering {
    let a = NugetVersion::parse(a);
    let b = NugetVersion::parse(b);

    a.numeric.cmp(&b.numeric).then_with(|| {
        match (a.prerelease.is_empty(), b.prerelease.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => compare_prerelease(&a.prerelease, &b.prerelease),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.0", "1.0.0.0", Ordering::Equal)]
    #[case("1.0.0.1", "1.0.0", Ordering::Greater)]
    #[case("1.0.0.1", "1.0.1", Ordering::Less)]
    #[case("1.0.0-BETA", "1.0.0-beta", Ordering::Equal)]
    #[case("1.0.0-alpha", "1.0.0", Ordering::Less)]
    #[case("1.0.0-Beta.2", "1.0.0-beta.10", Ordering::Less)]
    #[case("1.0.0+abc", "1.0.0+def", Ordering::Equal)]
    #[case("2.0.0-rc.1+build", "2.0.0-RC.1", Ordering::Equal)]
    fn compare_nuget_orders_versions(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_nuget(a, b), expected);
        assert_eq!(compare_nuget(b, a), expected.reverse());
    }

    #[test]
    fn parse_ignores_components_past_the_fourth() {
        assert_eq!(
            NugetVersion::parse("1.2.3.4.5"),
            NugetVersion {
                numeric: [1, 2, 3, 4],
                prerelease: String::new(),
            }
        );
    }
}
