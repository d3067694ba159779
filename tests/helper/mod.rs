//! Shared fixtures for integration tests
#![allow(dead_code)]

use vers_range::Range;

/// Versions used to compare ranges by membership
pub const SAMPLE_VERSIONS: &[&str] = &[
    "0.0.1",
    "0.1.0",
    "0.9.9",
    "1.0",
    "1.0.0-alpha",
    "1.0.0-rc.1",
    "1.0.0",
    "1.0.1",
    "1.2.0",
    "1.2.3-beta.1",
    "1.2.3",
    "1.2.4",
    "1.3.0",
    "1.4.0",
    "1.4.4",
    "1.5.0",
    "1.9.9",
    "2.0.0-rc.1",
    "2.0",
    "2.0.0",
    "2.0.1",
    "2.5.0",
    "3.0.0",
    "3.5.0",
    "4.0.0",
    "10.0.0",
];

pub const MAVEN_VERSIONS: &[&str] = &[
    "0.9",
    "1.0-alpha-1",
    "1.0-beta",
    "1.0-SNAPSHOT",
    "1.0",
    "1.0-sp1",
    "1.0.1",
    "1.1",
    "1.2",
    "1.5",
    "2.0-rc1",
    "2.0",
    "2.5",
    "3.0",
    "4.0",
];

pub const GO_VERSIONS: &[&str] = &[
    "v0.9.0", "v1.0.0", "v1.2.0", "v1.5.0", "v1.9.9", "v2.0.0", "v2.5.0",
];

/// Assert that two ranges agree on every version in `versions`
pub fn assert_same_membership(left: &Range, right: &Range, versions: &[&str]) {
    for version in versions {
        assert_eq!(
            left.contains(version),
            right.contains(version),
            "ranges disagree on {version}: {left} vs {right}"
        );
    }
}
