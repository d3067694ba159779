//! Algebraic properties checked over sampled versions

mod helper;

use std::cmp::Ordering;

use rstest::rstest;
use vers_range::{Comparator, Parser, Range, Scheme, empty, parse, parse_native, unbounded};

use helper::{GO_VERSIONS, MAVEN_VERSIONS, SAMPLE_VERSIONS, assert_same_membership};

fn samples_for(scheme: &Scheme) -> &'static [&'static str] {
    match scheme {
        Scheme::Maven => MAVEN_VERSIONS,
        Scheme::Go => GO_VERSIONS,
        _ => SAMPLE_VERSIONS,
    }
}

#[rstest]
#[case(Scheme::Generic)]
#[case(Scheme::Npm)]
#[case(Scheme::Maven)]
#[case(Scheme::Nuget)]
#[case(Scheme::Go)]
fn compare_is_reflexive_and_antisymmetric(#[case] scheme: Scheme) {
    let cmp = Comparator::new(scheme.clone());
    let versions = samples_for(&scheme);

    for a in versions {
        assert_eq!(cmp.compare(a, a), Ordering::Equal, "{a}");
        for b in versions {
            assert_eq!(cmp.compare(a, b), cmp.compare(b, a).reverse(), "{a} vs {b}");
        }
    }
}

#[rstest]
#[case(Scheme::Generic)]
#[case(Scheme::Maven)]
#[case(Scheme::Nuget)]
fn compare_agrees_with_sample_order(#[case] scheme: Scheme) {
    let cmp = Comparator::new(scheme.clone());
    let ordered: &[&str] = match scheme {
        Scheme::Maven => &["1.0-alpha-1", "1.0-beta", "1.0-SNAPSHOT", "1.0", "1.0-sp1", "1.0.1"],
        _ => &["0.9.9", "1.0.0-alpha", "1.0.0-rc.1", "1.0.0", "1.0.1", "2.0.0"],
    };

    for pair in ordered.windows(2) {
        assert_eq!(cmp.compare(pair[0], pair[1]), Ordering::Less, "{pair:?}");
    }
}

fn sample_ranges() -> Vec<Range> {
    vec![
        parse("vers:npm/>=1.0.0|<2.0.0").unwrap(),
        parse("vers:npm/>=1.0.0|!=1.5.0").unwrap(),
        parse("vers:npm/!=1.0.0").unwrap(),
        parse_native("^1.2.3 || >=3.0.0 <4.0.0", "npm").unwrap(),
        parse_native("1.0.0 - 2.0.0", "npm").unwrap(),
        parse_native("~> 1.2, != 1.4.0", "gem").unwrap(),
        vers_range::exact("1.2.3"),
        empty(),
        unbounded(),
    ]
}

#[test]
fn union_with_empty_is_identity() {
    for range in sample_ranges() {
        assert_same_membership(&range.union(&empty()), &range, SAMPLE_VERSIONS);
        assert_same_membership(&empty().union(&range), &range, SAMPLE_VERSIONS);
    }
}

#[test]
fn intersect_with_unbounded_is_identity() {
    for range in sample_ranges() {
        assert_same_membership(&range.intersect(&unbounded()), &range, SAMPLE_VERSIONS);
        assert_same_membership(&unbounded().intersect(&range), &range, SAMPLE_VERSIONS);
    }
}

#[test]
fn union_and_intersect_agree_with_membership() {
    let ranges = sample_ranges();
    for a in &ranges {
        for b in &ranges {
            let union = a.union(b);
            let intersection = a.intersect(b);
            for version in SAMPLE_VERSIONS {
                let (in_a, in_b) = (a.contains(version), b.contains(version));
                assert_eq!(intersection.contains(version), in_a && in_b, "{a} & {b} @ {version}");
                if in_a || in_b {
                    // union keeps only shared exclusions, so it may admit more
                    assert!(union.contains(version), "{a} | {b} @ {version}");
                }
            }
        }
    }
}

#[rstest]
#[case("^1.2.3", Scheme::Npm)]
#[case("~1.2.3", Scheme::Npm)]
#[case("~1.2.3-beta.1", Scheme::Npm)]
#[case("1.x || >=3.0.0 <3.5.0", Scheme::Npm)]
#[case("<1.0.0 || >=2.0.0 <3.0.0 || >=4.0.0", Scheme::Npm)]
#[case("1.0.0 - 2.0.0", Scheme::Npm)]
#[case("1.0.0 || 2.0.0", Scheme::Npm)]
#[case(">2.0.0 <3.0.0 || >1.0.0 <2.0.0", Scheme::Npm)]
#[case("~1.0.0 || ~3", Scheme::Npm)]
#[case("*", Scheme::Npm)]
#[case(">=1.0, <2.0", Scheme::Cargo)]
#[case("^0.2", Scheme::Cargo)]
#[case("~> 1.2, != 1.4.0", Scheme::Gem)]
#[case("~> 1.2.3", Scheme::Gem)]
#[case(">=1.0,<2.0,!=1.5.0", Scheme::Pypi)]
#[case("==1.4.*", Scheme::Pypi)]
#[case("~=1.4.2", Scheme::Pypi)]
#[case("[1.0,2.0),[3.0,)", Scheme::Maven)]
#[case("(,1.0],[1.2,)", Scheme::Maven)]
#[case("1.0", Scheme::Maven)]
#[case("[1.0]", Scheme::Nuget)]
#[case(">=v1.0.0, <v2.0.0", Scheme::Go)]
#[case(">> 1.0, << 2.0", Scheme::Debian)]
#[case(">= 1.0, != 1.5.0", Scheme::Rpm)]
#[case("!=1.0.0|!=2.0.0", Scheme::Other("conan".into()))]
fn native_to_vers_round_trip(#[case] constraint: &str, #[case] scheme: Scheme) {
    let parser = Parser::new();
    let native = parser.parse_native(constraint, &scheme).unwrap();

    let uri = parser.to_vers_string(&native, &scheme);
    let reparsed = parser.parse(&uri).unwrap();

    assert_eq!(reparsed.scheme(), &scheme, "{uri}");
    assert_same_membership(&native, &reparsed, samples_for(&scheme));
}

#[test]
fn clause_order_is_significant_in_vers_uris() {
    // a lower bound only pairs with the upper bound immediately after it
    let paired = parse("vers:npm/>=1.0.0|<2.0.0|>=3.0.0").unwrap();
    let reordered = parse("vers:npm/>=1.0.0|>=3.0.0|<2.0.0").unwrap();

    assert!(!paired.contains("2.5.0"));
    assert!(reordered.contains("2.5.0"));
    assert!(reordered.is_unbounded());
}

#[test]
fn upper_then_lower_pair_intersects_when_overlapping() {
    let range = parse("vers:npm/<2.0.0|>=1.0.0").unwrap();

    assert!(range.contains("1.5.0"));
    assert!(!range.contains("0.5.0"));
    assert!(!range.contains("2.5.0"));
}
