//! Parser layer
//! - constraint.rs: single operator + version clauses
//! - generic.rs: `|`-separated clause lists with lower/upper pairing
//! - vers_uri.rs: `vers:` URI parsing and rendering
//! - traits.rs: NativeGrammar trait definition
//! - grammars/: npm, cargo, gem, pypi, maven, nuget, go, deb, rpm

pub mod constraint;
pub mod generic;
pub mod grammars;
pub mod traits;
pub mod vers_uri;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::VersConfig;
use crate::range::version_range::Range;
use crate::version::cache::{BoundedCache, VersionCache};
use crate::version::comparator::Comparator;
use crate::version::error::VersError;
use crate::version::scheme::Scheme;

pub use constraint::{Constraint, Operator};
pub use grammars::grammar_for;
pub use traits::NativeGrammar;

/// Entry point for vers URIs and native ecosystem syntax
///
/// Holds the optional version cache shared by every range it produces and
/// any grammars registered on top of the built-in ones.
#[derive(Clone, Default)]
pub struct Parser {
    cache: Option<Arc<dyn VersionCache>>,
    grammars: HashMap<Scheme, Arc<dyn NativeGrammar>>,
}

impl Parser {
    /// Parser without a cache
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(mut self, cache: Arc<dyn VersionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn from_config(config: &VersConfig) -> Self {
        let parser = Self::new();
        if !config.cache.enabled {
            return parser;
        }
        parser.with_cache(Arc::new(BoundedCache::new(config.cache.capacity)))
    }

    /// Use `grammar` instead of the built-in one for `scheme`
    pub fn with_grammar(mut self, scheme: Scheme, grammar: Arc<dyn NativeGrammar>) -> Self {
        self.grammars.insert(scheme, grammar);
        self
    }

    /// Comparator for `scheme`, sharing this parser's cache
    pub fn comparator(&self, scheme: Scheme) -> Comparator {
        let comparator = Comparator::new(scheme);
        match &self.cache {
            Some(cache) => comparator.with_cache(Arc::clone(cache)),
            None => comparator,
        }
    }

    /// Parse a `vers:<scheme>/<constraints>` URI
    pub fn parse(&self, uri: &str) -> Result<Range, VersError> {
        vers_uri::parse(uri, |scheme| self.comparator(scheme)).inspect_err(|e| {
            warn!("Failed to parse vers URI {uri:?}: {e}");
        })
    }

    /// Parse native range syntax of `scheme`
    pub fn parse_native(&self, constraint: &str, scheme: &Scheme) -> Result<Range, VersError> {
        let comparator = self.comparator(scheme.clone());

        let result = match self.grammars.get(scheme) {
            Some(grammar) => {
                debug!("Using registered grammar for {scheme}");
                grammar.parse(constraint, &comparator)
            }
            None => {
                if let Scheme::Other(name) = scheme {
                    debug!("Unrecognized scheme {name:?}, using generic grammar");
                }
                grammar_for(scheme).parse(constraint, &comparator)
            }
        };

        result.inspect_err(|e| {
            warn!("Failed to parse {scheme} constraint {constraint:?}: {e}");
        })
    }

    pub fn to_vers_string(&self, range: &Range, scheme: &Scheme) -> String {
        vers_uri::to_vers_string(range, scheme)
    }

    pub fn compare(&self, a: &str, b: &str, scheme: &Scheme) -> Ordering {
        self.comparator(scheme.clone()).compare(a, b)
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("cached", &self.cache.is_some())
            .field("grammars", &self.grammars.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CacheConfig;
    use crate::range::interval::Interval;
    use crate::version::cache::MockVersionCache;
    use crate::version::semver::Version;
    use rstest::rstest;
    use traits::MockNativeGrammar;

    #[rstest]
    #[case("vers:npm/>=1.0.0|<2.0.0", "1.5.0", true)]
    #[case("vers:npm/>=1.0.0|<2.0.0", "2.0.0", false)]
    #[case("vers:npm/=1.0.0", "1.0.1", false)]
    #[case("vers:gem/>=1.0.0", "1.5.0", true)]
    #[case("vers:maven/>=1.0.0", "1.5.0", true)]
    #[case("vers:npm/*", "999.0.0", true)]
    fn parse_vers_uri(#[case] uri: &str, #[case] version: &str, #[case] expected: bool) {
        let range = Parser::new().parse(uri).unwrap();

        assert_eq!(range.contains(version), expected);
    }

    #[rstest]
    #[case("invalid")]
    #[case("vers:/>=1.0.0")]
    fn parse_rejects_invalid_uri(#[case] uri: &str) {
        assert!(matches!(
            Parser::new().parse(uri),
            Err(VersError::InvalidUri(_))
        ));
    }

    #[rstest]
    #[case("^1.2.3", Scheme::Npm, "1.9.0", true)]
    #[case("^1.2.3", Scheme::Cargo, "2.0.0", false)]
    #[case("~> 1.2", Scheme::Gem, "1.5.0", true)]
    #[case("~=1.4.2", Scheme::Pypi, "1.5.0", false)]
    #[case("[1.0,2.0)", Scheme::Maven, "2.0", false)]
    #[case("[1.0,2.0]", Scheme::Nuget, "1.5", true)]
    #[case(">=v1.0.0,<v2.0.0", Scheme::Go, "v1.5.0", true)]
    #[case(">> 1.0", Scheme::Debian, "1.0", false)]
    #[case("<= 2.0", Scheme::Rpm, "2.0", true)]
    #[case(">=1.0|<2.0", Scheme::Other("custom".into()), "1.5", true)]
    fn parse_native_dispatches_by_scheme(
        #[case] constraint: &str,
        #[case] scheme: Scheme,
        #[case] version: &str,
        #[case] expected: bool,
    ) {
        let range = Parser::new().parse_native(constraint, &scheme).unwrap();

        assert_eq!(range.scheme(), &scheme);
        assert_eq!(range.contains(version), expected);
    }

    #[test]
    fn parse_native_prefers_registered_grammar() {
        let mut grammar = MockNativeGrammar::new();
        grammar
            .expect_parse()
            .withf(|input, comparator| input == "latest" && comparator.scheme() == &Scheme::Npm)
            .times(1)
            .returning(|_, comparator| Ok(Range::unbounded(comparator.clone())));

        let parser = Parser::new().with_grammar(Scheme::Npm, Arc::new(grammar));

        assert!(parser.parse_native("latest", &Scheme::Npm).unwrap().is_unbounded());
    }

    #[test]
    fn parse_native_propagates_grammar_errors() {
        let mut grammar = MockNativeGrammar::new();
        grammar
            .expect_parse()
            .returning(|input, _| Err(VersError::InvalidConstraint(input.to_string())));

        let parser = Parser::new().with_grammar(Scheme::Gem, Arc::new(grammar));

        assert_eq!(
            parser.parse_native("~> nope", &Scheme::Gem),
            Err(VersError::InvalidConstraint("~> nope".to_string()))
        );
    }

    #[test]
    fn ranges_share_parser_cache() {
        let mut cache = MockVersionCache::new();
        cache
            .expect_get()
            .returning(|key| Version::parse(key).ok().map(Arc::new));
        cache.expect_put().never();

        let parser = Parser::new().with_cache(Arc::new(cache));
        let range = parser.parse("vers:npm/>=1.0.0|<2.0.0").unwrap();

        assert!(range.contains("1.5.0"));
    }

    #[test]
    fn from_config_respects_disabled_cache() {
        let config = VersConfig {
            cache: CacheConfig {
                enabled: false,
                capacity: 10,
            },
        };

        let parser = Parser::from_config(&config);

        assert!(parser.cache.is_none());
    }

    #[test]
    fn from_config_builds_bounded_cache() {
        let parser = Parser::from_config(&VersConfig::default());

        let range = parser.parse_native("^1.0.0", &Scheme::Npm).unwrap();
        assert!(range.contains("1.2.0"));
        assert!(parser.cache.as_ref().is_some_and(|c| !c.is_empty()));
    }

    #[test]
    fn to_vers_string_round_trips() {
        let parser = Parser::new();
        let range = parser.parse_native("^1.2.3", &Scheme::Npm).unwrap();

        let uri = parser.to_vers_string(&range, &Scheme::Npm);

        assert_eq!(uri, "vers:npm/>=1.2.3|<2.0.0");
        assert_eq!(
            parser.parse(&uri).unwrap().intervals(),
            &[Interval::half_open("1.2.3", "2.0.0")]
        );
    }

    #[rstest]
    #[case("1.0-alpha", "1.0", Scheme::Maven, Ordering::Less)]
    #[case("1.0.0-Beta", "1.0.0-beta", Scheme::Nuget, Ordering::Equal)]
    #[case("1.2.3", "1.2.4", Scheme::Npm, Ordering::Less)]
    fn compare_uses_scheme_ordering(
        #[case] a: &str,
        #[case] b: &str,
        #[case] scheme: Scheme,
        #[case] expected: Ordering,
    ) {
        assert_eq!(Parser::new().compare(a, b, &scheme), expected);
    }
}
