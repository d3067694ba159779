//! Scheme-aware version ordering

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::version::cache::VersionCache;
use crate::version::error::VersError;
use crate::version::maven::compare_maven;
use crate::version::nuget::compare_nuget;
use crate::version::scheme::Scheme;
use crate::version::semver::Version;

/// Orders version strings under one scheme, optionally memoizing parses.
///
/// The cache only saves work: every comparison gives the same answer with or
/// without one.
#[derive(Clone, Default)]
pub struct Comparator {
    scheme: Scheme,
    cache: Option<Arc<dyn VersionCache>>,
}

impl Comparator {
    pub fn new(scheme: Scheme) -> Self {
        Self {
            scheme,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn VersionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Parse a version with the generic rules, consulting the cache first
    pub fn parse(&self, s: &str) -> Result<Arc<Version>, VersError> {
        let Some(cache) = &self.cache else {
            return Version::parse(s).map(Arc::new);
        };

        if let Some(cached) = cache.get(s) {
            return Ok(cached);
        }
        let version = Arc::new(Version::parse(s)?);
        cache.put(s, Arc::clone(&version));
        Ok(version)
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        if a.is_empty() {
            return Ordering::Less;
        }
        if b.is_empty() {
            return Ordering::Greater;
        }

        match self.scheme {
            Scheme::Maven => compare_maven(a, b),
            Scheme::Nuget => compare_nuget(a, b),
            Scheme::Go => self.compare_generic(strip_v_prefix(a), strip_v_prefix(b)),
            _ => self.compare_generic(a, b),
        }
    }

    pub fn equals(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Unparseable versions sort below parseable ones and among themselves
    /// by plain string order.
    fn compare_generic(&self, a: &str, b: &str) -> Ordering {
        match (self.parse(a), self.parse(b)) {
            (Ok(a), Ok(b)) => a.compare(&b),
            (Ok(_), Err(_)) => Ordering::Greater,
            (Err(_), Ok(_)) => Ordering::Less,
            (Err(_), Err(_)) => a.cmp(b),
        }
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("scheme", &self.scheme)
            .field("cached", &self.cache.is_some())
            .finish()
    }
}

/// Removes a leading `v` or `V` from a version string
pub fn strip_v_prefix(version: &str) -> &str {
    match version.as_bytes() {
        [b'v' | b'V', _, ..] => &version[1..],
        _ => version,
    }
}
