use serde::Deserialize;

/// Default number of parsed versions kept before the cache is wiped
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// Library configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct VersConfig {
    pub cache: CacheConfig,
}

/// Version parse cache configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CacheConfig {
    pub enabled: bool,
    /// Entries held before the cache clears itself
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}
