use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::config::DEFAULT_CACHE_CAPACITY;
use crate::version::semver::Version;

/// Store for parsed versions, keyed by their input text
#[cfg_attr(test, automock)]
pub trait VersionCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Arc<Version>>;

    fn put(&self, key: &str, version: Arc<Version>);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&self);
}

/// In-memory cache that wipes itself once it reaches capacity
pub struct BoundedCache {
    items: RwLock<HashMap<String, Arc<Version>>>,
    capacity: usize,
}

impl BoundedCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for BoundedCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl VersionCache for BoundedCache {
    fn get(&self, key: &str) -> Option<Arc<Version>> {
        // A poisoned lock only means a writer panicked; the map is still usable
        let items = self.items.read().unwrap_or_else(|e| e.into_inner());
        items.get(key).cloned()
    }

    fn put(&self, key: &str, version: Arc<Version>) {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        if items.len() >= self.capacity && !items.contains_key(key) {
            debug!("Version cache reached {} entries, clearing", self.capacity);
            items.clear();
        }
        items.insert(key.to_string(), version);
    }

    fn len(&self) -> usize {
        self.items.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn clear(&self) {
        self.items
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}
