//! Cache Registry Module
//!
//! Named, independently configured cache instances for the storefront's
//! data domains, plus process-wide clear and stats operations over them.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::cache::{Cache, CacheStats, Clock, EncodedCache};
use crate::config::{CacheConfig, Config};
use crate::error::{CacheError, Result};

/// Cache handle shared across request handlers.
pub type SharedCache<C> = Arc<RwLock<C>>;

/// Memoized API responses.
pub const API_CACHE: &str = "api";
/// Product lookups.
pub const PRODUCT_CACHE: &str = "products";
/// Session records.
pub const SESSION_CACHE: &str = "sessions";

// == Cache Control ==
/// Value-type-agnostic operations the registry runs over every instance.
pub trait CacheControl {
    fn clear(&mut self);
    fn stats(&self) -> CacheStats;
    fn cleanup_expired(&mut self) -> usize;
    /// Deletes one key, returning whether it was present.
    fn invalidate(&mut self, key: &str) -> bool;
}

impl<V> CacheControl for Cache<V> {
    fn clear(&mut self) {
        Cache::clear(self);
    }

    fn stats(&self) -> CacheStats {
        Cache::stats(self)
    }

    fn cleanup_expired(&mut self) -> usize {
        Cache::cleanup_expired(self)
    }

    fn invalidate(&mut self, key: &str) -> bool {
        self.delete(key)
    }
}

impl CacheControl for EncodedCache {
    fn clear(&mut self) {
        EncodedCache::clear(self);
    }

    fn stats(&self) -> CacheStats {
        EncodedCache::stats(self)
    }

    fn cleanup_expired(&mut self) -> usize {
        EncodedCache::cleanup_expired(self)
    }

    fn invalidate(&mut self, key: &str) -> bool {
        self.delete(key)
    }
}

// == Instance ==
/// One registered cache, whatever its value representation.
#[derive(Debug, Clone)]
enum Instance {
    Encoded(SharedCache<EncodedCache>),
    Raw(SharedCache<Cache<String>>),
}

impl Instance {
    async fn write<R>(&self, f: impl FnOnce(&mut dyn CacheControl) -> R) -> R {
        match self {
            Instance::Encoded(cache) => {
                let mut guard = cache.write().await;
                f(&mut *guard)
            }
            Instance::Raw(cache) => {
                let mut guard = cache.write().await;
                f(&mut *guard)
            }
        }
    }

    async fn read<R>(&self, f: impl FnOnce(&dyn CacheControl) -> R) -> R {
        match self {
            Instance::Encoded(cache) => {
                let guard = cache.read().await;
                f(&*guard)
            }
            Instance::Raw(cache) => {
                let guard = cache.read().await;
                f(&*guard)
            }
        }
    }
}

// == Cache Registry ==
/// The process's named cache instances.
///
/// Instances share no state; each enforces its own capacity and TTL.
/// Cloning the registry clones handles, not caches.
#[derive(Debug, Clone)]
pub struct CacheRegistry {
    api: SharedCache<EncodedCache>,
    products: SharedCache<EncodedCache>,
    sessions: SharedCache<Cache<String>>,
}

impl CacheRegistry {
    // == Constructor ==
    /// Builds every named instance from configuration.
    ///
    /// # Errors
    /// `InvalidConfig` naming the first instance with a bad capacity or TTL.
    pub fn from_config(config: &Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let api = encoded(API_CACHE, &config.api_cache, clock.clone())?;
        let products = encoded(PRODUCT_CACHE, &config.product_cache, clock.clone())?;
        let sessions = Cache::with_clock(
            config.session_cache.max_entries,
            config.session_cache.default_ttl,
            clock,
        )
        .map_err(|err| scoped(SESSION_CACHE, err))?
        .named(SESSION_CACHE);

        info!(
            api = ?config.api_cache,
            products = ?config.product_cache,
            sessions = ?config.session_cache,
            "cache registry initialized"
        );

        Ok(Self {
            api: Arc::new(RwLock::new(api)),
            products: Arc::new(RwLock::new(products)),
            sessions: Arc::new(RwLock::new(sessions)),
        })
    }

    // == Accessors ==
    pub fn api(&self) -> &SharedCache<EncodedCache> {
        &self.api
    }

    pub fn products(&self) -> &SharedCache<EncodedCache> {
        &self.products
    }

    pub fn sessions(&self) -> &SharedCache<Cache<String>> {
        &self.sessions
    }

    /// Names of every registered instance.
    pub fn names(&self) -> [&'static str; 3] {
        [API_CACHE, PRODUCT_CACHE, SESSION_CACHE]
    }

    // == Clear All ==
    /// Clears every instance, entries and counters alike.
    pub async fn clear_all(&self) {
        for (_, instance) in self.instances() {
            instance.write(|cache| cache.clear()).await;
        }
        info!("cleared all caches");
    }

    // == Clear ==
    /// Clears one instance by name.
    pub async fn clear(&self, name: &str) -> Result<()> {
        self.instance(name)?.write(|cache| cache.clear()).await;
        info!(cache = name, "cleared cache");
        Ok(())
    }

    // == Stats ==
    /// Returns every instance's stats under its name.
    pub async fn stats(&self) -> BTreeMap<String, CacheStats> {
        let mut report = BTreeMap::new();
        for (name, instance) in self.instances() {
            let stats = instance.read(|cache| cache.stats()).await;
            report.insert(name.to_string(), stats);
        }
        report
    }

    /// Returns one instance's stats.
    pub async fn stats_for(&self, name: &str) -> Result<CacheStats> {
        Ok(self.instance(name)?.read(|cache| cache.stats()).await)
    }

    // == Invalidate ==
    /// Deletes one key from one instance, returning whether it was present.
    pub async fn invalidate(&self, name: &str, key: &str) -> Result<bool> {
        Ok(self
            .instance(name)?
            .write(|cache| cache.invalidate(key))
            .await)
    }

    // == Cleanup All ==
    /// Sweeps expired entries from every instance.
    ///
    /// Returns the total number of entries removed.
    pub async fn cleanup_all(&self) -> usize {
        let mut removed = 0;
        for (_, instance) in self.instances() {
            removed += instance.write(|cache| cache.cleanup_expired()).await;
        }
        removed
    }

    fn instances(&self) -> [(&'static str, Instance); 3] {
        [
            (API_CACHE, Instance::Encoded(self.api.clone())),
            (PRODUCT_CACHE, Instance::Encoded(self.products.clone())),
            (SESSION_CACHE, Instance::Raw(self.sessions.clone())),
        ]
    }

    fn instance(&self, name: &str) -> Result<Instance> {
        self.instances()
            .into_iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, instance)| instance)
            .ok_or_else(|| CacheError::UnknownCache(name.to_string()))
    }
}

fn encoded(name: &str, config: &CacheConfig, clock: Arc<dyn Clock>) -> Result<EncodedCache> {
    EncodedCache::with_clock(config.max_entries, config.default_ttl, clock)
        .map(|cache| cache.named(name))
        .map_err(|err| scoped(name, err))
}

fn scoped(name: &str, err: CacheError) -> CacheError {
    match err {
        CacheError::InvalidConfig(msg) => CacheError::InvalidConfig(format!("{}: {}", name, msg)),
        other => other,
    }
}
