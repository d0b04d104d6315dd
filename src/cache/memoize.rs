//! Memoize Module
//!
//! Wraps an expensive async lookup so its results are served from an
//! `EncodedCache` until they expire.

use std::future::Future;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::cache::{EncodedCache, SharedCache};

// == Get Or Fetch ==
/// Returns the cached value under `key`, or runs `fetch` and caches its result.
///
/// The cache lock is released while `fetch` runs. A failed fetch caches
/// nothing and its error is returned unchanged.
pub async fn get_or_fetch<T, F, Fut>(
    cache: &SharedCache<EncodedCache>,
    key: &str,
    ttl_seconds: Option<i64>,
    fetch: F,
) -> anyhow::Result<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    if let Some(hit) = cache.write().await.get::<T>(key)? {
        debug!(key, "memoized hit");
        return Ok(hit);
    }

    let value = fetch().await?;
    cache.write().await.set(key, &value, ttl_seconds)?;
    Ok(value)
}

// == Memoized ==
/// A lookup bound to a cache, a key-derivation function and a TTL.
///
/// ```ignore
/// let product_by_id = Memoized::new(
///     registry.products().clone(),
///     |id: &u32| format!("product:{}", id),
///     Some(3600),
///     |id| async move { db.load_product(id).await },
/// );
/// let product = product_by_id.call(42).await?;
/// ```
pub struct Memoized<K, Op> {
    cache: SharedCache<EncodedCache>,
    key_fn: K,
    ttl_seconds: Option<i64>,
    op: Op,
}

impl<K, Op> Memoized<K, Op> {
    pub fn new(cache: SharedCache<EncodedCache>, key_fn: K, ttl_seconds: Option<i64>, op: Op) -> Self {
        Self {
            cache,
            key_fn,
            ttl_seconds,
            op,
        }
    }

    /// Runs the memoized lookup for `args`.
    pub async fn call<A, T, Fut>(&self, args: A) -> anyhow::Result<T>
    where
        K: Fn(&A) -> String,
        Op: Fn(A) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
        T: Serialize + DeserializeOwned,
    {
        let key = (self.key_fn)(&args);
        get_or_fetch(&self.cache, &key, self.ttl_seconds, || (self.op)(args)).await
    }

    /// Drops the cached result for `args`, returning whether one existed.
    pub async fn invalidate<A>(&self, args: &A) -> bool
    where
        K: Fn(&A) -> String,
    {
        let key = (self.key_fn)(args);
        self.cache.write().await.delete(&key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    fn shared_cache(clock: &ManualClock) -> SharedCache<EncodedCache> {
        let cache = EncodedCache::with_clock(10, 60, Arc::new(clock.clone())).unwrap();
        Arc::new(RwLock::new(cache))
    }

    #[tokio::test]
    async fn test_get_or_fetch_runs_once() {
        let clock = ManualClock::new(0);
        let cache = shared_cache(&clock);
        let calls = AtomicUsize::new(0);
        let calls = &calls;

        for _ in 0..3 {
            let value: String = get_or_fetch(&cache, "greeting", None, || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("hello".to_string())
            })
            .await
            .unwrap();
            assert_eq!(value, "hello");
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let stats = cache.read().await.stats();
        assert_eq!(stats.hit_count, 2);
        assert_eq!(stats.miss_count, 1);
    }

    #[tokio::test]
    async fn test_get_or_fetch_refetches_after_ttl() {
        let clock = ManualClock::new(0);
        let cache = shared_cache(&clock);
        let calls = AtomicUsize::new(0);
        let calls = &calls;

        let fetch = || async move { Ok::<_, anyhow::Error>(calls.fetch_add(1, Ordering::SeqCst)) };

        assert_eq!(get_or_fetch(&cache, "n", Some(5), fetch).await.unwrap(), 0);
        assert_eq!(get_or_fetch(&cache, "n", Some(5), fetch).await.unwrap(), 0);

        clock.advance_secs(5);

        assert_eq!(get_or_fetch(&cache, "n", Some(5), fetch).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let clock = ManualClock::new(0);
        let cache = shared_cache(&clock);

        let result: anyhow::Result<u32> =
            get_or_fetch(&cache, "k", None, || async { Err(anyhow::anyhow!("database down")) }).await;

        assert_eq!(result.unwrap_err().to_string(), "database down");
        assert!(!cache.write().await.has("k"));
    }

    #[tokio::test]
    async fn test_memoized_keys_by_argument() {
        let clock = ManualClock::new(0);
        let cache = shared_cache(&clock);
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        let price_of = Memoized::new(
            cache.clone(),
            |id: &u32| format!("price:{}", id),
            None,
            move |id: u32| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, anyhow::Error>(id as u64 * 100)
                }
            },
        );

        assert_eq!(price_of.call(1).await.unwrap(), 100);
        assert_eq!(price_of.call(2).await.unwrap(), 200);
        assert_eq!(price_of.call(1).await.unwrap(), 100);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        assert!(price_of.invalidate(&1).await);
        assert_eq!(price_of.call(1).await.unwrap(), 100);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(cache.write().await.has("price:2"));
    }
}
