//! Encoded Cache Module
//!
//! Serialization layer over `Cache<String>`: values go in as any
//! `Serialize` type and are stored as JSON text.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::cache::{Cache, CacheStats, Clock};
use crate::error::{CacheError, Result};

// == Encoded Cache ==
/// Cache whose values are stored in JSON transport form.
///
/// Encoding happens before the inner cache is touched, so a value that
/// cannot be encoded never replaces what is already stored.
#[derive(Debug)]
pub struct EncodedCache {
    inner: Cache<String>,
}

impl EncodedCache {
    // == Constructor ==
    pub fn new(max_size: usize, default_ttl: i64) -> Result<Self> {
        Ok(Self {
            inner: Cache::new(max_size, default_ttl)?,
        })
    }

    pub fn with_clock(max_size: usize, default_ttl: i64, clock: Arc<dyn Clock>) -> Result<Self> {
        Ok(Self {
            inner: Cache::with_clock(max_size, default_ttl, clock)?,
        })
    }

    /// Sets the name reported in logs.
    pub fn named(self, name: impl Into<String>) -> Self {
        Self {
            inner: self.inner.named(name),
        }
    }

    // == Set ==
    /// Encodes and stores a value.
    ///
    /// # Errors
    /// `Encode` if `value` cannot be serialized; nothing is stored.
    pub fn set<T>(&mut self, key: impl Into<String>, value: &T, ttl_seconds: Option<i64>) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let key = key.into();
        let encoded = serde_json::to_string(value).map_err(|source| CacheError::Encode {
            key: key.clone(),
            source,
        })?;

        self.inner.set(key, encoded, ttl_seconds);
        Ok(())
    }

    // == Get ==
    /// Retrieves and decodes a value.
    ///
    /// Hit/miss accounting is the inner cache's; a decode failure still
    /// counts as a hit because the entry was live.
    ///
    /// # Errors
    /// `Decode` if the stored text does not decode into `T`.
    pub fn get<T>(&mut self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.inner.get(key) {
            Some(encoded) => serde_json::from_str(&encoded)
                .map(Some)
                .map_err(|source| CacheError::Decode {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    // == Delegates ==
    pub fn has(&mut self, key: &str) -> bool {
        self.inner.has(key)
    }

    pub fn delete(&mut self, key: &str) -> bool {
        self.inner.delete(key)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.stats()
    }

    pub fn cleanup_expired(&mut self) -> usize {
        self.inner.cleanup_expired()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Borrows the underlying string cache.
    pub fn raw(&self) -> &Cache<String> {
        &self.inner
    }
}
