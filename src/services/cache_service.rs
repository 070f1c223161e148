use crate::adapters::redis;
use crate::config::CacheConfig;
use crate::error::{AppError, Result};
use ::redis::AsyncCommands;

/// Fixed expiry for every cache write.
pub const CACHE_TTL_SECS: u64 = 3600;

/// Proxies key/value reads and writes to Redis over request-scoped
/// connections.
#[derive(Clone, Debug)]
pub struct CacheService {
    cache: CacheConfig,
}

impl CacheService {
    #[must_use]
    pub const fn new(cache: CacheConfig) -> Self {
        Self { cache }
    }

    /// Looks up a key.
    ///
    /// # Errors
    /// Returns `AppError::NotFound` if the key is absent and
    /// `AppError::Unavailable` if Redis cannot be reached.
    pub async fn get(&self, key: &str) -> Result<String> {
        let mut conn = redis::connect(&self.cache).await?;
        let value: Option<String> =
            conn.get(key).await.map_err(|e| AppError::operation("Failed to get cache value", e))?;
        value.ok_or(AppError::NotFound)
    }

    /// Stores a value under a key with the fixed one-hour expiry. Existing
    /// values are overwritten unconditionally.
    ///
    /// # Errors
    /// Returns `AppError::Unavailable` if Redis cannot be reached.
    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = redis::connect(&self.cache).await?;
        let _: () = conn
            .set_ex(key, value, CACHE_TTL_SECS)
            .await
            .map_err(|e| AppError::operation("Failed to set cache value", e))?;
        Ok(())
    }
}
