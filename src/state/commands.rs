use crate::error::ApiError;
use crate::state::store::{PutOptions, StateEntry, StateStore, StoreStats};
use chrono::{DateTime, Duration, Utc};

/// TTL applied by the store when none is given: 24 hours.
pub const DEFAULT_TTL_SECONDS: u64 = 60 * 60 * 24;

pub struct StateCommandService;

/// Result of put command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutResult {
    pub key: String,
    pub bytes_value: usize,
    /// Client-side estimate for display; the store owns the real expiry
    pub expiration: DateTime<Utc>,
}

impl StateCommandService {
    pub async fn get(store: &dyn StateStore, key: &str) -> Result<StateEntry, ApiError> {
        store
            .get(key)
            .await?
            .ok_or_else(|| ApiError::NotFound("key does not exist".to_string()))
    }

    pub async fn put(
        store: &dyn StateStore,
        key: &str,
        value: &str,
        ttl_seconds: Option<u64>,
    ) -> Result<PutResult, ApiError> {
        Self::put_at(store, key, value, ttl_seconds, Utc::now()).await
    }

    /// Put with an explicit clock reading for the expiration estimate.
    pub async fn put_at(
        store: &dyn StateStore,
        key: &str,
        value: &str,
        ttl_seconds: Option<u64>,
        now: DateTime<Utc>,
    ) -> Result<PutResult, ApiError> {
        // a zero ttl is left to the store; the estimate falls back to the default
        let ttl = ttl_seconds
            .filter(|ttl| *ttl != 0)
            .unwrap_or(DEFAULT_TTL_SECONDS);
        let expiration = i64::try_from(ttl)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| ApiError::InvalidUsage(format!("ttl out of range: {}", ttl)))?;

        store.put(key, value, PutOptions { ttl_seconds }).await?;

        Ok(PutResult {
            key: key.to_string(),
            bytes_value: value.len(),
            expiration,
        })
    }

    pub async fn stats(store: &dyn StateStore) -> Result<StoreStats, ApiError> {
        store.stats().await
    }
}
