//! State store interface
//!
//! The contract this crate consumes from the remote key-value store. Every call is scoped to
//! the namespace the client was built for.

use crate::error::ApiError;
use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// A stored value and its expiration as reported by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEntry {
    pub value: String,
    /// Expiration timestamp (ISO-8601, UTC), passed through unchanged
    pub expiration: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PutOptions {
    /// Time to live; the store applies its own default when unset
    pub ttl_seconds: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteAllResult {
    pub deleted_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Glob-like pattern, interpreted by the store
    pub pattern: Option<String>,
    /// Suggested number of keys per page; pages may be shorter or longer
    pub page_size_hint: usize,
}

/// One page of keys, in the order the store yielded them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPage {
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    #[serde(rename = "keys")]
    pub key_count: u64,
    #[serde(rename = "bytesKeys")]
    pub key_bytes: u64,
    #[serde(rename = "bytesValues")]
    pub value_bytes: u64,
}

/// Lazily fetched pages of keys. Each poll performs at most one store round-trip.
pub type KeyPageStream = Pin<Box<dyn Stream<Item = Result<KeyPage, ApiError>> + Send>>;

/// Namespaced key-value store client.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Whether any key is present in the namespace.
    async fn any(&self) -> Result<bool, ApiError>;

    /// Fetch a value; `None` when the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<StateEntry>, ApiError>;

    async fn put(&self, key: &str, value: &str, options: PutOptions) -> Result<(), ApiError>;

    /// Delete one key. Returns whether the key existed.
    async fn delete(&self, key: &str) -> Result<bool, ApiError>;

    /// Delete every key matching `pattern`, server-side.
    async fn delete_all(&self, pattern: &str) -> Result<DeleteAllResult, ApiError>;

    /// Enumerate keys page by page. The stream is single-pass.
    async fn list(&self, options: ListOptions) -> Result<KeyPageStream, ApiError>;

    async fn stats(&self) -> Result<StoreStats, ApiError>;
}
