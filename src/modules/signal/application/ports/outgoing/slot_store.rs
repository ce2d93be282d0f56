use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SlotStoreError {
    #[error("Slot storage error: {0}")]
    StorageError(String),
}

/// Durable single-value slots addressed by string keys.
///
/// `put` overwrites; `take` reads and clears in one step so a value is
/// handed out at most once. A `ttl` of `None` keeps the value until it is
/// overwritten or taken.
#[async_trait]
pub trait SlotStore: Send + Sync {
    async fn put(
        &self,
        key: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> Result<(), SlotStoreError>;

    async fn get(&self, key: &str) -> Result<Option<String>, SlotStoreError>;

    async fn take(&self, key: &str) -> Result<Option<String>, SlotStoreError>;

    /// Connectivity probe used by the readiness endpoint.
    async fn ping(&self) -> Result<(), SlotStoreError>;
}
