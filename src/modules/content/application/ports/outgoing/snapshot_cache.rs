use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SnapshotCacheError {
    #[error("Snapshot storage error: {0}")]
    StorageError(String),
}

/// Last-known-good copies of page data, stored as opaque JSON blobs.
///
/// Values are overwritten on every successful load and never expire.
#[async_trait]
pub trait SnapshotCache: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>, SnapshotCacheError>;

    async fn store(&self, key: &str, blob: String) -> Result<(), SnapshotCacheError>;
}
