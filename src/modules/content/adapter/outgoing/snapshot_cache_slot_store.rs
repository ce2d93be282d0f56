use async_trait::async_trait;
use std::sync::Arc;

use crate::content::application::ports::outgoing::{SnapshotCache, SnapshotCacheError};
use crate::signal::application::ports::outgoing::SlotStore;

/// Snapshot cache sharing the selection slot store.
///
/// Keys are namespaced under `snapshot:` and written without a TTL.
#[derive(Clone)]
pub struct SlotStoreSnapshotCache {
    store: Arc<dyn SlotStore + Send + Sync>,
}

impl SlotStoreSnapshotCache {
    pub fn new(store: Arc<dyn SlotStore + Send + Sync>) -> Self {
        Self { store }
    }

    fn key(name: &str) -> String {
        format!("snapshot:{name}")
    }
}

#[async_trait]
impl SnapshotCache for SlotStoreSnapshotCache {
    async fn load(&self, key: &str) -> Result<Option<String>, SnapshotCacheError> {
        self.store
            .get(&Self::key(key))
            .await
            .map_err(|e| SnapshotCacheError::StorageError(e.to_string()))
    }

    async fn store(&self, key: &str, blob: String) -> Result<(), SnapshotCacheError> {
        self.store
            .put(&Self::key(key), &blob, None)
            .await
            .map_err(|e| SnapshotCacheError::StorageError(e.to_string()))
    }
}
