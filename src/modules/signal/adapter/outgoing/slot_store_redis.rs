use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use std::time::Duration;

use crate::signal::application::ports::outgoing::{SlotStore, SlotStoreError};

/// Redis-backed slot store.
///
/// ## Redis data model
/// ```text
/// signal:{channel_key}:{visitor}  -> "<value>"   (selection slots)
/// snapshot:{cache_key}            -> "<json>"    (page snapshots)
/// ```
///
/// Keys written with a TTL expire on their own; snapshots are written
/// without one. `take` uses `GETDEL`, so a slot is handed out at most once
/// even when several instances share the same Redis. Only the store is
/// shared: live stream subscribers are woken by an in-process broadcast, so
/// a subscriber on another instance only gets the value through a later
/// pending-selection read.
#[derive(Clone)]
pub struct RedisSlotStore {
    pool: Arc<Pool>,
}

impl RedisSlotStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SlotStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| SlotStoreError::StorageError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl SlotStore for RedisSlotStore {
    /// ```text
    /// SET {key} {value} [EX {ttl}]
    /// ```
    async fn put(
        &self,
        key: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> Result<(), SlotStoreError> {
        let mut conn = self.get_conn().await?;

        let result = match ttl {
            Some(ttl) => conn.set_ex::<_, _, ()>(key, value, ttl.as_secs().max(1)).await,
            None => conn.set::<_, _, ()>(key, value).await,
        };

        result.map_err(|e| SlotStoreError::StorageError(e.to_string()))
    }

    async fn get(&self, key: &str) -> Result<Option<String>, SlotStoreError> {
        let mut conn = self.get_conn().await?;

        conn.get(key)
            .await
            .map_err(|e| SlotStoreError::StorageError(e.to_string()))
    }

    /// ```text
    /// GETDEL {key}
    /// ```
    async fn take(&self, key: &str) -> Result<Option<String>, SlotStoreError> {
        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::cmd("GETDEL")
            .arg(key)
            .query_async::<Option<String>>(&mut *conn)
            .await
            .map_err(|e| SlotStoreError::StorageError(e.to_string()))
    }

    async fn ping(&self) -> Result<(), SlotStoreError> {
        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
            .map(|_| ())
            .map_err(|e| SlotStoreError::StorageError(e.to_string()))
    }
}
