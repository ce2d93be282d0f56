use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::signal::application::ports::outgoing::{SlotStore, SlotStoreError};

#[derive(Debug, Clone)]
struct Slot {
    value: String,
    expires_at: Option<Instant>,
}

impl Slot {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |at| now < at)
    }
}

/// Process-local slot store.
///
/// Used when no `REDIS_URL` is configured; slots do not survive restarts.
/// Expired slots read as absent and are dropped on the next write.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlotStore {
    slots: Arc<Mutex<HashMap<String, Slot>>>,
}

impl InMemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.slots.lock().await.len()
    }
}

#[async_trait]
impl SlotStore for InMemorySlotStore {
    async fn put(
        &self,
        key: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> Result<(), SlotStoreError> {
        let now = Instant::now();
        let mut slots = self.slots.lock().await;
        slots.retain(|_, slot| slot.is_live(now));
        slots.insert(
            key.to_string(),
            Slot {
                value: value.to_string(),
                expires_at: ttl.and_then(|ttl| now.checked_add(ttl)),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, SlotStoreError> {
        let now = Instant::now();
        Ok(self
            .slots
            .lock()
            .await
            .get(key)
            .filter(|slot| slot.is_live(now))
            .map(|slot| slot.value.clone()))
    }

    async fn take(&self, key: &str) -> Result<Option<String>, SlotStoreError> {
        let now = Instant::now();
        Ok(self
            .slots
            .lock()
            .await
            .remove(key)
            .filter(|slot| slot.is_live(now))
            .map(|slot| slot.value))
    }

    async fn ping(&self) -> Result<(), SlotStoreError> {
        Ok(())
    }
}
