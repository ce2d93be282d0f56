use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::{info, warn};

use crate::signal::application::{
    domain::entities::{
        normalize_selection, QueueOutcome, SelectionNotice, SignalChannel, SlotKey, VisitorId,
    },
    ports::incoming::use_cases::{
        QueueSelectionError, QueueSelectionUseCase, SelectionSubscription,
        SubscribeSelectionUseCase, TakePendingSelectionError, TakePendingSelectionUseCase,
    },
    ports::outgoing::SlotStore,
};

/// Notices buffered per subscriber before it starts lagging.
pub const NOTICE_CAPACITY: usize = 64;

/// Unclaimed selections are dropped after a day.
pub const SLOT_TTL: Duration = Duration::from_secs(60 * 60 * 24);

/// Single-slot mailbox per (visitor, channel).
///
/// The slot itself lives in the [`SlotStore`]; the broadcast channel only
/// wakes up live subscribers so they can consume it.
#[derive(Clone)]
pub struct SelectionMailboxService {
    store: Arc<dyn SlotStore + Send + Sync>,
    notifier: broadcast::Sender<SelectionNotice>,
}

impl SelectionMailboxService {
    pub fn new(store: Arc<dyn SlotStore + Send + Sync>) -> Self {
        let (notifier, _) = broadcast::channel(NOTICE_CAPACITY);
        Self { store, notifier }
    }
}

#[async_trait]
impl QueueSelectionUseCase for SelectionMailboxService {
    async fn execute(
        &self,
        visitor: VisitorId,
        channel: SignalChannel,
        value: &str,
    ) -> Result<QueueOutcome, QueueSelectionError> {
        let Some(value) = normalize_selection(value) else {
            return Ok(QueueOutcome::Ignored);
        };

        let key = SlotKey::new(visitor, channel);
        self.store
            .put(&key.storage_key(), &value, Some(SLOT_TTL))
            .await
            .map_err(|e| QueueSelectionError::StorageFailed(e.to_string()))?;

        // No receivers is not an error; the value waits in the slot.
        let live_subscribers = self
            .notifier
            .send(SelectionNotice {
                key: key.clone(),
                value: value.clone(),
            })
            .unwrap_or(0);

        info!(
            channel = %channel,
            visitor = %key.visitor,
            live_subscribers,
            "Selection queued"
        );

        Ok(QueueOutcome::Queued {
            value,
            live_subscribers,
        })
    }
}

#[async_trait]
impl TakePendingSelectionUseCase for SelectionMailboxService {
    async fn execute(
        &self,
        visitor: &VisitorId,
        channel: SignalChannel,
    ) -> Result<Option<String>, TakePendingSelectionError> {
        let key = SlotKey::new(visitor.clone(), channel);

        let taken = self.store.take(&key.storage_key()).await.map_err(|e| {
            warn!(error = %e, channel = %channel, "Pending selection read failed");
            TakePendingSelectionError::StorageFailed(e.to_string())
        })?;

        // A stale blank value counts as absent.
        Ok(taken.and_then(|v| normalize_selection(&v)))
    }
}

impl SubscribeSelectionUseCase for SelectionMailboxService {
    fn subscribe(&self, visitor: VisitorId, channel: SignalChannel) -> SelectionSubscription {
        SelectionSubscription::new(
            SlotKey::new(visitor, channel),
            self.notifier.subscribe(),
            Arc::clone(&self.store),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::signal::adapter::outgoing::slot_store_memory::InMemorySlotStore;
    use crate::signal::application::ports::outgoing::SlotStoreError;

    // ============================================================
    // Helpers
    // ============================================================

    fn visitor(id: &str) -> VisitorId {
        VisitorId::parse(id).unwrap()
    }

    fn service_with_memory() -> (SelectionMailboxService, InMemorySlotStore) {
        let store = InMemorySlotStore::new();
        let service = SelectionMailboxService::new(Arc::new(store.clone()));
        (service, store)
    }

    /// Counts writes so tests can assert that nothing was stored.
    #[derive(Default)]
    struct CountingStore {
        inner: InMemorySlotStore,
        puts: AtomicUsize,
    }

    #[async_trait]
    impl SlotStore for CountingStore {
        async fn put(
            &self,
            key: &str,
            value: &str,
            ttl: Option<Duration>,
        ) -> Result<(), SlotStoreError> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            self.inner.put(key, value, ttl).await
        }

        async fn get(&self, key: &str) -> Result<Option<String>, SlotStoreError> {
            self.inner.get(key).await
        }

        async fn take(&self, key: &str) -> Result<Option<String>, SlotStoreError> {
            self.inner.take(key).await
        }

        async fn ping(&self) -> Result<(), SlotStoreError> {
            Ok(())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl SlotStore for FailingStore {
        async fn put(
            &self,
            _key: &str,
            _value: &str,
            _ttl: Option<Duration>,
        ) -> Result<(), SlotStoreError> {
            Err(SlotStoreError::StorageError("down".to_string()))
        }

        async fn get(&self, _key: &str) -> Result<Option<String>, SlotStoreError> {
            Err(SlotStoreError::StorageError("down".to_string()))
        }

        async fn take(&self, _key: &str) -> Result<Option<String>, SlotStoreError> {
            Err(SlotStoreError::StorageError("down".to_string()))
        }

        async fn ping(&self) -> Result<(), SlotStoreError> {
            Err(SlotStoreError::StorageError("down".to_string()))
        }
    }

    // ============================================================
    // Queue
    // ============================================================

    #[tokio::test]
    async fn blank_value_is_ignored_without_write_or_notice() {
        let store = Arc::new(CountingStore::default());
        let service = SelectionMailboxService::new(store.clone());
        let mut subscription = service.subscribe(visitor("v1"), SignalChannel::WorksTechFilter);

        let outcome = QueueSelectionUseCase::execute(
            &service,
            visitor("v1"),
            SignalChannel::WorksTechFilter,
            "   ",
        )
        .await
        .unwrap();

        assert_eq!(outcome, QueueOutcome::Ignored);
        assert_eq!(store.puts.load(Ordering::SeqCst), 0);

        let waited = tokio::time::timeout(Duration::from_millis(50), subscription.next()).await;
        assert!(waited.is_err(), "no notice should have been sent");
    }

    #[tokio::test]
    async fn queue_stores_trimmed_value() {
        let (service, store) = service_with_memory();

        let outcome = QueueSelectionUseCase::execute(
            &service,
            visitor("v1"),
            SignalChannel::WorksTechFilter,
            "  Rust  ",
        )
        .await
        .unwrap();

        assert_eq!(
            outcome,
            QueueOutcome::Queued {
                value: "Rust".to_string(),
                live_subscribers: 0
            }
        );
        assert_eq!(
            store
                .get("signal:works_tech_filter_v1:v1")
                .await
                .unwrap()
                .as_deref(),
            Some("Rust")
        );
    }

    #[tokio::test]
    async fn later_queue_overwrites_earlier_one() {
        let (service, _) = service_with_memory();
        let v = visitor("v1");

        for value in ["Web", "Mobile"] {
            QueueSelectionUseCase::execute(&service, v.clone(), SignalChannel::WorksCategory, value)
                .await
                .unwrap();
        }

        let pending =
            TakePendingSelectionUseCase::execute(&service, &v, SignalChannel::WorksCategory)
                .await
                .unwrap();
        assert_eq!(pending.as_deref(), Some("Mobile"));
    }

    #[tokio::test]
    async fn queue_reports_storage_failure() {
        let service = SelectionMailboxService::new(Arc::new(FailingStore));

        let result = QueueSelectionUseCase::execute(
            &service,
            visitor("v1"),
            SignalChannel::AboutSection,
            "experience",
        )
        .await;

        assert!(matches!(result, Err(QueueSelectionError::StorageFailed(_))));
    }

    // ============================================================
    // Take
    // ============================================================

    #[tokio::test]
    async fn take_is_destructive() {
        let (service, _) = service_with_memory();
        let v = visitor("v1");
        QueueSelectionUseCase::execute(&service, v.clone(), SignalChannel::AboutSection, "profile")
            .await
            .unwrap();

        let first = TakePendingSelectionUseCase::execute(&service, &v, SignalChannel::AboutSection)
            .await
            .unwrap();
        let second =
            TakePendingSelectionUseCase::execute(&service, &v, SignalChannel::AboutSection)
                .await
                .unwrap();

        assert_eq!(first.as_deref(), Some("profile"));
        assert_eq!(second, None);
    }

    #[tokio::test]
    async fn slots_are_isolated_per_visitor_and_channel() {
        let (service, _) = service_with_memory();
        QueueSelectionUseCase::execute(&service, visitor("a"), SignalChannel::WorksCategory, "Web")
            .await
            .unwrap();

        let other_visitor =
            TakePendingSelectionUseCase::execute(&service, &visitor("b"), SignalChannel::WorksCategory)
                .await
                .unwrap();
        let other_channel = TakePendingSelectionUseCase::execute(
            &service,
            &visitor("a"),
            SignalChannel::WorksTechFilter,
        )
        .await
        .unwrap();

        assert_eq!(other_visitor, None);
        assert_eq!(other_channel, None);
    }

    // ============================================================
    // Subscribe
    // ============================================================

    #[tokio::test]
    async fn live_subscriber_consumes_value_exactly_once() {
        let (service, _) = service_with_memory();
        let v = visitor("v1");
        let mut subscription = service.subscribe(v.clone(), SignalChannel::WorksTechFilter);

        let outcome =
            QueueSelectionUseCase::execute(&service, v.clone(), SignalChannel::WorksTechFilter, "Go")
                .await
                .unwrap();
        assert_eq!(
            outcome,
            QueueOutcome::Queued {
                value: "Go".to_string(),
                live_subscribers: 1
            }
        );

        let delivered = tokio::time::timeout(Duration::from_secs(1), subscription.next())
            .await
            .unwrap();
        assert_eq!(delivered.as_deref(), Some("Go"));

        let pending =
            TakePendingSelectionUseCase::execute(&service, &v, SignalChannel::WorksTechFilter)
                .await
                .unwrap();
        assert_eq!(pending, None);
    }

    #[tokio::test]
    async fn two_subscribers_on_one_slot_get_one_delivery_between_them() {
        let (service, _) = service_with_memory();
        let v = visitor("v1");
        let mut first = service.subscribe(v.clone(), SignalChannel::WorksCategory);
        let mut second = service.subscribe(v.clone(), SignalChannel::WorksCategory);

        QueueSelectionUseCase::execute(&service, v.clone(), SignalChannel::WorksCategory, "Data")
            .await
            .unwrap();

        let a = tokio::time::timeout(Duration::from_millis(200), first.next()).await;
        let b = tokio::time::timeout(Duration::from_millis(200), second.next()).await;

        let delivered: Vec<String> = [a, b]
            .into_iter()
            .filter_map(|r| r.ok().flatten())
            .collect();
        assert_eq!(delivered, vec!["Data".to_string()]);
    }

    #[tokio::test]
    async fn subscriber_ignores_other_slots() {
        let (service, _) = service_with_memory();
        let mut subscription = service.subscribe(visitor("a"), SignalChannel::AboutSection);

        QueueSelectionUseCase::execute(&service, visitor("b"), SignalChannel::AboutSection, "profile")
            .await
            .unwrap();

        let waited = tokio::time::timeout(Duration::from_millis(50), subscription.next()).await;
        assert!(waited.is_err());
    }

    #[tokio::test]
    async fn subscription_ends_when_mailbox_is_dropped() {
        let (service, _) = service_with_memory();
        let mut subscription = service.subscribe(visitor("v1"), SignalChannel::AboutSection);

        drop(service);

        assert_eq!(subscription.next().await, None);
    }
}
