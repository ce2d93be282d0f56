use std::sync::Arc;

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, warn};

use crate::signal::application::{
    domain::entities::{SelectionNotice, SignalChannel, SlotKey, VisitorId},
    ports::outgoing::SlotStore,
};

/// Live view of one slot.
///
/// Every delivered value is consumed from the slot first, so a value handed
/// to a live subscriber is not handed out again by `take`, and vice versa.
pub struct SelectionSubscription {
    key: SlotKey,
    receiver: broadcast::Receiver<SelectionNotice>,
    store: Arc<dyn SlotStore + Send + Sync>,
}

impl SelectionSubscription {
    pub fn new(
        key: SlotKey,
        receiver: broadcast::Receiver<SelectionNotice>,
        store: Arc<dyn SlotStore + Send + Sync>,
    ) -> Self {
        Self {
            key,
            receiver,
            store,
        }
    }

    pub fn channel(&self) -> SignalChannel {
        self.key.channel
    }

    /// Waits for the next value queued on this slot.
    ///
    /// Returns `None` once the mailbox shuts down.
    pub async fn next(&mut self) -> Option<String> {
        loop {
            match self.receiver.recv().await {
                Ok(notice) if notice.key == self.key => {
                    if let Some(value) = self.consume(Some(notice.value)).await {
                        return Some(value);
                    }
                }
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    debug!(skipped, slot = %self.key.storage_key(), "Subscriber lagged");
                    if let Some(value) = self.consume(None).await {
                        return Some(value);
                    }
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    async fn consume(&self, announced: Option<String>) -> Option<String> {
        match self.store.take(&self.key.storage_key()).await {
            Ok(taken) => taken,
            Err(e) => {
                warn!(error = %e, slot = %self.key.storage_key(), "Slot take failed, delivering announced value");
                announced
            }
        }
    }
}

pub trait SubscribeSelectionUseCase: Send + Sync {
    fn subscribe(&self, visitor: VisitorId, channel: SignalChannel) -> SelectionSubscription;
}
