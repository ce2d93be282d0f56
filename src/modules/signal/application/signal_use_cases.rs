use std::sync::Arc;

use crate::signal::application::ports::incoming::use_cases::{
    QueueSelectionUseCase, SubscribeSelectionUseCase, TakePendingSelectionUseCase,
};

#[derive(Clone)]
pub struct SignalUseCases {
    pub queue: Arc<dyn QueueSelectionUseCase + Send + Sync>,
    pub take_pending: Arc<dyn TakePendingSelectionUseCase + Send + Sync>,
    pub subscribe: Arc<dyn SubscribeSelectionUseCase + Send + Sync>,
}

impl SignalUseCases {
    /// All three paths share one mailbox so the at-most-once delivery holds
    /// across them.
    pub fn from_mailbox<M>(mailbox: M) -> Self
    where
        M: QueueSelectionUseCase
            + TakePendingSelectionUseCase
            + SubscribeSelectionUseCase
            + Send
            + Sync
            + 'static,
    {
        let mailbox = Arc::new(mailbox);
        Self {
            queue: mailbox.clone(),
            take_pending: mailbox.clone(),
            subscribe: mailbox,
        }
    }
}
