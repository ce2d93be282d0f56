use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::application::domain::entities::ContactSubmission;
use crate::contact::application::ports::incoming::use_cases::{
    SubmitContactError, SubmitContactMessageUseCase,
};
use crate::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError, NewContactMessage,
};

// ============================================================
// Contact
// ============================================================

pub struct StubSubmitContactMessageUseCase {
    pub result: Result<(), SubmitContactError>,
}

impl StubSubmitContactMessageUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn failure(err: SubmitContactError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl SubmitContactMessageUseCase for StubSubmitContactMessageUseCase {
    async fn execute(&self, _submission: ContactSubmission) -> Result<(), SubmitContactError> {
        self.result.clone()
    }
}

/// Records every saved message; clones share the same list.
#[derive(Clone, Default)]
pub struct InMemoryContactMessages {
    saved: Arc<Mutex<Vec<NewContactMessage>>>,
}

impl InMemoryContactMessages {
    pub fn saved(&self) -> Vec<NewContactMessage> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactMessages {
    async fn save(&self, data: NewContactMessage) -> Result<Uuid, ContactMessageRepositoryError> {
        self.saved.lock().unwrap().push(data);
        Ok(Uuid::new_v4())
    }
}
