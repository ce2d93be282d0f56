use actix_web::web;
use std::sync::Arc;

use crate::contact::application::ports::incoming::use_cases::SubmitContactMessageUseCase;
use crate::content::application::content_use_cases::ContentUseCases;
use crate::signal::adapter::outgoing::InMemorySlotStore;
use crate::signal::application::services::SelectionMailboxService;
use crate::signal::application::signal_use_cases::SignalUseCases;
use crate::tests::support::content_fixtures::{in_memory_snapshots, FixtureContentQuery};
use crate::tests::support::stubs::StubSubmitContactMessageUseCase;
use crate::AppState;

pub struct TestAppStateBuilder {
    signal: SignalUseCases,
    content_query: Option<FixtureContentQuery>,
    submit_contact: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            signal: Self::default_signal(),
            content_query: None,
            submit_contact: Arc::new(StubSubmitContactMessageUseCase::success()),
        }
    }
}

impl TestAppStateBuilder {
    /// Real mailbox over an in-memory store.
    pub fn default_signal() -> SignalUseCases {
        let store = Arc::new(InMemorySlotStore::new());
        SignalUseCases::from_mailbox(SelectionMailboxService::new(store))
    }

    pub fn with_signal(mut self, signal: SignalUseCases) -> Self {
        self.signal = signal;
        self
    }

    pub fn with_content_query(mut self, query: FixtureContentQuery) -> Self {
        self.content_query = Some(query);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let content = ContentUseCases::new(
            self.content_query.unwrap_or_default(),
            in_memory_snapshots(),
            self.signal.take_pending.clone(),
        );

        web::Data::new(AppState {
            content,
            contact: self.submit_contact,
            signal: self.signal,
        })
    }
}
