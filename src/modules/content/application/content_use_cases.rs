use std::sync::Arc;

use crate::content::application::{
    ports::incoming::use_cases::{
        GetAboutPageUseCase, GetContactPageUseCase, GetHomePageUseCase, GetProjectDetailsUseCase,
        GetSiteShellUseCase, GetWorksPageUseCase,
    },
    ports::outgoing::{ContentQuery, SnapshotCache},
    services::{
        AboutPageService, ContactPageService, HomePageService, ProjectDetailsService,
        SiteShellService, WorksPageService,
    },
};
use crate::signal::application::ports::incoming::use_cases::TakePendingSelectionUseCase;

#[derive(Clone)]
pub struct ContentUseCases {
    pub home: Arc<dyn GetHomePageUseCase + Send + Sync>,
    pub works: Arc<dyn GetWorksPageUseCase + Send + Sync>,
    pub about: Arc<dyn GetAboutPageUseCase + Send + Sync>,
    pub project_details: Arc<dyn GetProjectDetailsUseCase + Send + Sync>,
    pub site_shell: Arc<dyn GetSiteShellUseCase + Send + Sync>,
    pub contact_page: Arc<dyn GetContactPageUseCase + Send + Sync>,
}

impl ContentUseCases {
    /// Wires every page loader over one query adapter.
    pub fn new<Q>(
        query: Q,
        snapshots: Arc<dyn SnapshotCache + Send + Sync>,
        pending: Arc<dyn TakePendingSelectionUseCase + Send + Sync>,
    ) -> Self
    where
        Q: ContentQuery + Clone + Send + Sync + 'static,
    {
        Self {
            home: Arc::new(HomePageService::new(query.clone(), snapshots.clone())),
            works: Arc::new(WorksPageService::new(query.clone(), pending.clone())),
            about: Arc::new(AboutPageService::new(query.clone(), snapshots, pending)),
            project_details: Arc::new(ProjectDetailsService::new(query.clone())),
            site_shell: Arc::new(SiteShellService::new(query.clone())),
            contact_page: Arc::new(ContactPageService::new(query)),
        }
    }
}
