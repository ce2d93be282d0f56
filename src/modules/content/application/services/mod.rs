mod about_page_service;
mod contact_page_service;
mod home_page_service;
mod project_details_service;
mod site_shell_service;
mod works_page_service;

pub use about_page_service::{AboutPageService, ABOUT_PAGE_SNAPSHOT};
pub use contact_page_service::ContactPageService;
pub use home_page_service::{HomePageService, HOME_PROFILE_SNAPSHOT};
pub use project_details_service::ProjectDetailsService;
pub use site_shell_service::SiteShellService;
pub use works_page_service::WorksPageService;

use std::sync::Arc;
use tracing::warn;

use crate::content::application::ports::outgoing::ContentQueryError;
use crate::signal::application::{
    domain::entities::{SignalChannel, VisitorId},
    ports::incoming::use_cases::TakePendingSelectionUseCase,
};

/// Page loaders never surface read failures: a failed read is logged and
/// rendered as empty.
fn read_or_default<T: Default>(read: &str, result: Result<T, ContentQueryError>) -> T {
    result.unwrap_or_else(|e| {
        warn!(read, error = %e, "Content read failed, rendering empty");
        T::default()
    })
}

/// Consumes the visitor's pending selection, if any. Storage errors count
/// as "nothing pending".
async fn take_pending(
    pending: &Arc<dyn TakePendingSelectionUseCase + Send + Sync>,
    visitor: Option<&VisitorId>,
    channel: SignalChannel,
) -> Option<String> {
    let visitor = visitor?;

    match pending.execute(visitor, channel).await {
        Ok(value) => value,
        Err(e) => {
            warn!(channel = %channel, error = %e, "Pending selection unavailable");
            None
        }
    }
}
