use crate::api::schemas::{ErrorDetail, ErrorResponse, ReadinessResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::contact::adapter::incoming::web::routes::{
    ContactErrorResponse, ContactOkResponse, ContactRequest,
};
use crate::content::application::domain::{
    links::LinkView,
    tool_category::ToolCategory,
    views::{
        AboutPageView, AboutProfileView, AboutStatsView, AppliedWorksFilter, CertificationView,
        ContactItemView, ContactPageView, DetailSections, EducationView, ExperienceView,
        HeroProfileView, HomePageView, MilestoneView, NavPage, ProjectCardView,
        ProjectDetailsView, SectionLink, SiteShellView, SpecializationView, ToolGroupView,
        WorksPageView,
    },
};
use crate::signal::adapter::incoming::web::routes::{
    PendingSelectionResponse, QueueSelectionRequest, QueueSelectionResponse,
};
use crate::signal::application::domain::entities::SignalChannel;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "Read-only page content, cross-page visitor selections and the contact form"
    ),
    paths(
        crate::health::readiness,

        // Pages
        crate::content::adapter::incoming::web::routes::get_home_page_handler,
        crate::content::adapter::incoming::web::routes::get_works_page_handler,
        crate::content::adapter::incoming::web::routes::get_about_page_handler,
        crate::content::adapter::incoming::web::routes::get_project_details_handler,
        crate::content::adapter::incoming::web::routes::get_site_shell_handler,
        crate::content::adapter::incoming::web::routes::get_contact_page_handler,

        // Signals
        crate::signal::adapter::incoming::web::routes::queue_selection_handler,
        crate::signal::adapter::incoming::web::routes::take_pending_selection_handler,
        crate::signal::adapter::incoming::web::routes::stream_selection_handler,

        // Contact
        crate::contact::adapter::incoming::web::routes::submit_contact_message_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<HomePageView>,
            ErrorResponse,
            ErrorDetail,
            ReadinessResponse,

            // Page views
            HomePageView,
            HeroProfileView,
            ProjectCardView,
            MilestoneView,
            SpecializationView,
            WorksPageView,
            AppliedWorksFilter,
            AboutPageView,
            AboutProfileView,
            AboutStatsView,
            EducationView,
            CertificationView,
            ExperienceView,
            ToolGroupView,
            ToolCategory,
            SectionLink,
            ProjectDetailsView,
            DetailSections,
            SiteShellView,
            NavPage,
            LinkView,
            ContactPageView,
            ContactItemView,

            // Signals
            SignalChannel,
            QueueSelectionRequest,
            QueueSelectionResponse,
            PendingSelectionResponse,

            // Contact
            ContactRequest,
            ContactOkResponse,
            ContactErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Pages", description = "Assembled page content"),
        (name = "Signals", description = "Cross-page visitor selections"),
        (name = "Contact", description = "Contact form submission"),
    )
)]
pub struct ApiDoc;
