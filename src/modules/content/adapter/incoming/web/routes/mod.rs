mod get_about_page;
mod get_contact_page;
mod get_home_page;
mod get_project_details;
mod get_site_shell;
mod get_works_page;

pub use get_about_page::{get_about_page_handler, __path_get_about_page_handler, AboutPageParams};
pub use get_contact_page::{get_contact_page_handler, __path_get_contact_page_handler};
pub use get_home_page::{get_home_page_handler, __path_get_home_page_handler};
pub use get_project_details::{get_project_details_handler, __path_get_project_details_handler};
pub use get_site_shell::{get_site_shell_handler, __path_get_site_shell_handler};
pub use get_works_page::{get_works_page_handler, __path_get_works_page_handler, WorksPageParams};

use actix_web::HttpResponse;

use crate::{shared::api::ApiResponse, signal::application::domain::entities::VisitorId};

/// Optional `?visitor=` parameter. Blank counts as absent.
fn parse_visitor(raw: Option<&str>) -> Result<Option<VisitorId>, HttpResponse> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => VisitorId::parse(raw)
            .map(Some)
            .map_err(|e| ApiResponse::bad_request("INVALID_VISITOR_ID", &e.to_string())),
    }
}
