use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    content::application::{
        domain::views::ProjectDetailsView, ports::incoming::use_cases::GetProjectDetailsError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/pages/projects/{id}",
    tag = "Pages",
    params(
        ("id" = Uuid, Path, description = "Project id")
    ),
    responses(
        (status = 200, description = "Project details with owner name and section flags", body = ProjectDetailsView),
        (status = 404, description = "Project not found"),
        (status = 500, description = "Query failed")
    )
)]
#[get("/api/pages/projects/{id}")]
pub async fn get_project_details_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.project_details.execute(path.into_inner()).await {
        Ok(view) => ApiResponse::success(view),
        Err(err) => map_project_details_error(err),
    }
}

fn map_project_details_error(err: GetProjectDetailsError) -> HttpResponse {
    match err {
        GetProjectDetailsError::NotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        GetProjectDetailsError::QueryFailed(msg) => {
            error!("Failed to load project details: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
