use actix_web::{get, web, Responder};

use crate::{
    content::application::domain::views::SiteShellView, shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    get,
    path = "/api/pages/shell",
    tag = "Pages",
    responses(
        (status = 200, description = "Navbar pages and footer links", body = SiteShellView)
    )
)]
#[get("/api/pages/shell")]
pub async fn get_site_shell_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.site_shell.execute().await)
}
