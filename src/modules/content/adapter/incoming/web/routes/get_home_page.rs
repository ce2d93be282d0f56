use actix_web::{get, web, Responder};

use crate::{
    content::application::domain::views::HomePageView, shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    get,
    path = "/api/pages/home",
    tag = "Pages",
    responses(
        (status = 200, description = "Hero profile, featured projects, milestones and specializations", body = HomePageView)
    )
)]
#[get("/api/pages/home")]
pub async fn get_home_page_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.home.execute().await)
}
