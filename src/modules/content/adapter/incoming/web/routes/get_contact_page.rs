use actix_web::{get, web, Responder};

use crate::{
    content::application::domain::views::ContactPageView, shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    get,
    path = "/api/pages/contact",
    tag = "Pages",
    responses(
        (status = 200, description = "Contact heading and links", body = ContactPageView)
    )
)]
#[get("/api/pages/contact")]
pub async fn get_contact_page_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.contact_page.execute().await)
}
