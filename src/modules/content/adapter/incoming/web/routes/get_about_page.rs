use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use super::parse_visitor;
use crate::{
    content::application::domain::views::AboutPageView, shared::api::ApiResponse, AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AboutPageParams {
    /// Consumes this visitor's pending section selection.
    pub visitor: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/pages/about",
    tag = "Pages",
    params(AboutPageParams),
    responses(
        (status = 200, description = "About page sections", body = AboutPageView),
        (status = 400, description = "Invalid visitor id")
    )
)]
#[get("/api/pages/about")]
pub async fn get_about_page_handler(
    params: web::Query<AboutPageParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let visitor = match parse_visitor(params.visitor.as_deref()) {
        Ok(visitor) => visitor,
        Err(resp) => return resp,
    };

    ApiResponse::success(data.content.about.execute(visitor).await)
}
