use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use super::parse_visitor;
use crate::{
    content::application::{
        domain::{tag_parsing::split_categories, views::WorksPageView},
        ports::incoming::use_cases::WorksPageQuery,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WorksPageParams {
    /// `All` or absent disables the category filter.
    pub category: Option<String>,
    pub project_type: Option<String>,
    /// Comma separated skill names.
    pub tech: Option<String>,
    /// Consumes this visitor's pending tech/category selections.
    pub visitor: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/pages/works",
    tag = "Pages",
    params(WorksPageParams),
    responses(
        (status = 200, description = "Filtered project cards and filter options", body = WorksPageView),
        (status = 400, description = "Invalid visitor id")
    )
)]
#[get("/api/pages/works")]
pub async fn get_works_page_handler(
    params: web::Query<WorksPageParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();

    let visitor = match parse_visitor(params.visitor.as_deref()) {
        Ok(visitor) => visitor,
        Err(resp) => return resp,
    };

    let query = WorksPageQuery {
        category: params.category,
        project_type: params.project_type,
        tech: params
            .tech
            .as_deref()
            .map(split_categories)
            .unwrap_or_default(),
        visitor,
    };

    ApiResponse::success(data.content.works.execute(query).await)
}
