use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use super::SignalPath;
use crate::{
    shared::api::ApiResponse,
    signal::application::{
        domain::entities::SignalChannel, ports::incoming::use_cases::TakePendingSelectionError,
    },
    AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PendingSelectionResponse {
    pub channel: SignalChannel,
    /// `None` when nothing was pending.
    pub value: Option<String>,
}

/// Reads and clears the pending selection. A second call returns `null`.
#[utoipa::path(
    get,
    path = "/api/visitors/{visitor_id}/signals/{channel}/pending",
    tag = "Signals",
    params(
        ("visitor_id" = String, Path, description = "Browser-generated visitor id"),
        ("channel" = String, Path, description = "works-tech-filter | works-category | about-section")
    ),
    responses(
        (status = 200, description = "Pending value, consumed", body = PendingSelectionResponse),
        (status = 400, description = "Invalid visitor id or channel"),
        (status = 500, description = "Slot storage unavailable")
    )
)]
#[get("/api/visitors/{visitor_id}/signals/{channel}/pending")]
pub async fn take_pending_selection_handler(
    path: web::Path<SignalPath>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (visitor, channel) = match path.parse() {
        Ok(parsed) => parsed,
        Err(resp) => return resp,
    };

    match data.signal.take_pending.execute(&visitor, channel).await {
        Ok(value) => ApiResponse::success(PendingSelectionResponse { channel, value }),
        Err(err) => map_take_pending_error(err),
    }
}

fn map_take_pending_error(err: TakePendingSelectionError) -> HttpResponse {
    match err {
        TakePendingSelectionError::StorageFailed(msg) => {
            error!("Failed to take pending selection: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::{
        signal::adapter::incoming::web::routes::queue_selection_handler,
        tests::support::app_state_builder::TestAppStateBuilder,
    };

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn pending_value_is_returned_once() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(queue_selection_handler)
                .service(take_pending_selection_handler),
        )
        .await;

        let queue = test::TestRequest::post()
            .uri("/api/visitors/v1/signals/works-category")
            .set_json(json!({ "value": "Mobile" }))
            .to_request();
        assert_eq!(test::call_service(&app, queue).await.status(), StatusCode::OK);

        let first = test::TestRequest::get()
            .uri("/api/visitors/v1/signals/works-category/pending")
            .to_request();
        let body = read_json(test::call_service(&app, first).await).await;
        assert_eq!(body["data"]["channel"], "works-category");
        assert_eq!(body["data"]["value"], "Mobile");

        let second = test::TestRequest::get()
            .uri("/api/visitors/v1/signals/works-category/pending")
            .to_request();
        let body = read_json(test::call_service(&app, second).await).await;
        assert!(body["data"]["value"].is_null());
    }

    #[actix_web::test]
    async fn other_visitor_sees_nothing() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(queue_selection_handler)
                .service(take_pending_selection_handler),
        )
        .await;

        let queue = test::TestRequest::post()
            .uri("/api/visitors/alice/signals/about-section")
            .set_json(json!({ "value": "experience" }))
            .to_request();
        test::call_service(&app, queue).await;

        let req = test::TestRequest::get()
            .uri("/api/visitors/bob/signals/about-section/pending")
            .to_request();
        let body = read_json(test::call_service(&app, req).await).await;
        assert!(body["data"]["value"].is_null());
    }

    #[actix_web::test]
    async fn unknown_channel_returns_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(take_pending_selection_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/visitors/v1/signals/nope/pending")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
