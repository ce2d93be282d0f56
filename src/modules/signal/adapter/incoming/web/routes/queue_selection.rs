use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use super::SignalPath;
use crate::{
    shared::api::ApiResponse,
    signal::application::{
        domain::entities::QueueOutcome, ports::incoming::use_cases::QueueSelectionError,
    },
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct QueueSelectionRequest {
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QueueSelectionResponse {
    /// `false` when the value was blank and nothing was stored.
    pub queued: bool,
    pub value: Option<String>,
    pub live_subscribers: usize,
}

impl From<QueueOutcome> for QueueSelectionResponse {
    fn from(outcome: QueueOutcome) -> Self {
        match outcome {
            QueueOutcome::Queued {
                value,
                live_subscribers,
            } => Self {
                queued: true,
                value: Some(value),
                live_subscribers,
            },
            QueueOutcome::Ignored => Self {
                queued: false,
                value: None,
                live_subscribers: 0,
            },
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/visitors/{visitor_id}/signals/{channel}",
    tag = "Signals",
    params(
        ("visitor_id" = String, Path, description = "Browser-generated visitor id"),
        ("channel" = String, Path, description = "works-tech-filter | works-category | about-section")
    ),
    request_body = QueueSelectionRequest,
    responses(
        (status = 200, description = "Selection queued or ignored", body = QueueSelectionResponse),
        (status = 400, description = "Invalid visitor id or channel"),
        (status = 500, description = "Slot storage unavailable")
    )
)]
#[post("/api/visitors/{visitor_id}/signals/{channel}")]
pub async fn queue_selection_handler(
    path: web::Path<SignalPath>,
    payload: web::Json<QueueSelectionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (visitor, channel) = match path.parse() {
        Ok(parsed) => parsed,
        Err(resp) => return resp,
    };

    match data
        .signal
        .queue
        .execute(visitor, channel, &payload.value)
        .await
    {
        Ok(outcome) => ApiResponse::success(QueueSelectionResponse::from(outcome)),
        Err(err) => map_queue_selection_error(err),
    }
}

fn map_queue_selection_error(err: QueueSelectionError) -> HttpResponse {
    match err {
        QueueSelectionError::StorageFailed(msg) => {
            error!("Failed to queue selection: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::{
        signal::application::{
            domain::entities::{SignalChannel, VisitorId},
            ports::incoming::use_cases::QueueSelectionUseCase,
            signal_use_cases::SignalUseCases,
        },
        tests::support::app_state_builder::TestAppStateBuilder,
    };

    struct FailingQueue;

    #[async_trait]
    impl QueueSelectionUseCase for FailingQueue {
        async fn execute(
            &self,
            _visitor: VisitorId,
            _channel: SignalChannel,
            _value: &str,
        ) -> Result<QueueOutcome, QueueSelectionError> {
            Err(QueueSelectionError::StorageFailed("redis down".to_string()))
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn queue_stores_trimmed_value() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(queue_selection_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/visitors/v-1/signals/works-tech-filter")
            .set_json(json!({ "value": "  Rust  " }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["queued"], true);
        assert_eq!(body["data"]["value"], "Rust");
    }

    #[actix_web::test]
    async fn blank_value_is_reported_as_not_queued() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(queue_selection_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/visitors/v-1/signals/about-section")
            .set_json(json!({ "value": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_json(resp).await;
        assert_eq!(body["data"]["queued"], false);
        assert!(body["data"]["value"].is_null());
    }

    #[actix_web::test]
    async fn unknown_channel_returns_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(queue_selection_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/visitors/v-1/signals/home-hero")
            .set_json(json!({ "value": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = read_json(resp).await;
        assert_eq!(body["error"]["code"], "UNKNOWN_CHANNEL");
    }

    #[actix_web::test]
    async fn invalid_visitor_returns_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(queue_selection_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/visitors/bad.id/signals/works-category")
            .set_json(json!({ "value": "Web" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = read_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_VISITOR_ID");
    }

    #[actix_web::test]
    async fn storage_failure_returns_internal_error() {
        let defaults = TestAppStateBuilder::default_signal();
        let state = TestAppStateBuilder::default()
            .with_signal(SignalUseCases {
                queue: std::sync::Arc::new(FailingQueue),
                ..defaults
            })
            .build();
        let app = test::init_service(App::new().app_data(state).service(queue_selection_handler))
            .await;

        let req = test::TestRequest::post()
            .uri("/api/visitors/v-1/signals/works-category")
            .set_json(json!({ "value": "Web" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
