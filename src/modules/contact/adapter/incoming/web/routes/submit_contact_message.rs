use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::{
    contact::application::{
        domain::entities::{ContactSubmission, ContactSubmissionError},
        ports::incoming::use_cases::SubmitContactError,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Wire format
// ──────────────────────────────────────────────────────────
//

/// Documented shape of the request body. Any JSON is accepted; missing or
/// non-string fields count as empty.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub full_name: String,
    pub contact_email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactOkResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactErrorResponse {
    pub error: String,
}

fn contact_error(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ContactErrorResponse {
        error: message.to_string(),
    })
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message saved and owner notified", body = ContactOkResponse),
        (status = 400, description = "Missing field or invalid email", body = ContactErrorResponse),
        (status = 500, description = "Unreadable body, relay not configured, save failed or email failed", body = ContactErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_message_handler(
    data: web::Data<AppState>,
    body: web::Bytes,
) -> impl Responder {
    let payload = match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Null) => return unexpected_error("null body"),
        Ok(payload) => payload,
        Err(err) => return unexpected_error(&err.to_string()),
    };

    let submission = match ContactSubmission::from_payload(&payload) {
        Ok(submission) => submission,
        Err(err) => return map_submission_error(err),
    };

    match data.contact.execute(submission).await {
        Ok(()) => HttpResponse::Ok().json(ContactOkResponse { ok: true }),
        Err(err) => map_submit_contact_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

/// Bodies that cannot be read as a JSON value fall through to the catch-all.
fn unexpected_error(reason: &str) -> HttpResponse {
    warn!("Unreadable contact body: {}", reason);
    contact_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Unexpected error while sending message.",
    )
}

fn map_submission_error(err: ContactSubmissionError) -> HttpResponse {
    match err {
        ContactSubmissionError::MissingFields => {
            contact_error(StatusCode::BAD_REQUEST, "All fields are required.")
        }
        ContactSubmissionError::InvalidEmail => {
            contact_error(StatusCode::BAD_REQUEST, "Invalid email address.")
        }
    }
}

fn map_submit_contact_error(err: SubmitContactError) -> HttpResponse {
    match err {
        SubmitContactError::EmailNotConfigured => contact_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Email environment variables are missing.",
        ),
        SubmitContactError::SaveFailed(msg) => {
            error!("Contact message save failed: {}", msg);
            contact_error(StatusCode::INTERNAL_SERVER_ERROR, "Unable to save message.")
        }
        SubmitContactError::NotificationFailed(msg) => {
            error!("Contact notification failed: {}", msg);
            contact_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Message saved but email sending failed.",
            )
        }
    }
}
