// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// JSON bodies on this API are tiny (a selection value); anything larger is
/// rejected before deserialization.
pub const JSON_BODY_LIMIT: usize = 16 * 1024;

/// Extractor errors answer with the standard envelope instead of actix's
/// plain-text body.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("INVALID_REQUEST_BODY", &message),
            )
            .into()
        })
}
