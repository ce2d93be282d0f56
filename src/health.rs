use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::api::schemas::ReadinessResponse;
use crate::signal::application::ports::outgoing::SlotStore;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Database round trip
/// - Slot store ping (Redis, or always ok in memory)
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Health",
    responses(
        (status = 200, description = "All dependencies reachable", body = ReadinessResponse),
        (status = 503, description = "A dependency is unreachable", body = ReadinessResponse)
    )
)]
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    slots: web::Data<Arc<dyn SlotStore + Send + Sync>>,
) -> impl Responder {
    let database = match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => "ok",
        Err(e) => {
            warn!(error = %e, "Readiness: database unreachable");
            "unhealthy"
        }
    };

    let slot_store = match slots.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            warn!(error = %e, "Readiness: slot store unreachable");
            "unhealthy"
        }
    };

    if database == "ok" && slot_store == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database,
            slot_store,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            database,
            slot_store,
        })
    }
}
