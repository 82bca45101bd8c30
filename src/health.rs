use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::time::Duration;
use tracing::warn;
use utoipa::ToSchema;

use crate::AppState;

const READINESS_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    status: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    #[schema(example = "ok")]
    status: &'static str,
    #[schema(example = "ok")]
    content_store: &'static str,
}

/// LIVENESS CHECK
/// - No I/O
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS CHECK
/// - Pings the content store
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Content store reachable", body = ReadinessResponse),
        (status = 503, description = "Content store unreachable", body = ReadinessResponse),
    )
)]
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let store_ok = match tokio::time::timeout(READINESS_TIMEOUT, data.content_store.ping()).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            warn!(error = %e, "Readiness: content store unhealthy");
            false
        }
        Err(_) => {
            warn!("Readiness: content store ping timed out");
            false
        }
    };

    if store_ok {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            content_store: "ok",
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            content_store: "unhealthy",
        })
    }
}
