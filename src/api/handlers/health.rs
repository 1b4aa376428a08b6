//! Liveness and readiness probe.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthChecks, HealthResponse, Probe, ProbeStatus, ServiceStatus};
use crate::state::AppState;

/// Reports whether the service can reach its database.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// 200 with `"status": "healthy"` when the links table answers a count query,
/// otherwise 503 with `"status": "degraded"` and the failure in
/// `checks.database.message`.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let checks = HealthChecks {
        database: probe_database(&state).await,
    };
    let status = checks.status();

    let code = match status {
        ServiceStatus::Healthy => StatusCode::OK,
        ServiceStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks,
    };

    (code, Json(response))
}

async fn probe_database(state: &AppState) -> Probe {
    match state.link_service.count_links().await {
        Ok(count) => Probe {
            status: ProbeStatus::Ok,
            message: Some(format!("{count} links")),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Health probe failed");
            Probe {
                status: ProbeStatus::Error,
                message: Some(e.to_string()),
            }
        }
    }
}
