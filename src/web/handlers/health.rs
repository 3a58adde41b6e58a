//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::state::AppState;
use crate::web::dto::health::{CheckStatus, HealthChecks, HealthResponse};

/// Returns service health with the status of the portfolio API.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Portfolio API reachable
/// - **503 Service Unavailable**: Portfolio API failing
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "api": {
///       "status": "ok",
///       "message": "Reachable at https://portafolio-x5gx.onrender.com/api"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let api_check = check_api(&state).await;

    let healthy = api_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { api: api_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Probes the personal-info resource.
async fn check_api(state: &AppState) -> CheckStatus {
    match state.repository.get_personal_info().await {
        Ok(_) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Reachable at {}", state.config.api_base_url)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Portfolio API error: {}", e)),
        },
    }
}
