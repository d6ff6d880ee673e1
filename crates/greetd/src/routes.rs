//! API routes for greetd

use crate::server::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use greeter_common::{greet, GreeterError, GreetingRequest, GreetingResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

type AppStateArc = Arc<AppState>;

/// Query string of `GET /`
#[derive(Debug, Deserialize)]
pub struct GreetingQuery {
    pub name: Option<String>,
}

/// Body returned when a request is rejected
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

// ============================================================================
// Greeting Routes
// ============================================================================

pub fn greeting_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(get_greeting))
}

async fn get_greeting(
    State(state): State<AppStateArc>,
    Query(query): Query<GreetingQuery>,
) -> Result<Json<GreetingResponse>, (StatusCode, Json<ErrorBody>)> {
    let name = query.name.unwrap_or_default();

    let request = GreetingRequest::with_max_len(name, state.greeting.max_name_len).map_err(|e| {
        warn!("Rejected greeting request: {}", e);
        (
            rejection_status(&e),
            Json(ErrorBody {
                error: e.to_string(),
            }),
        )
    })?;

    info!("Greeting request for name: {}", request.name());
    Ok(Json(greet(&request, &state.greeting.salutation)))
}

/// 422 for a bad name, 500 for anything else
fn rejection_status(error: &GreeterError) -> StatusCode {
    if error.is_validation() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
