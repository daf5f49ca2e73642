//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::weather::{WeatherProvider, WeatherSnapshot};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/areas", get(list_areas))
        .route("/weather", get(current_weather))
        .route("/route", post(plan_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All areas in id order.
async fn list_areas(State(state): State<AppState>) -> Json<Vec<AreaResult>> {
    let areas = state
        .advisor
        .areas()
        .areas()
        .iter()
        .map(AreaResult::from_area)
        .collect();
    Json(areas)
}

async fn current_weather(State(state): State<AppState>) -> Json<WeatherSnapshot> {
    let snapshot = state.advisor.weather().current().await;
    Json((*snapshot).clone())
}

/// Recommend routes between two areas.
async fn plan_route(State(state): State<AppState>, body: Bytes) -> Result<Json<RouteResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: RouteRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "Invalid route request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let advisor = &state.advisor;
    if let (Some(from), Some(to)) = (advisor.resolve(&req.start), advisor.resolve(&req.end)) {
        if from.id == to.id {
            return Err(AppError::BadRequest {
                message: format!("Start and end are both {}", from.name),
            });
        }
    }

    let selection = advisor.compute_recommendations(&req.start, &req.end).await;
    info!(
        start = %req.start,
        end = %req.end,
        categories = selection.len(),
        "Route request"
    );

    Ok(Json(RouteResponse::from_selection(&selection, advisor.areas())))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
