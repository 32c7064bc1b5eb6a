//! HTTP handlers for the REST API.
//!
//! Handlers validate input, then delegate to `processor` or the repository.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::warn;

use super::dto::{
    ActionResponse, GenerateBatchRequest, HealthResponse, UpdateFlightStatusRequest,
    UpdateNoticeRequest, WeatherQuery,
};
use super::error::AppError;
use super::extract::{ApiJson, ApiPath, ApiQuery};
use super::state::AppState;
use crate::error::WeatherError;
use crate::models::airport::Airport;
use crate::models::flight::{Flight, FlightStatusRecord};
use crate::models::notice::Notice;
use crate::processor::notice_generator::BatchResult;
use crate::processor::{flight_status, notices};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.repository.ping().await {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        database,
    })
}

// =============================================================================
// Reference data
// =============================================================================

/// GET /api/airports
pub async fn list_airports(State(state): State<AppState>) -> HandlerResult<Vec<Airport>> {
    Ok(Json(state.repository.list_airports().await?))
}

/// GET /api/flights
pub async fn list_flights(State(state): State<AppState>) -> HandlerResult<Vec<Flight>> {
    Ok(Json(state.repository.list_flights().await?))
}

/// GET /api/flight-statuses
pub async fn list_flight_statuses(State(state): State<AppState>) -> HandlerResult<Vec<FlightStatusRecord>> {
    Ok(Json(state.repository.list_flight_statuses().await?))
}

/// POST /api/flights/status
pub async fn update_flight_status(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<UpdateFlightStatusRequest>,
) -> HandlerResult<ActionResponse> {
    flight_status::update_status(
        state.repository.as_ref(),
        &request.flight_ids,
        request.status_id,
    )
    .await?;

    Ok(Json(ActionResponse::ok("Flight status updated successfully")))
}

// =============================================================================
// Weather
// =============================================================================

/// Upstream 4xx/5xx answers are passed on; anything else becomes 502.
fn upstream_status(code: u16) -> StatusCode {
    match StatusCode::from_u16(code) {
        Ok(status) if status.is_client_error() || status.is_server_error() => status,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// GET /api/weather?city=
///
/// Passes the weather service answer through untouched.
pub async fn get_weather(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<WeatherQuery>,
) -> HandlerResult<Value> {
    let city = query.city.trim();
    if city.is_empty() {
        return Err(AppError::BadRequest("city is required".to_string()));
    }

    match state.weather.fetch(city).await {
        Ok(payload) if payload.get("weather").is_some() => Ok(Json(payload)),
        Ok(_) | Err(WeatherError::InvalidPayload(_)) => Err(AppError::Upstream(
            StatusCode::NOT_FOUND,
            "City not found or invalid data returned.".to_string(),
        )),
        Err(WeatherError::Status(code)) => {
            warn!("Weather service answered {} for '{}'", code, city);
            Err(AppError::Upstream(
                upstream_status(code),
                "Failed to fetch weather from webhook.".to_string(),
            ))
        }
        Err(WeatherError::Transport(e)) => {
            warn!("Weather service unreachable for '{}': {}", city, e);
            Err(AppError::Upstream(
                StatusCode::GATEWAY_TIMEOUT,
                "Weather service timed out or unreachable. Please try again later.".to_string(),
            ))
        }
    }
}

// =============================================================================
// NOTAMs
// =============================================================================

/// POST /api/generate-batch-notams
///
/// Always 200 once the body parses; per-airport failures are reported in it.
pub async fn generate_batch(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateBatchRequest>,
) -> HandlerResult<BatchResult> {
    Ok(Json(state.generator.generate_batch(&request.airports).await))
}

/// GET /api/notams
pub async fn list_notices(State(state): State<AppState>) -> HandlerResult<Vec<Notice>> {
    Ok(Json(state.repository.list_notices().await?))
}

/// GET /api/notams/{id}
pub async fn get_notice(State(state): State<AppState>, ApiPath(id): ApiPath<i64>) -> HandlerResult<Notice> {
    Ok(Json(notices::get_notice(state.repository.as_ref(), id).await?))
}

/// PUT /api/notams/{id}
pub async fn update_notice(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateNoticeRequest>,
) -> HandlerResult<Notice> {
    let notice = notices::update_notice(state.repository.as_ref(), &state.sync, id, &request.message).await?;
    Ok(Json(notice))
}

/// DELETE /api/notams/{id}
pub async fn delete_notice(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> HandlerResult<ActionResponse> {
    notices::delete_notice(state.repository.as_ref(), &state.sync, id).await?;
    Ok(Json(ActionResponse::ok("NOTAM deleted successfully")))
}
