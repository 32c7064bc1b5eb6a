use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The admin UI is served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/airports", get(handlers::list_airports))
        .route("/flights", get(handlers::list_flights))
        .route("/flights/status", post(handlers::update_flight_status))
        .route("/flight-statuses", get(handlers::list_flight_statuses))
        .route("/weather", get(handlers::get_weather))
        .route("/generate-batch-notams", post(handlers::generate_batch))
        .route("/notams", get(handlers::list_notices))
        .route(
            "/notams/{id}",
            get(handlers::get_notice)
                .put(handlers::update_notice)
                .delete(handlers::delete_notice),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
