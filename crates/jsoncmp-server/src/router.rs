use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::handler;
use crate::server::AppState;

/// Build the axum router with all jsoncmp endpoints.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;
    Router::new()
        .route(endpoints::GREETING, get(handler::greeting_handler))
        .route(endpoints::COMPARE_PAGE, get(handler::compare_page_handler))
        .route(endpoints::COMPARE, post(handler::compare_handler))
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
