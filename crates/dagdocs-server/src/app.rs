//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/{namespace}/navigation",
            get(handlers::navigation::get_navigation),
        )
        .route(
            "/api/{namespace}/pages",
            get(handlers::navigation::get_page_list),
        )
        .route(
            "/api/{namespace}/pages/",
            get(handlers::pages::get_root_page),
        )
        .route(
            "/api/{namespace}/pages/{*path}",
            get(handlers::pages::get_page),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
