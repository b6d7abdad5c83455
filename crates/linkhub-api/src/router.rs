//! Route definitions for the LinkHub HTTP API.
//!
//! Public routes cover accounts, resolution, and health. Link management
//! sits behind the session middleware. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and request logging.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(link_routes(state.clone()))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Registration, login, resolution, health
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/r/{code}", get(handlers::redirect::resolve))
        .route("/health", get(handlers::health::health))
}

/// Link management, session required
fn link_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/url",
            get(handlers::link::list_links).post(handlers::link::create_link),
        )
        .route("/url/{id}", delete(handlers::link::delete_link))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::session::require_session,
        ))
}
