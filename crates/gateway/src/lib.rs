//! Roster Gateway Crate
//!
//! HTTP surface for the Roster backend: the axum router, the bearer
//! authentication middleware, and the REST handlers that map requests onto
//! the user resource service.

pub mod error;
pub mod middleware;
pub mod rest;
pub mod state;

pub use error::{GatewayError, GatewayResult};
pub use state::{GatewayState, JwtConfig};

use axum::{routing::get, Router};
use std::sync::Arc;

/// Build the application router.
///
/// Every `/users` route sits behind the bearer middleware; `/health` stays
/// open for probes.
pub fn build_router(state: GatewayState) -> Router {
    let state = Arc::new(state);

    let protected = rest::create_rest_routes().route_layer(axum::middleware::from_fn_with_state(
        Arc::clone(&state),
        middleware::auth_middleware,
    ));

    Router::new()
        .merge(protected)
        .route("/health", get(rest::health_check))
        .layer(middleware::create_trace_middleware())
        .with_state(state)
}
