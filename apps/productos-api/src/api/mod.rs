//! API routes module
//!
//! Defines all HTTP API routes for the Productos API.

pub mod health;
pub mod productos;

use axum::Router;
use axum_helpers::basic_auth_middleware;

use crate::state::AppState;

/// Create all API routes
///
/// The productos routes sit behind HTTP Basic authentication; the
/// readiness endpoint stays open for orchestrators.
/// Note: these are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    let protected = Router::new()
        .nest("/productos", productos::router(state))
        .layer(axum::middleware::from_fn_with_state(
            state.config.auth.clone(),
            basic_auth_middleware,
        ));

    protected.merge(health::router(state.clone()))
}
