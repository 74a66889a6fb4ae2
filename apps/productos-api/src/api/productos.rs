//! Productos API routes
//!
//! Wires up the productos domain to HTTP routes.

use axum::Router;
use domain_productos::{handlers, MongoProductoRepository, ProductoService};

use crate::state::AppState;

/// Create productos router
pub fn router(state: &AppState) -> Router {
    let repository = MongoProductoRepository::new(state.db.clone());
    let service = ProductoService::new(repository);

    handlers::router(service)
}
