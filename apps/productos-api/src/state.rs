//! Application state management.
//!
//! Shared application state passed to all request handlers:
//! - Configuration
//! - MongoDB client and database

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned for each handler (inexpensive Arc clones).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
}
