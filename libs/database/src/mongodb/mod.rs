//! MongoDB connector and helpers
//!
//! Connection management with retry, plus health probes.

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{MongoError, connect_from_config, connect_from_config_with_retry};
pub use health::{HealthStatus, check_health};

// Re-export driver types so consumers don't need a direct mongodb dep for these
pub use mongodb::{Client, Collection, Database};
