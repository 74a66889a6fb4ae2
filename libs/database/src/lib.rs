//! Database library providing the MongoDB connector used by the catalog services.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - Everything
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017");
//! let client = connect_from_config(&config).await?;
//! let db = client.database("catalogo");
//! let collection = db.collection::<Document>("productos");
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;
