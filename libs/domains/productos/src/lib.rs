//! Productos Domain
//!
//! A complete domain implementation for a product catalog backed by MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_productos::{
//!     handlers,
//!     mongodb::MongoProductoRepository,
//!     service::ProductoService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("catalogo");
//!
//! let repository = MongoProductoRepository::new(db);
//! let service = ProductoService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductoError, ProductoResult};
pub use handlers::ApiDoc;
pub use models::{CreateProducto, Producto, UpdateProducto};
pub use mongodb::MongoProductoRepository;
pub use repository::ProductoRepository;
pub use service::ProductoService;
