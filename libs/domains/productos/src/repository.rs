use async_trait::async_trait;

use crate::error::ProductoResult;
use crate::models::{CreateProducto, Producto};

/// Repository trait for Producto persistence
///
/// Defines the data access interface for productos. Implementations can
/// use different storage backends (MongoDB, in-memory for tests, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductoRepository: Send + Sync {
    /// List every stored producto
    async fn find_all(&self) -> ProductoResult<Vec<Producto>>;

    /// Find a producto by its id, `Ok(None)` when absent
    async fn find_by_id(&self, id: &str) -> ProductoResult<Option<Producto>>;

    /// Insert a new producto and return it with its assigned id
    async fn insert(&self, input: CreateProducto) -> ProductoResult<Producto>;

    /// Replace the stored document matching `producto.id` in full
    async fn replace(&self, producto: &Producto) -> ProductoResult<()>;

    /// Delete a producto by id; returns whether a document was removed
    async fn delete_by_id(&self, id: &str) -> ProductoResult<bool>;

    /// Delete every producto, returning the number removed
    async fn delete_all(&self) -> ProductoResult<u64>;
}
