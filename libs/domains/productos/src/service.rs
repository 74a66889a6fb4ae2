//! Producto Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductoResult;
use crate::models::{CreateProducto, Producto, UpdateProducto};
use crate::repository::ProductoRepository;

/// Producto service providing business logic operations
///
/// Lookups of a missing producto resolve to `Ok(None)`; deciding how to
/// surface absence (404, empty list, ...) belongs to the HTTP layer.
pub struct ProductoService<R: ProductoRepository> {
    repository: Arc<R>,
}

impl<R: ProductoRepository> ProductoService<R> {
    /// Create a new ProductoService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all productos
    #[instrument(skip(self))]
    pub async fn list_productos(&self) -> ProductoResult<Vec<Producto>> {
        self.repository.find_all().await
    }

    /// Get a producto by id
    #[instrument(skip(self))]
    pub async fn get_producto(&self, id: &str) -> ProductoResult<Option<Producto>> {
        self.repository.find_by_id(id).await
    }

    /// Create a new producto
    #[instrument(skip(self, input), fields(nombre = %input.nombre))]
    pub async fn create_producto(&self, input: CreateProducto) -> ProductoResult<Producto> {
        self.repository.insert(input).await
    }

    /// Update an existing producto by full overwrite.
    ///
    /// Returns `Ok(None)` when no producto with that id exists; nothing
    /// is inserted in that case.
    #[instrument(skip(self, input))]
    pub async fn update_producto(
        &self,
        id: &str,
        input: UpdateProducto,
    ) -> ProductoResult<Option<Producto>> {
        match self.repository.find_by_id(id).await? {
            Some(mut existing) => {
                existing.apply_update(input);
                self.repository.replace(&existing).await?;
                Ok(Some(existing))
            }
            None => Ok(None),
        }
    }

    /// Delete a producto by id.
    ///
    /// Idempotent: deleting an id that does not exist succeeds the same
    /// way as deleting one that does.
    #[instrument(skip(self))]
    pub async fn delete_producto(&self, id: &str) -> ProductoResult<()> {
        self.repository.delete_by_id(id).await?;
        Ok(())
    }
}

impl<R: ProductoRepository> Clone for ProductoService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
