//! MongoDB implementation of ProductoRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ProductoResult;
use crate::models::{CreateProducto, Producto};
use crate::repository::ProductoRepository;

/// Storage shape of a producto.
///
/// The wire format exposes `id`, but MongoDB keys documents by `_id`.
/// This type keeps the mapping out of the domain model.
#[derive(Debug, Serialize, Deserialize)]
struct ProductoDocument {
    #[serde(rename = "_id")]
    id: String,
    nombre: String,
    precio: f64,
}

impl From<Producto> for ProductoDocument {
    fn from(producto: Producto) -> Self {
        Self {
            id: producto.id,
            nombre: producto.nombre,
            precio: producto.precio,
        }
    }
}

impl From<ProductoDocument> for Producto {
    fn from(document: ProductoDocument) -> Self {
        Self {
            id: document.id,
            nombre: document.nombre,
            precio: document.precio,
        }
    }
}

/// MongoDB implementation of the ProductoRepository
pub struct MongoProductoRepository {
    collection: Collection<ProductoDocument>,
}

impl MongoProductoRepository {
    /// Create a new MongoProductoRepository on the default collection
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("catalogo");
    /// let repo = MongoProductoRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, "productos")
    }

    /// Create a new MongoProductoRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<ProductoDocument>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl ProductoRepository for MongoProductoRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductoResult<Vec<Producto>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<ProductoDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Producto::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> ProductoResult<Option<Producto>> {
        let document = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(document.map(Producto::from))
    }

    #[instrument(skip(self, input), fields(nombre = %input.nombre))]
    async fn insert(&self, input: CreateProducto) -> ProductoResult<Producto> {
        let document = ProductoDocument {
            id: ObjectId::new().to_hex(),
            nombre: input.nombre,
            precio: input.precio,
        };

        self.collection.insert_one(&document).await?;

        tracing::info!(producto_id = %document.id, "Producto created successfully");
        Ok(document.into())
    }

    #[instrument(skip(self, producto), fields(producto_id = %producto.id))]
    async fn replace(&self, producto: &Producto) -> ProductoResult<()> {
        let document = ProductoDocument::from(producto.clone());
        self.collection
            .replace_one(doc! { "_id": &producto.id }, &document)
            .await?;

        tracing::info!(producto_id = %producto.id, "Producto replaced successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> ProductoResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count > 0 {
            tracing::info!(producto_id = %id, "Producto deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> ProductoResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
