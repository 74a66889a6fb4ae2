use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Producto entity - a catalog entry stored in MongoDB
///
/// Prices carry no constraints on purpose: zero and negative values are
/// stored and returned untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Producto {
    /// Unique identifier, assigned by the repository on insert
    pub id: String,
    /// Product name
    pub nombre: String,
    /// Product price
    pub precio: f64,
}

/// DTO for creating a new producto
///
/// The client never supplies the id; the repository assigns it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProducto {
    pub nombre: String,
    pub precio: f64,
}

/// DTO for updating an existing producto
///
/// Both fields are required; an update is a full overwrite of the
/// stored document, there are no partial updates.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProducto {
    pub nombre: String,
    pub precio: f64,
}

impl Producto {
    /// Apply a full overwrite from an UpdateProducto DTO, keeping the id
    pub fn apply_update(&mut self, update: UpdateProducto) {
        self.nombre = update.nombre;
        self.precio = update.precio;
    }
}
