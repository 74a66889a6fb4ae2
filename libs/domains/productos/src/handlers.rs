use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse},
    AppError,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateProducto, Producto, UpdateProducto};
use crate::repository::ProductoRepository;
use crate::service::ProductoService;

/// OpenAPI documentation for the Productos API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_productos,
        create_producto,
        get_producto,
        update_producto,
        delete_producto,
    ),
    components(
        schemas(Producto, CreateProducto, UpdateProducto),
        responses(NotFoundResponse, UnauthorizedResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Productos", description = "Product catalog endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the productos router with all HTTP endpoints
pub fn router<R: ProductoRepository + 'static>(service: ProductoService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_productos).post(create_producto))
        .route(
            "/{id}",
            get(get_producto).put(update_producto).delete(delete_producto),
        )
        .with_state(shared_service)
}

/// List all productos
#[utoipa::path(
    get,
    path = "",
    tag = "Productos",
    responses(
        (status = 200, description = "List of productos", body = Vec<Producto>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_productos<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
) -> Result<Json<Vec<Producto>>, AppError> {
    let productos = service.list_productos().await?;
    Ok(Json(productos))
}

/// Create a new producto
///
/// Returns 200 with the stored producto, including its assigned id.
#[utoipa::path(
    post,
    path = "",
    tag = "Productos",
    request_body = CreateProducto,
    responses(
        (status = 200, description = "Producto created", body = Producto),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_producto<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
    Json(input): Json<CreateProducto>,
) -> Result<impl IntoResponse, AppError> {
    let producto = service.create_producto(input).await?;
    Ok((StatusCode::OK, Json(producto)))
}

/// Get a producto by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Productos",
    params(
        ("id" = String, Path, description = "Producto id")
    ),
    responses(
        (status = 200, description = "Producto found", body = Producto),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_producto<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Producto>, AppError> {
    let producto = service
        .get_producto(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Producto {} not found", id)))?;
    Ok(Json(producto))
}

/// Update a producto by full overwrite
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Productos",
    params(
        ("id" = String, Path, description = "Producto id")
    ),
    request_body = UpdateProducto,
    responses(
        (status = 200, description = "Producto updated", body = Producto),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_producto<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProducto>,
) -> Result<Json<Producto>, AppError> {
    let producto = service
        .update_producto(&id, input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Producto {} not found", id)))?;
    Ok(Json(producto))
}

/// Delete a producto
///
/// Idempotent: returns 200 with an empty body whether or not the id existed.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Productos",
    params(
        ("id" = String, Path, description = "Producto id")
    ),
    responses(
        (status = 200, description = "Producto deleted"),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_producto<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    service.delete_producto(&id).await?;
    Ok(StatusCode::OK)
}
