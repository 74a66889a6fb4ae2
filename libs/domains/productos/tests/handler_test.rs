//! Handler tests for the Productos domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//!
//! Unlike the app-level integration tests, these exercise ONLY the
//! productos domain router, not routing, auth middleware, etc.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_productos::*;
use http_body_util::BodyExt;
use serde_json::json;
use test_utils::{assertions::*, TestDataBuilder, TestMongo};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn setup(mongo: &TestMongo, db_name: &str) -> ProductoService<MongoProductoRepository> {
    let repo = MongoProductoRepository::new(mongo.database(db_name));
    ProductoService::new(repo)
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn put_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_create_producto_returns_200_with_id() {
    let mongo = TestMongo::new().await;
    let service = setup(&mongo, "handler_create").await;
    let app = handlers::router(service);

    let builder = TestDataBuilder::from_test_name("handler_create");
    let nombre = builder.name("producto", "main");

    let response = app
        .oneshot(post_json("/", json!({ "nombre": nombre, "precio": 1500.0 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let producto: Producto = json_body(response.into_body()).await;
    assert!(!producto.id.is_empty());
    assert_eq!(producto.nombre, nombre);
    assert_eq!(producto.precio, 1500.0);
}

#[tokio::test]
async fn test_list_productos_returns_created_records() {
    let mongo = TestMongo::new().await;
    let service = setup(&mongo, "handler_list").await;

    let builder = TestDataBuilder::from_test_name("handler_list");
    let laptop = builder.name("producto", "laptop");
    let celular = builder.name("producto", "celular");

    service
        .create_producto(CreateProducto {
            nombre: laptop.clone(),
            precio: 1500.0,
        })
        .await
        .unwrap();
    service
        .create_producto(CreateProducto {
            nombre: celular.clone(),
            precio: 800.0,
        })
        .await
        .unwrap();

    let app = handlers::router(service);
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let productos: Vec<Producto> = json_body(response.into_body()).await;
    assert_eq!(productos.len(), 2);
    let nombres: Vec<&str> = productos.iter().map(|p| p.nombre.as_str()).collect();
    assert!(nombres.contains(&laptop.as_str()));
    assert!(nombres.contains(&celular.as_str()));
}

#[tokio::test]
async fn test_get_producto_by_id() {
    let mongo = TestMongo::new().await;
    let service = setup(&mongo, "handler_get").await;

    let builder = TestDataBuilder::from_test_name("handler_get");
    let created = service
        .create_producto(CreateProducto {
            nombre: builder.name("producto", "main"),
            precio: 1500.0,
        })
        .await
        .unwrap();

    let app = handlers::router(service);
    let request = Request::builder()
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let producto: Producto = json_body(response.into_body()).await;
    assert_eq!(producto, created);
}

#[tokio::test]
async fn test_get_unknown_producto_returns_404() {
    let mongo = TestMongo::new().await;
    let service = setup(&mongo, "handler_get_404").await;
    let app = handlers::router(service);

    let builder = TestDataBuilder::from_test_name("handler_get_404");
    let unknown_id = builder.id().to_string();

    let request = Request::builder()
        .uri(format!("/{}", unknown_id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_producto_overwrites_document() {
    let mongo = TestMongo::new().await;
    let service = setup(&mongo, "handler_update").await;

    let builder = TestDataBuilder::from_test_name("handler_update");
    let created = service
        .create_producto(CreateProducto {
            nombre: builder.name("producto", "before"),
            precio: 1500.0,
        })
        .await
        .unwrap();

    let updated_nombre = builder.name("producto", "after");

    let app = handlers::router(service.clone());
    let response = app
        .oneshot(put_json(
            &format!("/{}", created.id),
            json!({ "nombre": updated_nombre, "precio": 1999.99 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let updated: Producto = json_body(response.into_body()).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.nombre, updated_nombre);
    assert_eq!(updated.precio, 1999.99);

    // The stored document reflects the overwrite
    let stored = service.get_producto(&created.id).await.unwrap();
    let stored = assert_some(stored, "updated producto should exist");
    assert_eq!(stored.nombre, updated_nombre);
}

#[tokio::test]
async fn test_update_unknown_producto_returns_404_and_inserts_nothing() {
    let mongo = TestMongo::new().await;
    let service = setup(&mongo, "handler_update_404").await;

    let builder = TestDataBuilder::from_test_name("handler_update_404");
    let unknown_id = builder.id().to_string();

    let app = handlers::router(service.clone());
    let response = app
        .oneshot(put_json(
            &format!("/{}", unknown_id),
            json!({ "nombre": builder.name("producto", "fantasma"), "precio": 1.0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(service.list_productos().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_producto_returns_200_empty_body() {
    let mongo = TestMongo::new().await;
    let service = setup(&mongo, "handler_delete").await;

    let builder = TestDataBuilder::from_test_name("handler_delete");
    let created = service
        .create_producto(CreateProducto {
            nombre: builder.name("producto", "main"),
            precio: 1500.0,
        })
        .await
        .unwrap();

    let app = handlers::router(service.clone());
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let gone = service.get_producto(&created.id).await.unwrap();
    assert_none(gone, "deleted producto should be gone");
}

#[tokio::test]
async fn test_delete_unknown_producto_still_returns_200() {
    let mongo = TestMongo::new().await;
    let service = setup(&mongo, "handler_delete_idempotent").await;
    let app = handlers::router(service);

    let builder = TestDataBuilder::from_test_name("handler_delete_idempotent");
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", builder.id()))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_producto_with_zero_price() {
    let mongo = TestMongo::new().await;
    let service = setup(&mongo, "handler_zero_price").await;
    let app = handlers::router(service);

    let builder = TestDataBuilder::from_test_name("handler_zero_price");
    let response = app
        .oneshot(post_json(
            "/",
            json!({ "nombre": builder.name("producto", "muestra"), "precio": 0.0 }),
        ))
        .await
        .unwrap();

    // No price validation: zero is stored as-is
    assert_eq!(response.status(), StatusCode::OK);

    let producto: Producto = json_body(response.into_body()).await;
    assert_eq!(producto.precio, 0.0);
}
