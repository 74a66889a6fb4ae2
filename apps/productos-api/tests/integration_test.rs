//! Integration tests for the Productos API
//!
//! These run the full HTTP stack (router, OpenAPI wiring, basic auth
//! middleware) against a real MongoDB via testcontainers, and talk to
//! it over a real TCP socket with reqwest.

use axum::Router;
use axum_helpers::{basic_auth_middleware, BasicAuthConfig};
use domain_productos::{handlers, MongoProductoRepository, ProductoService};
use serde_json::{json, Value};
use std::net::SocketAddr;
use test_utils::{assertions::*, TestDataBuilder, TestMongo};
use utoipa::OpenApi;

const USERNAME: &str = "usuario";
const PASSWORD: &str = "clave123";

#[derive(OpenApi)]
#[openapi(nest(
    (path = "/api/productos", api = domain_productos::ApiDoc)
))]
struct ApiDoc;

/// Build the app the way main.rs does and serve it on an ephemeral port.
async fn spawn_app(mongo: &TestMongo, db_name: &str) -> SocketAddr {
    let repository = MongoProductoRepository::new(mongo.database(db_name));
    let service = ProductoService::new(repository);

    let auth = BasicAuthConfig::new(USERNAME, PASSWORD);
    let api_routes = Router::new()
        .nest("/productos", handlers::router(service))
        .layer(axum::middleware::from_fn_with_state(
            auth,
            basic_auth_middleware,
        ));

    let app = axum_helpers::create_router::<ApiDoc>(api_routes)
        .await
        .unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service()).await.unwrap();
    });

    addr
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn test_full_crud_flow() {
    let mongo = TestMongo::new().await;
    let addr = spawn_app(&mongo, "integration_crud").await;
    let base = format!("http://{}/api/productos", addr);
    let client = client();

    let builder = TestDataBuilder::from_test_name("integration_crud");
    let nombre = builder.name("producto", "laptop");
    let updated_nombre = builder.name("producto", "laptop-pro");

    // Create
    let response = client
        .post(&base)
        .basic_auth(USERNAME, Some(PASSWORD))
        .json(&json!({ "nombre": nombre, "precio": 2800.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let created: Value = response.json().await.unwrap();
    let id = assert_some(created["id"].as_str(), "created producto id").to_string();
    assert!(!id.is_empty());
    assert_eq!(created["nombre"], nombre.as_str());
    assert_eq!(created["precio"], 2800.0);

    // Get by id
    let response = client
        .get(format!("{}/{}", base, id))
        .basic_auth(USERNAME, Some(PASSWORD))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let fetched: Value = response.json().await.unwrap();
    assert_eq!(fetched, created);

    // Update (full overwrite)
    let response = client
        .put(format!("{}/{}", base, id))
        .basic_auth(USERNAME, Some(PASSWORD))
        .json(&json!({ "nombre": updated_nombre, "precio": 3200.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["nombre"], updated_nombre.as_str());

    // List contains exactly the one producto
    let response = client
        .get(&base)
        .basic_auth(USERNAME, Some(PASSWORD))
        .send()
        .await
        .unwrap();
    let listed: Vec<Value> = response.json().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["nombre"], updated_nombre.as_str());

    // Delete returns 200 with an empty body
    let response = client
        .delete(format!("{}/{}", base, id))
        .basic_auth(USERNAME, Some(PASSWORD))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(response.bytes().await.unwrap().is_empty());

    // Gone afterwards
    let response = client
        .get(format!("{}/{}", base, id))
        .basic_auth(USERNAME, Some(PASSWORD))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_unknown_producto_returns_404() {
    let mongo = TestMongo::new().await;
    let addr = spawn_app(&mongo, "integration_update_404").await;
    let client = client();

    let builder = TestDataBuilder::from_test_name("integration_update_404");
    let response = client
        .put(format!("http://{}/api/productos/{}", addr, builder.id()))
        .basic_auth(USERNAME, Some(PASSWORD))
        .json(&json!({ "nombre": builder.name("producto", "fantasma"), "precio": 1.0 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let mongo = TestMongo::new().await;
    let addr = spawn_app(&mongo, "integration_delete_idempotent").await;
    let client = client();

    let builder = TestDataBuilder::from_test_name("integration_delete_idempotent");
    let response = client
        .delete(format!("http://{}/api/productos/{}", addr, builder.id()))
        .basic_auth(USERNAME, Some(PASSWORD))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn test_request_without_credentials_is_rejected() {
    let mongo = TestMongo::new().await;
    let addr = spawn_app(&mongo, "integration_no_auth").await;
    let client = client();

    let response = client
        .get(format!("http://{}/api/productos", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key("www-authenticate"));
}

#[tokio::test]
async fn test_request_with_wrong_credentials_is_rejected() {
    let mongo = TestMongo::new().await;
    let addr = spawn_app(&mongo, "integration_bad_auth").await;
    let client = client();

    let response = client
        .get(format!("http://{}/api/productos", addr))
        .basic_auth(USERNAME, Some("wrong-password"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let mongo = TestMongo::new().await;
    let addr = spawn_app(&mongo, "integration_unknown_route").await;
    let client = client();

    let response = client
        .get(format!("http://{}/api/desconocido", addr))
        .basic_auth(USERNAME, Some(PASSWORD))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unsupported_method_returns_405() {
    let mongo = TestMongo::new().await;
    let addr = spawn_app(&mongo, "integration_method_not_allowed").await;
    let client = client();

    let builder = TestDataBuilder::from_test_name("integration_method_not_allowed");
    let response = client
        .patch(format!("http://{}/api/productos/{}", addr, builder.id()))
        .basic_auth(USERNAME, Some(PASSWORD))
        .json(&json!({ "nombre": builder.name("producto", "parche"), "precio": 1.0 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);

    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "METHOD_NOT_ALLOWED");
}
