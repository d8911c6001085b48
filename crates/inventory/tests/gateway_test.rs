use axum::http::StatusCode as AxumStatus;
use axum::routing::get;
use axum::Router;
use entity_store::{Lookup, StoreError};
use inventory::gateway::{Gateway, GatewayError, HttpGateway};
use inventory::http;
use inventory::lifecycle::{CatalogSystem, GatewaySystem};
use inventory::model::{Category, CategoryId};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;

async fn spawn(app: Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (base_url, handle)
}

async fn spawn_catalog() -> (String, tokio::task::JoinHandle<()>) {
    spawn(http::catalog::router(Arc::new(CatalogSystem::new()))).await
}

#[tokio::test]
async fn test_gateway_client_against_catalog() {
    let (catalog_url, catalog) = spawn_catalog().await;
    let gateway = HttpGateway::<Category>::new(format!("{catalog_url}/"));

    let created = gateway.create(Category::new("Books")).await.unwrap();
    assert_eq!(created.id, CategoryId(1));

    let updated = gateway
        .update(created.id, Category::new("Comics"))
        .await
        .unwrap();
    assert_eq!(updated.id, CategoryId(1));
    assert_eq!(updated.name, "Comics");

    let fetched = Gateway::get(&gateway, CategoryId(1)).await.unwrap();
    assert_eq!(fetched.name, "Comics");

    catalog.abort();
}

#[tokio::test]
async fn test_gateway_maps_404_to_not_found() {
    let (catalog_url, catalog) = spawn_catalog().await;
    let gateway = HttpGateway::<Category>::new(catalog_url);

    let err = Gateway::get(&gateway, CategoryId(5)).await.unwrap_err();
    assert!(err.is_not_found());

    let err = gateway
        .update(CategoryId(5), Category::new("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::NotFound { resource: "Category", .. }));

    // Used as a parent lookup, a remote 404 stays a not-found.
    let err = Lookup::get(&gateway, CategoryId(5)).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "Category", .. }));

    catalog.abort();
}

#[tokio::test]
async fn test_gateway_maps_other_failures_to_transport() {
    let app = Router::new().route(
        "/categories/:id",
        get(|| async { (AxumStatus::SERVICE_UNAVAILABLE, "catalog is down") }),
    );
    let (base_url, server) = spawn(app).await;
    let gateway = HttpGateway::<Category>::new(base_url);

    match Gateway::get(&gateway, CategoryId(1)).await.unwrap_err() {
        GatewayError::Transport { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "catalog is down");
        }
        other => panic!("expected transport error, got {other:?}"),
    }

    let err = Lookup::get(&gateway, CategoryId(1)).await.unwrap_err();
    assert!(matches!(err, StoreError::Remote(_)));

    server.abort();
}

#[tokio::test]
async fn test_unreachable_service_is_an_http_error() {
    // Bind then drop, so nothing listens on the port.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gateway = HttpGateway::<Category>::new(format!("http://{addr}"));
    let err = Gateway::get(&gateway, CategoryId(1)).await.unwrap_err();
    assert!(matches!(err, GatewayError::Http(_)));
}

#[tokio::test]
async fn test_gateway_service_forwards_to_catalog() {
    let (catalog_url, catalog) = spawn_catalog().await;
    let (gateway_url, gateway) =
        spawn(http::gateway::router(Arc::new(GatewaySystem::new(&catalog_url)))).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{gateway_url}/categories"))
        .json(&json!({ "name": "Toys" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    // Visible directly on the catalog.
    let direct: Value = client
        .get(format!("{catalog_url}/categories/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(direct["name"], "Toys");

    let res = client
        .put(format!("{gateway_url}/categories/1"))
        .json(&json!({ "name": "Games" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let via_gateway: Value = client
        .get(format!("{gateway_url}/categories/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(via_gateway["name"], "Games");

    let res = client
        .get(format!("{gateway_url}/categories/99"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .put(format!("{gateway_url}/categories/nope"))
        .json(&json!({ "name": "Games" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await.unwrap()["error"], "bad_request");

    let res = client
        .post(format!("{gateway_url}/categories"))
        .header("content-type", "application/json")
        .body("[]")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await.unwrap()["error"], "bad_request");

    gateway.abort();
    catalog.abort();
}

#[tokio::test]
async fn test_truncated_error_body_is_reported() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        // Promises 100 bytes of body, sends 7, then hangs up.
        socket
            .write_all(b"HTTP/1.1 503 Service Unavailable\r\ncontent-length: 100\r\n\r\npartial")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let gateway = HttpGateway::<Category>::new(format!("http://{addr}"));
    match Gateway::get(&gateway, CategoryId(1)).await.unwrap_err() {
        GatewayError::Transport { status, body } => {
            assert_eq!(status, 503);
            assert!(body.starts_with("<unreadable body"), "{body}");
        }
        other => panic!("expected transport error, got {other:?}"),
    }

    server.await.unwrap();
}
