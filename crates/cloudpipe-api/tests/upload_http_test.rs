//! HTTP-level tests for the media routes, with the provider stubbed out.

mod helpers;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use cloudpipe_api::setup::routes::setup_routes;
use cloudpipe_api::{AppState, CloudMediaService};
use cloudpipe_core::Config;
use helpers::{asset, StubCloudinary};
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

fn test_config(dest: &Path) -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        cloud_name: "demo".to_string(),
        api_key: "key".to_string(),
        api_secret: "secret".to_string(),
        upload_dest: dest.to_path_buf(),
        max_file_size_bytes: 10 * 1024 * 1024,
    }
}

fn test_server(stub: Arc<StubCloudinary>, dest: &Path) -> TestServer {
    let config = test_config(dest);
    let state = Arc::new(AppState {
        config: config.clone(),
        media: CloudMediaService::new(stub),
    });
    let router = setup_routes(&config, state).unwrap();
    TestServer::new(router).unwrap()
}

fn png_form() -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(b"png bytes".to_vec())
            .file_name("abc.png")
            .mime_type("image/png"),
    )
}

#[tokio::test]
async fn upload_returns_created_with_provider_descriptor() {
    let stub = Arc::new(StubCloudinary::returning(asset(
        "avatars/abc",
        "https://x/avatars/abc.png",
    )));
    let dir = tempdir().unwrap();
    let server = test_server(stub.clone(), dir.path());

    let response = server
        .post("/api/v0/media")
        .add_query_param("folder", "avatars")
        .add_query_param("delete_local_file", "true")
        .multipart(png_form())
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["public_id"], "avatars/abc");
    assert_eq!(body["url"], "https://x/avatars/abc.png");

    // Staged under the original filename, then removed after the upload.
    assert!(!dir.path().join("abc.png").exists());
    let uploads = stub.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].params.get("folder").unwrap(), "avatars");
}

#[tokio::test]
async fn upload_keeps_staged_file_when_deletion_not_requested() {
    let stub = Arc::new(StubCloudinary::ok());
    let dir = tempdir().unwrap();
    let server = test_server(stub, dir.path());

    let response = server
        .post("/api/v0/media")
        .add_query_param("folder", "avatars")
        .multipart(png_form())
        .await;

    response.assert_status(StatusCode::CREATED);
    assert!(dir.path().join("abc.png").exists());
}

#[tokio::test]
async fn upload_without_file_field_is_rejected() {
    let stub = Arc::new(StubCloudinary::ok());
    let dir = tempdir().unwrap();
    let server = test_server(stub.clone(), dir.path());

    let form = MultipartForm::new().add_text("note", "no file here");
    let response = server
        .post("/api/v0/media")
        .add_query_param("folder", "avatars")
        .multipart(form)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(stub.uploads.lock().unwrap().is_empty());
}

#[tokio::test]
async fn upload_over_size_limit_is_rejected_with_error_body() {
    let stub = Arc::new(StubCloudinary::ok());
    let dir = tempdir().unwrap();
    let mut config = test_config(dir.path());
    config.max_file_size_bytes = 1024;
    let state = Arc::new(AppState {
        config: config.clone(),
        media: CloudMediaService::new(stub.clone()),
    });
    let server = TestServer::new(setup_routes(&config, state).unwrap()).unwrap();

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(vec![0u8; 4096])
            .file_name("big.bin")
            .mime_type("application/octet-stream"),
    );
    let response = server
        .post("/api/v0/media")
        .add_query_param("folder", "avatars")
        .multipart(form)
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");
    // Nothing was staged or forwarded.
    assert!(!dir.path().join("big.bin").exists());
    assert!(stub.uploads.lock().unwrap().is_empty());
}

#[tokio::test]
async fn upload_provider_failure_maps_to_bad_gateway() {
    let stub = Arc::new(StubCloudinary::failing());
    let dir = tempdir().unwrap();
    let server = test_server(stub, dir.path());

    let response = server
        .post("/api/v0/media")
        .add_query_param("folder", "avatars")
        .multipart(png_form())
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "cloud upload failed");
    assert_eq!(body["code"], "UPLOAD_FAILED");
}

#[tokio::test]
async fn delete_media_passes_full_public_id() {
    let stub = Arc::new(StubCloudinary::ok());
    let dir = tempdir().unwrap();
    let server = test_server(stub.clone(), dir.path());

    let response = server.delete("/api/v0/media/avatars/abc").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["result"], "ok");
    assert_eq!(stub.destroys.lock().unwrap().as_slice(), ["avatars/abc"]);
}

#[tokio::test]
async fn delete_folder_passes_prefix() {
    let stub = Arc::new(StubCloudinary::ok());
    let dir = tempdir().unwrap();
    let server = test_server(stub.clone(), dir.path());

    let response = server.delete("/api/v0/folders/avatars").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(stub.prefix_deletes.lock().unwrap().as_slice(), ["avatars"]);
}

#[tokio::test]
async fn health_endpoint_reports_alive() {
    let stub = Arc::new(StubCloudinary::ok());
    let dir = tempdir().unwrap();
    let server = test_server(stub, dir.path());

    let response = server.get("/health").await;
    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "alive");
}
