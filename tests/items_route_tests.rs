use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use sha2::{Digest, Sha256};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

const BOUNDARY: &str = "bazaar-test-boundary";

fn temp_paths(tag: &str) -> (PathBuf, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut db_path = std::env::temp_dir();
    db_path.push(format!("bazaar-{tag}-{}-{}.sqlite", std::process::id(), nanos));

    let mut image_dir = std::env::temp_dir();
    image_dir.push(format!("bazaar-{tag}-images-{}-{}", std::process::id(), nanos));

    (db_path, image_dir)
}

async fn build_app(db_path: &PathBuf, image_dir: &PathBuf) -> Router {
    let database_url = format!("sqlite:{}", db_path.display());
    let db = bazaar::db::spawn(&database_url).await;
    let images = bazaar::ImageStore::open(image_dir)
        .await
        .expect("failed to open image store");

    let cfg = bazaar::config::Config::default();
    let state = bazaar::server::router::BazaarState::new(db, images, &cfg.basic.front_origin);
    bazaar::server::router::bazaar_router(state)
}

fn multipart_body(name: &str, category: &str, image: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\n{name}\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"category\"\r\n\r\n{category}\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"upload.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(image);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn post_items(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/items")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("failed to build request")
}

#[tokio::test]
async fn hello_route_returns_greeting() {
    let (db_path, image_dir) = temp_paths("hello");
    let app = build_app(&db_path, &image_dir).await;

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(
        std::str::from_utf8(&body).expect("response body was not utf-8"),
        r#"{"message":"Hello, world!","category":"default"}"#
    );

    let _ = fs::remove_file(&db_path);
    let _ = fs::remove_dir_all(&image_dir);
}

#[tokio::test]
async fn add_item_then_fetch_by_id_and_list() {
    let (db_path, image_dir) = temp_paths("add-item");
    let app = build_app(&db_path, &image_dir).await;

    let image = b"fake jpeg bytes".to_vec();
    let expected_image_name = {
        let mut hasher = Sha256::new();
        hasher.update(&image);
        format!("{:x}.jpg", hasher.finalize())
    };

    let resp = app
        .clone()
        .oneshot(post_items(multipart_body("jacket", "fashion", &image)))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(
        std::str::from_utf8(&body).expect("response body was not utf-8"),
        r#"{"message":"item received: jacket"}"#
    );

    // The stored image is content-addressed.
    assert!(image_dir.join(&expected_image_name).is_file());

    // Fetch the item back by its row id.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/items/1")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(
        std::str::from_utf8(&body).expect("response body was not utf-8"),
        format!(
            r#"{{"id":1,"name":"jacket","category":"fashion","image_name":"{expected_image_name}"}}"#
        )
    );

    // And via the list endpoint.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/items")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(
        std::str::from_utf8(&body).expect("response body was not utf-8"),
        format!(
            r#"{{"items":[{{"id":1,"name":"jacket","category":"fashion","image_name":"{expected_image_name}"}}]}}"#
        )
    );

    let _ = fs::remove_file(&db_path);
    let _ = fs::remove_dir_all(&image_dir);
}

#[tokio::test]
async fn add_item_rejects_missing_fields() {
    let (db_path, image_dir) = temp_paths("validation");
    let app = build_app(&db_path, &image_dir).await;

    // Empty category -> 400
    let resp = app
        .clone()
        .oneshot(post_items(multipart_body("jacket", "", b"img")))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(
        std::str::from_utf8(&body).expect("response body was not utf-8"),
        r#"{"error":{"code":"VALIDATION","message":"category is required"}}"#
    );

    // No multipart fields at all -> 400 (name missing first)
    let body = format!("--{BOUNDARY}--\r\n").into_bytes();
    let resp = app
        .clone()
        .oneshot(post_items(body))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Nothing was persisted.
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/items")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(
        std::str::from_utf8(&body).expect("response body was not utf-8"),
        r#"{"items":[]}"#
    );

    let _ = fs::remove_file(&db_path);
    let _ = fs::remove_dir_all(&image_dir);
}

#[tokio::test]
async fn add_item_rejects_non_multipart_body() {
    let (db_path, image_dir) = temp_paths("non-multipart");
    let app = build_app(&db_path, &image_dir).await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/items")
                .header("content-type", "text/plain")
                .body(Body::from("name=jacket"))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(
        std::str::from_utf8(&body).expect("response body was not utf-8"),
        r#"{"error":{"code":"BAD_MULTIPART","message":"Failed to parse multipart form data."}}"#
    );

    let _ = fs::remove_file(&db_path);
    let _ = fs::remove_dir_all(&image_dir);
}

#[tokio::test]
async fn unknown_item_id_maps_to_404() {
    let (db_path, image_dir) = temp_paths("unknown-id");
    let app = build_app(&db_path, &image_dir).await;

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/items/999")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(
        std::str::from_utf8(&body).expect("response body was not utf-8"),
        r#"{"error":{"code":"ITEM_NOT_FOUND","message":"Item 999 does not exist."}}"#
    );

    let _ = fs::remove_file(&db_path);
    let _ = fs::remove_dir_all(&image_dir);
}
