use axum::Json;
use bazaar_schema::HelloResponse;

/// Liveness greeting for `GET /`.
pub async fn hello_handler() -> Json<HelloResponse> {
    Json(HelloResponse::default())
}
