use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum BazaarError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("not a multipart request: {0}")]
    BadMultipart(String),

    #[error("bad image name: {0}")]
    BadImageName(String),

    #[error("item not found: {0}")]
    ItemNotFound(i64),

    #[error("image not found: {0}")]
    ImageNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Ractor error: {0}")]
    RactorError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl IntoResponse for BazaarError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            BazaarError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                ApiErrorObject {
                    code: "VALIDATION".to_string(),
                    message,
                    details: None,
                },
            ),

            BazaarError::Multipart(_) | BazaarError::BadMultipart(_) => (
                StatusCode::BAD_REQUEST,
                ApiErrorObject {
                    code: "BAD_MULTIPART".to_string(),
                    message: "Failed to parse multipart form data.".to_string(),
                    details: None,
                },
            ),

            BazaarError::BadImageName(message) => (
                StatusCode::BAD_REQUEST,
                ApiErrorObject {
                    code: "BAD_IMAGE_NAME".to_string(),
                    message,
                    details: None,
                },
            ),

            BazaarError::ItemNotFound(id) => (
                StatusCode::NOT_FOUND,
                ApiErrorObject {
                    code: "ITEM_NOT_FOUND".to_string(),
                    message: format!("Item {id} does not exist."),
                    details: None,
                },
            ),

            BazaarError::ImageNotFound(name) => (
                StatusCode::NOT_FOUND,
                ApiErrorObject {
                    code: "IMAGE_NOT_FOUND".to_string(),
                    message: format!("Image {name} does not exist."),
                    details: None,
                },
            ),

            BazaarError::IoError(_)
            | BazaarError::RactorError(_)
            | BazaarError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorObject {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                    details: None,
                },
            ),
        };
        (status, Json(ApiErrorBody { inner: error_body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
