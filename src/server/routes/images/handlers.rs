use crate::error::BazaarError;
use crate::server::router::BazaarState;
use axum::{
    extract::{Path, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};

/// `GET /image/{image_name}`: serve a stored image, falling back to the default.
pub async fn get_image_handler(
    State(state): State<BazaarState>,
    Path(image_name): Path<String>,
) -> Result<Response, BazaarError> {
    let bytes = state.images.read(&image_name).await?;
    Ok(([(CONTENT_TYPE, "image/jpeg")], bytes).into_response())
}
