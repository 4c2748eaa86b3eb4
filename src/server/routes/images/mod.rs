pub mod handlers;

use crate::server::router::BazaarState;
use handlers::get_image_handler;

use axum::{Router, routing::get};

pub fn router() -> Router<BazaarState> {
    Router::new().route("/image/{image_name}", get(get_image_handler))
}
