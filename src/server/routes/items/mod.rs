pub mod extract;
pub mod handlers;

use crate::server::router::BazaarState;
use handlers::{add_item_handler, get_item_handler, list_items_handler};

use axum::{
    Router,
    routing::{get, post},
};

pub fn router() -> Router<BazaarState> {
    Router::new()
        .route("/items", post(add_item_handler).get(list_items_handler))
        .route("/items/{item_id}", get(get_item_handler))
}
