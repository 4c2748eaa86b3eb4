use super::extract::AddItemForm;
use crate::db::models::{DbItem, ItemCreate};
use crate::error::BazaarError;
use crate::server::router::BazaarState;
use axum::{
    Json,
    extract::{Path, State},
};
use bazaar_schema::{AddItemResponse, ItemList, ItemPayload};
use tracing::info;

fn item_payload(row: DbItem) -> ItemPayload {
    ItemPayload {
        id: row.id,
        name: row.name,
        category: row.category,
        image_name: row.image_name,
    }
}

/// `POST /items`: store the uploaded image, then insert the item row.
pub async fn add_item_handler(
    State(state): State<BazaarState>,
    form: AddItemForm,
) -> Result<Json<AddItemResponse>, BazaarError> {
    let image_name = state.images.save(&form.image).await?;

    let id = state
        .db
        .create_item(ItemCreate {
            name: form.name.clone(),
            category: form.category,
            image_name: Some(image_name),
        })
        .await?;
    info!(item_id = id, name = %form.name, "item received");

    Ok(Json(AddItemResponse::received(&form.name)))
}

/// `GET /items`: all items, oldest first.
pub async fn list_items_handler(
    State(state): State<BazaarState>,
) -> Result<Json<ItemList>, BazaarError> {
    let rows = state.db.list_items().await?;
    Ok(Json(ItemList::from_items(
        rows.into_iter().map(item_payload),
    )))
}

/// `GET /items/{item_id}`: one item by database id.
pub async fn get_item_handler(
    State(state): State<BazaarState>,
    Path(item_id): Path<i64>,
) -> Result<Json<ItemPayload>, BazaarError> {
    let row = state
        .db
        .get_item_by_id(item_id)
        .await?
        .ok_or(BazaarError::ItemNotFound(item_id))?;

    Ok(Json(item_payload(row)))
}
