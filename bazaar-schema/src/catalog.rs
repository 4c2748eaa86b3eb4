use serde::{Deserialize, Serialize};

/// A single catalog item as exposed over HTTP.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ItemPayload {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Serialized as an explicit `null` when no image was uploaded.
    pub image_name: Option<String>,
}

/// Envelope returned by `GET /items`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ItemList {
    pub items: Vec<ItemPayload>,
}

impl ItemList {
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = ItemPayload>,
    {
        Self {
            items: items.into_iter().collect(),
        }
    }
}

/// Acknowledgement returned by `POST /items`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AddItemResponse {
    pub message: String,
}

impl AddItemResponse {
    pub fn received(name: &str) -> Self {
        Self {
            message: format!("item received: {name}"),
        }
    }
}
