use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Content-addressed file name under the image directory, if an image was uploaded.
    pub image_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to insert a new item row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCreate {
    pub name: String,
    pub category: String,
    pub image_name: Option<String>,
}
