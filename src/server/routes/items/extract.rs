use crate::error::BazaarError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
};
use tracing::debug;

/// Parsed `multipart/form-data` body for `POST /items`.
pub struct AddItemForm {
    pub name: String,
    pub category: String,
    pub image: Bytes,
}

impl<S> FromRequest<S> for AddItemForm
where
    S: Send + Sync,
{
    type Rejection = BazaarError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| BazaarError::BadMultipart(rejection.to_string()))?;

        let mut name: Option<String> = None;
        let mut category: Option<String> = None;
        let mut image: Option<Bytes> = None;

        while let Some(field) = multipart.next_field().await? {
            let field_name = field.name().map(str::to_string);
            match field_name.as_deref() {
                Some("name") => name = Some(field.text().await?),
                Some("category") => category = Some(field.text().await?),
                Some("image") => image = Some(field.bytes().await?),
                other => {
                    debug!(field = ?other, "ignoring unknown multipart field");
                }
            }
        }

        let name = name
            .filter(|v| !v.is_empty())
            .ok_or_else(|| BazaarError::Validation("name is required".to_string()))?;
        let category = category
            .filter(|v| !v.is_empty())
            .ok_or_else(|| BazaarError::Validation("category is required".to_string()))?;
        let image =
            image.ok_or_else(|| BazaarError::Validation("image is required".to_string()))?;

        Ok(AddItemForm {
            name,
            category,
            image,
        })
    }
}
