//! Item endpoints: CRUD, image upload, and the category/location lookups
//! the item forms need.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use super::error::ApiError;
use super::http;
#[cfg(feature = "hydrate")]
use super::types::ItemImage;
use super::types::{Category, Item, ItemPayload, ItemStatus, Location};

/// Server-side filters for the item list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemQuery {
    pub status: Option<ItemStatus>,
    pub category_id: Option<i64>,
    pub search: Option<String>,
}

impl ItemQuery {
    /// Query pairs in the order the server documents them; unset filters
    /// are omitted entirely.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_owned()));
        }
        if let Some(category_id) = self.category_id {
            pairs.push(("category_id", category_id.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

fn item_path(item_id: i64) -> String {
    format!("/items/{item_id}")
}

/// List items matching the query via `GET /items/`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn list(query: &ItemQuery) -> Result<Vec<Item>, ApiError> {
    let path = format!("/items/{}", http::query_string(&query.to_pairs()));
    http::get_json(&path).await
}

/// Fetch one item via `GET /items/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn get(item_id: i64) -> Result<Item, ApiError> {
    http::get_json(&item_path(item_id)).await
}

/// Register a new item via `POST /items/`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn create(payload: &ItemPayload) -> Result<Item, ApiError> {
    http::post_json("/items/", payload).await
}

/// Update an item via `PUT /items/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn update(item_id: i64, payload: &ItemPayload) -> Result<Item, ApiError> {
    http::put_json(&item_path(item_id), payload).await
}

/// Delete an item via `DELETE /items/{id}`. Owner or admin only,
/// enforced server-side.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn remove(item_id: i64) -> Result<(), ApiError> {
    http::delete(&item_path(item_id)).await
}

/// Attach a photo via `POST /items/{id}/images`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure, including a browser
/// refusing to build the multipart form.
#[cfg(feature = "hydrate")]
pub async fn upload_image(item_id: i64, file: &web_sys::File) -> Result<ItemImage, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build upload form".to_owned()))?;
    form.append_with_blob("file", file)
        .map_err(|_| ApiError::Network("could not build upload form".to_owned()))?;
    http::post_multipart(&format!("/items/{item_id}/images"), form).await
}

/// All item categories via `GET /items/categories/all`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn categories() -> Result<Vec<Category>, ApiError> {
    http::get_json("/items/categories/all").await
}

/// All campus locations via `GET /items/locations/all`.
///
/// # Errors
///
/// Returns [`ApiError`] on any request failure.
pub async fn locations() -> Result<Vec<Location>, ApiError> {
    http::get_json("/items/locations/all").await
}
