//! Favorite books

use biblio_shared::{urls, Favorite, MutationOutcome};
use leptos::logging::warn;
use reqwasm::http::Method;
use serde_json::json;

use super::{get, request, ApiError, Body};

/// 201 on success, 409 when the book is already a favorite
pub async fn create(book_id: i64) -> Result<MutationOutcome, ApiError> {
    request(
        urls::FAVORITES_CREATE,
        Method::POST,
        Body::Json(json!({ "book_id": book_id })),
    )
    .await
    .map(super::Reply::into_outcome)
}

pub async fn load_all() -> Vec<Favorite> {
    match get(urls::FAVORITES_ALL).await {
        Ok(reply) if reply.ok() => reply.decode().unwrap_or_default(),
        Ok(_) | Err(_) => Vec::new(),
    }
}

pub async fn load_for_user() -> Vec<Favorite> {
    match get(urls::FAVORITES_USER).await {
        Ok(reply) if reply.ok() => reply.decode().unwrap_or_default(),
        Ok(_) | Err(_) => Vec::new(),
    }
}

pub async fn delete(favorite_id: i64) -> Result<MutationOutcome, ApiError> {
    request(
        urls::FAVORITES_DELETE,
        Method::DELETE,
        Body::Json(json!({ "fav_id": favorite_id })),
    )
    .await
    .map(|reply| {
        if !reply.ok() {
            warn!("Failed to remove favorite {favorite_id}: status {}", reply.status);
        }
        reply.into_outcome()
    })
}
