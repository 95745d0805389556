//! Borrowing and returning books

use biblio_shared::{urls, Borrowing, MutationOutcome};
use leptos::logging::warn;
use reqwasm::http::Method;
use serde_json::json;

use super::{get, request, ApiError, Body};

/// 201 on success, 409 when this user already holds the book, 401 without a
/// session; the caller branches on the outcome
pub async fn borrow(book_id: i64) -> Result<MutationOutcome, ApiError> {
    request(
        urls::BORROWINGS_BORROW,
        Method::POST,
        Body::Json(json!({ "book_id": book_id })),
    )
    .await
    .map(super::Reply::into_outcome)
}

pub async fn return_book(borrowing_id: i64) -> Result<MutationOutcome, ApiError> {
    request(
        &urls::borrowing_return(borrowing_id),
        Method::PUT,
        Body::Json(json!({ "borrowing_id": borrowing_id })),
    )
    .await
    .map(super::Reply::into_outcome)
}

pub async fn load_all() -> Vec<Borrowing> {
    match get(urls::BORROWINGS_ALL).await {
        Ok(reply) if reply.status == 200 => reply.decode().unwrap_or_default(),
        Ok(reply) => {
            warn!("Failed to load borrowings: status {}", reply.status);
            Vec::new()
        }
        Err(e) => {
            warn!("Failed to load borrowings: {e}");
            Vec::new()
        }
    }
}
