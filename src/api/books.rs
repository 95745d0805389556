//! Book listing and administration

use biblio_shared::{urls, Book, BookPage, MutationOutcome};
use leptos::logging::warn;
use reqwasm::http::Method;
use web_sys::FormData;

use super::{get, request, ApiError, Body};

/// One page of the public listing. Failures render as an empty shelf, not
/// an error state.
pub async fn load_page(query: Option<String>, page: u32) -> BookPage {
    let mut endpoint = format!("{}?page={page}", urls::BOOKS_ALL);
    if let Some(q) = query.filter(|q| !q.trim().is_empty()) {
        endpoint.push_str(&format!("&q={}", urlencoding::encode(q.trim())));
    }

    match get(&endpoint).await {
        Ok(reply) if reply.status == 200 => reply.decode().unwrap_or_else(|e| {
            warn!("Unexpected shape from the book listing: {e}");
            BookPage::default()
        }),
        Ok(reply) => {
            warn!("Book listing returned status {}", reply.status);
            BookPage::default()
        }
        Err(e) => {
            warn!("Failed to load books: {e}");
            BookPage::default()
        }
    }
}

/// The unpaginated snapshot the admin pages filter client-side
pub async fn load_for_admin() -> Vec<Book> {
    match get(urls::BOOKS_ADMIN).await {
        Ok(reply) if reply.status == 200 => reply.decode().unwrap_or_default(),
        Ok(_) | Err(_) => Vec::new(),
    }
}

pub async fn load_by_id(id: i64) -> Option<Book> {
    match get(&urls::book(id)).await {
        Ok(reply) if reply.ok() => reply.decode().ok(),
        Ok(_) => None,
        Err(e) => {
            warn!("Failed to load book {id}: {e}");
            None
        }
    }
}

pub async fn create(form: FormData) -> Result<MutationOutcome, ApiError> {
    request(urls::BOOKS_CREATE, Method::POST, Body::Form(form))
        .await
        .map(super::Reply::into_outcome)
}

pub async fn update(id: i64, form: FormData) -> Result<MutationOutcome, ApiError> {
    request(&urls::book(id), Method::PATCH, Body::Form(form))
        .await
        .map(super::Reply::into_outcome)
}

pub async fn delete(id: i64) -> Result<MutationOutcome, ApiError> {
    request(&urls::book(id), Method::DELETE, Body::None)
        .await
        .map(super::Reply::into_outcome)
}
