//! The signed-in user's own account, and the user records admins manage

use biblio_shared::{urls, MutationOutcome, Profile, User};
use leptos::logging::warn;
use reqwasm::http::Method;
use web_sys::FormData;

use super::{get, request, ApiError, Body};

/// The profile aggregate; `None` without a session
pub async fn load_profile() -> Option<Profile> {
    match get(urls::USER_PROFILE).await {
        Ok(reply) if reply.ok() => reply.decode().ok(),
        Ok(_) => None,
        Err(e) => {
            warn!("Failed to load profile: {e}");
            None
        }
    }
}

pub async fn load_all() -> Vec<User> {
    match get(urls::USER_ALL).await {
        Ok(reply) if reply.status == 200 => reply.decode().unwrap_or_default(),
        Ok(_) | Err(_) => Vec::new(),
    }
}

pub async fn load_by_id(id: i64) -> Option<User> {
    match get(&urls::user(id)).await {
        Ok(reply) if reply.ok() => reply.decode().ok(),
        Ok(_) => None,
        Err(e) => {
            warn!("Failed to load user {id}: {e}");
            None
        }
    }
}

/// Username/email update for the signed-in user
pub async fn update(form: FormData) -> Result<MutationOutcome, ApiError> {
    request(urls::USER_UPDATE, Method::PATCH, Body::Form(form))
        .await
        .map(super::Reply::into_outcome)
}

pub async fn update_password(form: FormData) -> Result<MutationOutcome, ApiError> {
    request(urls::USER_UPDATE_PASSWORD, Method::PATCH, Body::Form(form))
        .await
        .map(super::Reply::into_outcome)
}

pub async fn delete(id: i64) -> Result<MutationOutcome, ApiError> {
    request(&urls::user_delete(id), Method::DELETE, Body::None)
        .await
        .map(super::Reply::into_outcome)
}
