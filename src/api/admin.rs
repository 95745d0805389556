//! User management operations that require the admin role

use biblio_shared::{urls, MutationOutcome};
use reqwasm::http::Method;
use web_sys::FormData;

use super::{request, ApiError, Body};

pub async fn create_user(form: FormData) -> Result<MutationOutcome, ApiError> {
    request(urls::USER_CREATE_WITH_ADMIN, Method::POST, Body::Form(form))
        .await
        .map(super::Reply::into_outcome)
}

pub async fn update_user(id: i64, form: FormData) -> Result<MutationOutcome, ApiError> {
    request(
        &urls::user_update_with_admin(id),
        Method::PATCH,
        Body::Form(form),
    )
    .await
    .map(super::Reply::into_outcome)
}
