//! Session probes and the sign-in/sign-up/sign-out flows

use biblio_shared::{urls, AuthToken, User};
use leptos::logging::warn;
use reqwasm::http::Method;
use serde::Deserialize;
use web_sys::FormData;

use super::{get, request, ApiError, Body};

/// Both probes wrap their payload in a `user` field
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct UserEnvelope<T> {
    #[serde(default)]
    user: Option<T>,
}

/// What a sign-in/sign-up attempt resolved to. Failures carry the inline
/// error text, never a toast.
#[derive(Debug, Clone)]
pub struct AuthReply {
    pub status: u16,
    pub user: Option<AuthToken>,
    pub error: Option<String>,
}

impl AuthReply {
    pub fn succeeded(&self) -> bool {
        matches!(self.status, 200 | 201)
    }
}

#[derive(Deserialize)]
struct SignPayload {
    #[serde(default)]
    user: Option<AuthToken>,
    #[serde(default)]
    error: Option<String>,
}

/// The session token, if any. A 401 here is plain guest state, not session
/// expiry.
pub async fn state() -> Option<AuthToken> {
    match get(urls::AUTH_STATE).await {
        Ok(reply) => reply
            .decode::<UserEnvelope<AuthToken>>()
            .ok()
            .and_then(|envelope| envelope.user),
        Err(e) => {
            warn!("Auth state probe failed: {e}");
            None
        }
    }
}

/// The full user record behind the session; `None` for guests
pub async fn me() -> Option<User> {
    match get(urls::AUTH_ME).await {
        Ok(reply) if reply.ok() => reply
            .decode::<UserEnvelope<User>>()
            .ok()
            .and_then(|envelope| envelope.user),
        Ok(_) => None,
        Err(e) => {
            warn!("Failed to load current user: {e}");
            None
        }
    }
}

async fn sign(endpoint: &str, form: FormData) -> Result<AuthReply, ApiError> {
    let reply = request(endpoint, Method::POST, Body::Form(form)).await?;
    let status = reply.status;
    let payload = reply.decode::<SignPayload>().unwrap_or(SignPayload {
        user: None,
        error: None,
    });
    Ok(AuthReply {
        status,
        user: payload.user,
        error: payload.error,
    })
}

pub async fn sign_up(form: FormData) -> Result<AuthReply, ApiError> {
    sign(urls::AUTH_SIGNUP, form).await
}

pub async fn sign_in(form: FormData) -> Result<AuthReply, ApiError> {
    sign(urls::AUTH_SIGNIN, form).await
}

pub async fn sign_out() -> bool {
    match request(urls::AUTH_SIGNOUT, Method::POST, Body::None).await {
        Ok(reply) => reply.ok(),
        Err(e) => {
            warn!("Sign-out failed: {e}");
            false
        }
    }
}
