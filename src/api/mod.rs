//! The HTTP client and the per-resource service modules
//!
//! One fixed API origin, credentials on every call, JSON in and out except
//! for multipart form submissions. There are no retries, timeouts or
//! cancellation: every call is fire-and-wait.

pub mod activities;
pub mod admin;
pub mod auth;
pub mod books;
pub mod borrowings;
pub mod favorites;
pub mod users;

use biblio_shared::{urls, ApiMessage, MutationOutcome};
use reqwasm::http::{Method, Request};
use web_sys::{FormData, RequestCredentials};

#[derive(Debug, Clone)]
pub enum ApiError {
    Network(String),
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Request failed: {e}"),
            Self::Decode(e) => write!(f, "Unable to decode response: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Request payload. A multipart form body must not set a content type so
/// the platform can write the multipart boundary itself.
pub enum Body {
    None,
    Json(serde_json::Value),
    Form(FormData),
}

/// What every call resolves to: the status for the caller to branch on,
/// plus the JSON body when the response declared one
pub struct Reply {
    pub status: u16,
    pub data: Option<serde_json::Value>,
}

impl Reply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn decode<T: serde::de::DeserializeOwned>(self) -> Result<T, ApiError> {
        let value = self
            .data
            .ok_or_else(|| ApiError::Decode("response carried no JSON body".to_string()))?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// The mutation contract: status plus the server's toast message
    pub fn into_outcome(self) -> MutationOutcome {
        let status = self.status;
        let message = self
            .data
            .and_then(|value| serde_json::from_value::<ApiMessage>(value).ok())
            .unwrap_or_else(|| ApiMessage::error("Something went wrong"));
        MutationOutcome { status, message }
    }
}

pub async fn request(endpoint: &str, method: Method, body: Body) -> Result<Reply, ApiError> {
    let url = format!("{}{}", urls::API_BASE_URL, endpoint);

    let req = Request::new(&url)
        .method(method)
        .credentials(RequestCredentials::Include);
    let req = match body {
        Body::None => req,
        Body::Json(value) => req
            .header("Content-Type", "application/json")
            .body(value.to_string()),
        Body::Form(form) => req.body(form),
    };

    let response = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let declares_json = response
        .headers()
        .get("Content-Type")
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false);

    let data = if declares_json {
        Some(
            response
                .json::<serde_json::Value>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?,
        )
    } else {
        None
    };

    Ok(Reply { status, data })
}

pub(crate) async fn get(endpoint: &str) -> Result<Reply, ApiError> {
    request(endpoint, Method::GET, Body::None).await
}
