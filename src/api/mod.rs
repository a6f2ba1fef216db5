//! Task API Bindings
//!
//! Thin async wrappers over the REST API. Every request carries the session
//! cookie; callers decide how failures surface.

pub mod auth;
pub mod tasks;

use std::fmt;

use gloo_net::http::Response;
use leptos::prelude::window;
use serde::Deserialize;

/// Failure of a single API call. No call is retried; every failure is
/// terminal for that attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The server rejected the session (401).
    Unauthorized,
    /// The server answered with a non-success status.
    Server(String),
    /// The request never completed cleanly (transport or decode failure).
    Fetch(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Session expired. Please sign in again."),
            ApiError::Server(message) => write!(f, "{}", message),
            ApiError::Fetch(_) => write!(f, "Network error. Please try again."),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Fetch(err.to_string())
    }
}

/// Resolve an endpoint path against the page origin. The client is served
/// behind the same origin as the API.
pub(crate) fn api_url(path: &str) -> String {
    let location = window().location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_default();
    format!("{}//{}{}", protocol, host, path)
}

/// Turn a non-success response into the matching `ApiError`, pulling the
/// server's `{error}` body when one is present.
pub(crate) async fn reject<T>(resp: Response) -> Result<T, ApiError> {
    if resp.status() == 401 {
        return Err(ApiError::Unauthorized);
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        error: String,
    }

    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => "Something went wrong".to_string(),
    };
    Err(ApiError::Server(message))
}
