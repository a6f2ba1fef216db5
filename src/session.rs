//! Session Gate
//!
//! Decides whether the task view may render. Fail-closed: anything short of
//! a confirmed valid session counts as unauthenticated.

use leptos::prelude::{document, window};
use wasm_bindgen::JsCast;

use crate::api;

/// Name of the session cookie set by the server.
pub const TOKEN_COOKIE: &str = "token";

/// Terminal states of the gate. `Checking` only ever transitions forward;
/// re-running the check requires a remount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Checking,
    Authenticated,
    Unauthenticated,
}

/// Resolve the session state for this mount.
///
/// Without a token cookie the answer is immediate and no request is issued.
/// With one, the verify endpoint has the final say; network failure counts
/// as unauthenticated.
pub async fn check_session() -> SessionState {
    if !has_session_cookie() {
        return SessionState::Unauthenticated;
    }
    match api::auth::verify().await {
        Ok(()) => SessionState::Authenticated,
        Err(err) => {
            web_sys::console::log_1(&format!("[SESSION] verify failed: {:?}", err).into());
            SessionState::Unauthenticated
        }
    }
}

pub fn has_session_cookie() -> bool {
    let cookies = document()
        .unchecked_into::<web_sys::HtmlDocument>()
        .cookie()
        .unwrap_or_default();
    cookie_names_token(&cookies)
}

/// Full-page navigation back to the app entry. The session gate on the next
/// mount decides which view renders.
pub fn redirect_to_entry() {
    let _ = window().location().set_href("/");
}

/// Scan a cookie header string for the token cookie by name. The token must
/// be a cookie, not a substring of some other cookie's value.
fn cookie_names_token(cookies: &str) -> bool {
    cookies.split(';').any(|pair| {
        match pair.trim_start().split_once('=') {
            Some((name, _)) => name == TOKEN_COOKIE,
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cookie_store_has_no_token() {
        assert!(!cookie_names_token(""));
    }

    #[test]
    fn finds_token_among_other_cookies() {
        assert!(cookie_names_token("theme=dark; token=abc123; lang=en"));
        assert!(cookie_names_token("token=abc123"));
    }

    #[test]
    fn ignores_token_as_substring() {
        assert!(!cookie_names_token("csrftoken=xyz"));
        assert!(!cookie_names_token("theme=token=ish"));
    }

    #[test]
    fn ignores_valueless_pairs() {
        assert!(!cookie_names_token("token"));
    }
}
