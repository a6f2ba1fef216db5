//! Auth Endpoints
//!
//! Login, registration, password reset, session verification, and profile.

use gloo_net::http::Request;
use serde::Serialize;
use web_sys::RequestCredentials;

use super::{api_url, reject, ApiError};
use crate::models::Profile;

#[derive(Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "rememberMe")]
    remember_me: bool,
}

#[derive(Serialize)]
struct RegisterPayload<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ForgotPayload<'a> {
    email: &'a str,
}

pub async fn login(email: &str, password: &str, remember_me: bool) -> Result<(), ApiError> {
    let resp = Request::post(&api_url("/api/auth/login"))
        .credentials(RequestCredentials::Include)
        .json(&LoginPayload { email, password, remember_me })?
        .send()
        .await?;
    if resp.ok() {
        Ok(())
    } else {
        reject(resp).await
    }
}

pub async fn register(username: &str, email: &str, password: &str) -> Result<(), ApiError> {
    let resp = Request::post(&api_url("/api/auth/register"))
        .credentials(RequestCredentials::Include)
        .json(&RegisterPayload { username, email, password })?
        .send()
        .await?;
    if resp.ok() {
        Ok(())
    } else {
        reject(resp).await
    }
}

pub async fn forgot_password(email: &str) -> Result<(), ApiError> {
    let resp = Request::post(&api_url("/api/auth/forgot-password"))
        .credentials(RequestCredentials::Include)
        .json(&ForgotPayload { email })?
        .send()
        .await?;
    if resp.ok() {
        Ok(())
    } else {
        reject(resp).await
    }
}

pub async fn logout() -> Result<(), ApiError> {
    let resp = Request::post(&api_url("/api/auth/logout"))
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    if resp.ok() {
        Ok(())
    } else {
        reject(resp).await
    }
}

/// Lightweight session check. Success status means the cookie is still good.
pub async fn verify() -> Result<(), ApiError> {
    let resp = Request::get(&api_url("/api/auth/verify"))
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    if resp.ok() {
        Ok(())
    } else {
        reject(resp).await
    }
}

pub async fn profile() -> Result<Profile, ApiError> {
    let resp = Request::get(&api_url("/api/auth/profile"))
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    if resp.ok() {
        Ok(resp.json::<Profile>().await?)
    } else {
        reject(resp).await
    }
}
