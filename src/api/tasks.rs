//! Task Endpoints
//!
//! CRUD over the task collection. The server owns the records; the client
//! only mirrors the responses it gets back.

use gloo_net::http::Request;
use web_sys::RequestCredentials;

use super::{api_url, reject, ApiError};
use crate::models::{NewTask, Task};

pub async fn list() -> Result<Vec<Task>, ApiError> {
    let resp = Request::get(&api_url("/api/tasks"))
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    if !resp.ok() {
        return reject(resp).await;
    }
    // A non-array body fails to decode and is reported as a load error.
    Ok(resp.json::<Vec<Task>>().await?)
}

pub async fn create(draft: &NewTask) -> Result<Task, ApiError> {
    let resp = Request::post(&api_url("/api/tasks"))
        .credentials(RequestCredentials::Include)
        .json(draft)?
        .send()
        .await?;
    if !resp.ok() {
        return reject(resp).await;
    }
    Ok(resp.json::<Task>().await?)
}

/// Replace the record wholesale; the server echoes the stored version back.
pub async fn update(id: &str, record: &NewTask) -> Result<Task, ApiError> {
    let resp = Request::put(&api_url(&format!("/api/tasks/{}", id)))
        .credentials(RequestCredentials::Include)
        .json(record)?
        .send()
        .await?;
    if !resp.ok() {
        return reject(resp).await;
    }
    Ok(resp.json::<Task>().await?)
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    let resp = Request::delete(&api_url(&format!("/api/tasks/{}", id)))
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    if !resp.ok() {
        return reject(resp).await;
    }
    Ok(())
}
