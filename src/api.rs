//! Record Store API Client
//!
//! Thin async wrappers over the AS400 web API, one function per backend
//! operation. Non-2xx responses are normalized to `StoreError::Api` with the
//! body's `detail` message when present; network failures surface uniformly
//! as `StoreError::Transport`. No operation retries.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, Response};
use serde::Serialize;

use crate::error::StoreError;
use crate::models::{ApiErrorBody, Part, PartListResponse, TableInfo, TableListResponse};

// ========================
// Request Body Structs
// ========================

/// PUT body; the part number is addressed in the path, never in the body
#[derive(Serialize)]
pub struct UpdatePartBody<'a> {
    pub name: &'a str,
}

// ========================
// Helpers
// ========================

/// Origin of the page the app is served from
fn base_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Extract the `detail` message from a failed response, else a fallback
async fn api_error(res: Response, fallback: &str) -> StoreError {
    let detail = res
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail);
    StoreError::Api(detail.unwrap_or_else(|| fallback.to_string()))
}

// ========================
// Part Master Operations
// ========================

/// List parts, optionally bounded below by a part number
pub async fn list_parts(filter: Option<&str>) -> Result<Vec<Part>, StoreError> {
    let mut url = format!("{}/api/parts", base_url());
    if let Some(lower_bound) = filter {
        url.push_str(&format!(
            "?id={}",
            utf8_percent_encode(lower_bound, NON_ALPHANUMERIC)
        ));
    }
    let res = reqwest::get(&url).await.map_err(|_| StoreError::Transport)?;
    if !res.status().is_success() {
        return Err(api_error(res, "failed to fetch parts").await);
    }
    let body: PartListResponse = res.json().await.map_err(|_| StoreError::Transport)?;
    Ok(body.items)
}

/// Register a new part
pub async fn create_part(part: &Part) -> Result<(), StoreError> {
    let res = Client::new()
        .post(format!("{}/api/parts", base_url()))
        .json(part)
        .send()
        .await
        .map_err(|_| StoreError::Transport)?;
    if res.status().is_success() {
        Ok(())
    } else {
        Err(api_error(res, "failed to save the part").await)
    }
}

/// Rename an existing part
pub async fn update_part(id: u32, name: &str) -> Result<(), StoreError> {
    let res = Client::new()
        .put(format!("{}/api/parts/{}", base_url(), id))
        .json(&UpdatePartBody { name })
        .send()
        .await
        .map_err(|_| StoreError::Transport)?;
    if res.status().is_success() {
        Ok(())
    } else {
        Err(api_error(res, "failed to save the part").await)
    }
}

/// Delete a part; 204 No Content counts as success
pub async fn delete_part(id: u32) -> Result<(), StoreError> {
    let res = Client::new()
        .delete(format!("{}/api/parts/{}", base_url(), id))
        .send()
        .await
        .map_err(|_| StoreError::Transport)?;
    let status = res.status();
    if status.is_success() || status == reqwest::StatusCode::NO_CONTENT {
        Ok(())
    } else {
        Err(api_error(res, "failed to delete the part").await)
    }
}

// ========================
// Collaborator Lookups
// ========================

/// Probe the AS400 database connection
pub async fn test_connection() -> Result<(), StoreError> {
    let url = format!("{}/api/test-connection", base_url());
    let res = reqwest::get(&url).await.map_err(|_| StoreError::Transport)?;
    if res.status().is_success() {
        Ok(())
    } else {
        Err(api_error(res, "connection test failed").await)
    }
}

/// List the tables of a library
pub async fn list_tables(library: &str) -> Result<Vec<TableInfo>, StoreError> {
    let url = format!(
        "{}/api/tables?library={}",
        base_url(),
        utf8_percent_encode(library, NON_ALPHANUMERIC)
    );
    let res = reqwest::get(&url).await.map_err(|_| StoreError::Transport)?;
    if !res.status().is_success() {
        return Err(api_error(res, "failed to fetch the table list").await);
    }
    let body: TableListResponse = res.json().await.map_err(|_| StoreError::Transport)?;
    Ok(body.tables)
}
