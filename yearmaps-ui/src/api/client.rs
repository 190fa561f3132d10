//! HTTP API Client
//!
//! Functions for reading the gallery endpoints. Each call is a single GET
//! with no retry; errors come back as display strings.

use gloo_net::http::Request;

use crate::state::gallery::ProviderRecord;

/// Fetch the image list
pub async fn fetch_providers(api_uri: &str) -> Result<Vec<ProviderRecord>, String> {
    let body = get_text(api_uri).await?;
    parse_providers(&body)
}

/// Fetch the update time
pub async fn fetch_update_time(time_uri: &str) -> Result<String, String> {
    let body = get_text(time_uri).await?;
    parse_update_time(&body)
}

/// The body is read whatever the status; a non-JSON error page fails parsing.
async fn get_text(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response.text().await
        .map_err(|e| format!("Network error: {}", e))
}

/// Parse an image list body: a JSON array of string arrays
pub fn parse_providers(body: &str) -> Result<Vec<ProviderRecord>, String> {
    serde_json::from_str(body).map_err(|e| format!("Parse error: {}", e))
}

/// Parse an update time body: a JSON string
pub fn parse_update_time(body: &str) -> Result<String, String> {
    serde_json::from_str(body).map_err(|e| format!("Parse error: {}", e))
}
