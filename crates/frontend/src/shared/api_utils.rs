//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and fetching JSON.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Port the storefront backend listens on when no override is configured
const DEFAULT_API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// A compile-time `STOREFRONT_API_BASE` (e.g. `https://api.shop.example`)
/// takes precedence. Otherwise the URL is built from the current window
/// location with port 3000.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("STOREFRONT_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/products");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET-запрос с разбором JSON; все ошибки приводятся к строке для UI
pub async fn get_json<T>(url: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
