//! HTTP API Client
//!
//! Functions for communicating with the backend collaborator. The backend
//! exposes three endpoints: a stats read, a counter read and a counter
//! increment. All errors are recovered locally by the callers.

use gloo_net::http::Request;
use std::collections::BTreeMap;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("demodeck_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// Stats endpoint payload. Only `categories` is consumed; the backend also
/// sends an entry total and a timestamp, both ignored here.
#[derive(Debug, serde::Deserialize)]
pub struct StatsResponse {
    /// Ordered by category name so derived charts are deterministic.
    #[serde(default)]
    pub categories: BTreeMap<String, f64>,
}

#[derive(Debug, serde::Deserialize)]
pub struct CounterResponse {
    pub value: i64,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

// ============ API Functions ============

/// Fetch submission statistics
pub async fn fetch_stats() -> Result<StatsResponse, String> {
    get_json(&format!("{}/api/stats", get_api_base())).await
}

/// Read the server-held counter without modifying it
pub async fn fetch_counter() -> Result<i64, String> {
    let response: CounterResponse = get_json(&format!("{}/api/counter/get", get_api_base())).await?;
    Ok(response.value)
}

/// Increment the server-held counter and return the authoritative value
pub async fn increment_counter() -> Result<i64, String> {
    let response: CounterResponse =
        get_json(&format!("{}/api/counter/increment", get_api_base())).await?;
    Ok(response.value)
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_response_ignores_unknown_fields() {
        let json = r#"{"total_entries":10,"categories":{"B":7,"A":3},"timestamp":"now"}"#;
        let stats: StatsResponse = serde_json::from_str(json).unwrap();
        let names: Vec<&String> = stats.categories.keys().collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(stats.categories["B"], 7.0);
    }

    #[test]
    fn stats_response_defaults_to_empty() {
        let stats: StatsResponse = serde_json::from_str("{}").unwrap();
        assert!(stats.categories.is_empty());
    }

    #[test]
    fn counter_response_carries_the_server_value() {
        let json = r#"{"value":5,"action":"incremented"}"#;
        let response: CounterResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.value, 5);
    }

    #[test]
    fn stats_payload_drives_the_chart_summary() {
        let json = r#"{"categories":{"A":3,"B":7}}"#;
        let stats: StatsResponse = serde_json::from_str(json).unwrap();

        let series = crate::state::series::Series::from_stats(&stats.categories);
        assert_eq!(series.labels, vec!["A", "B"]);
        assert_eq!(series.values, vec![3.0, 7.0]);

        let summary = series.summarize();
        assert_eq!(summary.total, 10.0);
        assert_eq!(summary.average, 5.0);
        assert_eq!(summary.top_label, "B");
        assert_eq!(summary.top_caption(), "7 entries");
    }
}
