//! Analyzers that reduce raw Scryfall payloads into bounded summaries.
//!
//! Each analyzer borrows an [`ApiClient`](crate::client::ApiClient), issues a
//! single request, and hands the payload to a pure `summarize` function. Fetch
//! failures become [`Analysis::Failed`](crate::models::Analysis::Failed).

pub mod cards;
pub mod catalog;
pub mod sets;

pub use cards::CardAnalyzer;
pub use catalog::CatalogAnalyzer;
pub use sets::SetAnalyzer;

use serde_json::Value;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Top-level keys of a JSON object, in the order the server sent them.
pub(crate) fn object_keys(value: &Value) -> Vec<String> {
    value
        .as_object()
        .map(|m| m.keys().cloned().collect())
        .unwrap_or_default()
}

/// The payload's `data` array, or an empty slice when absent.
pub(crate) fn data_entries(payload: &Value) -> &[Value] {
    payload
        .get("data")
        .and_then(|d| d.as_array())
        .map(|a| a.as_slice())
        .unwrap_or(&[])
}

pub(crate) fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}
