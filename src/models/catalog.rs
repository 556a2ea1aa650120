use serde::{Deserialize, Serialize};

/// Reduction of a `/catalog/<type>` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub catalog_type: String,
    pub total_items: usize,
    pub structure_keys: Vec<String>,
    pub sample_items: Vec<serde_json::Value>,
    pub uri: Option<String>,
}
