//! Analysis of `/catalog/<type>` listings (card names, creature types, ...).

use serde_json::Value;

use super::{data_entries, object_keys, str_field};
use crate::client::ApiClient;
use crate::config;
use crate::models::{Analysis, CatalogSummary};

pub struct CatalogAnalyzer<'a> {
    client: &'a ApiClient,
}

impl<'a> CatalogAnalyzer<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch one catalog and keep the first `limit` raw items.
    #[tracing::instrument(name = "analyze_catalog", skip(self))]
    pub fn analyze(&self, catalog_type: &str, limit: usize) -> Analysis<CatalogSummary> {
        tracing::info!("Exploring catalog {}", catalog_type);

        let endpoint = format!("{}/{}", config::CATALOG_ENDPOINT, catalog_type);
        let payload = match self.client.fetch(&endpoint, None) {
            Ok(p) => p,
            Err(e) => {
                return Analysis::failed(format!(
                    "Failed to fetch catalog {}: {}",
                    catalog_type, e
                ))
            }
        };

        let summary = summarize(catalog_type, &payload, limit);
        tracing::info!("Catalog {}: {} items", catalog_type, summary.total_items);
        Analysis::Complete(summary)
    }
}

pub fn summarize(catalog_type: &str, payload: &Value, limit: usize) -> CatalogSummary {
    let entries = data_entries(payload);
    CatalogSummary {
        catalog_type: catalog_type.to_string(),
        total_items: entries.len(),
        structure_keys: object_keys(payload),
        sample_items: entries.iter().take(limit).cloned().collect(),
        uri: str_field(payload, "uri"),
    }
}
