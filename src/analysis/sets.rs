//! Analysis of the `/sets` collection.

use std::collections::BTreeSet;

use serde_json::Value;

use super::{data_entries, object_keys, str_field};
use crate::client::ApiClient;
use crate::config;
use crate::models::{Analysis, DateRange, SetRecord, SetSummary};

/// Analyzer for the full set list.
pub struct SetAnalyzer<'a> {
    client: &'a ApiClient,
}

impl<'a> SetAnalyzer<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch `/sets` and summarize the first `limit` entries.
    #[tracing::instrument(name = "analyze_sets", skip(self))]
    pub fn analyze(&self, limit: usize) -> Analysis<SetSummary> {
        tracing::info!("Exploring /sets");

        let payload = match self.client.fetch(config::SETS_ENDPOINT, None) {
            Ok(p) => p,
            Err(e) => return Analysis::failed(format!("Failed to fetch set data: {}", e)),
        };

        let summary = summarize(&payload, limit);
        tracing::info!("{} sets analyzed in detail", summary.sample_sets.len());
        tracing::info!("Analysis complete: {} sets found", summary.total_sets);
        Analysis::Complete(summary)
    }
}

/// Reduce a `/sets` payload into a [`SetSummary`].
///
/// `total_sets` counts every entry; only the first `limit` entries feed the
/// samples, the set types, and the date range.
pub fn summarize(payload: &Value, limit: usize) -> SetSummary {
    let entries = data_entries(payload);

    let mut sample_sets = Vec::with_capacity(limit.min(entries.len()));
    let mut set_types = BTreeSet::new();
    let mut date_range = DateRange::default();

    for set in entries.iter().take(limit) {
        let record = SetRecord {
            object: str_field(set, "object"),
            code: str_field(set, "code"),
            name: str_field(set, "name"),
            set_type: str_field(set, "set_type"),
            card_count: set.get("card_count").filter(|v| !v.is_null()).cloned(),
            released_at: str_field(set, "released_at"),
            keys: object_keys(set),
        };

        if let Some(ref st) = record.set_type {
            set_types.insert(st.clone());
        }
        // Entries without a release date leave the range untouched.
        if let Some(ref date) = record.released_at {
            if !date.is_empty() {
                date_range.include(date);
            }
        }

        sample_sets.push(record);
    }

    SetSummary {
        total_sets: entries.len(),
        structure_keys: object_keys(payload),
        sample_sets,
        set_types: set_types.into_iter().collect(),
        date_range,
    }
}
