//! Analysis of a single page of `/cards/search` results for one set.

use std::collections::BTreeSet;

use serde_json::Value;

use super::{data_entries, object_keys, str_field};
use crate::client::ApiClient;
use crate::config;
use crate::models::{Analysis, CardRecord, CardSummary};

/// Separators that end the supertype/type portion of a `type_line`.
const TYPE_SEPARATORS: [char; 2] = ['-', '\u{2014}'];

/// Analyzer for the cards of one set.
pub struct CardAnalyzer<'a> {
    client: &'a ApiClient,
}

impl<'a> CardAnalyzer<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Search `set:<set_code>` (page 1 only) and summarize the first `limit` cards.
    ///
    /// `has_more` is recorded but never followed.
    #[tracing::instrument(name = "analyze_cards", skip(self))]
    pub fn analyze(&self, set_code: &str, limit: usize) -> Analysis<CardSummary> {
        tracing::info!("Exploring cards of set {}", set_code);

        let query = format!("set:{}", set_code);
        let params = [("q", query.as_str()), ("page", "1")];

        let payload = match self.client.fetch(config::CARD_SEARCH_ENDPOINT, Some(&params[..])) {
            Ok(p) => p,
            Err(e) => {
                return Analysis::failed(format!(
                    "Failed to fetch cards for set {}: {}",
                    set_code, e
                ))
            }
        };

        let summary = summarize(&payload, limit);
        tracing::info!(
            "Analysis complete: {} cards in set {}",
            summary.total_cards,
            set_code
        );
        Analysis::Complete(summary)
    }
}

/// Reduce a `/cards/search` payload into a [`CardSummary`].
pub fn summarize(payload: &Value, limit: usize) -> CardSummary {
    let entries = data_entries(payload);

    let mut sample_cards = Vec::with_capacity(limit.min(entries.len()));
    let mut card_types = BTreeSet::new();
    let mut colors = BTreeSet::new();
    let mut rarities = BTreeSet::new();
    let mut languages = BTreeSet::new();

    for card in entries.iter().take(limit) {
        let keys = object_keys(card);
        let record = CardRecord {
            name: str_field(card, "name"),
            mana_cost: str_field(card, "mana_cost"),
            type_line: str_field(card, "type_line"),
            rarity: str_field(card, "rarity"),
            colors: string_list(card, "colors"),
            set_code: str_field(card, "set"),
            lang: str_field(card, "lang"),
            total_keys: keys.len(),
            keys,
        };

        if let Some(bucket) = record.type_line.as_deref().and_then(type_bucket) {
            card_types.insert(bucket);
        }
        if let Some(ref rarity) = record.rarity {
            rarities.insert(rarity.clone());
        }
        colors.extend(record.colors.iter().cloned());
        if let Some(ref lang) = record.lang {
            languages.insert(lang.clone());
        }

        sample_cards.push(record);
    }

    CardSummary {
        total_cards: payload
            .get("total_cards")
            .and_then(|v| v.as_i64())
            .unwrap_or(0),
        has_more: payload
            .get("has_more")
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
        structure_keys: object_keys(payload),
        sample_cards,
        card_types: card_types.into_iter().collect(),
        colors: colors.into_iter().collect(),
        rarities: rarities.into_iter().collect(),
        languages: languages.into_iter().collect(),
    }
}

/// Coarse type bucket: the trimmed text before the first hyphen or em dash.
///
/// `"Creature — Human Wizard"` buckets to `"Creature"`. Empty type lines
/// produce no bucket.
pub fn type_bucket(type_line: &str) -> Option<String> {
    if type_line.is_empty() {
        return None;
    }
    let head = type_line.split(TYPE_SEPARATORS).next().unwrap_or("");
    Some(head.trim().to_string())
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}
