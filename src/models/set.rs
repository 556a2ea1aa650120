use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SetSummary — Reduction of the /sets collection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetSummary {
    /// Number of entries in the payload's `data` array.
    pub total_sets: usize,
    pub structure_keys: Vec<String>,
    pub sample_sets: Vec<SetRecord>,
    pub set_types: Vec<String>,
    pub date_range: DateRange,
}

// ---------------------------------------------------------------------------
// SetRecord — One sampled set, fields copied as the API returned them
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    pub object: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub set_type: Option<String>,
    /// Copied as sent; some endpoints report counts as floats.
    pub card_count: Option<serde_json::Value>,
    pub released_at: Option<String>,
    pub keys: Vec<String>,
}

/// Oldest and newest `released_at` among the sampled sets.
///
/// ISO-8601 dates order correctly as plain strings, so no date parsing is
/// involved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub oldest: Option<String>,
    pub newest: Option<String>,
}

impl DateRange {
    /// Widen the range to include `date`.
    pub fn include(&mut self, date: &str) {
        if self.oldest.as_deref().map_or(true, |o| date < o) {
            self.oldest = Some(date.to_string());
        }
        if self.newest.as_deref().map_or(true, |n| date > n) {
            self.newest = Some(date.to_string());
        }
    }
}
