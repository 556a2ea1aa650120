use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CardSummary — Reduction of one page of /cards/search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSummary {
    pub total_cards: i64,
    /// Recorded as reported; further pages are never requested.
    pub has_more: bool,
    pub structure_keys: Vec<String>,
    pub sample_cards: Vec<CardRecord>,
    pub card_types: Vec<String>,
    pub colors: Vec<String>,
    pub rarities: Vec<String>,
    pub languages: Vec<String>,
}

// ---------------------------------------------------------------------------
// CardRecord — One sampled card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: Option<String>,
    pub mana_cost: Option<String>,
    pub type_line: Option<String>,
    pub rarity: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(rename = "set")]
    pub set_code: Option<String>,
    pub lang: Option<String>,
    pub keys: Vec<String>,
    pub total_keys: usize,
}
