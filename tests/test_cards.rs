//! Card analysis tests: pure reduction, type buckets, and the search request.

mod common;

use scryfall_explorer::analysis::cards::{summarize, type_bucket};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ---------------------------------------------------------------------------
// type_bucket
// ---------------------------------------------------------------------------

#[test]
fn type_bucket_cuts_at_em_dash() {
    assert_eq!(
        type_bucket("Creature \u{2014} Human Wizard").as_deref(),
        Some("Creature")
    );
}

#[test]
fn type_bucket_cuts_at_hyphen() {
    assert_eq!(
        type_bucket("Legendary Creature - Vampire").as_deref(),
        Some("Legendary Creature")
    );
}

#[test]
fn type_bucket_without_separator_is_whole_line() {
    assert_eq!(type_bucket("  Instant ").as_deref(), Some("Instant"));
}

#[test]
fn type_bucket_ignores_empty_line() {
    assert_eq!(type_bucket(""), None);
}

// ---------------------------------------------------------------------------
// summarize
// ---------------------------------------------------------------------------

#[test]
fn totals_come_from_payload_not_sample() {
    let summary = summarize(&common::cards_payload(), 2);
    assert_eq!(summary.total_cards, 480);
    assert!(summary.has_more);
    assert_eq!(summary.sample_cards.len(), 2);
}

#[test]
fn missing_totals_default() {
    let summary = summarize(&json!({"data": []}), 5);
    assert_eq!(summary.total_cards, 0);
    assert!(!summary.has_more);
    assert!(summary.sample_cards.is_empty());
}

#[test]
fn card_types_never_contain_separators() {
    let summary = summarize(&common::cards_payload(), 10);
    assert_eq!(
        summary.card_types,
        vec!["Creature", "Instant", "Legendary Creature"]
    );
    for bucket in &summary.card_types {
        assert!(!bucket.contains('-') && !bucket.contains('\u{2014}'));
    }
}

#[test]
fn colors_are_union_of_sampled_cards() {
    let summary = summarize(&common::cards_payload(), 3);
    assert_eq!(summary.colors, vec!["B", "R", "U"]);
}

#[test]
fn colorless_card_adds_no_colors() {
    let payload = json!({
        "data": [
            {"name": "Sol Ring", "type_line": "Artifact", "colors": []},
            {"name": "Ornithopter", "type_line": "Artifact Creature - Thopter"}
        ]
    });
    let summary = summarize(&payload, 2);
    assert!(summary.colors.is_empty());
    assert!(summary.sample_cards[1].colors.is_empty());
}

#[test]
fn rarities_and_languages_are_deduplicated() {
    let summary = summarize(&common::cards_payload(), 4);
    assert_eq!(summary.rarities, vec!["common", "mythic", "uncommon"]);
    assert_eq!(summary.languages, vec!["en"]);
}

#[test]
fn record_counts_keys() {
    let summary = summarize(&common::cards_payload(), 1);
    let rec = &summary.sample_cards[0];
    assert_eq!(rec.set_code.as_deref(), Some("inr"));
    assert_eq!(rec.mana_cost.as_deref(), Some("{U}"));
    assert_eq!(rec.total_keys, 8);
    assert_eq!(rec.keys.len(), rec.total_keys);
    assert_eq!(rec.keys[0], "object");
}

#[test]
fn single_card_example() {
    let payload = json!({
        "data": [
            {"name": "Bolt", "type_line": "Instant", "rarity": "common", "colors": ["R"], "lang": "en"}
        ]
    });
    let summary = summarize(&payload, 5);
    assert_eq!(summary.card_types, vec!["Instant"]);
    assert_eq!(summary.colors, vec!["R"]);
    assert_eq!(summary.rarities, vec!["common"]);
    assert_eq!(summary.languages, vec!["en"]);
}

#[test]
fn record_serializes_set_field_name() {
    let summary = summarize(&common::cards_payload(), 1);
    let value = serde_json::to_value(&summary.sample_cards[0]).unwrap();
    assert_eq!(value["set"], "inr");
    assert_eq!(value["lang"], "en");
    assert!(value.get("set_code").is_none());
}

// ---------------------------------------------------------------------------
// CardAnalyzer over HTTP
// ---------------------------------------------------------------------------

#[tokio::test]
async fn analyze_queries_set_and_first_page_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards/search"))
        .and(query_param("q", "set:inr"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::cards_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().to_path_buf();
    let result = tokio::task::spawn_blocking(move || {
        common::explorer(&uri, &out).explore_cards("inr", 5)
    })
    .await
    .unwrap();

    let summary = result.summary().expect("analysis should complete");
    assert_eq!(summary.sample_cards.len(), 4);
    assert!(summary.has_more);
}

#[tokio::test]
async fn analyze_reports_unknown_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards/search"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "object": "error",
            "code": "not_found",
            "status": 404
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().to_path_buf();
    let result = tokio::task::spawn_blocking(move || {
        common::explorer(&uri, &out).explore_cards("zzz", 5)
    })
    .await
    .unwrap();

    let error = result.error().expect("analysis should fail");
    assert!(error.contains("zzz"));
}
