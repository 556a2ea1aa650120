//! Shared fixtures for the explorer integration tests.
//!
//! Payloads are trimmed-down copies of real Scryfall responses. HTTP-backed
//! tests serve them from a `wiremock` server and drive the blocking client on
//! tokio's blocking pool.

#![allow(dead_code)]

use scryfall_explorer::ScryfallExplorer;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::path::Path;
use std::time::Duration;

/// Build an explorer pointed at `base_url` with no request delay.
pub fn explorer(base_url: &str, output_dir: &Path) -> ScryfallExplorer {
    ScryfallExplorer::builder()
        .base_url(base_url)
        .request_delay(Duration::ZERO)
        .timeout(Duration::from_secs(5))
        .output_dir(output_dir)
        .build()
        .unwrap()
}

/// A base URL on a local port with nothing listening on it.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub fn sets_payload() -> Value {
    json!({
        "object": "list",
        "has_more": false,
        "data": [
            {
                "object": "set",
                "id": "set-id-inr",
                "code": "inr",
                "name": "Innistrad Remastered",
                "set_type": "masters",
                "card_count": 480,
                "released_at": "2025-01-24",
                "digital": false
            },
            {
                "object": "set",
                "id": "set-id-mh1",
                "code": "mh1",
                "name": "Modern Horizons",
                "set_type": "draft_innovation",
                "card_count": 254,
                "released_at": "2019-06-14",
                "digital": false
            },
            {
                "object": "set",
                "id": "set-id-plst",
                "code": "plst",
                "name": "The List",
                "set_type": "masters",
                "card_count": 3110
            },
            {
                "object": "set",
                "id": "set-id-lea",
                "code": "lea",
                "name": "Limited Edition Alpha",
                "set_type": "core",
                "card_count": 295,
                "released_at": "1993-08-05",
                "digital": false
            }
        ]
    })
}

pub fn cards_payload() -> Value {
    json!({
        "object": "list",
        "total_cards": 480,
        "has_more": true,
        "next_page": "https://api.scryfall.com/cards/search?page=2&q=set%3Ainr",
        "data": [
            {
                "object": "card",
                "name": "Delver of Secrets // Insectile Aberration",
                "lang": "en",
                "mana_cost": "{U}",
                "type_line": "Creature \u{2014} Human Wizard // Creature \u{2014} Human Insect",
                "colors": ["U"],
                "set": "inr",
                "rarity": "uncommon"
            },
            {
                "object": "card",
                "name": "Olivia Voldaren",
                "lang": "en",
                "mana_cost": "{2}{B}{R}",
                "type_line": "Legendary Creature - Vampire",
                "colors": ["B", "R"],
                "set": "inr",
                "rarity": "mythic"
            },
            {
                "object": "card",
                "name": "Brimstone Volley",
                "lang": "en",
                "mana_cost": "{2}{R}",
                "type_line": "Instant",
                "colors": ["R"],
                "set": "inr",
                "rarity": "common"
            },
            {
                "object": "card",
                "name": "Cathedral Sanctifier",
                "lang": "en",
                "mana_cost": "{W}",
                "type_line": "Creature \u{2014} Human Cleric",
                "colors": ["W"],
                "set": "inr",
                "rarity": "common"
            }
        ]
    })
}

pub fn catalog_payload() -> Value {
    json!({
        "object": "catalog",
        "uri": "https://api.scryfall.com/catalog/supertypes",
        "total_values": 5,
        "data": ["Basic", "Elite", "Legendary", "Snow", "World"]
    })
}
