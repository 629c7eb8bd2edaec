//! Resolve free-text locations ("San Francisco, CA", "London | UK") against a static alias table.
//!
//! Resolution is a longest-prefix probe over the lower-cased tokens of the input:
//! "new york city ny" tries `new york city ny`, `new york city`, `new york`, `new`
//! and stops at the first alias hit. Unmatched input is a normal outcome, not an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

const CITIES_JSON: &str = include_str!("cities.json");

/// A location matched against the alias table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub lat: f64,
    pub lng: f64,
    /// The trimmed input text, not the alias that matched.
    pub label: String,
}

type CityTable = HashMap<String, [f64; 2]>;

fn city_table() -> &'static CityTable {
    static TABLE: OnceLock<CityTable> = OnceLock::new();
    TABLE.get_or_init(|| serde_json::from_str(CITIES_JSON).expect("embedded city table is valid"))
}

/// Number of aliases in the embedded table.
pub fn known_aliases() -> usize {
    city_table().len()
}

/// Resolve a raw location string to coordinates.
///
/// Returns `None` for empty input or when no prefix of the input names a known
/// city, region or country.
pub fn resolve_location(raw: &str) -> Option<ResolvedLocation> {
    let label = raw.trim();
    if label.is_empty() {
        return None;
    }

    let lower = label.to_lowercase();
    let tokens: Vec<&str> = lower
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '|'))
        .filter(|t| !t.is_empty())
        .collect();
    let first = *tokens.first()?;

    let table = city_table();
    let hit = (1..=tokens.len())
        .rev()
        .find_map(|i| table.get(&tokens[..i].join(" ")))
        .or_else(|| table.get(first))?;

    Some(ResolvedLocation {
        lat: hit[0],
        lng: hit[1],
        label: label.to_string(),
    })
}
