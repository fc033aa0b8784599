//! Player attribute extraction from the validator's key/value payload.
//!
//! The upstream validator returns a loosely-structured map whose field names
//! vary between revisions. Extraction tries an explicit, ordered list of
//! known alias keys first; only the level falls back to scanning remaining
//! keys. New upstream field names are added to the alias lists here rather
//! than scattered through call sites.

use std::collections::HashMap;

/// Known alias keys for the in-game player name, in priority order.
const PLAYER_NAME_ALIASES: [&str; 3] = ["username", "in-game-nickname", "player-name"];

/// Known alias keys for the account level, in priority order.
const LEVEL_ALIASES: [&str; 3] = ["level", "user-level", "player-level"];

/// Known alias keys for the account region, in priority order.
const REGION_ALIASES: [&str; 2] = ["region", "zone"];

/// Value used when the validator did not return a player name.
const UNKNOWN_NAME: &str = "Unknown";

/// Value used when no level attribute could be found.
const UNAVAILABLE: &str = "Not Available";

/// Player attributes extracted from the validator payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    pub name: String,
    pub level: String,
    pub region: String,
}

impl PlayerProfile {
    /// Extracts a profile from the validator's attribute map.
    ///
    /// - name: first matching name alias, else `"Unknown"`.
    /// - level: first matching level alias; else the first remaining key
    ///   containing `"level"` with a purely numeric value; else
    ///   `"Not Available"`.
    /// - region: first matching region alias, else the submitted server ID.
    pub fn extract(attributes: &HashMap<String, String>, server_id: &str) -> Self {
        let name = first_alias(attributes, &PLAYER_NAME_ALIASES)
            .unwrap_or(UNKNOWN_NAME)
            .to_string();

        let level = first_alias(attributes, &LEVEL_ALIASES)
            .map(str::to_string)
            .or_else(|| scan_level_keys(attributes))
            .unwrap_or_else(|| UNAVAILABLE.to_string());

        let region = first_alias(attributes, &REGION_ALIASES)
            .unwrap_or(server_id)
            .to_string();

        Self {
            name,
            level,
            region,
        }
    }
}

/// Audit-relevant attributes, kept optional: absence is valid, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditAttributes {
    pub username: Option<String>,
    pub level: Option<String>,
    pub zone: Option<String>,
    pub country: Option<String>,
}

impl AuditAttributes {
    /// Extracts the attributes stored on the audit trail, without fallbacks:
    /// what the validator did not return is stored as NULL.
    pub fn extract(attributes: &HashMap<String, String>) -> Self {
        Self {
            username: first_alias(attributes, &PLAYER_NAME_ALIASES).map(str::to_string),
            level: first_alias(attributes, &LEVEL_ALIASES).map(str::to_string),
            zone: first_alias(attributes, &["zone", "region"]).map(str::to_string),
            country: attributes.get("country").cloned(),
        }
    }
}

fn first_alias<'a>(attributes: &'a HashMap<String, String>, aliases: &[&str]) -> Option<&'a str> {
    aliases
        .iter()
        .find_map(|alias| attributes.get(*alias))
        .map(String::as_str)
}

/// Fallback scan for level-like keys with purely numeric values.
///
/// Iteration order over the map is unspecified, so keys are sorted first to
/// keep extraction deterministic.
fn scan_level_keys(attributes: &HashMap<String, String>) -> Option<String> {
    let mut keys: Vec<&String> = attributes.keys().collect();
    keys.sort();

    keys.into_iter()
        .filter(|key| key.contains("level"))
        .find_map(|key| {
            let value = attributes.get(key)?;
            if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
                Some(value.clone())
            } else {
                None
            }
        })
}
