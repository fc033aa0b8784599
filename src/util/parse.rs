use std::collections::HashMap;

use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses the validator's line-oriented `key: value` payload into a map.
///
/// Keys are lowercased and spaces replaced with dashes, matching the
/// upstream field naming (`In-Game Nickname` becomes `in-game-nickname`).
/// Lines without a colon separator or with an empty key/value are skipped.
pub fn parse_key_value_payload(payload: &str) -> HashMap<String, String> {
    let mut data = HashMap::new();

    for line in payload.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        let key = key.trim().to_lowercase().replace(' ', "-");
        let value = value.trim();

        if !key.is_empty() && !value.is_empty() {
            data.insert(key, value.to_string());
        }
    }

    data
}
