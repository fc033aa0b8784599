use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest. Enough to treat tokens as
/// opaque identity surrogates without storing a full reversible-by-rainbow
/// hash of the origin hint.
const TOKEN_LEN: usize = 16;

/// Hashes a network-origin hint (e.g. an IP address) into a fixed-length
/// opaque token for privacy-preserving duplicate and rate tracking.
///
/// Deterministic and one-way: the same input always yields the same token.
/// Accepts any string, including the `"unknown"` sentinel used when no
/// origin hint is available.
///
/// # Arguments
/// - `raw_origin` - The raw origin hint to hash
///
/// # Returns
/// - 16-character lowercase hex token
pub fn hash_origin(raw_origin: &str) -> String {
    Sha256::digest(raw_origin.as_bytes())
        .iter()
        .take(TOKEN_LEN / 2)
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
