//! Verification pipeline parameter and outcome types.

use crate::model::{
    fraud::{ActivityType, Severity},
    player::{AuditAttributes, PlayerProfile},
    rank::{Rank, RankStatus},
};

/// A raw verification claim as submitted through the command surface.
#[derive(Debug, Clone)]
pub struct VerificationRequest {
    pub user_id: u64,
    pub guild_id: u64,
    pub game_id: String,
    pub server_id: String,
    /// Self-reported rank; when absent the record is created provisionally
    /// at the default rank.
    pub rank: Option<Rank>,
    pub division: Option<String>,
    /// Raw network-origin hint, hashed before any storage.
    pub origin_hint: Option<String>,
    /// Opaque client hint (e.g. user agent), stored as-is on the audit row.
    pub client_hint: Option<String>,
}

/// Terminal outcome of a completed verification attempt.
///
/// Both variants mean the request itself completed; only `Accepted` grants
/// roles. Failures (malformed input, lookup unavailable, persistence) are
/// errors, not outcomes.
#[derive(Debug, Clone)]
pub enum VerificationOutcome {
    Accepted {
        profile: PlayerProfile,
        rank: Rank,
        /// Role IDs for the caller to apply: the verified role plus the rank
        /// role (when one is configured).
        roles: Vec<u64>,
    },
    Flagged {
        reasons: Vec<String>,
        /// Present when severity reached `high`; the caller delivers this to
        /// the moderation channel out of band.
        alert: Option<FraudAlert>,
    },
}

/// High-priority alert payload handed back to the caller on severe fraud.
#[derive(Debug, Clone)]
pub struct FraudAlert {
    /// ID of the suspicious activity row behind this alert, for marking the
    /// alert delivered once the caller has sent it.
    pub activity_id: i32,
    pub user_id: u64,
    pub game_id: String,
    pub server_id: String,
    pub activity_type: ActivityType,
    pub severity: Severity,
    pub reasons: Vec<String>,
}

/// Audit trail entry status for a completed validator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptStatus {
    Success,
    Failed,
    Suspicious,
}

impl AttemptStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptStatus::Success => "success",
            AttemptStatus::Failed => "failed",
            AttemptStatus::Suspicious => "suspicious",
        }
    }
}

/// Parameters for appending one audit trail record.
#[derive(Debug, Clone)]
pub struct LogAttemptParams {
    pub user_id: u64,
    pub guild_id: u64,
    pub game_id: String,
    pub server_id: String,
    pub attributes: AuditAttributes,
    pub status: AttemptStatus,
    pub ip_hash: Option<String>,
    pub user_agent: Option<String>,
}

/// Parameters for flagging one suspicious activity for manual review.
#[derive(Debug, Clone)]
pub struct FlagActivityParams {
    pub user_id: u64,
    pub guild_id: u64,
    pub game_id: Option<String>,
    pub activity_type: ActivityType,
    pub reason: String,
    pub severity: Severity,
}

/// Parameters for the rank record upsert primitive.
///
/// `game_id`, `server_id`, and `guild_id` only apply on insert; an existing
/// record keeps its claimed identifiers.
#[derive(Debug, Clone)]
pub struct UpsertRankParams {
    pub user_id: u64,
    pub guild_id: u64,
    pub game_id: String,
    pub server_id: String,
    pub rank: Rank,
    pub stars: i32,
    pub points: i32,
    pub division: Option<String>,
    pub player_name: Option<String>,
    /// Discord role ID matching `rank`; zero when none is configured.
    pub role_id: u64,
    pub status: RankStatus,
}
