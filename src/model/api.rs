//! DTOs for the moderator HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generic error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// A suspicious activity row awaiting (or past) review.
#[derive(Debug, Serialize)]
pub struct SuspiciousActivityDto {
    pub id: i32,
    pub user_id: String,
    pub guild_id: String,
    pub game_id: Option<String>,
    pub activity_type: String,
    pub reason: String,
    pub severity: String,
    pub alert_sent: bool,
    pub resolved_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::suspicious_activity::Model> for SuspiciousActivityDto {
    fn from(model: entity::suspicious_activity::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            guild_id: model.guild_id,
            game_id: model.game_id,
            activity_type: model.activity_type,
            reason: model.reason,
            severity: model.severity,
            alert_sent: model.alert_sent,
            resolved_at: model.resolved_at,
            notes: model.notes,
            created_at: model.created_at,
        }
    }
}

/// Request body for resolving a flagged activity.
#[derive(Debug, Deserialize)]
pub struct ResolveActivityDto {
    pub notes: Option<String>,
}

/// One audit trail entry.
#[derive(Debug, Serialize)]
pub struct AuditEntryDto {
    pub id: i32,
    pub user_id: String,
    pub game_id: String,
    pub server_id: String,
    pub username: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<entity::verification_audit_log::Model> for AuditEntryDto {
    fn from(model: entity::verification_audit_log::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            game_id: model.game_id,
            server_id: model.server_id,
            username: model.username,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// Aggregate guild counters for the moderator stats endpoint.
#[derive(Debug, Serialize)]
pub struct GuildStatsDto {
    pub verified_members: u64,
    pub unresolved_activities: u64,
    pub attempts_today: u64,
}

/// The Discord user returned after a completed OAuth login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordUserDto {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
}
