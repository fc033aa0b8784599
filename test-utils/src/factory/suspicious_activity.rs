//! Factory for creating flagged suspicious activity rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating suspicious activity rows with customizable fields.
pub struct SuspiciousActivityFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    guild_id: String,
    game_id: Option<String>,
    activity_type: String,
    reason: String,
    severity: String,
    alert_sent: bool,
    resolved_at: Option<chrono::DateTime<Utc>>,
}

impl<'a> SuspiciousActivityFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented unique ID
    /// - guild_id: `"guild_{id}"`
    /// - activity_type: `"stat_anomaly"`, severity `"low"`, unresolved
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id.to_string(),
            guild_id: format!("guild_{}", id),
            game_id: None,
            activity_type: "stat_anomaly".to_string(),
            reason: format!("Test reason {}", id),
            severity: "low".to_string(),
            alert_sent: false,
            resolved_at: None,
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn game_id(mut self, game_id: Option<String>) -> Self {
        self.game_id = game_id;
        self
    }

    pub fn activity_type(mut self, activity_type: impl Into<String>) -> Self {
        self.activity_type = activity_type.into();
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = severity.into();
        self
    }

    pub fn alert_sent(mut self, alert_sent: bool) -> Self {
        self.alert_sent = alert_sent;
        self
    }

    pub fn resolved_at(mut self, resolved_at: Option<chrono::DateTime<Utc>>) -> Self {
        self.resolved_at = resolved_at;
        self
    }

    /// Builds and inserts the activity row into the database.
    pub async fn build(self) -> Result<entity::suspicious_activity::Model, DbErr> {
        entity::suspicious_activity::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            game_id: ActiveValue::Set(self.game_id),
            activity_type: ActiveValue::Set(self.activity_type),
            reason: ActiveValue::Set(self.reason),
            severity: ActiveValue::Set(self.severity),
            alert_sent: ActiveValue::Set(self.alert_sent),
            resolved_at: ActiveValue::Set(self.resolved_at),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a suspicious activity row with default values.
pub async fn create_suspicious_activity(
    db: &DatabaseConnection,
) -> Result<entity::suspicious_activity::Model, DbErr> {
    SuspiciousActivityFactory::new(db).build().await
}
