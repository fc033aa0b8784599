use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::verification::LogAttemptParams;

/// Append-only audit trail of completed verification attempts.
///
/// Rows are only written after the external lookup finished; malformed claims
/// and lookup failures never reach this table.
pub struct VerificationAuditLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VerificationAuditLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        params: LogAttemptParams,
    ) -> Result<entity::verification_audit_log::Model, DbErr> {
        entity::verification_audit_log::ActiveModel {
            user_id: ActiveValue::Set(params.user_id.to_string()),
            guild_id: ActiveValue::Set(params.guild_id.to_string()),
            game_id: ActiveValue::Set(params.game_id),
            server_id: ActiveValue::Set(params.server_id),
            username: ActiveValue::Set(params.attributes.username),
            level: ActiveValue::Set(params.attributes.level),
            zone: ActiveValue::Set(params.attributes.zone),
            country: ActiveValue::Set(params.attributes.country),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            ip_hash: ActiveValue::Set(params.ip_hash),
            user_agent: ActiveValue::Set(params.user_agent),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Most recent entries for a guild, newest first.
    pub async fn recent_for_guild(
        &self,
        guild_id: u64,
        limit: u64,
    ) -> Result<Vec<entity::verification_audit_log::Model>, DbErr> {
        entity::prelude::VerificationAuditLog::find()
            .filter(entity::verification_audit_log::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::verification_audit_log::Column::CreatedAt)
            .order_by_desc(entity::verification_audit_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Counts entries for a guild created at or after the given instant.
    pub async fn count_since(
        &self,
        guild_id: u64,
        since: chrono::DateTime<chrono::Utc>,
    ) -> Result<u64, DbErr> {
        entity::prelude::VerificationAuditLog::find()
            .filter(entity::verification_audit_log::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::verification_audit_log::Column::CreatedAt.gte(since))
            .count(self.db)
            .await
    }
}
