use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::verification::FlagActivityParams;

/// Suspicious activity queue for manual moderator review.
pub struct SuspiciousActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SuspiciousActivityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        params: FlagActivityParams,
    ) -> Result<entity::suspicious_activity::Model, DbErr> {
        entity::suspicious_activity::ActiveModel {
            user_id: ActiveValue::Set(params.user_id.to_string()),
            guild_id: ActiveValue::Set(params.guild_id.to_string()),
            game_id: ActiveValue::Set(params.game_id),
            activity_type: ActiveValue::Set(params.activity_type.as_str().to_string()),
            reason: ActiveValue::Set(params.reason),
            severity: ActiveValue::Set(params.severity.as_str().to_string()),
            alert_sent: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Unresolved entries for a guild, newest first.
    pub async fn list_unresolved(
        &self,
        guild_id: u64,
    ) -> Result<Vec<entity::suspicious_activity::Model>, DbErr> {
        entity::prelude::SuspiciousActivity::find()
            .filter(entity::suspicious_activity::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::suspicious_activity::Column::ResolvedAt.is_null())
            .order_by_desc(entity::suspicious_activity::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn count_unresolved(&self, guild_id: u64) -> Result<u64, DbErr> {
        entity::prelude::SuspiciousActivity::find()
            .filter(entity::suspicious_activity::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::suspicious_activity::Column::ResolvedAt.is_null())
            .count(self.db)
            .await
    }

    /// Resolves an entry, stamping the resolution time and optional notes.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Entry resolved
    /// - `Ok(None)` - No entry with that ID
    pub async fn resolve(
        &self,
        id: i32,
        notes: Option<String>,
    ) -> Result<Option<entity::suspicious_activity::Model>, DbErr> {
        let Some(activity) = entity::prelude::SuspiciousActivity::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = activity.into_active_model();
        active.resolved_at = ActiveValue::Set(Some(Utc::now()));
        active.notes = ActiveValue::Set(notes);
        active.update(self.db).await.map(Some)
    }

    /// Marks the alert for an entry as delivered.
    pub async fn mark_alert_sent(&self, id: i32) -> Result<(), DbErr> {
        let Some(activity) = entity::prelude::SuspiciousActivity::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(());
        };

        if !activity.alert_sent {
            let mut active = activity.into_active_model();
            active.alert_sent = ActiveValue::Set(true);
            active.update(self.db).await?;
        }

        Ok(())
    }
}
