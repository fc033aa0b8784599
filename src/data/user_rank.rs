use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{rank::RankStatus, verification::UpsertRankParams};

/// Per-user verified account and rank records, one row per user per guild.
pub struct UserRankRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRankRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_user_id(
        &self,
        user_id: u64,
        guild_id: u64,
    ) -> Result<Option<entity::user_rank::Model>, DbErr> {
        entity::prelude::UserRank::find()
            .filter(entity::user_rank::Column::UserId.eq(user_id.to_string()))
            .filter(entity::user_rank::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await
    }

    /// Finds the rank record claiming a game ID, if any.
    ///
    /// Game IDs are unique per game account, so at most one verified claim
    /// should exist. Manual-submission placeholder IDs never reach this
    /// lookup; callers only pass validated numeric game IDs.
    pub async fn find_by_game_id(
        &self,
        game_id: &str,
    ) -> Result<Option<entity::user_rank::Model>, DbErr> {
        entity::prelude::UserRank::find()
            .filter(entity::user_rank::Column::GameId.eq(game_id))
            .one(self.db)
            .await
    }

    /// All rank records for a guild, most recently checked first.
    pub async fn get_all(&self, guild_id: u64) -> Result<Vec<entity::user_rank::Model>, DbErr> {
        entity::prelude::UserRank::find()
            .filter(entity::user_rank::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::user_rank::Column::LastChecked)
            .all(self.db)
            .await
    }

    pub async fn count_for_guild(&self, guild_id: u64) -> Result<u64, DbErr> {
        entity::prelude::UserRank::find()
            .filter(entity::user_rank::Column::GuildId.eq(guild_id.to_string()))
            .count(self.db)
            .await
    }

    /// Creates or updates the rank record for a user.
    ///
    /// On insert the claimed identifiers are stored and `rank_changed_at`
    /// stays unset. On update the stored `game_id` and `server_id` are kept;
    /// `previous_rank` and `rank_changed_at` move only when the rank actually
    /// changed, and a confirmed record is never demoted back to provisional.
    pub async fn upsert_rank(
        &self,
        params: UpsertRankParams,
    ) -> Result<entity::user_rank::Model, DbErr> {
        let now = Utc::now();
        let existing = self
            .find_by_user_id(params.user_id, params.guild_id)
            .await?;

        let Some(existing) = existing else {
            return entity::user_rank::ActiveModel {
                user_id: ActiveValue::Set(params.user_id.to_string()),
                guild_id: ActiveValue::Set(params.guild_id.to_string()),
                game_id: ActiveValue::Set(params.game_id),
                server_id: ActiveValue::Set(params.server_id),
                player_name: ActiveValue::Set(params.player_name),
                current_rank: ActiveValue::Set(params.rank.name().to_string()),
                division: ActiveValue::Set(params.division),
                previous_rank: ActiveValue::Set(None),
                stars: ActiveValue::Set(params.stars),
                points: ActiveValue::Set(params.points),
                role_id: ActiveValue::Set(params.role_id.to_string()),
                status: ActiveValue::Set(params.status.as_str().to_string()),
                last_checked: ActiveValue::Set(now),
                rank_changed_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(self.db)
            .await;
        };

        let rank_changed = existing.current_rank != params.rank.name();
        let keep_confirmed = existing.status == RankStatus::Confirmed.as_str()
            && params.status == RankStatus::Provisional;
        let old_rank = existing.current_rank.clone();
        let old_name = existing.player_name.clone();
        let old_division = existing.division.clone();

        let mut active = existing.into_active_model();
        active.current_rank = ActiveValue::Set(params.rank.name().to_string());
        active.stars = ActiveValue::Set(params.stars);
        active.points = ActiveValue::Set(params.points);
        active.role_id = ActiveValue::Set(params.role_id.to_string());
        active.player_name = ActiveValue::Set(params.player_name.or(old_name));
        active.division = ActiveValue::Set(params.division.or(old_division));
        active.last_checked = ActiveValue::Set(now);
        active.updated_at = ActiveValue::Set(now);
        if !keep_confirmed {
            active.status = ActiveValue::Set(params.status.as_str().to_string());
        }
        if rank_changed {
            active.previous_rank = ActiveValue::Set(Some(old_rank));
            active.rank_changed_at = ActiveValue::Set(Some(now));
        }

        active.update(self.db).await
    }

    /// Removes a user's rank record.
    ///
    /// # Returns
    /// - `Ok(true)` - A record existed and was deleted
    /// - `Ok(false)` - No record for that user
    pub async fn delete_by_user_id(&self, user_id: u64, guild_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::UserRank::delete_many()
            .filter(entity::user_rank::Column::UserId.eq(user_id.to_string()))
            .filter(entity::user_rank::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
