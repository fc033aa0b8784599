use chrono::{Duration, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Rolling attempt windows per user and guild.
///
/// Each row covers a fixed-width window starting at the first attempt that
/// opened it; later attempts inside the window bump the counter instead of
/// opening a new row. Expired windows are left in place and excluded by the
/// time filters, so history doubles as the cooldown record.
pub struct RateLimitWindowRepository<'a> {
    db: &'a DatabaseConnection,
}

/// Width of one attempt window.
pub const WINDOW_WIDTH: Duration = Duration::minutes(5);

impl<'a> RateLimitWindowRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records one verification attempt.
    ///
    /// Bumps the currently open window when one exists, overwriting its
    /// `flagged` marker with this attempt's verdict; otherwise opens a new
    /// window starting now. The counter bump is evaluated inside the
    /// database, so attempts landing at the same moment cannot overwrite
    /// each other's increment. Returns the window row after the update.
    pub async fn record_attempt(
        &self,
        user_id: u64,
        guild_id: u64,
        flagged: bool,
    ) -> Result<entity::rate_limit_window::Model, DbErr> {
        let now = Utc::now();

        let bumped = entity::prelude::RateLimitWindow::update_many()
            .col_expr(
                entity::rate_limit_window::Column::AttemptCount,
                Expr::col(entity::rate_limit_window::Column::AttemptCount).add(1),
            )
            .col_expr(
                entity::rate_limit_window::Column::Flagged,
                Expr::value(flagged),
            )
            .filter(entity::rate_limit_window::Column::UserId.eq(user_id.to_string()))
            .filter(entity::rate_limit_window::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::rate_limit_window::Column::WindowEnd.gt(now))
            .exec(self.db)
            .await?;

        if bumped.rows_affected > 0 {
            return entity::prelude::RateLimitWindow::find()
                .filter(entity::rate_limit_window::Column::UserId.eq(user_id.to_string()))
                .filter(entity::rate_limit_window::Column::GuildId.eq(guild_id.to_string()))
                .filter(entity::rate_limit_window::Column::WindowEnd.gt(now))
                .order_by_desc(entity::rate_limit_window::Column::WindowStart)
                .one(self.db)
                .await?
                .ok_or_else(|| DbErr::RecordNotFound("bumped rate limit window".to_string()));
        }

        entity::rate_limit_window::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            guild_id: ActiveValue::Set(guild_id.to_string()),
            attempt_count: ActiveValue::Set(1),
            window_start: ActiveValue::Set(now),
            window_end: ActiveValue::Set(now + WINDOW_WIDTH),
            flagged: ActiveValue::Set(flagged),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Sums attempts across all windows opened within the trailing duration.
    pub async fn attempts_within(
        &self,
        user_id: u64,
        guild_id: u64,
        trailing: Duration,
    ) -> Result<i64, DbErr> {
        let cutoff = Utc::now() - trailing;

        let windows = entity::prelude::RateLimitWindow::find()
            .filter(entity::rate_limit_window::Column::UserId.eq(user_id.to_string()))
            .filter(entity::rate_limit_window::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::rate_limit_window::Column::WindowStart.gte(cutoff))
            .all(self.db)
            .await?;

        Ok(windows
            .iter()
            .map(|window| i64::from(window.attempt_count))
            .sum())
    }

    /// Whether any window was opened within the trailing duration.
    ///
    /// Used for the post-acceptance cooldown: window rows are written on every
    /// attempt, so a trailing lookup on the same table answers "has this user
    /// attempted recently" without a dedicated cooldown table.
    pub async fn has_attempt_within(
        &self,
        user_id: u64,
        guild_id: u64,
        trailing: Duration,
    ) -> Result<bool, DbErr> {
        Ok(self.attempts_within(user_id, guild_id, trailing).await? > 0)
    }
}
