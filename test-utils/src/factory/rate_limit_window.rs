//! Factory for creating rate-limit counter windows.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating rate-limit windows with customizable fields.
pub struct RateLimitWindowFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    guild_id: String,
    attempt_count: i32,
    window_start: chrono::DateTime<Utc>,
    flagged: bool,
}

impl<'a> RateLimitWindowFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented unique ID
    /// - guild_id: `"guild_{id}"`
    /// - attempt_count: 1, window starting now, not flagged
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id.to_string(),
            guild_id: format!("guild_{}", id),
            attempt_count: 1,
            window_start: Utc::now(),
            flagged: false,
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

    pub fn attempt_count(mut self, attempt_count: i32) -> Self {
        self.attempt_count = attempt_count;
        self
    }

    /// Backdates the window start, e.g. to create an expired window.
    pub fn window_start(mut self, window_start: chrono::DateTime<Utc>) -> Self {
        self.window_start = window_start;
        self
    }

    pub fn flagged(mut self, flagged: bool) -> Self {
        self.flagged = flagged;
        self
    }

    /// Builds and inserts the window into the database.
    ///
    /// `window_end` is derived as `window_start + 5 minutes`, matching the
    /// pipeline's rolling window duration.
    pub async fn build(self) -> Result<entity::rate_limit_window::Model, DbErr> {
        entity::rate_limit_window::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            attempt_count: ActiveValue::Set(self.attempt_count),
            window_start: ActiveValue::Set(self.window_start),
            window_end: ActiveValue::Set(self.window_start + Duration::minutes(5)),
            flagged: ActiveValue::Set(self.flagged),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a rate-limit window with default values.
pub async fn create_window(
    db: &DatabaseConnection,
) -> Result<entity::rate_limit_window::Model, DbErr> {
    RateLimitWindowFactory::new(db).build().await
}
