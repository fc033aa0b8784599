//! Factory for creating test user rank records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating verified rank records with customizable fields.
///
/// Provides a builder pattern with default values that can be overridden as
/// needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user_rank::UserRankFactory;
///
/// let record = UserRankFactory::new(&db)
///     .user_id("123456789")
///     .current_rank("Epic")
///     .status("confirmed")
///     .build()
///     .await?;
/// ```
pub struct UserRankFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    guild_id: String,
    game_id: String,
    server_id: String,
    player_name: Option<String>,
    current_rank: String,
    division: Option<String>,
    previous_rank: Option<String>,
    stars: i32,
    points: i32,
    role_id: String,
    status: String,
}

impl<'a> UserRankFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented unique ID
    /// - guild_id: `"guild_{id}"`
    /// - game_id: unique 9-digit number
    /// - server_id: `"2001"`
    /// - current_rank: `"Warrior"`, no division, no previous rank
    /// - status: `"provisional"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id.to_string(),
            guild_id: format!("guild_{}", id),
            game_id: format!("{}", 100000000 + id),
            server_id: "2001".to_string(),
            player_name: None,
            current_rank: "Warrior".to_string(),
            division: None,
            previous_rank: None,
            stars: 0,
            points: 0,
            role_id: String::new(),
            status: "provisional".to_string(),
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

    pub fn game_id(mut self, game_id: impl Into<String>) -> Self {
        self.game_id = game_id.into();
        self
    }

    pub fn server_id(mut self, server_id: impl Into<String>) -> Self {
        self.server_id = server_id.into();
        self
    }

    pub fn player_name(mut self, player_name: Option<String>) -> Self {
        self.player_name = player_name;
        self
    }

    pub fn current_rank(mut self, rank: impl Into<String>) -> Self {
        self.current_rank = rank.into();
        self
    }

    pub fn division(mut self, division: Option<String>) -> Self {
        self.division = division;
        self
    }

    pub fn previous_rank(mut self, previous_rank: Option<String>) -> Self {
        self.previous_rank = previous_rank;
        self
    }

    pub fn stars(mut self, stars: i32) -> Self {
        self.stars = stars;
        self
    }

    pub fn points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    pub fn role_id(mut self, role_id: impl Into<String>) -> Self {
        self.role_id = role_id.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the rank record into the database.
    pub async fn build(self) -> Result<entity::user_rank::Model, DbErr> {
        let now = Utc::now();
        entity::user_rank::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            game_id: ActiveValue::Set(self.game_id),
            server_id: ActiveValue::Set(self.server_id),
            player_name: ActiveValue::Set(self.player_name),
            current_rank: ActiveValue::Set(self.current_rank),
            division: ActiveValue::Set(self.division),
            previous_rank: ActiveValue::Set(self.previous_rank),
            stars: ActiveValue::Set(self.stars),
            points: ActiveValue::Set(self.points),
            role_id: ActiveValue::Set(self.role_id),
            status: ActiveValue::Set(self.status),
            last_checked: ActiveValue::Set(now),
            rank_changed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a rank record with default values.
///
/// Shorthand for `UserRankFactory::new(db).build().await`.
pub async fn create_user_rank(db: &DatabaseConnection) -> Result<entity::user_rank::Model, DbErr> {
    UserRankFactory::new(db).build().await
}
