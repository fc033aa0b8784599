//! Factory for creating duplicate game ID registry rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating duplicate registry rows with customizable fields.
pub struct DuplicateGameIdFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: String,
    server_id: String,
    primary_user_id: String,
    alternate_user_ids: Option<Vec<String>>,
    severity: String,
}

impl<'a> DuplicateGameIdFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - game_id: unique 9-digit number
    /// - server_id: `"2001"`
    /// - primary_user_id: auto-incremented unique ID
    /// - no alternates, severity `"low"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            game_id: format!("{}", 100000000 + id),
            server_id: "2001".to_string(),
            primary_user_id: id.to_string(),
            alternate_user_ids: None,
            severity: "low".to_string(),
        }
    }

    pub fn game_id(mut self, game_id: impl Into<String>) -> Self {
        self.game_id = game_id.into();
        self
    }

    pub fn server_id(mut self, server_id: impl Into<String>) -> Self {
        self.server_id = server_id.into();
        self
    }

    pub fn primary_user_id(mut self, primary_user_id: impl Into<String>) -> Self {
        self.primary_user_id = primary_user_id.into();
        self
    }

    pub fn alternate_user_ids(mut self, alternates: Vec<String>) -> Self {
        self.alternate_user_ids = Some(alternates);
        self
    }

    pub fn severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = severity.into();
        self
    }

    /// Builds and inserts the registry row into the database.
    ///
    /// Alternate user IDs are serialized to a JSON array like the data layer
    /// does.
    pub async fn build(self) -> Result<entity::duplicate_game_id::Model, DbErr> {
        let alternates = match &self.alternate_user_ids {
            Some(ids) => Some(
                serde_json::to_string(ids)
                    .map_err(|e| DbErr::Custom(format!("serialize alternates: {}", e)))?,
            ),
            None => None,
        };

        entity::duplicate_game_id::ActiveModel {
            game_id: ActiveValue::Set(self.game_id),
            server_id: ActiveValue::Set(self.server_id),
            primary_user_id: ActiveValue::Set(self.primary_user_id),
            alternate_user_ids: ActiveValue::Set(alternates),
            severity: ActiveValue::Set(self.severity),
            flagged_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a duplicate registry row with default values.
pub async fn create_duplicate(
    db: &DatabaseConnection,
) -> Result<entity::duplicate_game_id::Model, DbErr> {
    DuplicateGameIdFactory::new(db).build().await
}
