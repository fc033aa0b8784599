use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, TransactionError, TransactionTrait,
};

use crate::model::fraud::Severity;

/// Registry of game IDs claimed by more than one Discord account.
///
/// The first claimant becomes the immutable primary; later claimants are
/// appended to the alternate list. A primary is never reassigned by this
/// repository.
pub struct DuplicateGameIdRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DuplicateGameIdRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_game_id(
        &self,
        game_id: &str,
    ) -> Result<Option<entity::duplicate_game_id::Model>, DbErr> {
        entity::prelude::DuplicateGameId::find()
            .filter(entity::duplicate_game_id::Column::GameId.eq(game_id))
            .one(self.db)
            .await
    }

    /// Records a claim on a game ID.
    ///
    /// The first claim inserts the row with the claimant as primary; once
    /// set, the primary is never reassigned. A repeat claim by the primary is
    /// a no-op. A claim by any other user appends that user to the alternate
    /// list (idempotently) and overwrites the stored severity with the
    /// supplied value.
    ///
    /// Read and append run in one transaction, so claimants arriving at the
    /// same moment cannot drop each other's alternate entry.
    pub async fn register(
        &self,
        game_id: &str,
        server_id: &str,
        user_id: &str,
        severity: Severity,
    ) -> Result<entity::duplicate_game_id::Model, DbErr> {
        let game_id = game_id.to_string();
        let server_id = server_id.to_string();
        let user_id = user_id.to_string();

        self.db
            .transaction::<_, entity::duplicate_game_id::Model, DbErr>(move |txn| {
                Box::pin(async move {
                    let existing = entity::prelude::DuplicateGameId::find()
                        .filter(entity::duplicate_game_id::Column::GameId.eq(game_id.as_str()))
                        .one(txn)
                        .await?;

                    let Some(existing) = existing else {
                        return entity::duplicate_game_id::ActiveModel {
                            game_id: ActiveValue::Set(game_id),
                            server_id: ActiveValue::Set(server_id),
                            primary_user_id: ActiveValue::Set(user_id),
                            alternate_user_ids: ActiveValue::Set(None),
                            severity: ActiveValue::Set(severity.as_str().to_string()),
                            flagged_at: ActiveValue::Set(Utc::now()),
                            ..Default::default()
                        }
                        .insert(txn)
                        .await;
                    };

                    if existing.primary_user_id == user_id {
                        return Ok(existing);
                    }

                    let mut alternates = parse_alternates(existing.alternate_user_ids.as_deref())?;

                    if alternates.contains(&user_id) && existing.severity == severity.as_str() {
                        return Ok(existing);
                    }
                    if !alternates.contains(&user_id) {
                        alternates.push(user_id);
                    }

                    let serialized = serde_json::to_string(&alternates).map_err(|err| {
                        DbErr::Custom(format!("serializing alternate user IDs: {err}"))
                    })?;

                    let mut active = existing.into_active_model();
                    active.alternate_user_ids = ActiveValue::Set(Some(serialized));
                    active.severity = ActiveValue::Set(severity.as_str().to_string());
                    active.update(txn).await
                })
            })
            .await
            .map_err(|err| match err {
                TransactionError::Connection(err) => err,
                TransactionError::Transaction(err) => err,
            })
    }
}

/// Alternate claimants stored on a registry row, oldest first.
pub fn parse_alternates(raw: Option<&str>) -> Result<Vec<String>, DbErr> {
    match raw {
        None => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(raw)
            .map_err(|err| DbErr::Custom(format!("corrupt alternate user ID list: {err}"))),
    }
}
