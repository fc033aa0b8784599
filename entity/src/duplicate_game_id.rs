//! Registry of game IDs claimed by more than one Discord user.
//!
//! `primary_user_id` is the first claimant and is never overwritten once
//! set. Later distinct claimants accumulate in `alternate_user_ids`, stored
//! as a JSON array of user IDs.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "duplicate_game_id")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub game_id: String,
    pub server_id: String,
    pub primary_user_id: String,
    /// JSON array of user IDs that later claimed the same game ID.
    pub alternate_user_ids: Option<String>,
    /// One of `low`, `medium`, `high`. Supplied by the fraud aggregator at
    /// registration time, never recomputed here.
    pub severity: String,
    pub flagged_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
