//! Rolling attempt counters per (user, guild) identity.
//!
//! A window is active while `now` falls inside `[window_start, window_end)`.
//! Lookups sum the attempt counts of windows whose start lies within the
//! trailing duration, giving a coarse rolling counter rather than a precise
//! sliding log.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rate_limit_window")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: String,
    pub guild_id: String,
    pub attempt_count: i32,
    pub window_start: DateTimeUtc,
    pub window_end: DateTimeUtc,
    pub flagged: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
