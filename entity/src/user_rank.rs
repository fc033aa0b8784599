//! Per-user verified MLBB account and competitive rank record.
//!
//! One record per Discord user. Created as `provisional` at verification
//! time with the default rank, promoted to `confirmed` when the user sets a
//! rank explicitly or a re-check obtains one. `previous_rank` and
//! `rank_changed_at` reflect the most recent transition that changed
//! `current_rank` and are left untouched by updates that do not.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_rank")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: String,
    pub guild_id: String,
    pub game_id: String,
    pub server_id: String,
    pub player_name: Option<String>,
    pub current_rank: String,
    pub division: Option<String>,
    pub previous_rank: Option<String>,
    pub stars: i32,
    pub points: i32,
    /// Discord role ID currently assigned for this rank.
    pub role_id: String,
    /// One of `provisional`, `confirmed`.
    pub status: String,
    pub last_checked: DateTimeUtc,
    pub rank_changed_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
