//! Append-only audit trail of verification attempts.
//!
//! One row is written per completed validator call and never mutated or
//! deleted afterwards. Player attributes are stored as returned by the
//! validator; absent attributes are stored as NULL.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "verification_audit_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: String,
    pub guild_id: String,
    pub game_id: String,
    pub server_id: String,
    pub username: Option<String>,
    pub level: Option<String>,
    pub zone: Option<String>,
    pub country: Option<String>,
    /// One of `success`, `failed`, `suspicious`.
    pub status: String,
    /// Truncated SHA-256 of the claimant's origin hint.
    pub ip_hash: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
