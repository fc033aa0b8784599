//! Flagged verification attempts awaiting manual review.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "suspicious_activity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: String,
    pub guild_id: String,
    pub game_id: Option<String>,
    /// One of `duplicate_gameid`, `rapid_verify`, `stat_anomaly`,
    /// `multiple_factors`.
    pub activity_type: String,
    /// Human-readable cause; may concatenate several reasons.
    pub reason: String,
    /// One of `low`, `medium`, `high`.
    pub severity: String,
    pub alert_sent: bool,
    pub resolved_at: Option<DateTimeUtc>,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
