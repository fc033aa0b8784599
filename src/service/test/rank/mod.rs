use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::user_rank::UserRankFactory};

use super::*;
use crate::{
    error::AppError,
    model::rank::{Rank, RankStatus},
    service::rank::{RankService, RoleDelta},
};

mod set_manual_rank;
mod unverify;

/// Inserts a verified Warrior record for user 1001 in guild 42 holding the
/// Warrior role.
async fn seed_warrior(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    UserRankFactory::new(db)
        .user_id("1001")
        .guild_id("42")
        .game_id("123456789")
        .current_rank("Warrior")
        .role_id(WARRIOR_ROLE.to_string())
        .status("provisional")
        .build()
        .await?;
    Ok(())
}
