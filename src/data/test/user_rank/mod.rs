use crate::data::user_rank::UserRankRepository;
use crate::model::{
    rank::{Rank, RankStatus},
    verification::UpsertRankParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert_rank;

fn params(user_id: u64, rank: Rank, status: RankStatus) -> UpsertRankParams {
    UpsertRankParams {
        user_id,
        guild_id: 42,
        game_id: "123456789".to_string(),
        server_id: "2001".to_string(),
        rank,
        stars: 0,
        points: 0,
        division: None,
        player_name: None,
        role_id: 0,
        status,
    }
}
