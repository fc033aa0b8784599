use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use super::*;
use crate::{
    error::verification::VerificationError,
    model::{
        rank::Rank,
        verification::{VerificationOutcome, VerificationRequest},
    },
    service::verification::VerificationService,
};


fn request(user_id: u64, game_id: &str) -> VerificationRequest {
    VerificationRequest {
        user_id,
        guild_id: 42,
        game_id: game_id.to_string(),
        server_id: "2001".to_string(),
        rank: None,
        division: None,
        origin_hint: None,
        client_hint: None,
    }
}
