use crate::data::audit_log::VerificationAuditLogRepository;
use crate::model::{
    player::AuditAttributes,
    verification::{AttemptStatus, LogAttemptParams},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod insert;

fn params(user_id: u64, status: AttemptStatus) -> LogAttemptParams {
    LogAttemptParams {
        user_id,
        guild_id: 42,
        game_id: "123456789".to_string(),
        server_id: "2001".to_string(),
        attributes: AuditAttributes {
            username: Some("Hero".to_string()),
            level: Some("42".to_string()),
            zone: None,
            country: None,
        },
        status,
        ip_hash: Some("deadbeefdeadbeef".to_string()),
        user_agent: None,
    }
}
