pub mod prelude;

pub mod duplicate_game_id;
pub mod rate_limit_window;
pub mod suspicious_activity;
pub mod user_rank;
pub mod verification_audit_log;
