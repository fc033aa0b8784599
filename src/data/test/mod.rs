mod audit_log;
mod duplicate_game_id;
mod rate_limit_window;
mod suspicious_activity;
mod user_rank;
