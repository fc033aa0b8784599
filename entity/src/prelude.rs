pub use super::duplicate_game_id::Entity as DuplicateGameId;
pub use super::rate_limit_window::Entity as RateLimitWindow;
pub use super::suspicious_activity::Entity as SuspiciousActivity;
pub use super::user_rank::Entity as UserRank;
pub use super::verification_audit_log::Entity as VerificationAuditLog;
