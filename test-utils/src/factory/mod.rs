//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with
//! sensible defaults, reducing boilerplate in tests. Each entity has its own
//! factory module with a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let record = factory::user_rank::create_user_rank(&db).await?;
//!
//!     // Use the builder for custom values
//!     let dup = factory::duplicate_game_id::DuplicateGameIdFactory::new(&db)
//!         .game_id("123456789")
//!         .primary_user_id("111")
//!         .severity("medium")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user_rank` - Verified rank records
//! - `duplicate_game_id` - Duplicate game ID registry rows
//! - `rate_limit_window` - Rate-limit counter windows
//! - `suspicious_activity` - Flagged activity rows
//! - `helpers` - Unique ID generation shared across factories

pub mod duplicate_game_id;
pub mod helpers;
pub mod rate_limit_window;
pub mod suspicious_activity;
pub mod user_rank;

// Re-export commonly used factory functions for concise usage
pub use duplicate_game_id::create_duplicate;
pub use rate_limit_window::create_window;
pub use suspicious_activity::create_suspicious_activity;
pub use user_rank::create_user_rank;
