//! Rankguard Test Utils
//!
//! Shared testing utilities for building unit and integration tests for the
//! rankguard application. This crate offers a builder pattern for creating
//! test contexts with in-memory SQLite databases and customizable table
//! schemas, plus factories for seeding fraud-detection and rank entities.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::UserRank;
//!
//! #[tokio::test]
//! async fn test_rank_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(UserRank)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
