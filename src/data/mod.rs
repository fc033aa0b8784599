//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! parameter models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod audit_log;
pub mod duplicate_game_id;
pub mod rate_limit_window;
pub mod suspicious_activity;
pub mod user_rank;

#[cfg(test)]
mod test;
