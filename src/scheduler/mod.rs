//! Cron jobs for automated background tasks.

pub mod rank_check;
