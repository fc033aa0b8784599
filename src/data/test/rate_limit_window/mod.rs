use crate::data::rate_limit_window::RateLimitWindowRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod attempts_within;
mod record_attempt;
