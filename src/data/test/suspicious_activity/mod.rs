use crate::data::suspicious_activity::SuspiciousActivityRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
