use crate::data::duplicate_game_id::{parse_alternates, DuplicateGameIdRepository};
use crate::model::fraud::Severity;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
