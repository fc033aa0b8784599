use std::collections::HashMap;

use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::fraud::{ActivityType, Severity},
    service::fraud::FraudService,
};

mod perform_check;

fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
