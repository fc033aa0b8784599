pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_verification_audit_log_table;
mod m20260810_000002_create_duplicate_game_id_table;
mod m20260810_000003_create_rate_limit_window_table;
mod m20260810_000004_create_suspicious_activity_table;
mod m20260810_000005_create_user_rank_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_verification_audit_log_table::Migration),
            Box::new(m20260810_000002_create_duplicate_game_id_table::Migration),
            Box::new(m20260810_000003_create_rate_limit_window_table::Migration),
            Box::new(m20260810_000004_create_suspicious_activity_table::Migration),
            Box::new(m20260810_000005_create_user_rank_table::Migration),
        ]
    }
}
