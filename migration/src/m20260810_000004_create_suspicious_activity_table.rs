use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SuspiciousActivity::Table)
                    .if_not_exists()
                    .col(pk_auto(SuspiciousActivity::Id))
                    .col(string(SuspiciousActivity::UserId))
                    .col(string(SuspiciousActivity::GuildId))
                    .col(string_null(SuspiciousActivity::GameId))
                    .col(string(SuspiciousActivity::ActivityType))
                    .col(text(SuspiciousActivity::Reason))
                    .col(string(SuspiciousActivity::Severity))
                    .col(boolean(SuspiciousActivity::AlertSent).default(false))
                    .col(timestamp_with_time_zone_null(SuspiciousActivity::ResolvedAt))
                    .col(text_null(SuspiciousActivity::Notes))
                    .col(
                        timestamp_with_time_zone(SuspiciousActivity::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SuspiciousActivity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SuspiciousActivity {
    Table,
    Id,
    UserId,
    GuildId,
    GameId,
    ActivityType,
    Reason,
    Severity,
    AlertSent,
    ResolvedAt,
    Notes,
    CreatedAt,
}
