use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RateLimitWindow::Table)
                    .if_not_exists()
                    .col(pk_auto(RateLimitWindow::Id))
                    .col(string(RateLimitWindow::UserId))
                    .col(string(RateLimitWindow::GuildId))
                    .col(integer(RateLimitWindow::AttemptCount).default(1))
                    .col(timestamp_with_time_zone(RateLimitWindow::WindowStart))
                    .col(timestamp_with_time_zone(RateLimitWindow::WindowEnd))
                    .col(boolean(RateLimitWindow::Flagged).default(false))
                    .col(
                        timestamp_with_time_zone(RateLimitWindow::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rate_limit_window_identity")
                    .table(RateLimitWindow::Table)
                    .col(RateLimitWindow::UserId)
                    .col(RateLimitWindow::GuildId)
                    .col(RateLimitWindow::WindowStart)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RateLimitWindow::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RateLimitWindow {
    Table,
    Id,
    UserId,
    GuildId,
    AttemptCount,
    WindowStart,
    WindowEnd,
    Flagged,
    CreatedAt,
}
