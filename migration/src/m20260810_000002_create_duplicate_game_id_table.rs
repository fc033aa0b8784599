use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DuplicateGameId::Table)
                    .if_not_exists()
                    .col(pk_auto(DuplicateGameId::Id))
                    .col(string_uniq(DuplicateGameId::GameId))
                    .col(string(DuplicateGameId::ServerId))
                    .col(string(DuplicateGameId::PrimaryUserId))
                    .col(text_null(DuplicateGameId::AlternateUserIds))
                    .col(string(DuplicateGameId::Severity).default("low"))
                    .col(
                        timestamp_with_time_zone(DuplicateGameId::FlaggedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DuplicateGameId::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DuplicateGameId {
    Table,
    Id,
    GameId,
    ServerId,
    PrimaryUserId,
    AlternateUserIds,
    Severity,
    FlaggedAt,
}
