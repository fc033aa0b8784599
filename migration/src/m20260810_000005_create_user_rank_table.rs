use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserRank::Table)
                    .if_not_exists()
                    .col(pk_auto(UserRank::Id))
                    .col(string_uniq(UserRank::UserId))
                    .col(string(UserRank::GuildId))
                    .col(string(UserRank::GameId))
                    .col(string(UserRank::ServerId))
                    .col(string_null(UserRank::PlayerName))
                    .col(string(UserRank::CurrentRank))
                    .col(string_null(UserRank::Division))
                    .col(string_null(UserRank::PreviousRank))
                    .col(integer(UserRank::Stars).default(0))
                    .col(integer(UserRank::Points).default(0))
                    .col(string(UserRank::RoleId))
                    .col(string(UserRank::Status).default("provisional"))
                    .col(timestamp_with_time_zone(UserRank::LastChecked))
                    .col(timestamp_with_time_zone_null(UserRank::RankChangedAt))
                    .col(
                        timestamp_with_time_zone(UserRank::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(UserRank::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserRank::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserRank {
    Table,
    Id,
    UserId,
    GuildId,
    GameId,
    ServerId,
    PlayerName,
    CurrentRank,
    Division,
    PreviousRank,
    Stars,
    Points,
    RoleId,
    Status,
    LastChecked,
    RankChangedAt,
    CreatedAt,
    UpdatedAt,
}
