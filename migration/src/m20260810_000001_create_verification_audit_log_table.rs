use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VerificationAuditLog::Table)
                    .if_not_exists()
                    .col(pk_auto(VerificationAuditLog::Id))
                    .col(string(VerificationAuditLog::UserId))
                    .col(string(VerificationAuditLog::GuildId))
                    .col(string(VerificationAuditLog::GameId))
                    .col(string(VerificationAuditLog::ServerId))
                    .col(string_null(VerificationAuditLog::Username))
                    .col(string_null(VerificationAuditLog::Level))
                    .col(string_null(VerificationAuditLog::Zone))
                    .col(string_null(VerificationAuditLog::Country))
                    .col(string(VerificationAuditLog::Status))
                    .col(string_null(VerificationAuditLog::IpHash))
                    .col(string_null(VerificationAuditLog::UserAgent))
                    .col(
                        timestamp_with_time_zone(VerificationAuditLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VerificationAuditLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VerificationAuditLog {
    Table,
    Id,
    UserId,
    GuildId,
    GameId,
    ServerId,
    Username,
    Level,
    Zone,
    Country,
    Status,
    IpHash,
    UserAgent,
    CreatedAt,
}
