use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{CreateMessage, UserId};
use serenity::http::Http;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    config::Config,
    error::AppError,
    model::rank::{parse_rank, RankRecord},
    service::rank::RankService,
};

/// Starts the hourly rank re-check scheduler.
///
/// Every hour, all rank records in the configured guild are compared against
/// the live rank source. Records whose rank cannot be fetched are skipped;
/// one member's failure never aborts the sweep.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client for role updates and DMs
/// - `config`: Application configuration
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    config: Arc<Config>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_http = discord_http.clone();
    let job_config = config.clone();

    // Run at the top of every hour
    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();
        let config = job_config.clone();

        Box::pin(async move {
            if let Err(e) = recheck_all_ranks(&db, http, &config).await {
                tracing::error!("Error re-checking ranks: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Rank re-check scheduler started");

    Ok(())
}

/// Sweeps every rank record in the guild once.
async fn recheck_all_ranks(
    db: &DatabaseConnection,
    discord_http: Arc<Http>,
    config: &Arc<Config>,
) -> Result<(), AppError> {
    let service = RankService::new(db, config);
    let records = service.all_records(config.guild_id).await?;

    tracing::debug!(count = records.len(), "Re-checking member ranks");

    for record in records {
        if let Err(e) = recheck_member(db, &discord_http, config, &record).await {
            tracing::error!(
                user_id = record.user_id,
                "Failed to re-check member rank: {}",
                e
            );
        }
    }

    Ok(())
}

/// Re-checks a single member's rank against the live source.
///
/// The live fetch currently yields nothing for every account, so this is a
/// no-op sweep; the update path below activates if a rank source appears.
async fn recheck_member(
    db: &DatabaseConnection,
    discord_http: &Arc<Http>,
    config: &Arc<Config>,
    record: &RankRecord,
) -> Result<(), AppError> {
    let service = RankService::new(db, config);

    let Some(live) = service
        .fetch_live_rank(&record.game_id, &record.server_id)
        .await?
    else {
        return Ok(());
    };

    let live_rank = parse_rank(&live.tier, live.stars);
    if live_rank == record.current_rank {
        return Ok(());
    }

    let (updated, delta) = service
        .set_manual_rank(record.user_id, record.guild_id, live_rank, None)
        .await?;

    let guild_id = serenity::all::GuildId::new(config.guild_id);
    let user_id = UserId::new(record.user_id);
    for role in &delta.add {
        if let Err(e) = discord_http
            .add_member_role(
                guild_id,
                user_id,
                serenity::all::RoleId::new(*role),
                Some("MLBB rank re-check"),
            )
            .await
        {
            tracing::error!("Failed to grant role {} to {}: {:?}", role, user_id, e);
        }
    }
    for role in &delta.remove {
        if let Err(e) = discord_http
            .remove_member_role(
                guild_id,
                user_id,
                serenity::all::RoleId::new(*role),
                Some("MLBB rank re-check"),
            )
            .await
        {
            tracing::error!("Failed to revoke role {} from {}: {:?}", role, user_id, e);
        }
    }

    if let Ok(user) = user_id.to_user(discord_http).await {
        if let Err(e) = user
            .dm(
                discord_http,
                CreateMessage::new().content(format!(
                    "Your Mobile Legends rank was updated to **{}**.",
                    updated.rank_display()
                )),
            )
            .await
        {
            tracing::error!("Failed to send rank update DM: {:?}", e);
        }
    }

    tracing::info!(
        user_id = record.user_id,
        rank = %updated.current_rank,
        "Member rank updated from live source"
    );

    Ok(())
}
