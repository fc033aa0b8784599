use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    data::{
        audit_log::VerificationAuditLogRepository,
        suspicious_activity::SuspiciousActivityRepository,
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::api::{AuditEntryDto, GuildStatsDto, ResolveActivityDto, SuspiciousActivityDto},
    service::rank::RankService,
    state::AppState,
};

/// Default number of audit entries returned when no limit is given.
const DEFAULT_AUDIT_LIMIT: u64 = 50;

/// Query parameters for the audit trail endpoint.
#[derive(Deserialize)]
pub struct AuditParams {
    pub limit: Option<u64>,
}

pub async fn list_activities(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.config, &session)
        .require(&[Permission::Moderator])
        .await?;

    let activities = SuspiciousActivityRepository::new(&state.db)
        .list_unresolved(state.config.guild_id)
        .await?;

    let dtos: Vec<SuspiciousActivityDto> = activities
        .into_iter()
        .map(SuspiciousActivityDto::from)
        .collect();

    Ok(Json(dtos))
}

pub async fn resolve_activity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(body): Json<ResolveActivityDto>,
) -> Result<impl IntoResponse, AppError> {
    let moderator = AuthGuard::new(&state.config, &session)
        .require(&[Permission::Moderator])
        .await?;

    let resolved = SuspiciousActivityRepository::new(&state.db)
        .resolve(id, body.notes)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No suspicious activity with ID {}", id)))?;

    tracing::info!(
        activity_id = id,
        moderator = %moderator.username,
        "Suspicious activity resolved"
    );

    Ok(Json(SuspiciousActivityDto::from(resolved)))
}

pub async fn recent_audit(
    State(state): State<AppState>,
    session: Session,
    params: Query<AuditParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.config, &session)
        .require(&[Permission::Moderator])
        .await?;

    let limit = params.0.limit.unwrap_or(DEFAULT_AUDIT_LIMIT);
    let entries = VerificationAuditLogRepository::new(&state.db)
        .recent_for_guild(state.config.guild_id, limit)
        .await?;

    let dtos: Vec<AuditEntryDto> = entries.into_iter().map(AuditEntryDto::from).collect();

    Ok(Json(dtos))
}

pub async fn stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.config, &session)
        .require(&[Permission::Moderator])
        .await?;

    let stats = RankService::new(&state.db, &state.config)
        .guild_stats(state.config.guild_id)
        .await?;

    Ok(Json(GuildStatsDto {
        verified_members: stats.verified_members,
        unresolved_activities: stats.unresolved_activities,
        attempts_today: stats.attempts_today,
    }))
}
