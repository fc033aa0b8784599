//! Slash command and modal dispatch.
//!
//! Commands reply ephemerally; verdict side effects (roles, DMs, admin
//! channel traffic) are applied here and are non-fatal: a failed role grant
//! or DM is logged and the interaction still completes.

use serenity::all::{
    ActionRowComponent, ChannelId, Colour, CommandInteraction, Context, CreateActionRow,
    CreateEmbed, CreateEmbedFooter, CreateInputText, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, CreateMessage,
    CreateModal, GuildId, InputTextStyle, Interaction, ModalInteraction, ResolvedValue, RoleId,
    Timestamp, UserId,
};

use crate::{
    bot::handler::Handler,
    data::suspicious_activity::SuspiciousActivityRepository,
    error::{verification::VerificationError, AppError},
    model::{
        player::PlayerProfile,
        rank::Rank,
        verification::{FraudAlert, VerificationOutcome, VerificationRequest},
    },
    service::{
        rank::{RankService, RoleDelta},
        validator::{MoogoldValidator, ValidatorError},
        verification::VerificationService,
    },
};

/// Custom ID of the verification modal and its inputs.
const VERIFY_MODAL_ID: &str = "verify_modal";
const INPUT_GAME_ID: &str = "game_id";
const INPUT_SERVER_ID: &str = "server_id";
const INPUT_RANK: &str = "rank";
const INPUT_DIVISION: &str = "division";

pub async fn handle_interaction(handler: &Handler, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(cmd) => {
            let result = match cmd.data.name.as_str() {
                "verify" => verify_command(handler, &ctx, &cmd).await,
                "rank" => rank_command(handler, &ctx, &cmd).await,
                "profile" => profile_command(handler, &ctx, &cmd).await,
                "stats" => stats_command(handler, &ctx, &cmd).await,
                "unverify" => unverify_command(handler, &ctx, &cmd).await,
                other => {
                    tracing::warn!("Received unknown command: {}", other);
                    Ok(())
                }
            };

            if let Err(e) = result {
                tracing::error!("Command /{} failed: {}", cmd.data.name, e);
                let _ = reply_ephemeral(&ctx, &cmd, "Something went wrong. Please try again.").await;
            }
        }
        Interaction::Modal(modal) if modal.data.custom_id == VERIFY_MODAL_ID => {
            if let Err(e) = verify_modal(handler, &ctx, &modal).await {
                tracing::error!("Verification modal failed: {}", e);
                let _ = followup_text(&ctx, &modal, "Something went wrong. Please try again.").await;
            }
        }
        _ => {}
    }
}

/// Opens the verification modal, unless the caller is in the wrong channel
/// or still inside the cooldown.
async fn verify_command(
    handler: &Handler,
    ctx: &Context,
    cmd: &CommandInteraction,
) -> Result<(), AppError> {
    if cmd.channel_id.get() != handler.config.verify_channel_id {
        return reply_ephemeral(
            ctx,
            cmd,
            &format!(
                "This command can only be used in <#{}>",
                handler.config.verify_channel_id
            ),
        )
        .await;
    }

    let validator = MoogoldValidator::new(
        handler.http_client.clone(),
        handler.config.validator_url.clone(),
    );
    let service = VerificationService::new(&handler.db, &validator, &handler.config);

    if service
        .cooldown_active(cmd.user.id.get(), handler.config.guild_id)
        .await?
    {
        return reply_ephemeral(
            ctx,
            cmd,
            "You recently attempted verification. Please wait an hour before trying again.",
        )
        .await;
    }

    let modal = CreateModal::new(VERIFY_MODAL_ID, "Mobile Legends Verification").components(vec![
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Game ID (8-10 digits)", INPUT_GAME_ID)
                .required(true),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Server ID", INPUT_SERVER_ID)
                .placeholder("e.g. 2083")
                .required(true),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Rank", INPUT_RANK)
                .placeholder("e.g. Epic (optional)")
                .required(false),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Division", INPUT_DIVISION)
                .placeholder("e.g. III (optional)")
                .required(false),
        ),
    ]);

    cmd.create_response(&ctx.http, CreateInteractionResponse::Modal(modal))
        .await?;

    Ok(())
}

/// Runs the verification pipeline for a submitted modal and renders the
/// outcome.
async fn verify_modal(
    handler: &Handler,
    ctx: &Context,
    modal: &ModalInteraction,
) -> Result<(), AppError> {
    // The external lookup can be slow; defer so the token stays valid.
    modal
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Defer(
                CreateInteractionResponseMessage::new().ephemeral(true),
            ),
        )
        .await?;

    let game_id = modal_value(modal, INPUT_GAME_ID).unwrap_or_default();
    let server_id = modal_value(modal, INPUT_SERVER_ID).unwrap_or_default();
    let rank = modal_value(modal, INPUT_RANK)
        .and_then(|value| Rank::from_name(value.trim()).ok());
    let division = modal_value(modal, INPUT_DIVISION).filter(|value| !value.trim().is_empty());

    let request = VerificationRequest {
        user_id: modal.user.id.get(),
        guild_id: handler.config.guild_id,
        game_id: game_id.trim().to_string(),
        server_id: server_id.trim().to_string(),
        rank,
        division,
        origin_hint: None,
        client_hint: Some(modal.locale.clone()),
    };
    let submitted_game_id = request.game_id.clone();
    let submitted_server_id = request.server_id.clone();

    let validator = MoogoldValidator::new(
        handler.http_client.clone(),
        handler.config.validator_url.clone(),
    );
    let service = VerificationService::new(&handler.db, &validator, &handler.config);

    match service.verify(request).await {
        Ok(VerificationOutcome::Accepted {
            profile,
            rank,
            roles,
        }) => {
            render_accepted(
                handler,
                ctx,
                modal,
                &profile,
                rank,
                &roles,
                &submitted_game_id,
                &submitted_server_id,
            )
            .await
        }
        Ok(VerificationOutcome::Flagged { alert, .. }) => {
            // Heuristics stay private; the member only learns the attempt is held.
            followup_text(
                ctx,
                modal,
                "Your verification needs a manual review by the moderators. \
                 You will be notified once it has been processed.",
            )
            .await?;

            if let Some(alert) = alert {
                deliver_alert(handler, ctx, &alert).await;
            }

            Ok(())
        }
        Err(VerificationError::MalformedGameId) => {
            followup_text(
                ctx,
                modal,
                "That Game ID does not look right. Game IDs are 8 to 10 digits.",
            )
            .await
        }
        Err(VerificationError::MalformedServerId) => {
            followup_text(ctx, modal, "That Server ID does not look right. Server IDs are numeric.")
                .await
        }
        Err(VerificationError::Lookup(ValidatorError::InvalidAccount { .. })) => {
            followup_text(
                ctx,
                modal,
                "No account was found for that Game ID and Server ID. \
                 Please double-check them and try again.",
            )
            .await
        }
        Err(VerificationError::Lookup(_)) => {
            followup_text(
                ctx,
                modal,
                "The account lookup service is currently unavailable. Please try again later.",
            )
            .await
        }
        Err(err) => Err(err.into()),
    }
}

/// Renders a clean acceptance: roles, DM, admin transcript, ephemeral reply.
#[allow(clippy::too_many_arguments)]
async fn render_accepted(
    handler: &Handler,
    ctx: &Context,
    modal: &ModalInteraction,
    profile: &PlayerProfile,
    rank: Rank,
    roles: &[u64],
    game_id: &str,
    server_id: &str,
) -> Result<(), AppError> {
    let guild_id = GuildId::new(handler.config.guild_id);
    let user_id = modal.user.id;

    for role in roles {
        if let Err(e) = ctx
            .http
            .add_member_role(guild_id, user_id, RoleId::new(*role), Some("MLBB verification"))
            .await
        {
            tracing::error!("Failed to grant role {} to {}: {:?}", role, user_id, e);
        }
    }

    let embed = CreateEmbed::new()
        .title("Verification Complete")
        .colour(Colour::DARK_GREEN)
        .field("User", modal.user.name.clone(), true)
        .field("Game ID", game_id.to_string(), true)
        .field("Server", server_id.to_string(), true)
        .field("Player Name", profile.name.clone(), true)
        .field("Level", profile.level.clone(), true)
        .field("Rank", rank.name(), true)
        .footer(CreateEmbedFooter::new("Verified automatically"))
        .timestamp(Timestamp::now());

    if let Err(e) = modal
        .user
        .dm(
            &ctx.http,
            CreateMessage::new()
                .content(format!(
                    "**Congratulations!** Your Mobile Legends account **{}** \
                     (Level {}, {}) has been verified. You now have access to \
                     all server channels.",
                    profile.name, profile.level, profile.region
                ))
                .embed(embed.clone()),
        )
        .await
    {
        tracing::error!("Failed to send verification DM: {:?}", e);
    }

    let transcript = embed.clone().field(
        "Member",
        format!("<@{}>", user_id.get()),
        false,
    );
    if let Err(e) = ChannelId::new(handler.config.admin_channel_id)
        .send_message(&ctx.http, CreateMessage::new().embed(transcript))
        .await
    {
        tracing::error!("Failed to send admin transcript: {:?}", e);
    }

    modal
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .ephemeral(true)
                .content(format!(
                    "**Verification successful!** Welcome, **{}**. \
                     Your roles have been assigned and a confirmation was sent to your DMs.",
                    profile.name
                ))
                .embed(embed),
        )
        .await?;

    Ok(())
}

/// Posts a high-severity fraud alert to the admin channel and marks it
/// delivered. Delivery failures are logged; the alert row stays undelivered
/// so moderators can still find it in the review queue.
async fn deliver_alert(handler: &Handler, ctx: &Context, alert: &FraudAlert) {
    let embed = CreateEmbed::new()
        .title("High-severity verification alert")
        .colour(Colour::RED)
        .field("Member", format!("<@{}>", alert.user_id), true)
        .field("Game ID", alert.game_id.clone(), true)
        .field("Server", alert.server_id.clone(), true)
        .field("Type", alert.activity_type.as_str(), true)
        .field("Severity", alert.severity.as_str(), true)
        .field("Reasons", alert.reasons.join("\n"), false)
        .timestamp(Timestamp::now());

    if let Err(e) = ChannelId::new(handler.config.admin_channel_id)
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await
    {
        tracing::error!("Failed to deliver fraud alert: {:?}", e);
        return;
    }

    if let Err(e) = SuspiciousActivityRepository::new(&handler.db)
        .mark_alert_sent(alert.activity_id)
        .await
    {
        tracing::error!("Failed to mark alert as sent: {:?}", e);
    }
}

/// Sets the caller's rank from an explicit selection.
async fn rank_command(
    handler: &Handler,
    ctx: &Context,
    cmd: &CommandInteraction,
) -> Result<(), AppError> {
    let mut rank_name = None;
    let mut division = None;
    for option in cmd.data.options() {
        match (option.name, option.value) {
            ("rank", ResolvedValue::String(value)) => rank_name = Some(value.to_string()),
            ("division", ResolvedValue::String(value)) => division = Some(value.to_string()),
            _ => {}
        }
    }

    let Some(rank_name) = rank_name else {
        return reply_ephemeral(ctx, cmd, "Please choose a rank.").await;
    };
    let rank = Rank::from_name(&rank_name)?;

    if let Some(division) = &division {
        if !rank.divisions().contains(&division.as_str()) {
            return reply_ephemeral(
                ctx,
                cmd,
                &format!(
                    "{} has no division \"{}\". Valid divisions: {}",
                    rank,
                    division,
                    rank.divisions().join(", ")
                ),
            )
            .await;
        }
    }

    let service = RankService::new(&handler.db, &handler.config);
    match service
        .set_manual_rank(cmd.user.id.get(), handler.config.guild_id, rank, division)
        .await
    {
        Ok((record, delta)) => {
            apply_role_delta(handler, ctx, cmd.user.id, &delta).await;

            reply_ephemeral(
                ctx,
                cmd,
                &format!("Your rank is now **{}**.", record.rank_display()),
            )
            .await
        }
        Err(AppError::NotFound(message)) => reply_ephemeral(ctx, cmd, &message).await,
        Err(err) => Err(err),
    }
}

/// Shows the caller's verified profile.
async fn profile_command(
    handler: &Handler,
    ctx: &Context,
    cmd: &CommandInteraction,
) -> Result<(), AppError> {
    let service = RankService::new(&handler.db, &handler.config);
    let Some(record) = service
        .profile(cmd.user.id.get(), handler.config.guild_id)
        .await?
    else {
        return reply_ephemeral(
            ctx,
            cmd,
            "You are not verified yet. Use /verify to link your account.",
        )
        .await;
    };

    let embed = CreateEmbed::new()
        .title("Your Mobile Legends profile")
        .colour(Colour::BLUE)
        .field(
            "Player Name",
            record.player_name.clone().unwrap_or_else(|| "Unknown".to_string()),
            true,
        )
        .field("Game ID", record.game_id.clone(), true)
        .field("Server", record.server_id.clone(), true)
        .field("Rank", record.rank_display(), true)
        .field("Status", record.status.as_str(), true)
        .field(
            "Last checked",
            record.last_checked.format("%Y-%m-%d %H:%M UTC").to_string(),
            true,
        );

    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .ephemeral(true)
                .embed(embed),
        ),
    )
    .await?;

    Ok(())
}

/// Shows aggregate verification counters. Administrators only.
async fn stats_command(
    handler: &Handler,
    ctx: &Context,
    cmd: &CommandInteraction,
) -> Result<(), AppError> {
    if !is_admin(cmd) {
        return reply_ephemeral(ctx, cmd, "This command requires administrator permissions.")
            .await;
    }

    let stats = RankService::new(&handler.db, &handler.config)
        .guild_stats(handler.config.guild_id)
        .await?;

    let embed = CreateEmbed::new()
        .title("Verification statistics")
        .colour(Colour::BLUE)
        .field("Verified members", stats.verified_members.to_string(), true)
        .field(
            "Unresolved flags",
            stats.unresolved_activities.to_string(),
            true,
        )
        .field("Attempts (24h)", stats.attempts_today.to_string(), true);

    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .ephemeral(true)
                .embed(embed),
        ),
    )
    .await?;

    Ok(())
}

/// Removes a member's verification. Administrators only.
async fn unverify_command(
    handler: &Handler,
    ctx: &Context,
    cmd: &CommandInteraction,
) -> Result<(), AppError> {
    if !is_admin(cmd) {
        return reply_ephemeral(ctx, cmd, "This command requires administrator permissions.")
            .await;
    }

    let mut target = None;
    for option in cmd.data.options() {
        if let ("user", ResolvedValue::User(user, _)) = (option.name, option.value) {
            target = Some(user.id);
        }
    }
    let Some(target) = target else {
        return reply_ephemeral(ctx, cmd, "Please choose a member to unverify.").await;
    };

    let service = RankService::new(&handler.db, &handler.config);
    let Some(delta) = service
        .unverify(target.get(), handler.config.guild_id)
        .await?
    else {
        return reply_ephemeral(ctx, cmd, "That member is not verified.").await;
    };

    apply_role_delta(handler, ctx, target, &delta).await;

    tracing::info!(
        target = target.get(),
        moderator = cmd.user.id.get(),
        "Member unverified"
    );

    reply_ephemeral(
        ctx,
        cmd,
        &format!("<@{}> has been unverified and their roles removed.", target.get()),
    )
    .await
}

/// Applies a role delta to a member. Individual failures are logged and do
/// not abort the remaining changes.
async fn apply_role_delta(handler: &Handler, ctx: &Context, user_id: UserId, delta: &RoleDelta) {
    let guild_id = GuildId::new(handler.config.guild_id);

    for role in &delta.add {
        if let Err(e) = ctx
            .http
            .add_member_role(guild_id, user_id, RoleId::new(*role), Some("MLBB rank update"))
            .await
        {
            tracing::error!("Failed to grant role {} to {}: {:?}", role, user_id, e);
        }
    }
    for role in &delta.remove {
        if let Err(e) = ctx
            .http
            .remove_member_role(guild_id, user_id, RoleId::new(*role), Some("MLBB rank update"))
            .await
        {
            tracing::error!("Failed to revoke role {} from {}: {:?}", role, user_id, e);
        }
    }
}

fn is_admin(cmd: &CommandInteraction) -> bool {
    cmd.member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|perms| perms.administrator())
}

/// First value of the modal input with the given custom ID.
fn modal_value(modal: &ModalInteraction, custom_id: &str) -> Option<String> {
    modal
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == custom_id => {
                input.value.clone()
            }
            _ => None,
        })
}

async fn reply_ephemeral(
    ctx: &Context,
    cmd: &CommandInteraction,
    text: &str,
) -> Result<(), AppError> {
    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .ephemeral(true)
                .content(text),
        ),
    )
    .await?;

    Ok(())
}

async fn followup_text(
    ctx: &Context,
    modal: &ModalInteraction,
    text: &str,
) -> Result<(), AppError> {
    modal
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .ephemeral(true)
                .content(text),
        )
        .await?;

    Ok(())
}
