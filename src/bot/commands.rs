//! Guild slash command definitions.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use crate::model::rank::Rank;

/// All slash commands registered for the configured guild.
pub fn all() -> Vec<CreateCommand> {
    vec![verify(), rank(), profile(), stats(), unverify()]
}

fn verify() -> CreateCommand {
    CreateCommand::new("verify").description("Verify your Mobile Legends account")
}

fn rank() -> CreateCommand {
    let mut rank_option = CreateCommandOption::new(
        CommandOptionType::String,
        "rank",
        "Your current competitive rank",
    )
    .required(true);
    for rank in Rank::ALL {
        rank_option = rank_option.add_string_choice(rank.name(), rank.name());
    }

    CreateCommand::new("rank")
        .description("Set your Mobile Legends rank")
        .add_option(rank_option)
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "division",
            "Division within the rank, e.g. III",
        ))
}

fn profile() -> CreateCommand {
    CreateCommand::new("profile").description("Show your verified Mobile Legends profile")
}

fn stats() -> CreateCommand {
    CreateCommand::new("stats").description("Show verification statistics (administrators only)")
}

fn unverify() -> CreateCommand {
    CreateCommand::new("unverify")
        .description("Remove a member's verification (administrators only)")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "Member to unverify")
                .required(true),
        )
}
