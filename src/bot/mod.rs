//! Discord bot integration for member verification.
//!
//! The bot owns the member-facing surface of the verification pipeline: the
//! `verify` slash command and its modal, manual rank selection, profile and
//! stats views, and administrator unverification. Verdicts are rendered as
//! embeds; role changes computed by the service layer are applied here and
//! treated as non-fatal.
//!
//! The bot is initialized during startup and runs in its own tokio task so
//! it never blocks the HTTP server. Its HTTP client is shared with the
//! scheduler for sending messages without a second Discord connection.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability and slash command dispatch
//! - `GUILD_MEMBERS` - Member role management (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal for the bot application.

pub mod commands;
pub mod handler;
pub mod start;
