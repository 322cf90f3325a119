//! Slash command handler trait
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: Handlers own their definitions and permission requirements, run against PlatformClient
//! - 1.0.0: Initial implementation for modular command handling

use anyhow::Result;
use async_trait::async_trait;
use serenity::builder::CreateApplicationCommand;
use serenity::model::permissions::Permissions;

use super::context::CommandContext;
use crate::platform::Invocation;

/// Trait for slash command handlers
///
/// Each command handler implements this trait to process one or more slash commands.
/// Handlers are registered with a CommandRegistry and dispatched based on command name.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl SlashCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     fn create_commands(&self) -> Vec<CreateApplicationCommand> {
///         slash::utility::create_commands()
///     }
///
///     async fn handle(&self, ctx: &CommandContext<'_>, invocation: &Invocation) -> Result<()> {
///         ctx.platform.reply(invocation, Reply::Text("Pong!".into())).await
///     }
/// }
/// ```
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    ///
    /// A handler can process multiple commands if they share logic.
    fn command_names(&self) -> &'static [&'static str];

    /// Definitions published to the platform for `command_names()`
    fn create_commands(&self) -> Vec<CreateApplicationCommand>;

    /// Permissions the invoking member must hold
    fn required_permissions(&self) -> Permissions {
        Permissions::empty()
    }

    /// Handle the slash command
    ///
    /// # Arguments
    ///
    /// * `ctx` - Platform client and the registry the handler was loaded into
    /// * `invocation` - The slash command call to answer
    async fn handle(&self, ctx: &CommandContext<'_>, invocation: &Invocation) -> Result<()>;
}
