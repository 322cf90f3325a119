//! Utility command handlers
//!
//! Handles: ping, help
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: ping and help

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::builder::CreateApplicationCommand;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::registry::CommandRegistry;
use crate::commands::slash;
use crate::platform::{Invocation, Reply};

pub fn register(registry: &mut CommandRegistry) -> Result<()> {
    registry.register("utility", Arc::new(UtilityHandler))?;
    Ok(())
}

/// Handler for utility commands: ping, help
pub struct UtilityHandler;

#[async_trait]
impl SlashCommandHandler for UtilityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["ping", "help"]
    }

    fn create_commands(&self) -> Vec<CreateApplicationCommand> {
        slash::utility::create_commands()
    }

    async fn handle(&self, ctx: &CommandContext<'_>, invocation: &Invocation) -> Result<()> {
        match invocation.name.as_str() {
            "ping" => self.handle_ping(ctx, invocation).await,
            "help" => self.handle_help(ctx, invocation).await,
            _ => Ok(()),
        }
    }
}

impl UtilityHandler {
    /// Handle /ping command
    async fn handle_ping(&self, ctx: &CommandContext<'_>, invocation: &Invocation) -> Result<()> {
        ctx.platform
            .reply(invocation, Reply::Text("Pong!".to_string()))
            .await?;

        info!(
            "[{}] Ping command completed for user {}",
            invocation.request_id, invocation.invoker_id
        );
        Ok(())
    }

    /// Handle /help command
    async fn handle_help(&self, ctx: &CommandContext<'_>, invocation: &Invocation) -> Result<()> {
        ctx.platform
            .reply(invocation, Reply::Text(help_text(ctx.registry)))
            .await
    }
}

fn help_text(registry: &CommandRegistry) -> String {
    let mut text = String::from("**Available Slash Commands:**\n");
    for (name, description) in registry.help_entries() {
        text.push_str(&format!("`/{name}` - {description}\n"));
    }
    text.trim_end().to_string()
}
