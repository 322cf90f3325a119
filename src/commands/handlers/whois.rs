//! Whois command handler
//!
//! Handles: whois
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use log::{debug, info};
use serenity::builder::CreateApplicationCommand;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::registry::CommandRegistry;
use crate::commands::slash;
use crate::features::whois::build_display;
use crate::platform::{Invocation, Reply};

pub fn register(registry: &mut CommandRegistry) -> Result<()> {
    registry.register("whois", Arc::new(WhoisHandler))?;
    Ok(())
}

pub struct WhoisHandler;

#[async_trait]
impl SlashCommandHandler for WhoisHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["whois"]
    }

    fn create_commands(&self) -> Vec<CreateApplicationCommand> {
        slash::whois::create_commands()
    }

    async fn handle(&self, ctx: &CommandContext<'_>, invocation: &Invocation) -> Result<()> {
        let request_id = invocation.request_id;
        let target = invocation
            .user_option("user")
            .unwrap_or(invocation.invoker_id);

        let snapshot = ctx
            .platform
            .user_snapshot(invocation.guild_id, target)
            .await
            .with_context(|| format!("Could not look up user {target}"))?;

        let document = build_display(&snapshot, &invocation.invoker_name);
        debug!(
            "[{request_id}] /whois built {} fields for {}",
            document.sections.len(),
            snapshot.name
        );

        ctx.platform
            .reply(invocation, Reply::Embed(document))
            .await?;

        info!(
            "[{request_id}] Whois command completed | Invoker: {} | Target: {target}",
            invocation.invoker_id
        );
        Ok(())
    }
}
