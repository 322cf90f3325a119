//! # Platform
//!
//! The operations command handlers need from the chat platform, behind one
//! trait so handlers can be exercised without a gateway connection.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: PlatformClient trait, Invocation, serenity implementation

pub mod discord;
#[cfg(test)]
pub mod testing;

use anyhow::Result;
use async_trait::async_trait;
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::permissions::Permissions;
use std::collections::HashMap;
use uuid::Uuid;

use crate::core::DisplayDocument;
use crate::features::whois::UserSnapshot;

pub use discord::SerenityPlatform;

/// A reply to a single invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Embed(DisplayDocument),
}

/// Platform-neutral view of one slash command call
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Interaction id, needed to answer the call
    pub id: u64,
    pub token: String,
    pub name: String,
    pub invoker_id: u64,
    pub invoker_name: String,
    pub guild_id: Option<u64>,
    /// Resolved permissions of the invoking member, `None` outside a guild
    pub permissions: Option<Permissions>,
    pub options: HashMap<String, serde_json::Value>,
    /// Correlates log lines of one invocation
    pub request_id: Uuid,
}

impl Invocation {
    pub fn from_interaction(command: &ApplicationCommandInteraction) -> Self {
        let options = command
            .data
            .options
            .iter()
            .filter_map(|opt| opt.value.clone().map(|value| (opt.name.clone(), value)))
            .collect();

        Self {
            id: command.id.0,
            token: command.token.clone(),
            name: command.data.name.clone(),
            invoker_id: command.user.id.0,
            invoker_name: command.user.name.clone(),
            guild_id: command.guild_id.map(|id| id.0),
            permissions: command.member.as_ref().and_then(|m| m.permissions),
            options,
            request_id: Uuid::new_v4(),
        }
    }

    /// String option by name
    pub fn string_option(&self, name: &str) -> Option<&str> {
        self.options.get(name).and_then(|v| v.as_str())
    }

    /// User option by name; user ids arrive as snowflake strings
    pub fn user_option(&self, name: &str) -> Option<u64> {
        self.string_option(name).and_then(|s| s.parse().ok())
    }
}

/// What the bot needs from the chat platform
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Gather everything whois displays about a user
    async fn user_snapshot(&self, guild_id: Option<u64>, user_id: u64) -> Result<UserSnapshot>;

    /// Answer an invocation; called at most once per invocation
    async fn reply(&self, invocation: &Invocation, reply: Reply) -> Result<()>;

    /// Publish the full command set, returning how many commands were sent
    async fn sync_commands(&self, commands: Vec<CreateApplicationCommand>) -> Result<usize>;
}
