//! Serenity-backed platform client
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Replies built with `CreateInteractionResponse`; custom status text from `state`
//! - 1.0.0: Member snapshots from cache/HTTP, raw interaction replies, command sync

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use serde_json::Value;
use serenity::builder::{CreateApplicationCommand, CreateInteractionResponse};
use serenity::model::application::command::Command;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::model::gateway::{Activity as GatewayActivity, ActivityType, Presence};
use serenity::model::guild::Role;
use serenity::model::id::{GuildId, RoleId, UserId};
use serenity::model::user::{OnlineStatus, User};
use serenity::model::Timestamp;
use serenity::prelude::Context;
use std::collections::HashMap;

use super::{Invocation, PlatformClient, Reply};
use crate::core::document_embed;
use crate::features::whois::{Activity, ActivityKind, PresenceStatus, UserSnapshot};

const EVERYONE_MENTION: &str = "@everyone";

/// Position and colour of a guild role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleInfo {
    pub position: i64,
    pub colour: u32,
}

pub struct SerenityPlatform {
    ctx: Context,
    dev_guild: Option<GuildId>,
}

impl SerenityPlatform {
    pub fn new(ctx: Context, dev_guild: Option<GuildId>) -> Self {
        Self { ctx, dev_guild }
    }

    async fn member_snapshot(&self, guild_id: GuildId, user_id: UserId) -> Result<UserSnapshot> {
        let member = guild_id.member(&self.ctx, user_id).await?;

        let (owner_id, roles, presence) = match self.ctx.cache.guild(guild_id) {
            Some(guild) => (
                guild.owner_id.0,
                role_infos(&guild.roles),
                guild.presences.get(&user_id).cloned(),
            ),
            None => {
                debug!("Guild {guild_id} not cached, fetching partial guild");
                let partial = guild_id.to_partial_guild(&self.ctx).await?;
                (partial.owner_id.0, role_infos(&partial.roles), None)
            }
        };

        let member_roles: Vec<u64> = member.roles.iter().map(|r| r.0).collect();
        let (status, activity) = presence_parts(presence.as_ref());

        Ok(UserSnapshot {
            name: member.user.name.clone(),
            discriminator: format_discriminator(member.user.discriminator),
            id: member.user.id.0,
            nickname: member.nick.clone(),
            is_bot: member.user.bot,
            guild_owner_id: Some(owner_id),
            created_at: to_utc(member.user.id.created_at()).unwrap_or_else(Utc::now),
            joined_at: member.joined_at.and_then(to_utc),
            status,
            activity,
            accent_color: member_colour(&member_roles, &roles),
            avatar_url: member.user.face(),
            roles: ordered_role_mentions(&member_roles, &roles),
        })
    }
}

#[async_trait]
impl PlatformClient for SerenityPlatform {
    async fn user_snapshot(&self, guild_id: Option<u64>, user_id: u64) -> Result<UserSnapshot> {
        let user_id = UserId(user_id);
        match guild_id {
            Some(guild_id) => self.member_snapshot(GuildId(guild_id), user_id).await,
            None => {
                let user = user_id.to_user(&self.ctx).await?;
                Ok(user_only_snapshot(&user))
            }
        }
    }

    async fn reply(&self, invocation: &Invocation, reply: Reply) -> Result<()> {
        let body = response_body(reply)?;

        self.ctx
            .http
            .create_interaction_response(invocation.id, &invocation.token, &body)
            .await?;
        Ok(())
    }

    async fn sync_commands(&self, commands: Vec<CreateApplicationCommand>) -> Result<usize> {
        let count = commands.len();

        match self.dev_guild {
            Some(guild_id) => {
                guild_id
                    .set_application_commands(&self.ctx.http, |builder| {
                        for command in commands {
                            builder.add_application_command(command);
                        }
                        builder
                    })
                    .await?;
            }
            None => {
                Command::set_global_application_commands(&self.ctx.http, |builder| {
                    for command in commands {
                        builder.add_application_command(command);
                    }
                    builder
                })
                .await?;
            }
        }

        Ok(count)
    }
}

/// Interaction response payload answering with a channel message
fn response_body(reply: Reply) -> serde_json::Result<Value> {
    let mut response = CreateInteractionResponse::default();
    response
        .kind(InteractionResponseType::ChannelMessageWithSource)
        .interaction_response_data(|m| match reply {
            Reply::Text(content) => m.content(content),
            Reply::Embed(document) => m.add_embed(document_embed(&document)),
        });
    serde_json::to_value(&response.0)
}

/// Snapshot for a user seen outside any guild
fn user_only_snapshot(user: &User) -> UserSnapshot {
    UserSnapshot {
        name: user.name.clone(),
        discriminator: format_discriminator(user.discriminator),
        id: user.id.0,
        nickname: None,
        is_bot: user.bot,
        guild_owner_id: None,
        created_at: to_utc(user.id.created_at()).unwrap_or_else(Utc::now),
        joined_at: None,
        status: PresenceStatus::Offline,
        activity: None,
        accent_color: 0,
        avatar_url: user.face(),
        roles: vec![EVERYONE_MENTION.to_string()],
    }
}

fn role_infos(roles: &HashMap<RoleId, Role>) -> HashMap<u64, RoleInfo> {
    roles
        .iter()
        .map(|(id, role)| {
            (
                id.0,
                RoleInfo {
                    position: role.position,
                    colour: role.colour.0,
                },
            )
        })
        .collect()
}

/// Role mentions lowest position first, with the everyone role prepended
///
/// Roles missing from the guild role map sort after the known ones.
pub fn ordered_role_mentions(
    member_roles: &[u64],
    guild_roles: &HashMap<u64, RoleInfo>,
) -> Vec<String> {
    let mut keyed: Vec<(bool, i64, u64)> = member_roles
        .iter()
        .map(|id| match guild_roles.get(id) {
            Some(info) => (false, info.position, *id),
            None => (true, 0, *id),
        })
        .collect();
    keyed.sort_unstable();

    std::iter::once(EVERYONE_MENTION.to_string())
        .chain(keyed.into_iter().map(|(_, _, id)| format!("<@&{id}>")))
        .collect()
}

/// Colour of the highest positioned coloured role, `0` when none is coloured
pub fn member_colour(member_roles: &[u64], guild_roles: &HashMap<u64, RoleInfo>) -> u32 {
    member_roles
        .iter()
        .filter_map(|id| guild_roles.get(id))
        .filter(|info| info.colour != 0)
        .max_by_key(|info| info.position)
        .map(|info| info.colour)
        .unwrap_or(0)
}

/// Unique-username accounts report discriminator 0
pub fn format_discriminator(discriminator: u16) -> String {
    if discriminator == 0 {
        "0".to_string()
    } else {
        format!("{discriminator:04}")
    }
}

fn to_utc(timestamp: Timestamp) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp.unix_timestamp(), 0)
}

fn presence_parts(presence: Option<&Presence>) -> (PresenceStatus, Option<Activity>) {
    match presence {
        Some(presence) => (
            map_status(presence.status),
            presence.activities.first().map(map_activity),
        ),
        None => (PresenceStatus::Offline, None),
    }
}

pub fn map_status(status: OnlineStatus) -> PresenceStatus {
    match status {
        OnlineStatus::Online => PresenceStatus::Online,
        OnlineStatus::Idle => PresenceStatus::Idle,
        OnlineStatus::DoNotDisturb => PresenceStatus::DoNotDisturb,
        OnlineStatus::Invisible => PresenceStatus::Invisible,
        _ => PresenceStatus::Offline,
    }
}

/// Custom statuses carry the user's text in `state`; `name` is a placeholder
pub fn map_activity(activity: &GatewayActivity) -> Activity {
    let label = match (activity.kind, &activity.state) {
        (ActivityType::Custom, Some(state)) => state.clone(),
        _ => activity.name.clone(),
    };
    Activity {
        kind: map_activity_kind(activity.kind),
        label,
    }
}

pub fn map_activity_kind(kind: ActivityType) -> ActivityKind {
    match kind {
        ActivityType::Playing => ActivityKind::Playing,
        ActivityType::Streaming => ActivityKind::Streaming,
        ActivityType::Listening => ActivityKind::Listening,
        ActivityType::Watching => ActivityKind::Watching,
        ActivityType::Custom => ActivityKind::Custom,
        ActivityType::Competing => ActivityKind::Competing,
        _ => ActivityKind::Unknown,
    }
}
