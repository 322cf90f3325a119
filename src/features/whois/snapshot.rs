//! Read-only view of a user at invocation time

use chrono::{DateTime, Utc};

/// Presence status as reported by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenceStatus {
    Online,
    Idle,
    DoNotDisturb,
    Invisible,
    #[default]
    Offline,
}

impl PresenceStatus {
    /// Wire name of the status
    pub fn as_str(self) -> &'static str {
        match self {
            PresenceStatus::Online => "online",
            PresenceStatus::Idle => "idle",
            PresenceStatus::DoNotDisturb => "dnd",
            PresenceStatus::Invisible => "invisible",
            PresenceStatus::Offline => "offline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Playing,
    Streaming,
    Listening,
    Watching,
    Custom,
    Competing,
    Unknown,
}

impl ActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Playing => "Playing",
            ActivityKind::Streaming => "Streaming",
            ActivityKind::Listening => "Listening",
            ActivityKind::Watching => "Watching",
            ActivityKind::Custom => "Custom",
            ActivityKind::Competing => "Competing",
            ActivityKind::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub label: String,
}

/// Everything the whois formatter needs to know about a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSnapshot {
    pub name: String,
    /// "0" for accounts on the unique-username system
    pub discriminator: String,
    pub id: u64,
    pub nickname: Option<String>,
    pub is_bot: bool,
    /// Owner of the guild the command ran in, `None` outside a guild
    pub guild_owner_id: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub joined_at: Option<DateTime<Utc>>,
    pub status: PresenceStatus,
    pub activity: Option<Activity>,
    /// Display colour; `0` means no coloured role
    pub accent_color: u32,
    pub avatar_url: String,
    /// Role mentions ordered by position; index 0 is always the implicit everyone role
    pub roles: Vec<String>,
}

impl UserSnapshot {
    pub fn is_guild_owner(&self) -> bool {
        self.guild_owner_id == Some(self.id)
    }

    /// Roles worth displaying, i.e. all but the implicit everyone role
    pub fn displayed_roles(&self) -> &[String] {
        self.roles.get(1..).unwrap_or(&[])
    }
}
