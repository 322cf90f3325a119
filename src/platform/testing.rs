//! Recording platform double for unit tests

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serenity::builder::CreateApplicationCommand;
use serenity::model::permissions::Permissions;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use super::{Invocation, PlatformClient, Reply};
use crate::features::whois::{PresenceStatus, UserSnapshot};

#[derive(Default)]
pub struct RecordingPlatform {
    pub snapshots: HashMap<u64, UserSnapshot>,
    pub replies: Mutex<Vec<Reply>>,
    /// Command names of each sync call
    pub syncs: Mutex<Vec<Vec<String>>>,
    pub fail_replies: bool,
}

impl RecordingPlatform {
    pub fn with_snapshot(mut self, snapshot: UserSnapshot) -> Self {
        self.snapshots.insert(snapshot.id, snapshot);
        self
    }

    pub fn replies(&self) -> Vec<Reply> {
        self.replies.lock().unwrap().clone()
    }

    pub fn syncs(&self) -> Vec<Vec<String>> {
        self.syncs.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformClient for RecordingPlatform {
    async fn user_snapshot(&self, _guild_id: Option<u64>, user_id: u64) -> Result<UserSnapshot> {
        self.snapshots
            .get(&user_id)
            .cloned()
            .ok_or_else(|| anyhow!("Unknown member {user_id}"))
    }

    async fn reply(&self, _invocation: &Invocation, reply: Reply) -> Result<()> {
        if self.fail_replies {
            return Err(anyhow!("Interaction token expired"));
        }
        self.replies.lock().unwrap().push(reply);
        Ok(())
    }

    async fn sync_commands(&self, commands: Vec<CreateApplicationCommand>) -> Result<usize> {
        let names: Vec<String> = commands.iter().map(command_name).collect();
        let count = names.len();
        self.syncs.lock().unwrap().push(names);
        Ok(count)
    }
}

pub fn command_name(command: &CreateApplicationCommand) -> String {
    command
        .0
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Invocation from a guild member with no special permissions
pub fn invocation(name: &str) -> Invocation {
    Invocation {
        id: 1,
        token: "token".to_string(),
        name: name.to_string(),
        invoker_id: 123456789,
        invoker_name: "TestUser".to_string(),
        guild_id: Some(555),
        permissions: Some(Permissions::SEND_MESSAGES),
        options: HashMap::new(),
        request_id: Uuid::new_v4(),
    }
}

impl Invocation {
    pub fn with_option(mut self, name: &str, value: serde_json::Value) -> Self {
        self.options.insert(name.to_string(), value);
        self
    }
}

pub fn snapshot(id: u64, name: &str) -> UserSnapshot {
    UserSnapshot {
        name: name.to_string(),
        discriminator: "0".to_string(),
        id,
        nickname: None,
        is_bot: false,
        guild_owner_id: Some(987654321),
        created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        joined_at: Some(Utc.with_ymd_and_hms(2020, 2, 1, 0, 0, 0).unwrap()),
        status: PresenceStatus::Online,
        activity: None,
        accent_color: 0,
        avatar_url: format!("https://example.com/{id}.png"),
        roles: vec!["@everyone".to_string()],
    }
}
