use anyhow::Result;
use dotenvy::dotenv;
use log::{debug, error, info};
use serenity::async_trait;
use serenity::model::application::interaction::Interaction;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use whois_bot::commands::{all_modules, dispatch, load_all, sync_commands, CommandRegistry};
use whois_bot::core::Config;
use whois_bot::platform::{Invocation, SerenityPlatform};

struct Handler {
    registry: Arc<CommandRegistry>,
    guild_id: Option<GuildId>,
    synced: AtomicBool,
}

impl Handler {
    fn new(registry: CommandRegistry, guild_id: Option<GuildId>) -> Self {
        Handler {
            registry: Arc::new(registry),
            guild_id,
            synced: AtomicBool::new(false),
        }
    }

    fn platform(&self, ctx: Context) -> SerenityPlatform {
        SerenityPlatform::new(ctx, self.guild_id)
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        // Ready fires again after a gateway reconnect; publish once per process
        if self.synced.swap(true, Ordering::SeqCst) {
            info!("Commands already synced, skipping");
            return;
        }

        // Guild commands update instantly; global ones can take up to an hour
        let platform = self.platform(ctx);
        match (self.guild_id, sync_commands(&self.registry, &platform).await) {
            (Some(guild_id), Ok(count)) => {
                info!("✅ Registered {count} slash commands for guild {guild_id} (instant update)")
            }
            (None, Ok(count)) => {
                info!("✅ Registered {count} slash commands globally (may take up to 1 hour to propagate)")
            }
            (_, Err(e)) => error!("❌ Failed to register slash commands: {e}"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::ApplicationCommand(command) => {
                let invocation = Invocation::from_interaction(&command);
                let platform = self.platform(ctx);
                dispatch(&self.registry, &platform, &invocation).await;
            }
            Interaction::Ping(_) => {
                info!("Ping interaction received - Discord health check");
            }
            _ => {
                debug!("Ignoring non-command interaction");
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting whois bot...");

    let mut registry = CommandRegistry::new();
    let report = load_all(&mut registry, &all_modules());
    info!(
        "🔌 {} modules loaded, {} failed ({} commands)",
        report.loaded.len(),
        report.failed.len(),
        registry.len()
    );

    let guild_id = config.discord_guild_id.map(GuildId);
    if let Some(guild_id) = guild_id {
        info!("🔧 Development mode: commands will be registered for guild {guild_id}");
    }

    let handler = Handler::new(registry, guild_id);

    // Members and presences are privileged intents; whois needs both
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_PRESENCES;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Establishing WebSocket connection to Discord gateway...");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        error!("This could be due to:");
        error!("  - Invalid bot token");
        error!("  - Privileged intents not enabled for the application");
        error!("  - Network connectivity issues");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
