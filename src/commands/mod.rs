//! # Command System
//!
//! Slash command (/) handling for Discord interactions.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Handler trait, registry, module loader and dispatcher

pub mod context;
pub mod dispatch;
pub mod handler;
pub mod handlers;
pub mod loader;
pub mod registry;
pub mod slash;

// Re-export handler infrastructure
pub use context::CommandContext;
pub use dispatch::dispatch;
pub use handler::SlashCommandHandler;
pub use handlers::all_modules;
pub use loader::{load_all, sync_commands, CommandModule, LoadReport};
pub use registry::CommandRegistry;
