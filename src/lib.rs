// Core layer - config, errors, display documents
pub mod core;

// Features layer - whois formatting
pub mod features;

// Platform layer - chat platform access behind PlatformClient
pub mod platform;

// Application layer
pub mod commands;

pub use crate::core::Config;
pub use platform::{Invocation, PlatformClient, Reply, SerenityPlatform};
