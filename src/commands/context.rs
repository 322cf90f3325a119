//! Shared context for command handlers
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: Borrowed platform client and registry, no process-wide state
//! - 1.0.0: Initial implementation with core shared state

use super::registry::CommandRegistry;
use crate::platform::PlatformClient;

/// What a handler can reach while answering one invocation
#[derive(Clone, Copy)]
pub struct CommandContext<'a> {
    pub platform: &'a dyn PlatformClient,
    pub registry: &'a CommandRegistry,
}

impl<'a> CommandContext<'a> {
    pub fn new(platform: &'a dyn PlatformClient, registry: &'a CommandRegistry) -> Self {
        Self { platform, registry }
    }
}
