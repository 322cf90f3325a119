//! Command module loader
//!
//! Modules are a fixed list compiled into the binary. Each one registers its
//! handlers; a module that fails is logged and skipped, the rest still load.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Module registration with per-module rollback and a single command sync

use anyhow::Result;
use log::{error, info};

use super::registry::CommandRegistry;
use crate::platform::PlatformClient;

/// A self-registering group of related commands
#[derive(Clone, Copy)]
pub struct CommandModule {
    pub name: &'static str,
    pub register: fn(&mut CommandRegistry) -> Result<()>,
}

/// Outcome of loading a set of modules
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: Vec<&'static str>,
    pub failed: Vec<(&'static str, String)>,
}

/// Register every module, in order
///
/// A module either registers completely or not at all.
pub fn load_all(registry: &mut CommandRegistry, modules: &[CommandModule]) -> LoadReport {
    let mut report = LoadReport::default();

    for module in modules {
        let mut staged = registry.clone();
        match (module.register)(&mut staged) {
            Ok(()) => {
                *registry = staged;
                info!("Loaded module: {}", module.name);
                report.loaded.push(module.name);
            }
            Err(e) => {
                error!("❌ Failed to load module {}: {e:#}", module.name);
                report.failed.push((module.name, format!("{e:#}")));
            }
        }
    }

    report
}

/// Publish the registry's full command set in one call
pub async fn sync_commands(
    registry: &CommandRegistry,
    platform: &dyn PlatformClient,
) -> Result<usize> {
    let count = platform.sync_commands(registry.definitions()).await?;
    info!("Synced {count} commands");
    Ok(count)
}
