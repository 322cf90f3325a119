//! Command handler registry
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: Reject duplicate names, remember owning module and registration order
//! - 1.0.0: Initial implementation for handler dispatch

use serenity::builder::CreateApplicationCommand;
use std::collections::HashMap;
use std::sync::Arc;

use super::handler::SlashCommandHandler;
use crate::core::CommandError;

/// Registry mapping command names to handlers
///
/// The registry allows handlers to be registered and looked up by command name.
/// Multiple command names can map to the same handler if they share logic.
///
/// # Example
///
/// ```ignore
/// let mut registry = CommandRegistry::new();
/// registry.register("utility", Arc::new(UtilityHandler))?;
///
/// if let Some(handler) = registry.get("ping") {
///     handler.handle(&ctx, &invocation).await?;
/// }
/// ```
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn SlashCommandHandler>>,
    owners: HashMap<&'static str, String>,
    ordered: Vec<Arc<dyn SlashCommandHandler>>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            owners: HashMap::new(),
            ordered: Vec::new(),
        }
    }

    /// Register a handler for its declared command names
    ///
    /// Fails without registering anything if any of the names is already
    /// taken.
    pub fn register(
        &mut self,
        module: &str,
        handler: Arc<dyn SlashCommandHandler>,
    ) -> Result<(), CommandError> {
        if let Some(name) = handler
            .command_names()
            .iter()
            .find(|name| self.handlers.contains_key(*name))
        {
            return Err(CommandError::DuplicateCommand {
                name: name.to_string(),
                module: self.owners.get(name).cloned().unwrap_or_default(),
            });
        }

        for name in handler.command_names() {
            self.handlers.insert(*name, Arc::clone(&handler));
            self.owners.insert(*name, module.to_string());
        }
        self.ordered.push(handler);
        Ok(())
    }

    /// Get handler for a command name
    ///
    /// Returns None if no handler is registered for the given name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn SlashCommandHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Check if a command is registered
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Module that registered a command
    pub fn owner(&self, name: &str) -> Option<&str> {
        self.owners.get(name).map(String::as_str)
    }

    /// Number of registered command names
    ///
    /// Note: This counts command names, not unique handlers.
    /// A handler registered for multiple names will be counted multiple times.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// All registered command names, in registration order
    pub fn command_names(&self) -> Vec<&'static str> {
        self.ordered
            .iter()
            .flat_map(|handler| handler.command_names().iter().copied())
            .collect()
    }

    /// Definitions of every registered command, in registration order
    pub fn definitions(&self) -> Vec<CreateApplicationCommand> {
        self.ordered
            .iter()
            .flat_map(|handler| handler.create_commands())
            .collect()
    }

    /// `(name, description)` for every published command
    pub fn help_entries(&self) -> Vec<(String, String)> {
        self.definitions()
            .iter()
            .map(|command| {
                let field = |key: &str| {
                    command
                        .0
                        .get(key)
                        .and_then(|v| v.as_str())
                        .unwrap_or_default()
                        .to_string()
                };
                (field("name"), field("description"))
            })
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
