//! Command error taxonomy and the user-facing failure messages

use serenity::model::permissions::Permissions;
use thiserror::Error;

/// Classified command failures
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Command not found: {name}")]
    NotFound { name: String },

    #[error("Missing permissions: {required:?}")]
    MissingPermissions { required: Permissions },

    #[error("Command /{name} is already registered (module {module})")]
    DuplicateCommand { name: String, module: String },
}

/// Reply text for a failed invocation
///
/// Not-found and permission failures get fixed wording; anything else echoes
/// the error message.
pub fn user_message(error: &anyhow::Error) -> String {
    match error.downcast_ref::<CommandError>() {
        Some(CommandError::NotFound { .. }) => {
            "Command not found. Use /help to see available commands.".to_string()
        }
        Some(CommandError::MissingPermissions { .. }) => {
            "You don't have permission to use this command.".to_string()
        }
        _ => format!("An error occurred: {error}"),
    }
}
