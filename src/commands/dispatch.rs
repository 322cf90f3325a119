//! Invocation dispatch and the uniform failure reply
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Name resolution, permission gate, single best-effort error reply

use anyhow::Result;
use log::{error, info, warn};
use serenity::model::permissions::Permissions;

use super::context::CommandContext;
use super::registry::CommandRegistry;
use crate::core::{user_message, CommandError};
use crate::platform::{Invocation, PlatformClient, Reply};

/// Run one invocation to completion
///
/// Failures are logged and answered with a short message; nothing escapes to
/// the caller.
pub async fn dispatch(
    registry: &CommandRegistry,
    platform: &dyn PlatformClient,
    invocation: &Invocation,
) {
    let request_id = invocation.request_id;
    info!(
        "[{request_id}] /{} | User: {} ({})",
        invocation.name, invocation.invoker_name, invocation.invoker_id
    );

    let Err(e) = run(registry, platform, invocation).await else {
        return;
    };

    match e.downcast_ref::<CommandError>() {
        Some(CommandError::NotFound { .. }) | Some(CommandError::MissingPermissions { .. }) => {
            warn!("[{request_id}] /{} rejected: {e}", invocation.name)
        }
        _ => error!(
            "[{request_id}] Error handling slash command '{}': {e:#}",
            invocation.name
        ),
    }

    if let Err(why) = platform
        .reply(invocation, Reply::Text(user_message(&e)))
        .await
    {
        error!("[{request_id}] Failed to send error message: {why}");
    }
}

async fn run(
    registry: &CommandRegistry,
    platform: &dyn PlatformClient,
    invocation: &Invocation,
) -> Result<()> {
    let handler = registry
        .get(&invocation.name)
        .ok_or_else(|| CommandError::NotFound {
            name: invocation.name.clone(),
        })?;

    let required = handler.required_permissions();
    if !has_permissions(invocation.permissions, required) {
        return Err(CommandError::MissingPermissions { required }.into());
    }

    let ctx = CommandContext::new(platform, registry);
    handler.handle(&ctx, invocation).await
}

/// Invocations outside a guild carry no permission set and pass only when
/// nothing is required
fn has_permissions(granted: Option<Permissions>, required: Permissions) -> bool {
    if required.is_empty() {
        return true;
    }
    granted.is_some_and(|granted| granted.contains(required))
}
