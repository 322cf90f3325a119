//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: UtilityHandler (ping, help) and WhoisHandler

pub mod utility;
pub mod whois;

use super::loader::CommandModule;

/// Every command module compiled into the bot
///
/// Modules must not depend on each other's registration order.
pub fn all_modules() -> Vec<CommandModule> {
    vec![
        CommandModule {
            name: "utility",
            register: utility::register,
        },
        CommandModule {
            name: "whois",
            register: whois::register,
        },
    ]
}
