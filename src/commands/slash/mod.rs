//! # Slash Commands (/)
//!
//! Discord slash command definitions, one file per command module.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod utility;
pub mod whois;
