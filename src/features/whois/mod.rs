//! # Whois
//!
//! User information lookup rendered as a bounded-size embed.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod formatter;
pub mod snapshot;

pub use formatter::{build_display, build_display_at, role_sections, FALLBACK_COLOR};
pub use snapshot::{Activity, ActivityKind, PresenceStatus, UserSnapshot};
