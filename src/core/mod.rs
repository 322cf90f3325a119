//! # Core Module
//!
//! Configuration, error taxonomy, display documents and field limits.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial creation with config, errors, embeds and response modules

pub mod config;
pub mod embeds;
pub mod errors;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use embeds::{document_embed, DisplayDocument, Footer, Layout, Section, Thumbnail};
pub use errors::{user_message, CommandError};
pub use response::{chunk_chars, char_len, truncate_for_field, FIELD_CHUNK_SIZE, FIELD_VALUE_LIMIT};
