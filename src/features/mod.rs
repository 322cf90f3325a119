//! Feature modules

pub mod whois;

pub use whois::{build_display, UserSnapshot};
