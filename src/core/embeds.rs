//! Display document: the platform-neutral form of a rich embed
//!
//! Formatters produce a `DisplayDocument`; `document_embed` turns it into a
//! serenity embed builder at the edge.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Build embeds through serenity's `CreateEmbed`
//! - 1.0.0: DisplayDocument, Section and Layout

use chrono::{DateTime, Utc};
use serenity::builder::CreateEmbed;
use serenity::model::Timestamp;

use crate::core::response::truncate_for_field;

/// How a section sits relative to its neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Rendered alongside sibling sections on the same row
    Inline,
    /// Rendered on a row of its own
    OwnRow,
}

impl Layout {
    pub fn is_inline(self) -> bool {
        matches!(self, Layout::Inline)
    }
}

/// One named field of a display document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub value: String,
    pub layout: Layout,
}

impl Section {
    /// Build a section, truncating the value to the field limit
    pub fn new(name: impl Into<String>, value: impl AsRef<str>, layout: Layout) -> Self {
        Self {
            name: name.into(),
            value: truncate_for_field(value.as_ref()),
            layout,
        }
    }

    pub fn inline(name: impl Into<String>, value: impl AsRef<str>) -> Self {
        Self::new(name, value, Layout::Inline)
    }

    pub fn own_row(name: impl Into<String>, value: impl AsRef<str>) -> Self {
        Self::new(name, value, Layout::OwnRow)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub text: String,
}

/// A structured, bounded-size reply document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDocument {
    pub title: String,
    pub color: u32,
    pub thumbnail: Thumbnail,
    pub sections: Vec<Section>,
    pub footer: Footer,
    pub timestamp: DateTime<Utc>,
}

impl DisplayDocument {
    /// Look a section up by exact name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Value of the named section, if present
    pub fn value(&self, name: &str) -> Option<&str> {
        self.section(name).map(|s| s.value.as_str())
    }
}

/// Build a Discord embed from a display document, sections in order
pub fn document_embed(document: &DisplayDocument) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed.title(&document.title);
    embed.color(document.color);
    embed.thumbnail(&document.thumbnail.url);
    for section in &document.sections {
        embed.field(&section.name, &section.value, section.layout.is_inline());
    }
    embed.footer(|f| f.text(&document.footer.text));
    if let Ok(timestamp) = Timestamp::from_unix_timestamp(document.timestamp.timestamp()) {
        embed.timestamp(timestamp);
    }
    embed
}
