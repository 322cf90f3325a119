//! Embed field limits and character chunking
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Field value limits and character-offset chunking for embed fields

/// Discord embed field value limit
pub const FIELD_VALUE_LIMIT: usize = 1024;
/// Chunk size used when an oversized field value is split across several fields
pub const FIELD_CHUNK_SIZE: usize = 1000;

/// Length of `text` in characters, the unit Discord counts field limits in
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split text into consecutive pieces of at most `max_chars` characters
///
/// Boundaries fall purely on character offsets: no attempt is made to keep
/// words or tokens together. Concatenating the pieces yields the input.
/// Empty input produces no pieces.
pub fn chunk_chars(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut result = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for ch in text.chars() {
        if count == max_chars {
            result.push(std::mem::take(&mut current));
            count = 0;
        }
        current.push(ch);
        count += 1;
    }

    if !current.is_empty() {
        result.push(current);
    }

    result
}

/// Truncate text to fit a field value, adding ellipsis if needed
pub fn truncate_for_field(text: &str) -> String {
    if char_len(text) <= FIELD_VALUE_LIMIT {
        text.to_string()
    } else {
        let kept: String = text.chars().take(FIELD_VALUE_LIMIT - 3).collect();
        format!("{kept}...")
    }
}
