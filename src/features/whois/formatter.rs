//! Whois display formatter
//!
//! Pure: a snapshot and an invoker name in, one display document out.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Identity, timestamps, presence, roles with overflow chunking, flags

use chrono::{DateTime, Utc};

use super::snapshot::UserSnapshot;
use crate::core::response::{char_len, chunk_chars, FIELD_CHUNK_SIZE, FIELD_VALUE_LIMIT};
use crate::core::{DisplayDocument, Footer, Section, Thumbnail};

pub const TITLE: &str = "User Information";
/// Colour a member without any coloured role reports
pub const DEFAULT_COLOR: u32 = 0x000000;
/// Blue used in place of the default colour
pub const FALLBACK_COLOR: u32 = 0x3498DB;

const DATE_FORMAT: &str = "%B %d, %Y at %I:%M %p UTC";
const ROLE_SEPARATOR: &str = ", ";

/// Build the whois document stamped with the current time
pub fn build_display(snapshot: &UserSnapshot, invoker_name: &str) -> DisplayDocument {
    build_display_at(snapshot, invoker_name, Utc::now())
}

/// Build the whois document stamped with `now`
pub fn build_display_at(
    snapshot: &UserSnapshot,
    invoker_name: &str,
    now: DateTime<Utc>,
) -> DisplayDocument {
    let color = if snapshot.accent_color == DEFAULT_COLOR {
        FALLBACK_COLOR
    } else {
        snapshot.accent_color
    };

    let mut sections = vec![
        Section::inline(
            "Username",
            format!("{}#{}", snapshot.name, snapshot.discriminator),
        ),
        Section::inline("ID", snapshot.id.to_string()),
        Section::inline("Nickname", snapshot.nickname.as_deref().unwrap_or("None")),
        Section::inline("Account Created", format_date(&snapshot.created_at)),
        Section::inline(
            "Joined Server",
            snapshot
                .joined_at
                .as_ref()
                .map(format_date)
                .unwrap_or_else(|| "Unknown".to_string()),
        ),
        Section::inline("Status", title_case(snapshot.status.as_str())),
        Section::inline(
            "Activity",
            match &snapshot.activity {
                Some(activity) => format!("{}: {}", activity.kind.label(), activity.label),
                None => "None".to_string(),
            },
        ),
    ];

    sections.extend(role_sections(snapshot.displayed_roles()));

    sections.push(Section::inline("Is Bot", yes_no(snapshot.is_bot)));
    sections.push(Section::inline(
        "Is Server Owner",
        yes_no(snapshot.is_guild_owner()),
    ));

    DisplayDocument {
        title: TITLE.to_string(),
        color,
        thumbnail: Thumbnail {
            url: snapshot.avatar_url.clone(),
        },
        sections,
        footer: Footer {
            text: format!("Requested by {invoker_name}"),
        },
        timestamp: now,
    }
}

/// Lay role mentions out into one or more own-row sections
///
/// A joined list that fits a field becomes a single `Roles (<count>)`
/// section. Anything longer is cut every `FIELD_CHUNK_SIZE` characters into
/// `Roles Part <i>` sections; a cut may land inside a mention.
pub fn role_sections(roles: &[String]) -> Vec<Section> {
    if roles.is_empty() {
        return vec![Section::own_row("Roles (0)", "No roles")];
    }

    let joined = roles.join(ROLE_SEPARATOR);
    if char_len(&joined) <= FIELD_VALUE_LIMIT {
        return vec![Section::own_row(format!("Roles ({})", roles.len()), joined)];
    }

    chunk_chars(&joined, FIELD_CHUNK_SIZE)
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| Section::own_row(format!("Roles Part {}", i + 1), chunk))
        .collect()
}

fn format_date(instant: &DateTime<Utc>) -> String {
    instant.format(DATE_FORMAT).to_string()
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Upper-case the first letter of every word, lower-case the rest
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Layout;
    use crate::features::whois::snapshot::{Activity, ActivityKind, PresenceStatus};
    use chrono::TimeZone;

    fn frozen_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 18, 45, 0).unwrap()
    }

    fn base_snapshot() -> UserSnapshot {
        UserSnapshot {
            name: "TestUser".to_string(),
            discriminator: "0".to_string(),
            id: 123456789,
            nickname: None,
            is_bot: false,
            guild_owner_id: Some(987654321),
            created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            joined_at: None,
            status: PresenceStatus::Online,
            activity: None,
            accent_color: 0xE74C3C,
            avatar_url: "https://example.com/avatar.png".to_string(),
            roles: vec!["@everyone".to_string()],
        }
    }

    fn mentions(count: usize) -> Vec<String> {
        (0..count)
            .map(|i| format!("<@&{}>", 900000000000000000u64 + i as u64))
            .collect()
    }

    fn role_parts(doc: &DisplayDocument) -> Vec<&Section> {
        doc.sections
            .iter()
            .filter(|s| s.name.starts_with("Roles"))
            .collect()
    }

    #[test]
    fn test_scenario_bare_member() {
        let doc = build_display_at(&base_snapshot(), "TestUser", frozen_now());

        assert_eq!(doc.title, "User Information");
        assert_eq!(doc.value("Username"), Some("TestUser#0"));
        assert_eq!(doc.value("ID"), Some("123456789"));
        assert_eq!(doc.value("Nickname"), Some("None"));
        assert_eq!(doc.value("Activity"), Some("None"));
        assert_eq!(doc.value("Joined Server"), Some("Unknown"));
        assert_eq!(doc.value("Status"), Some("Online"));
        assert_eq!(doc.value("Roles (0)"), Some("No roles"));
        assert_eq!(doc.value("Is Bot"), Some("No"));
        assert_eq!(doc.value("Is Server Owner"), Some("No"));
        assert_eq!(doc.thumbnail.url, "https://example.com/avatar.png");
        assert_eq!(doc.footer.text, "Requested by TestUser");
        assert_eq!(doc.timestamp, frozen_now());
    }

    #[test]
    fn test_field_order_and_layout() {
        let doc = build_display_at(&base_snapshot(), "x", frozen_now());
        let names: Vec<&str> = doc.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Username",
                "ID",
                "Nickname",
                "Account Created",
                "Joined Server",
                "Status",
                "Activity",
                "Roles (0)",
                "Is Bot",
                "Is Server Owner",
            ]
        );
        for section in &doc.sections {
            let expected = if section.name.starts_with("Roles") {
                Layout::OwnRow
            } else {
                Layout::Inline
            };
            assert_eq!(section.layout, expected, "layout of {}", section.name);
        }
    }

    #[test]
    fn test_default_color_falls_back_to_blue() {
        let mut snapshot = base_snapshot();
        snapshot.accent_color = DEFAULT_COLOR;
        let doc = build_display_at(&snapshot, "x", frozen_now());
        assert_eq!(doc.color, FALLBACK_COLOR);
    }

    #[test]
    fn test_set_color_kept() {
        let doc = build_display_at(&base_snapshot(), "x", frozen_now());
        assert_eq!(doc.color, 0xE74C3C);
    }

    #[test]
    fn test_server_owner_flag() {
        let mut snapshot = base_snapshot();
        snapshot.guild_owner_id = Some(snapshot.id);
        let doc = build_display_at(&snapshot, "x", frozen_now());
        assert_eq!(doc.value("Is Server Owner"), Some("Yes"));
    }

    #[test]
    fn test_full_member() {
        let mut snapshot = base_snapshot();
        snapshot.name = "TargetUser".to_string();
        snapshot.discriminator = "0042".to_string();
        snapshot.nickname = Some("Target".to_string());
        snapshot.is_bot = true;
        snapshot.joined_at = Some(Utc.with_ymd_and_hms(2019, 2, 1, 15, 5, 0).unwrap());
        snapshot.status = PresenceStatus::Offline;
        snapshot.activity = Some(Activity {
            kind: ActivityKind::Playing,
            label: "Test Game".to_string(),
        });
        snapshot.roles = vec![
            "@everyone".to_string(),
            "<@&1>".to_string(),
            "<@&2>".to_string(),
        ];

        let doc = build_display_at(&snapshot, "Invoker", frozen_now());

        assert_eq!(doc.value("Username"), Some("TargetUser#0042"));
        assert_eq!(doc.value("Nickname"), Some("Target"));
        assert_eq!(doc.value("Status"), Some("Offline"));
        assert_eq!(doc.value("Activity"), Some("Playing: Test Game"));
        assert_eq!(doc.value("Account Created"), Some("January 01, 2020 at 12:00 AM UTC"));
        assert_eq!(doc.value("Joined Server"), Some("February 01, 2019 at 03:05 PM UTC"));
        assert_eq!(doc.value("Roles (2)"), Some("<@&1>, <@&2>"));
        assert_eq!(doc.value("Is Bot"), Some("Yes"));
        assert_eq!(doc.footer.text, "Requested by Invoker");
    }

    #[test]
    fn test_dnd_status_title_cased() {
        let mut snapshot = base_snapshot();
        snapshot.status = PresenceStatus::DoNotDisturb;
        let doc = build_display_at(&snapshot, "x", frozen_now());
        assert_eq!(doc.value("Status"), Some("Dnd"));
    }

    #[test]
    fn test_many_roles_split_into_parts() {
        let mut snapshot = base_snapshot();
        snapshot.roles = mentions(50);
        let joined = snapshot.displayed_roles().join(", ");
        assert!(joined.len() > FIELD_VALUE_LIMIT);

        let doc = build_display_at(&snapshot, "x", frozen_now());
        let parts = role_parts(&doc);

        assert!(parts.len() > 1);
        for (i, part) in parts.iter().enumerate() {
            assert_eq!(part.name, format!("Roles Part {}", i + 1));
            assert!(part.value.chars().count() <= FIELD_VALUE_LIMIT);
        }
        let rebuilt: String = parts.iter().map(|p| p.value.as_str()).collect();
        assert_eq!(rebuilt, joined);
    }

    #[test]
    fn test_part_count_is_ceiling_of_length() {
        for count in [60, 100, 250] {
            let roles = mentions(count);
            let joined_len = roles.join(", ").chars().count();
            let sections = role_sections(&roles);
            assert_eq!(sections.len(), joined_len.div_ceil(FIELD_CHUNK_SIZE));
        }
    }

    #[test]
    fn test_joined_length_exactly_at_limit_stays_single() {
        // 511 + ", " + 511 == 1024
        let roles = vec!["a".repeat(511), "b".repeat(511)];
        let sections = role_sections(&roles);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "Roles (2)");
        assert_eq!(sections[0].value.chars().count(), 1024);
    }

    #[test]
    fn test_joined_length_one_over_limit_is_chunked() {
        let roles = vec!["a".repeat(511), "b".repeat(512)];
        let sections = role_sections(&roles);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "Roles Part 1");
        assert_eq!(sections[0].value.chars().count(), 1000);
        assert_eq!(sections[1].name, "Roles Part 2");
        assert_eq!(sections[1].value.chars().count(), 25);
    }

    #[test]
    fn test_chunk_boundary_may_split_a_mention() {
        let roles = vec!["a".repeat(997), "<@&5>".to_string(), "b".repeat(30)];
        let sections = role_sections(&roles);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].value.ends_with(", <"));
        assert!(sections[1].value.starts_with("@&5>, b"));
    }

    #[test]
    fn test_same_inputs_same_document() {
        let mut snapshot = base_snapshot();
        snapshot.roles = mentions(80);
        let first = build_display_at(&snapshot, "x", frozen_now());
        let second = build_display_at(&snapshot, "x", frozen_now());
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_display_uses_current_time() {
        let before = Utc::now();
        let doc = build_display(&base_snapshot(), "x");
        assert!(doc.timestamp >= before);
        assert!(doc.timestamp <= Utc::now());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("online"), "Online");
        assert_eq!(title_case("do not disturb"), "Do Not Disturb");
        assert_eq!(title_case("IDLE"), "Idle");
    }
}
