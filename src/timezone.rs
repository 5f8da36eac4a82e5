//! Resolves the short timezone label appended to every rendered timestamp.
//!
//! The label is computed once at startup from the host's IANA zone id and
//! injected into the formatter; nothing here runs per line.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Short region aliases and the canonical zone each one names (the legacy
/// three-letter ids kept around by tzdata and the JDK).
static SHORT_ZONE_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ACT", "Australia/Darwin"),
        ("AET", "Australia/Sydney"),
        ("AGT", "America/Argentina/Buenos_Aires"),
        ("ART", "Africa/Cairo"),
        ("AST", "America/Anchorage"),
        ("BET", "America/Sao_Paulo"),
        ("BST", "Asia/Dhaka"),
        ("CAT", "Africa/Harare"),
        ("CNT", "America/St_Johns"),
        ("CST", "America/Chicago"),
        ("CTT", "Asia/Shanghai"),
        ("EAT", "Africa/Addis_Ababa"),
        ("ECT", "Europe/Paris"),
        ("IET", "America/Indiana/Indianapolis"),
        ("IST", "Asia/Kolkata"),
        ("JST", "Asia/Tokyo"),
        ("MIT", "Pacific/Apia"),
        ("NET", "Asia/Yerevan"),
        ("NST", "Pacific/Auckland"),
        ("PLT", "Asia/Karachi"),
        ("PNT", "America/Phoenix"),
        ("PRT", "America/Puerto_Rico"),
        ("PST", "America/Los_Angeles"),
        ("SST", "Pacific/Guadalcanal"),
        ("VST", "Asia/Ho_Chi_Minh"),
    ])
});

/// Zone ids that denote plain UTC once normalized.
const UTC_ZONE_IDS: &[&str] = &[
    "UTC",
    "Etc/UTC",
    "Universal",
    "Etc/Universal",
    "Zulu",
    "Etc/Zulu",
    "GMT",
    "GMT0",
    "Etc/GMT",
    "Etc/GMT0",
    "Etc/GMT+0",
    "Etc/GMT-0",
    "Greenwich",
    "Etc/Greenwich",
];

/// Resolve the display label for the host's local timezone. Falls back to
/// `"UTC"` when the platform zone id cannot be determined.
pub fn display_timezone() -> String {
    match iana_time_zone::get_timezone() {
        Ok(zone_id) => display_name_for(&zone_id),
        Err(_) => "UTC".to_string(),
    }
}

/// Map an IANA zone id to its display label: `"UTC"` for any UTC-equivalent
/// id, otherwise the shortest known alias naming the same zone, otherwise
/// the id itself.
pub fn display_name_for(zone_id: &str) -> String {
    if UTC_ZONE_IDS.contains(&zone_id) {
        return "UTC".to_string();
    }

    let mut label = zone_id;
    for (&alias, &canonical) in SHORT_ZONE_ALIASES.iter() {
        if canonical == zone_id && alias.len() < label.len() {
            label = alias;
        }
    }
    label.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_equivalents_collapse_to_utc() {
        assert_eq!(display_name_for("UTC"), "UTC");
        assert_eq!(display_name_for("Etc/UTC"), "UTC");
        assert_eq!(display_name_for("Zulu"), "UTC");
        assert_eq!(display_name_for("Etc/GMT-0"), "UTC");
    }

    #[test]
    fn test_shortest_alias_wins() {
        assert_eq!(display_name_for("America/Los_Angeles"), "PST");
        assert_eq!(display_name_for("Asia/Tokyo"), "JST");
        assert_eq!(display_name_for("America/Argentina/Buenos_Aires"), "AGT");
    }

    #[test]
    fn test_unaliased_zone_keeps_full_id() {
        assert_eq!(display_name_for("Europe/Berlin"), "Europe/Berlin");
        assert_eq!(display_name_for("America/New_York"), "America/New_York");
    }

    #[test]
    fn test_resolution_is_stable() {
        let first = display_timezone();
        let second = display_timezone();
        assert_eq!(first, second);
    }
}
