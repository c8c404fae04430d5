//! Display-ready content handed to notification templates.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::locale::DisplayLocale;

/// Everything an invitation template needs about one event.
///
/// Serializes to the shape templates consume; absent optional fields and a
/// cancelled event's `end` come out as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub summary: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start: DisplayDateTime,
    pub end: Option<DisplayDateTime>,
    /// Keyed by attendee email address
    pub attendees: BTreeMap<String, AttendeeContent>,
    pub organizer: OrganizerContent,
}

impl ContentRecord {
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayDateTime {
    pub date: String,
    pub time: String,
}

impl DisplayDateTime {
    pub fn new(dt: NaiveDateTime, locale: DisplayLocale) -> Self {
        DisplayDateTime {
            date: locale.format_date(dt),
            time: locale.format_time(dt),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeContent {
    pub cn: Option<String>,
    /// PARTSTAT as written, e.g. `ACCEPTED` or `NEEDS-ACTION`
    pub partstat: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizerContent {
    pub cn: Option<String>,
    pub mail: String,
    /// Avatar lookup URL for `mail`
    pub avatar: String,
}

/// Strip a leading `mailto:` (any case) from a CAL-ADDRESS.
///
/// The rest of the address is returned untouched, local part case included.
pub fn strip_mailto(address: &str) -> &str {
    const PREFIX: &str = "mailto:";

    match address.get(..PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(PREFIX) => &address[PREFIX.len()..],
        _ => address,
    }
}
