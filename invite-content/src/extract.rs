//! Invitation content extraction.
//!
//! Turns the first VEVENT of an ICS document into a [`ContentRecord`]:
//! summary, location and description as text, start and end as localized
//! date and time strings, the organizer with an avatar URL, and the
//! participation status of every attendee.

use std::collections::BTreeMap;

use icalendar::parser::{read_calendar, unfold};

use crate::avatar::avatar_url;
use crate::config::ExtractorConfig;
use crate::content::{
    AttendeeContent, ContentRecord, DisplayDateTime, OrganizerContent, strip_mailto,
};
use crate::error::{ContentError, ContentResult};
use crate::ics::{Component, ComponentProperty, EventTime};
use crate::period::{Period, event_start};

/// METHOD of a scheduling message that cancels the event.
const METHOD_CANCEL: &str = "CANCEL";

/// Builds [`ContentRecord`]s with a fixed base URL, locale and display zone.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Extractor { config }
    }

    /// Parse `ics` and extract the content of its first VEVENT.
    pub fn extract(&self, ics: &str) -> ContentResult<ContentRecord> {
        let unfolded = unfold(ics);
        let calendar =
            read_calendar(&unfolded).map_err(|e| ContentError::Parse(e.to_string()))?;

        let vevent = calendar
            .first_child("VEVENT")
            .ok_or(ContentError::MissingEvent)?;
        let method = calendar.property_value("METHOD");

        self.event_content(vevent, method)
    }

    /// Extract content from an already parsed event.
    ///
    /// `method` is the METHOD of the enclosing document, if any. A `CANCEL`
    /// (exact, case-sensitive) leaves `end` empty and skips period resolution.
    pub fn event_content<C: Component>(
        &self,
        event: &C,
        method: Option<&str>,
    ) -> ContentResult<ContentRecord> {
        let attendees = attendees_of(event);

        let end = if method == Some(METHOD_CANCEL) {
            None
        } else {
            let period = Period::resolve(event)?;
            tracing::debug!(end_source = ?period.end_source, "resolved event period");
            Some(self.display(&period.end))
        };

        let start = self.display(&event_start(event)?);
        let organizer = self.organizer_of(event)?;

        tracing::debug!(
            method = ?method,
            attendees = attendees.len(),
            organizer = %organizer.mail,
            "extracted invitation content"
        );

        Ok(ContentRecord {
            summary: text_of(event, "SUMMARY"),
            location: text_of(event, "LOCATION"),
            description: text_of(event, "DESCRIPTION"),
            start,
            end,
            attendees,
            organizer,
        })
    }

    fn display(&self, time: &EventTime) -> DisplayDateTime {
        let wall_clock = time.wall_clock(self.config.display_timezone);
        DisplayDateTime::new(wall_clock, self.config.locale)
    }

    fn organizer_of<C: Component>(&self, event: &C) -> ContentResult<OrganizerContent> {
        let organizer = event
            .property("ORGANIZER")
            .ok_or(ContentError::MissingProperty("ORGANIZER"))?;
        let mail = strip_mailto(organizer.value()).to_string();
        let avatar = avatar_url(&self.config.base_url, &mail)?;

        Ok(OrganizerContent {
            cn: organizer.parameter("CN").map(str::to_string),
            mail,
            avatar,
        })
    }
}

/// Extract the content of the first VEVENT in `ics` with the default locale
/// (`en-US`), showing times as written.
pub fn extract(ics: &str, base_url: &str) -> ContentResult<ContentRecord> {
    Extractor::new(ExtractorConfig::new(base_url)?).extract(ics)
}

/// Attendees keyed by address. A repeated address keeps its last entry.
fn attendees_of<C: Component>(event: &C) -> BTreeMap<String, AttendeeContent> {
    let mut attendees = BTreeMap::new();

    for attendee in event.properties("ATTENDEE") {
        let mail = strip_mailto(attendee.value()).to_string();
        attendees.insert(
            mail,
            AttendeeContent {
                cn: attendee.parameter("CN").map(str::to_string),
                partstat: attendee.parameter("PARTSTAT").map(str::to_string),
            },
        );
    }

    attendees
}

/// TEXT values arrive already unescaped from the parser.
fn text_of<C: Component>(event: &C, name: &str) -> Option<String> {
    event.property_value(name).map(str::to_string)
}
