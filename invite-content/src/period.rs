//! Period resolution for a VEVENT.
//!
//! An event ends at DTEND when present, otherwise at DTSTART + DURATION,
//! otherwise at DTSTART itself (a zero-length event).

use crate::error::{ContentError, ContentResult};
use crate::ics::{Component, ComponentProperty, EventTime, parse_duration};

/// Which property the end of a [`Period`] was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndSource {
    DtEnd,
    Duration,
    DtStart,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Period {
    pub start: EventTime,
    pub end: EventTime,
    pub end_source: EndSource,
}

impl Period {
    pub fn resolve<C: Component>(event: &C) -> ContentResult<Self> {
        let start = event_start(event)?;

        if let Some(dtend) = event.property("DTEND") {
            let end = decode_time(dtend, "DTEND")?;
            return Ok(Period {
                start,
                end,
                end_source: EndSource::DtEnd,
            });
        }

        if let Some(value) = event.property_value("DURATION") {
            let invalid = || ContentError::InvalidValue {
                property: "DURATION",
                value: value.to_string(),
            };
            let duration = parse_duration(value).ok_or_else(invalid)?;
            let end = start.checked_add(duration).ok_or_else(invalid)?;
            return Ok(Period {
                start,
                end,
                end_source: EndSource::Duration,
            });
        }

        Ok(Period {
            end: start.clone(),
            start,
            end_source: EndSource::DtStart,
        })
    }
}

/// Decode the mandatory DTSTART of an event.
pub fn event_start<C: Component>(event: &C) -> ContentResult<EventTime> {
    let dtstart = event
        .property("DTSTART")
        .ok_or(ContentError::MissingProperty("DTSTART"))?;
    decode_time(dtstart, "DTSTART")
}

fn decode_time<P: ComponentProperty>(prop: &P, property: &'static str) -> ContentResult<EventTime> {
    prop.event_time().ok_or_else(|| ContentError::InvalidValue {
        property,
        value: prop.value().to_string(),
    })
}
