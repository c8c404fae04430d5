//! Read access to parsed ICS data.
//!
//! Parsing, TEXT unescaping and DATE-TIME decoding are done by the
//! `icalendar` crate; this module adds a narrow lookup interface on top of
//! it and the time arithmetic content extraction needs.

pub mod component;
pub mod time;

pub use component::{Component, ComponentProperty};
pub use time::{EventTime, parse_duration};
