//! Display-ready content for calendar invitation notifications.
//!
//! Takes one event in ICS form and flattens it into a [`ContentRecord`]
//! that email templates can print directly:
//! - `extract` module: the entry points ([`extract`], [`Extractor`])
//! - `content` module: the record and its nested types
//! - `ics` module: a narrow lookup interface over the `icalendar` parser

pub mod avatar;
pub mod config;
pub mod content;
pub mod error;
pub mod extract;
pub mod ics;
pub mod locale;
pub mod period;

pub use config::ExtractorConfig;
pub use content::{AttendeeContent, ContentRecord, DisplayDateTime, OrganizerContent};
pub use error::{ContentError, ContentResult};
pub use extract::{Extractor, extract};
pub use locale::DisplayLocale;
