//! Locale presets for date and time display.
//!
//! Each locale has a long date and a short time pattern, the two forms
//! notification templates print (`06/12/2015` and `3:00 PM` in `en-US`).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DisplayLocale {
    #[default]
    EnUs,
    EnGb,
    Fr,
    De,
    Vi,
}

impl DisplayLocale {
    pub fn tag(self) -> &'static str {
        match self {
            DisplayLocale::EnUs => "en-US",
            DisplayLocale::EnGb => "en-GB",
            DisplayLocale::Fr => "fr-FR",
            DisplayLocale::De => "de-DE",
            DisplayLocale::Vi => "vi-VN",
        }
    }

    fn date_pattern(self) -> &'static str {
        match self {
            DisplayLocale::EnUs => "%m/%d/%Y",
            DisplayLocale::EnGb | DisplayLocale::Fr | DisplayLocale::Vi => "%d/%m/%Y",
            DisplayLocale::De => "%d.%m.%Y",
        }
    }

    fn time_pattern(self) -> &'static str {
        match self {
            DisplayLocale::EnUs => "%-I:%M %p",
            _ => "%H:%M",
        }
    }

    pub fn format_date(self, dt: NaiveDateTime) -> String {
        dt.format(self.date_pattern()).to_string()
    }

    pub fn format_time(self, dt: NaiveDateTime) -> String {
        dt.format(self.time_pattern()).to_string()
    }
}

impl FromStr for DisplayLocale {
    type Err = ContentError;

    /// Accepts `en-US`, `en_us`, `fr`, `fr-FR`, ... A bare `en` means `en-US`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-").to_ascii_lowercase();
        let (language, region) = match normalized.split_once('-') {
            Some((language, region)) => (language, Some(region)),
            None => (normalized.as_str(), None),
        };

        match (language, region) {
            ("en", None | Some("us")) => Ok(DisplayLocale::EnUs),
            ("en", Some("gb")) => Ok(DisplayLocale::EnGb),
            ("fr", None | Some("fr")) => Ok(DisplayLocale::Fr),
            ("de", None | Some("de")) => Ok(DisplayLocale::De),
            ("vi", None | Some("vn")) => Ok(DisplayLocale::Vi),
            _ => Err(ContentError::Config(format!("Unsupported locale '{s}'"))),
        }
    }
}

impl TryFrom<String> for DisplayLocale {
    type Error = ContentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DisplayLocale> for String {
    fn from(locale: DisplayLocale) -> Self {
        locale.tag().to_string()
    }
}

impl fmt::Display for DisplayLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
