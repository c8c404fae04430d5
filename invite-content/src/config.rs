//! Extractor configuration.

use std::path::Path;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ContentError, ContentResult};
use crate::locale::DisplayLocale;

fn is_default_locale(locale: &DisplayLocale) -> bool {
    *locale == DisplayLocale::default()
}

/// Settings shared by every extraction, usually kept in a `config.toml`:
///
/// ```toml
/// base_url = "http://localhost:8080/"
/// locale = "fr-FR"
/// display_timezone = "Europe/Paris"
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ExtractorConfig {
    /// Absolute URL the avatar links are resolved against
    pub base_url: Url,

    #[serde(default, skip_serializing_if = "is_default_locale")]
    pub locale: DisplayLocale,

    /// IANA zone times are shown in. When unset, times are shown as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_timezone: Option<Tz>,
}

impl ExtractorConfig {
    pub fn new(base_url: &str) -> ContentResult<Self> {
        Ok(ExtractorConfig {
            base_url: Url::parse(base_url)?,
            locale: DisplayLocale::default(),
            display_timezone: None,
        })
    }

    pub fn with_locale(mut self, locale: DisplayLocale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_display_timezone(mut self, tz: Tz) -> Self {
        self.display_timezone = Some(tz);
        self
    }

    pub fn from_toml_str(content: &str) -> ContentResult<Self> {
        toml::from_str(content).map_err(|e| ContentError::Config(e.to_string()))
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> ContentResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save config as TOML, leaving out settings that are at their default
    pub fn save(&self, path: &Path) -> ContentResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ContentError::Config(e.to_string()))?;

        std::fs::write(path, content)?;

        Ok(())
    }
}
