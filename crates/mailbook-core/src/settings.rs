//! Mail settings that persist across sessions.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::paginate::PageLayout;
use crate::preview::{parse_pattern, parse_zone};
use crate::{Error, Result};

/// Default header shown at the top of the first page.
pub const DEFAULT_HEADER_TEMPLATE: &str = "%title%\nFrom %sender%\n%timestamp%\n-------------------";

/// Default time zone for mail timestamps.
pub const DEFAULT_TIMESTAMP_ZONE: &str = "UTC";

/// Default strftime pattern for mail timestamps.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// How mails are laid out and stamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailSettings {
    /// Page dimensions.
    pub layout: PageLayout,
    /// Header template with `%sender%`, `%title%` and `%timestamp%` placeholders.
    pub header_template: String,
    /// IANA time zone used for timestamps.
    pub timestamp_zone: String,
    /// `chrono` strftime pattern used for timestamps.
    pub timestamp_format: String,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            layout: PageLayout::default(),
            header_template: DEFAULT_HEADER_TEMPLATE.to_string(),
            timestamp_zone: DEFAULT_TIMESTAMP_ZONE.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl MailSettings {
    /// Checks that the time zone and timestamp pattern are usable.
    ///
    /// The layout is checked when it is built or deserialized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimeZone`] or [`Error::InvalidTimestampFormat`].
    pub fn validate(&self) -> Result<()> {
        parse_zone(&self.timestamp_zone)?;
        parse_pattern(&self.timestamp_format)?;
        Ok(())
    }

    /// Load settings from a JSON file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds invalid settings.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(?path, "no settings file, using defaults");
            return Ok(Self::default());
        }

        let contents = tokio::fs::read_to_string(path).await?;
        let settings: Self = serde_json::from_str(&contents)?;
        settings
            .validate()
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;

        debug!(?path, "settings loaded");
        Ok(settings)
    }

    /// Save settings to a JSON file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, contents).await?;

        info!("Settings saved to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = MailSettings::default();
        settings.validate().unwrap();
        assert_eq!(settings.layout.page_lines(), 14);
        assert_eq!(settings.layout.line_length(), 19);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: MailSettings =
            serde_json::from_str(r#"{"timestamp_zone": "Europe/Rome"}"#).unwrap();
        assert_eq!(settings.timestamp_zone, "Europe/Rome");
        assert_eq!(settings.header_template, DEFAULT_HEADER_TEMPLATE);
        assert_eq!(settings.layout, PageLayout::default());
    }

    #[test]
    fn test_validate_rejects_bad_zone() {
        let settings = MailSettings {
            timestamp_zone: "Nowhere/Land".to_string(),
            ..MailSettings::default()
        };
        assert!(matches!(settings.validate(), Err(Error::InvalidTimeZone(_))));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = MailSettings::load(&dir.path().join("settings.json"))
            .await
            .unwrap();
        assert_eq!(settings, MailSettings::default());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = MailSettings {
            layout: PageLayout::new(10, 30).unwrap(),
            timestamp_zone: "Asia/Tokyo".to_string(),
            ..MailSettings::default()
        };

        settings.save(&path).await.unwrap();
        let loaded = MailSettings::load(&path).await.unwrap();
        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn test_load_invalid_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, r#"{"timestamp_format": "%J"}"#)
            .await
            .unwrap();

        let err = MailSettings::load(&path).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
