//! Document configuration
//!
//! Settings that apply to a whole package. Every field has a default, so a
//! TOML file only needs the keys it changes:
//!
//! ```toml
//! orientation = "landscape"
//! language = "de-DE"
//! title = "Quarterly report"
//!
//! [margins]
//! left = 1000
//! right = 1000
//! ```

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zdocx_model::{Margins, Orientation};

use crate::error::{Result, ResultExt};

/// Package-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub orientation: Orientation,
    /// Language tag written to settings and core properties
    pub language: String,
    /// Page margins; unset sides become 1440 when saved
    pub margins: Margins,
    pub creator: String,
    pub title: Option<String>,
    /// Lay the default footer out as a table with a page number on the right
    pub footer_page_numbers: bool,
    /// Fixed creation timestamp; the time of finalization when unset
    pub created: Option<DateTime<Utc>>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Portrait,
            language: "en-US".to_string(),
            margins: Margins::default(),
            creator: "zdocx".to_string(),
            title: None,
            footer_page_numbers: true,
            created: None,
        }
    }
}

impl DocumentConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and parse a TOML configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref()).context("read configuration")?;
        Self::from_toml_str(&text).context("parse configuration")
    }

    /// Creation timestamp to record in the package
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created.unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocxError;
    use chrono::TimeZone;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DocumentConfig::default();
        assert_eq!(config.language, "en-US");
        assert_eq!(config.creator, "zdocx");
        assert!(config.footer_page_numbers);
        assert!(config.margins.is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DocumentConfig::from_toml_str(
            r#"
            orientation = "landscape"
            title = "Report"

            [margins]
            left = 1000
            "#,
        )
        .unwrap();

        assert_eq!(config.orientation, Orientation::Landscape);
        assert_eq!(config.title.as_deref(), Some("Report"));
        assert_eq!(config.margins.left, Some(1000));
        assert_eq!(config.margins.top, None);
        assert_eq!(config.language, "en-US");
    }

    #[test]
    fn test_fixed_timestamp() {
        let config = DocumentConfig::from_toml_str(r#"created = "2024-03-01T10:00:00Z""#).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        assert_eq!(config.created_at(), expected);
    }

    #[test]
    fn test_invalid_toml() {
        let err = DocumentConfig::from_toml_str("orientation = 3").unwrap_err();
        assert!(matches!(err, DocxError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "language = \"fr-FR\"\nfooter_page_numbers = false").unwrap();

        let config = DocumentConfig::load(file.path()).unwrap();
        assert_eq!(config.language, "fr-FR");
        assert!(!config.footer_page_numbers);
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = DocumentConfig::load("/nonexistent/zdocx.toml").unwrap_err();
        assert_eq!(err.to_string(), "read configuration failed");
        assert!(matches!(err.root_cause(), DocxError::Io(_)));
    }
}
