//! Report configuration, loaded from a camelCase JSON file.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use zoo_layout::{DEFAULT_VIEWPORT_WIDTH, LayoutStyle};
use zoo_template::Locale;
use zoo_types::PageSize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportConfig {
    pub page_size: PageSize,
    /// Width in CSS pixels at which reports are laid out before scaling to the page.
    pub viewport_width: f32,
    pub locale: Locale,
    pub layout: LayoutStyle,
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            locale: Locale::default(),
            layout: LayoutStyle::default(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl ReportConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ReportConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport_width > 2.0 * self.layout.padding) {
            return Err(ConfigError::Invalid(format!(
                "viewportWidth {} leaves no room inside {}px padding",
                self.viewport_width, self.layout.padding
            )));
        }
        self.page_size.validate().map_err(ConfigError::Invalid)?;
        if self.layout.font_size <= 0.0 || self.layout.heading_font_size <= 0.0 {
            return Err(ConfigError::Invalid("font sizes must be positive".into()));
        }
        self.locale.validate().map_err(ConfigError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = ReportConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.page_size, PageSize::A4);
        assert_eq!(config.viewport_width, 794.0);
    }

    #[test]
    fn parses_camel_case_fields() {
        let config = ReportConfig::from_json_str(
            r##"{
                "pageSize": "Letter",
                "viewportWidth": 1024,
                "locale": { "decimalSeparator": ",", "currencySymbol": "€" },
                "layout": { "fontSize": 14, "borderColor": "#ccc" },
                "outputDir": "out"
            }"##,
        )
        .unwrap();
        assert_eq!(config.page_size, PageSize::Letter);
        assert_eq!(config.viewport_width, 1024.0);
        assert_eq!(config.locale.decimal_separator, ',');
        assert_eq!(config.layout.font_size, 14.0);
        assert_eq!(config.layout.padding, 20.0);
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn custom_page_size() {
        let config =
            ReportConfig::from_json_str(r#"{"pageSize": {"width": 300, "height": 400}}"#).unwrap();
        assert_eq!(config.page_size.dimensions_pt(), (300.0, 400.0));
    }

    #[test]
    fn rejects_narrow_viewport() {
        let err = ReportConfig::from_json_str(r#"{"viewportWidth": 30}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_vanishing_page_height() {
        let err = ReportConfig::from_json_str(r#"{"pageSize": {"width": 595, "height": 1e-30}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let config = ReportConfig {
            page_size: PageSize::Custom {
                width: 595.0,
                height: 0.0,
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_out_of_range_utc_offset() {
        let err = ReportConfig::from_json_str(r#"{"locale": {"utcOffsetMinutes": 50000000}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ReportConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
