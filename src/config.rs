//! Site Configuration
//!
//! Read once at startup from the `window.__CLINIC_CONFIG__` global that the
//! hosting page defines. Every field has a default, so the object is optional.

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::format::DateStyle;

/// Global the hosting page may define before the wasm bundle loads
pub const CONFIG_GLOBAL: &str = "__CLINIC_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Shown in the header and page titles
    pub clinic_name: String,
    /// Realtime Database base URL; when unset the JS data bridge is used
    pub database_url: Option<String>,
    /// strftime pattern for appointment dates; unset means browser locale formatting
    pub date_format: Option<String>,
    pub log_level: String,
    /// Lines kept for the activity log panel
    pub log_history: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            clinic_name: "Clinic".to_string(),
            database_url: None,
            date_format: None,
            log_level: "info".to_string(),
            log_history: 200,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from the page global, falling back to defaults
    ///
    /// Runs before logging is up, so problems are reported with the config.
    pub fn from_window() -> (Self, Option<String>) {
        let Some(window) = web_sys::window() else {
            return (Self::default(), None);
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return (Self::default(), None);
        }
        match serde_wasm_bindgen::from_value::<SiteConfig>(raw) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(format!("invalid {}: {}", CONFIG_GLOBAL, e))),
        }
    }

    /// Database URL with surrounding whitespace and trailing slashes removed
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }

    /// Date style for the appointment table
    ///
    /// An unusable pattern falls back to browser locale formatting.
    pub fn date_style(&self) -> DateStyle {
        match self.date_format.as_deref() {
            Some(pattern) if is_valid_pattern(pattern) => DateStyle::local_pattern(pattern),
            Some(pattern) => {
                tracing::warn!(pattern, "ignoring invalid dateFormat");
                DateStyle::Locale
            }
            None => DateStyle::Locale,
        }
    }
}

fn is_valid_pattern(pattern: &str) -> bool {
    !pattern.trim().is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_object() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_history, 200);
        assert_eq!(config.date_style(), DateStyle::Locale);
    }

    #[test]
    fn test_camel_case_fields() {
        let config = SiteConfig::from_json(
            r#"{"clinicName":"Sunrise Health","databaseUrl":"https://demo.firebaseio.com/ ","logHistory":50}"#,
        )
        .unwrap();
        assert_eq!(config.clinic_name, "Sunrise Health");
        assert_eq!(config.database_url(), Some("https://demo.firebaseio.com"));
        assert_eq!(config.log_history, 50);
    }

    #[test]
    fn test_blank_database_url_is_unset() {
        let config = SiteConfig::from_json(r#"{"databaseUrl":"  "}"#).unwrap();
        assert_eq!(config.database_url(), None);
    }

    #[test]
    fn test_date_style_selection() {
        let config = SiteConfig::from_json(r#"{"dateFormat":"%Y-%m-%d"}"#).unwrap();
        assert!(matches!(config.date_style(), DateStyle::Pattern { ref pattern, .. } if pattern == "%Y-%m-%d"));

        let broken = SiteConfig::from_json(r#"{"dateFormat":"%Y-%"}"#).unwrap();
        assert_eq!(broken.date_style(), DateStyle::Locale);
    }
}
