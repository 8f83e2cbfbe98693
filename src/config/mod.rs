//! Configuration management

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid theme config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Names and ids the theme controller and bindings work against.
///
/// Every field has a default matching the stock page markup, so a host
/// only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThemeConfig {
    /// Durable storage key holding the explicit choice
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Body attribute carrying the declared default and the applied theme
    #[serde(default = "default_theme_attribute")]
    pub theme_attribute: String,

    #[serde(default = "default_dark_class")]
    pub dark_class: String,

    #[serde(default = "default_light_class")]
    pub light_class: String,

    /// Body class hiding transitions until the first frame after apply
    #[serde(default = "default_no_transition_class")]
    pub no_transition_class: String,

    #[serde(default = "default_toggle_id")]
    pub toggle_id: String,

    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default = "default_color_scheme_query")]
    pub color_scheme_query: String,
}

fn default_storage_key() -> String {
    "theme".to_string()
}

fn default_theme_attribute() -> String {
    "data-theme".to_string()
}

fn default_dark_class() -> String {
    "dark".to_string()
}

fn default_light_class() -> String {
    "light".to_string()
}

fn default_no_transition_class() -> String {
    "notransition".to_string()
}

fn default_toggle_id() -> String {
    "mode".to_string()
}

fn default_color_scheme_query() -> String {
    "(prefers-color-scheme: dark)".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "default_trigger_id")]
    pub trigger_id: String,

    /// Selector for the main content region that gets blurred
    #[serde(default = "default_content_selector")]
    pub content_selector: String,

    #[serde(default = "default_blur_class")]
    pub blur_class: String,

    #[serde(default = "default_open_class")]
    pub open_class: String,
}

fn default_trigger_id() -> String {
    "menu-trigger".to_string()
}

fn default_content_selector() -> String {
    ".main-container".to_string()
}

fn default_blur_class() -> String {
    "blurry".to_string()
}

fn default_open_class() -> String {
    "menu-open".to_string()
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            trigger_id: default_trigger_id(),
            content_selector: default_content_selector(),
            blur_class: default_blur_class(),
            open_class: default_open_class(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            theme_attribute: default_theme_attribute(),
            dark_class: default_dark_class(),
            light_class: default_light_class(),
            no_transition_class: default_no_transition_class(),
            toggle_id: default_toggle_id(),
            menu: MenuConfig::default(),
            color_scheme_query: default_color_scheme_query(),
        }
    }
}

impl ThemeConfig {
    /// Load a config from JSON, filling unnamed fields with defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_markup() {
        let config = ThemeConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.theme_attribute, "data-theme");
        assert_eq!(config.toggle_id, "mode");
        assert_eq!(config.menu.trigger_id, "menu-trigger");
        assert_eq!(config.menu.content_selector, ".main-container");
        assert_eq!(config.color_scheme_query, "(prefers-color-scheme: dark)");
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(ThemeConfig::from_json("{}").unwrap(), ThemeConfig::default());
    }

    #[test]
    fn test_json_overrides_only_named_fields() {
        let config = ThemeConfig::from_json(
            r#"{ "storage_key": "site-theme", "menu": { "blur_class": "frosted" } }"#,
        )
        .unwrap();
        assert_eq!(config.storage_key, "site-theme");
        assert_eq!(config.menu.blur_class, "frosted");
        assert_eq!(config.menu.open_class, "menu-open");
        assert_eq!(config.dark_class, "dark");
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = ThemeConfig::from_json("{ storage_key").unwrap_err();
        assert!(err.to_string().starts_with("invalid theme config"));
    }
}
