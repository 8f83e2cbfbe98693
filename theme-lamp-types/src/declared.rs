//! Page-declared default theme policy.
//!
//! The host page embeds its preferred fallback in markup at load time. It
//! is read once and never changes for the page's lifetime.

use crate::theme::Theme;

/// Fallback policy declared by the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeclaredDefault {
    Light,
    Dark,
    /// Follow the system color-scheme signal
    Auto,
    /// Missing, empty or unrecognized declaration
    #[default]
    Unset,
}

impl DeclaredDefault {
    /// Parse a declared value, case-insensitively.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            "auto" => Self::Auto,
            _ => Self::Unset,
        }
    }

    /// Parse an optional attribute value; absence is [`DeclaredDefault::Unset`]
    pub fn from_attribute(value: Option<&str>) -> Self {
        value.map(Self::parse).unwrap_or_default()
    }

    /// The fixed theme this declaration pins, if any
    pub fn theme(&self) -> Option<Theme> {
        match self {
            Self::Light => Some(Theme::Light),
            Self::Dark => Some(Theme::Dark),
            Self::Auto | Self::Unset => None,
        }
    }

    /// Whether the page asked to follow live system changes
    pub fn follows_system(&self) -> bool {
        matches!(self, Self::Auto)
    }
}
