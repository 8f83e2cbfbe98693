//! The effective light/dark theme.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Effective theme of a page. Always exactly one of light or dark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const LIGHT: &'static str = "light";
    pub const DARK: &'static str = "dark";

    /// Get the theme's wire name (attribute value, storage value, class name)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => Self::LIGHT,
            Self::Dark => Self::DARK,
        }
    }

    /// Normalize an arbitrary value into a theme.
    ///
    /// Only the exact dark marker yields [`Theme::Dark`]; everything else,
    /// malformed input included, falls back to [`Theme::Light`].
    pub fn normalize(value: &str) -> Self {
        if value == Self::DARK {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Parse a persisted value. Exact match only, anything else is `None`.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            Self::LIGHT => Some(Self::Light),
            Self::DARK => Some(Self::Dark),
            _ => None,
        }
    }

    /// Theme matching the system color-scheme signal
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// The opposite theme
    pub fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
