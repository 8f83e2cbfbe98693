//! Theme Lamp - light/dark theme manager for web pages
//!
//! Decides and applies a page's light/dark theme, persists the user's
//! explicit choice, and follows the system color scheme while no choice
//! has been made. Also mirrors a navigation menu's open state.
//!
//! This library provides:
//! - Theme resolution (explicit choice > page default > system signal)
//! - Injectable storage, system signal and document capabilities
//! - A wasm bootstrap that applies the theme before first paint

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;

pub use adapters::{
    ManualSignal, MemoryStore, MemorySurface, StoreError, SystemSignal, Target, ThemeStore,
    VisualSurface,
};
pub use app::{MenuToggle, ThemeController};
pub use config::{ConfigError, MenuConfig, ThemeConfig};
pub use theme_lamp_types::{DeclaredDefault, Theme};
