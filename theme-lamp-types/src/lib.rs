//! Shared theme types for theme-lamp.
//!
//! These types carry no browser dependency so they can be used by the
//! wasm bootstrap, native hosts and tests alike.
//!
//! # Modules
//! - [`theme`] - The effective light/dark theme and its normalization rules
//! - [`declared`] - The page-declared default policy ("light", "dark", "auto")

pub mod declared;
pub mod theme;

// Re-export commonly used types at crate root
pub use declared::DeclaredDefault;
pub use theme::Theme;
