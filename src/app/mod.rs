//! Page application: theme and menu behaviors plus the browser bootstrap.
//!
//! The components are host-agnostic and run against any set of
//! capabilities. The bootstrap wires them to the live document on wasm32.

pub mod components;

#[cfg(target_arch = "wasm32")]
pub mod boot;

pub use components::{MenuToggle, ThemeController};
