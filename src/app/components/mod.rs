//! Page behaviors driven by the bootstrap.

pub mod nav;
pub mod theme;

pub use nav::MenuToggle;
pub use theme::ThemeController;
