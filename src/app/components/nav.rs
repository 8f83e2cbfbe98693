//! Navigation menu open/closed markers.

use std::rc::Rc;

use crate::adapters::{Target, VisualSurface};
use crate::config::MenuConfig;

/// Mirrors the menu trigger's checked state into two presentational
/// classes: a blur on the content region and an open marker on the body.
pub struct MenuToggle<V> {
    config: MenuConfig,
    surface: Rc<V>,
}

impl<V: VisualSurface> MenuToggle<V> {
    pub fn new(config: MenuConfig, surface: Rc<V>) -> Self {
        Self { config, surface }
    }

    /// Handle a change of the trigger. No-op when the page has no content region.
    pub fn on_change(&self, checked: bool) {
        if !self.surface.exists(Target::Content) {
            tracing::debug!("Menu changed but no content region is present");
            return;
        }

        self.surface
            .toggle_class(Target::Content, &self.config.blur_class, checked);
        self.surface
            .toggle_class(Target::Body, &self.config.open_class, checked);
    }
}
