//! Theme controller: resolves, applies, toggles and follows the system signal.

use std::cell::Cell;
use std::rc::Rc;

use theme_lamp_types::{DeclaredDefault, Theme};
use tracing::{debug, info, warn};

use crate::adapters::{SystemSignal, Target, ThemeStore, VisualSurface};
use crate::config::ThemeConfig;

/// Resolves the effective theme from the explicit choice, the page-declared
/// default and the system signal, and keeps the document in sync with it.
///
/// Shared between event listeners behind an `Rc`; all state is interior.
pub struct ThemeController<S, G, V> {
    config: ThemeConfig,
    declared: DeclaredDefault,
    store: S,
    signal: G,
    surface: Rc<V>,
    /// Explicit choice that could not be persisted
    unsaved: Cell<Option<Theme>>,
}

impl<S, G, V> ThemeController<S, G, V>
where
    S: ThemeStore,
    G: SystemSignal,
    V: VisualSurface,
{
    pub fn new(
        config: ThemeConfig,
        declared: DeclaredDefault,
        store: S,
        signal: G,
        surface: Rc<V>,
    ) -> Self {
        Self {
            config,
            declared,
            store,
            signal,
            surface,
            unsaved: Cell::new(None),
        }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn declared(&self) -> DeclaredDefault {
        self.declared
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn signal(&self) -> &G {
        &self.signal
    }

    pub fn surface(&self) -> &Rc<V> {
        &self.surface
    }

    /// The user's explicit choice, if one exists.
    ///
    /// A choice that failed to persist this session is newer than anything
    /// in storage, so it is checked first.
    pub fn explicit_choice(&self) -> Option<Theme> {
        if let Some(theme) = self.unsaved.get() {
            return Some(theme);
        }

        match self.store.get(&self.config.storage_key) {
            Ok(stored) => stored.as_deref().and_then(Theme::from_stored),
            Err(e) => {
                warn!("Failed to read theme preference: {}", e);
                None
            }
        }
    }

    /// Compute the effective theme. First match wins:
    /// explicit choice, then a pinned page default, then the system signal.
    pub fn resolve(&self) -> Theme {
        if let Some(theme) = self.explicit_choice() {
            debug!(%theme, "Resolved theme from explicit choice");
            return theme;
        }

        if let Some(theme) = self.declared.theme() {
            debug!(%theme, "Resolved theme from page default");
            return theme;
        }

        let theme = Theme::from_prefers_dark(self.signal.prefers_dark());
        debug!(%theme, "Resolved theme from system preference");
        theme
    }

    /// Synchronize the document with `theme`. Idempotent.
    pub fn apply(&self, theme: Theme) {
        let dark = theme.is_dark();
        let surface = &self.surface;
        surface.set_attribute(Target::Body, &self.config.theme_attribute, theme.as_str());
        surface.toggle_class(Target::Root, &self.config.dark_class, dark);
        surface.toggle_class(Target::Root, &self.config.light_class, !dark);
    }

    /// Apply an unvalidated value; anything but the exact dark marker is light.
    pub fn apply_value(&self, value: &str) {
        self.apply(Theme::normalize(value));
    }

    /// Flip the effective theme, persist it as the explicit choice and apply it.
    pub fn toggle(&self) -> Theme {
        let next = self.resolve().flipped();

        match self.store.set(&self.config.storage_key, next.as_str()) {
            Ok(()) => self.unsaved.set(None),
            Err(e) => {
                warn!("Failed to persist theme preference, keeping it for this session: {}", e);
                self.unsaved.set(Some(next));
            }
        }

        info!(theme = %next, "Theme toggled");
        self.apply(next);
        next
    }

    /// Initial resolve and apply, run before the first paint
    pub fn initialize(&self) -> Theme {
        let theme = self.resolve();
        self.apply(theme);
        theme
    }

    /// Drop the transition suppressor once the initial theme has painted
    pub fn reveal(&self) {
        let class = &self.config.no_transition_class;
        self.surface.toggle_class(Target::Body, class, false);
    }

    /// React to a system preference change.
    ///
    /// Ignored whenever an explicit choice exists. Returns the applied theme.
    pub fn on_system_change(&self, prefers_dark: bool) -> Option<Theme> {
        if let Some(theme) = self.explicit_choice() {
            debug!(%theme, prefers_dark, "Ignoring system change, explicit choice wins");
            return None;
        }

        let theme = Theme::from_prefers_dark(prefers_dark);
        debug!(%theme, "Following system preference");
        self.apply(theme);
        Some(theme)
    }
}

impl<S, G, V> ThemeController<S, G, V>
where
    S: ThemeStore + 'static,
    G: SystemSignal + 'static,
    V: VisualSurface + 'static,
{
    /// Follow live system changes when the page declared "auto".
    ///
    /// Returns whether a subscription was registered. It is never removed.
    pub fn watch_system(self: &Rc<Self>) -> bool {
        if !self.declared.follows_system() {
            return false;
        }

        let controller = Rc::clone(self);
        let attached = self.signal.subscribe(Box::new(move |prefers_dark| {
            controller.on_system_change(prefers_dark);
        }));

        if attached {
            debug!("Watching system color scheme");
        } else {
            debug!("System color scheme cannot be observed");
        }
        attached
    }
}
