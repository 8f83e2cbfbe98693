//! Browser implementations backed by web-sys

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MediaQueryList, MediaQueryListEvent, Storage, Window};

use super::signal::{SignalHandler, SystemSignal};
use super::storage::{StoreError, ThemeStore};
use super::surface::{Target, VisualSurface};

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// `window.localStorage`
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            tracing::debug!("localStorage is not available");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage.as_ref().ok_or(StoreError::Unavailable)
    }
}

impl ThemeStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Read {
                key: key.to_string(),
                reason: describe(e),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: describe(e),
            })
    }
}

/// `window.matchMedia(query)`
pub struct MediaSignal {
    list: Option<MediaQueryList>,
}

impl MediaSignal {
    pub fn new(window: &Window, query: &str) -> Self {
        let list = window.match_media(query).ok().flatten();
        if list.is_none() {
            tracing::debug!(query, "matchMedia is not supported");
        }
        Self { list }
    }
}

impl SystemSignal for MediaSignal {
    fn prefers_dark(&self) -> bool {
        self.list.as_ref().map(|l| l.matches()).unwrap_or(false)
    }

    fn subscribe(&self, mut handler: SignalHandler) -> bool {
        let Some(list) = self.list.as_ref() else {
            return false;
        };

        let closure = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            handler(event.matches());
        }) as Box<dyn FnMut(_)>);

        // Older engines only expose addListener; treat them as unobservable
        let attached = list
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .is_ok();

        // Lives for the page
        closure.forget();
        attached
    }
}

/// The live document
pub struct DomSurface {
    document: Document,
    content_selector: String,
}

impl DomSurface {
    pub fn new(document: Document, content_selector: impl Into<String>) -> Self {
        Self {
            document,
            content_selector: content_selector.into(),
        }
    }

    fn element(&self, target: Target) -> Option<Element> {
        match target {
            Target::Root => self.document.document_element(),
            Target::Body => self.document.body().map(Into::into),
            Target::Content => self
                .document
                .query_selector(&self.content_selector)
                .ok()
                .flatten(),
        }
    }
}

impl VisualSurface for DomSurface {
    fn exists(&self, target: Target) -> bool {
        self.element(target).is_some()
    }

    fn set_attribute(&self, target: Target, name: &str, value: &str) {
        if let Some(element) = self.element(target) {
            let _ = element.set_attribute(name, value);
        }
    }

    fn toggle_class(&self, target: Target, class: &str, on: bool) {
        if let Some(element) = self.element(target) {
            let _ = element.class_list().toggle_with_force(class, on);
        }
    }
}
