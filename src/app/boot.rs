//! Browser bootstrap: initial paint, then interactive bindings.

use std::rc::Rc;

use theme_lamp_types::DeclaredDefault;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement, Window};

use super::components::{MenuToggle, ThemeController};
use crate::adapters::web::{DomSurface, LocalStore, MediaSignal};
use crate::config::ThemeConfig;

type WebController = ThemeController<LocalStore, MediaSignal, DomSurface>;

/// Auto-start with the stock page names (runs when the module is instantiated)
#[cfg(feature = "web")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    boot(ThemeConfig::default())
}

/// Boot with a host-supplied JSON config; unnamed fields keep their defaults
#[wasm_bindgen]
pub fn boot_with_config(json: &str) -> Result<(), JsValue> {
    let config = ThemeConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    boot(config)
}

/// Apply the theme synchronously, then bind controls once the document
/// structure is ready.
pub fn boot(config: ThemeConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let declared = DeclaredDefault::from_attribute(
        document
            .body()
            .and_then(|body| body.get_attribute(&config.theme_attribute))
            .as_deref(),
    );

    let selector = config.menu.content_selector.clone();
    let surface = Rc::new(DomSurface::new(document.clone(), selector));
    let store = LocalStore::new(&window);
    let signal = MediaSignal::new(&window, &config.color_scheme_query);
    let menu = Rc::new(MenuToggle::new(config.menu.clone(), Rc::clone(&surface)));
    let controller = Rc::new(ThemeController::new(config, declared, store, signal, surface));

    // Before the next paint
    let theme = controller.initialize();
    tracing::debug!(%theme, ?declared, "Initial theme applied");
    schedule_reveal(&window, &controller);

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once(move |_: Event| bind(&doc, &controller, &menu));
        let callback = on_ready.as_ref().unchecked_ref();
        document.add_event_listener_with_callback("DOMContentLoaded", callback)?;
        on_ready.forget();
    } else {
        bind(&document, &controller, &menu);
    }

    Ok(())
}

fn schedule_reveal(window: &Window, controller: &Rc<WebController>) {
    let ctl = Rc::clone(controller);
    let on_frame = Closure::once(move |_: f64| ctl.reveal());

    if window
        .request_animation_frame(on_frame.as_ref().unchecked_ref())
        .is_ok()
    {
        on_frame.forget();
    } else {
        controller.reveal();
    }
}

fn bind(document: &Document, controller: &Rc<WebController>, menu: &Rc<MenuToggle<DomSurface>>) {
    let config = controller.config();

    match document.get_element_by_id(&config.toggle_id) {
        Some(lamp) => {
            let ctl = Rc::clone(controller);
            let on_click = Closure::wrap(Box::new(move |event: Event| {
                event.prevent_default();
                ctl.toggle();
            }) as Box<dyn FnMut(_)>);
            let callback = on_click.as_ref().unchecked_ref();
            let _ = lamp.add_event_listener_with_callback("click", callback);
            on_click.forget();
        }
        None => tracing::debug!(id = %config.toggle_id, "No theme toggle control"),
    }

    match document.get_element_by_id(&config.menu.trigger_id) {
        Some(trigger) => {
            let menu = Rc::clone(menu);
            let on_change = Closure::wrap(Box::new(move |event: Event| {
                let checked = event
                    .current_target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                    .map(|input| input.checked())
                    .unwrap_or(false);
                menu.on_change(checked);
            }) as Box<dyn FnMut(_)>);
            let callback = on_change.as_ref().unchecked_ref();
            let _ = trigger.add_event_listener_with_callback("change", callback);
            on_change.forget();
        }
        None => tracing::debug!(id = %config.menu.trigger_id, "No menu trigger control"),
    }

    controller.watch_system();
}
