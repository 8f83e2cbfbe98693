//! Browser adapters and bootstrap against a live document.

#![cfg(target_arch = "wasm32")]
#![forbid(unsafe_code)]

use std::rc::Rc;

use theme_lamp::adapters::web::{DomSurface, LocalStore, MediaSignal};
use theme_lamp::app::boot::boot;
use theme_lamp::{
    DeclaredDefault, ManualSignal, MemoryStore, SystemSignal, Theme, ThemeConfig, ThemeController,
    ThemeStore,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element, Event, EventInit, HtmlInputElement, Storage};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn local_storage() -> Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

fn append(tag: &str, id: &str) -> Element {
    let doc = document();
    let element = doc.create_element(tag).unwrap();
    element.set_id(id);
    doc.body().unwrap().append_child(&element).unwrap();
    element
}

fn body_theme() -> Option<String> {
    document().body().unwrap().get_attribute("data-theme")
}

fn root_has_class(class: &str) -> bool {
    document()
        .document_element()
        .unwrap()
        .class_list()
        .contains(class)
}

fn assert_root_exclusive() {
    assert_ne!(root_has_class("dark"), root_has_class("light"));
}

#[wasm_bindgen_test]
fn dom_surface_applies_exclusive_root_classes() {
    let surface = Rc::new(DomSurface::new(document(), ".main-container"));
    let ctl = ThemeController::new(
        ThemeConfig::default(),
        DeclaredDefault::Unset,
        MemoryStore::new(),
        ManualSignal::new(false),
        surface,
    );

    ctl.apply(Theme::Dark);
    assert!(root_has_class("dark"));
    assert!(!root_has_class("light"));
    assert_eq!(body_theme().as_deref(), Some("dark"));

    ctl.apply(Theme::Light);
    assert!(root_has_class("light"));
    assert!(!root_has_class("dark"));
    assert_eq!(body_theme().as_deref(), Some("light"));
}

#[wasm_bindgen_test]
fn local_store_round_trip() {
    let key = "theme-lamp-test-round-trip";
    let window = web_sys::window().unwrap();
    let store = LocalStore::new(&window);

    store.set(key, "dark").unwrap();
    assert_eq!(store.get(key).unwrap().as_deref(), Some("dark"));

    store.set(key, "light").unwrap();
    assert_eq!(LocalStore::new(&window).get(key).unwrap().as_deref(), Some("light"));

    local_storage().remove_item(key).unwrap();
    assert_eq!(store.get(key).unwrap(), None);
}

#[wasm_bindgen_test]
fn media_signal_reads_and_subscribes() {
    let window = web_sys::window().unwrap();
    let query = "(prefers-color-scheme: dark)";
    let signal = MediaSignal::new(&window, query);

    let expected = window.match_media(query).unwrap().unwrap().matches();
    assert_eq!(signal.prefers_dark(), expected);
    assert!(signal.subscribe(Box::new(|_| {})));
}

#[wasm_bindgen_test]
fn boot_without_controls_still_applies_theme() {
    let config = ThemeConfig::from_json(
        r#"{
            "storage_key": "theme-lamp-test-absent",
            "toggle_id": "lamp-absent",
            "menu": { "trigger_id": "menu-absent" }
        }"#,
    )
    .unwrap();

    boot(config).unwrap();

    let theme = body_theme().unwrap();
    assert!(theme == "light" || theme == "dark");
    assert!(root_has_class(&theme));
    assert_root_exclusive();
}

#[wasm_bindgen_test]
fn toggle_click_prevents_default_and_persists() {
    let key = "theme-lamp-test-click";
    local_storage().remove_item(key).unwrap();
    let lamp = append("a", "lamp-click");

    let config = ThemeConfig::from_json(
        r#"{ "storage_key": "theme-lamp-test-click", "toggle_id": "lamp-click" }"#,
    )
    .unwrap();
    boot(config).unwrap();

    let before = Theme::normalize(&body_theme().unwrap());
    let expected = before.flipped();

    let init = EventInit::new();
    init.set_cancelable(true);
    let click = Event::new_with_event_init_dict("click", &init).unwrap();
    let not_cancelled = lamp.dispatch_event(&click).unwrap();

    assert!(!not_cancelled);
    assert!(click.default_prevented());
    assert_eq!(
        local_storage().get_item(key).unwrap().as_deref(),
        Some(expected.as_str())
    );
    assert_eq!(body_theme().as_deref(), Some(expected.as_str()));
    assert!(root_has_class(expected.as_str()));
    assert_root_exclusive();

    lamp.remove();
}

#[wasm_bindgen_test]
fn menu_change_marks_content_and_body() {
    let trigger: HtmlInputElement = append("input", "menu-change").dyn_into().unwrap();
    trigger.set_type("checkbox");
    let content = append("div", "lamp-content-region");
    content.class_list().add_1("lamp-content").unwrap();

    let config = ThemeConfig::from_json(
        r#"{
            "storage_key": "theme-lamp-test-menu",
            "toggle_id": "lamp-absent",
            "menu": { "trigger_id": "menu-change", "content_selector": ".lamp-content" }
        }"#,
    )
    .unwrap();
    boot(config).unwrap();

    let body = document().body().unwrap();

    trigger.set_checked(true);
    trigger.dispatch_event(&Event::new("change").unwrap()).unwrap();
    assert!(content.class_list().contains("blurry"));
    assert!(body.class_list().contains("menu-open"));

    trigger.set_checked(false);
    trigger.dispatch_event(&Event::new("change").unwrap()).unwrap();
    assert!(!content.class_list().contains("blurry"));
    assert!(!body.class_list().contains("menu-open"));

    trigger.remove();
    content.remove();
}
