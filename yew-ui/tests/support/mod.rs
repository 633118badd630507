// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Shared test harness for mulfin-ui component tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventInit, HtmlElement};
use yew::platform::time::sleep;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Let Yew flush pending renders.
pub async fn settle() {
    sleep(Duration::ZERO).await;
}

pub fn query(mount: &Element, selector: &str) -> Element {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
}

pub fn query_all(mount: &Element, selector: &str) -> Vec<Element> {
    let list = mount.query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|node| node.unchecked_into::<Element>())
        .collect()
}

pub fn click(mount: &Element, selector: &str) {
    query(mount, selector).unchecked_into::<HtmlElement>().click();
}

/// Dispatch a bubbling, cancelable event so Yew's delegated listeners see it.
pub fn fire(target: &Element, kind: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Set `window.__APP_CONFIG` to the given key/value pairs.
pub fn inject_app_config(entries: &[(&str, JsValue)]) {
    let config = js_sys::Object::new();
    for (key, value) in entries {
        js_sys::Reflect::set(&config, &(*key).into(), value).unwrap();
    }
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &config).unwrap();
}

pub fn remove_app_config() {
    let window = gloo_utils::window();
    js_sys::Reflect::delete_property(&window, &"__APP_CONFIG".into()).unwrap();
}
