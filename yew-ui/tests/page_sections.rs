// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Integration tests for the whole page: section order and runtime config
// handling.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{
    cleanup, create_mount_point, inject_app_config, query, query_all, remove_app_config, settle,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use mulfin_ui::data::nav::SECTION_IDS;
use mulfin_ui::App;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn renders_every_section_in_navigation_order() {
    remove_app_config();
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    settle().await;

    let ids: Vec<String> = query_all(&mount, "main > section")
        .iter()
        .map(|section| section.id())
        .collect();
    assert_eq!(ids, SECTION_IDS);
    assert!(mount.query_selector(".site-header").unwrap().is_some());
    assert!(mount.query_selector("footer").unwrap().is_some());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn partial_config_keeps_defaults_for_the_rest() {
    inject_app_config(&[("scrollSpyThrottleMs", JsValue::from(50))]);
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    settle().await;

    assert!(mount.query_selector(".error-container").unwrap().is_none());
    assert_eq!(query_all(&mount, "main > section").len(), SECTION_IDS.len());

    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn invalid_config_shows_error_page() {
    inject_app_config(&[("navOffsetPx", JsValue::from(-10))]);
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    settle().await;

    let error = query(&mount, ".error-container");
    let text = error.text_content().unwrap_or_default();
    assert!(text.contains("navOffsetPx"), "unexpected message: {text}");
    assert!(mount.query_selector("main").unwrap().is_none());

    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn malformed_config_shows_error_page() {
    inject_app_config(&[("scrollSpyThrottleMs", JsValue::from("fast"))]);
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    settle().await;

    assert!(mount.query_selector(".error-container").unwrap().is_some());

    cleanup(&mount);
    remove_app_config();
}
