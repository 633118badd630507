// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Component tests for the page header: section links, the active marker
// and the mobile menu toggle.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, click, create_mount_point, query, query_all, settle};
use wasm_bindgen_test::*;
use yew::prelude::*;

use mulfin_ui::components::header::Header;
use mulfin_ui::data::nav::NAV_ITEMS;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Wrapper)]
fn wrapper() -> Html {
    html! { <Header /> }
}

#[wasm_bindgen_test]
async fn renders_one_link_per_section_in_page_order() {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    let links = query_all(&mount, ".desktop-nav .nav-link");
    assert_eq!(links.len(), 11);
    for (link, item) in links.iter().zip(NAV_ITEMS) {
        assert_eq!(link.get_attribute("data-section").as_deref(), Some(item.id));
        assert_eq!(link.text_content().unwrap_or_default(), item.label);
    }

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn first_section_is_active_before_any_scroll() {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    let active = query_all(&mount, ".desktop-nav .nav-link.active");
    assert_eq!(active.len(), 1, "exactly one link should be active");
    assert_eq!(active[0].get_attribute("data-section").as_deref(), Some("hero"));
    assert_eq!(active[0].get_attribute("aria-current").as_deref(), Some("location"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn menu_toggle_opens_and_link_click_closes_mobile_nav() {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    assert!(mount.query_selector(".mobile-nav").unwrap().is_none());
    let toggle = query(&mount, ".menu-toggle");
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));

    click(&mount, ".menu-toggle");
    settle().await;
    assert_eq!(query_all(&mount, ".mobile-nav .mobile-nav-link").len(), 11);
    assert_eq!(
        query(&mount, ".menu-toggle").get_attribute("aria-expanded").as_deref(),
        Some("true")
    );

    click(&mount, ".mobile-nav .mobile-nav-link[data-section='team']");
    settle().await;
    assert!(
        mount.query_selector(".mobile-nav").unwrap().is_none(),
        "navigating should close the mobile menu"
    );

    cleanup(&mount);
}
