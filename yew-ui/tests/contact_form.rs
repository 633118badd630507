// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Component tests for the investor enquiry form: required-field gating and
// the simulated submit, confirm and reset cycle.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point, fire, query, settle};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement};
use yew::platform::time::sleep;
use yew::prelude::*;

use mulfin_ui::components::sections::Contact;
use mulfin_ui::constants::RuntimeConfig;
use mulfin_ui::context::PageConfigCtx;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const SUBMIT_MS: u32 = 20;
const RESET_MS: u32 = 300;

#[function_component(Wrapper)]
fn wrapper() -> Html {
    let config = RuntimeConfig {
        contact_submit_delay_ms: SUBMIT_MS,
        contact_reset_delay_ms: RESET_MS,
        ..RuntimeConfig::default()
    };
    html! {
        <ContextProvider<PageConfigCtx> context={config}>
            <Contact />
        </ContextProvider<PageConfigCtx>>
    }
}

fn type_into(mount: &Element, id: &str, value: &str) {
    let field = query(mount, &format!("#{id}"));
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else {
        field.unchecked_ref::<HtmlTextAreaElement>().set_value(value);
    }
    fire(&field, "input");
}

fn submit_button(mount: &Element) -> HtmlButtonElement {
    query(mount, ".contact-form button[type='submit']").unchecked_into()
}

#[wasm_bindgen_test]
async fn submit_is_disabled_until_required_fields_are_filled() {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    assert!(submit_button(&mount).disabled());

    type_into(&mount, "contact-name", "陈静");
    type_into(&mount, "contact-company", "某基金");
    settle().await;
    assert!(submit_button(&mount).disabled(), "email and message still empty");

    type_into(&mount, "contact-email", "chen@example.com");
    type_into(&mount, "contact-message", "   ");
    settle().await;
    assert!(submit_button(&mount).disabled(), "blank message does not count");

    type_into(&mount, "contact-message", "希望了解A轮细节");
    settle().await;
    assert!(!submit_button(&mount).disabled());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn submission_confirms_then_resets_the_form() {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    type_into(&mount, "contact-name", "陈静");
    type_into(&mount, "contact-email", "chen@example.com");
    type_into(&mount, "contact-message", "希望了解A轮细节");
    settle().await;

    fire(&query(&mount, ".contact-form"), "submit");
    settle().await;
    let button = submit_button(&mount);
    assert!(button.disabled());
    assert!(button.text_content().unwrap_or_default().contains("提交中..."));

    sleep(Duration::from_millis(u64::from(SUBMIT_MS) + 80)).await;
    let success = query(&mount, ".contact-success");
    assert!(success.text_content().unwrap_or_default().contains("提交成功！"));
    assert!(mount.query_selector(".contact-form").unwrap().is_none());

    sleep(Duration::from_millis(u64::from(RESET_MS) + 100)).await;
    assert!(mount.query_selector(".contact-success").unwrap().is_none());
    let name: HtmlInputElement = query(&mount, "#contact-name").unchecked_into();
    assert_eq!(name.value(), "");
    assert!(submit_button(&mount).disabled());

    cleanup(&mount);
}
