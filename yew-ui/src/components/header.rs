// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed page header: logo, section navigation with the active entry
//! highlighted, and the mobile menu.

use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::context::use_page_config;
use crate::data::nav::{CONTACT, FUNDING, HERO, NAV_ITEMS, SECTION_IDS};
use crate::hooks::{use_scroll_spy, use_scroll_to, use_scrolled};

#[function_component(Header)]
pub fn header() -> Html {
    let config = use_page_config();
    let active = use_scroll_spy(SECTION_IDS, config.scroll_spy_options());
    let scrolled = use_scrolled(config.scrolled_threshold_px);
    let menu_open = use_state_eq(|| false);
    let scroll_to = use_scroll_to();

    // Every navigation click also closes the mobile menu.
    let go_to = |id: &'static str| {
        let scroll_to = scroll_to.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            scroll_to.emit(id);
            menu_open.set(false);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_button = |class: &'static str, id: &'static str, label: &'static str| {
        let is_active = active == id;
        html! {
            <button
                type="button"
                class={classes!(class, is_active.then_some("active"))}
                data-section={id}
                aria-current={is_active.then_some("location")}
                onclick={go_to(id)}
            >
                { label }
            </button>
        }
    };

    html! {
        <header class={classes!("site-header", scrolled.then_some("scrolled"))}>
            <div class="header-inner">
                <button type="button" class="logo" onclick={go_to(HERO)}>
                    <span class="logo-mark">{ "M" }</span>
                    <span class="logo-text">{ "Mulfin" }</span>
                </button>

                <nav class="desktop-nav" aria-label="页面导航">
                    { for NAV_ITEMS.iter().map(|item| nav_button("nav-link", item.id, item.label)) }
                </nav>

                <div class="header-actions">
                    <button type="button" class="btn btn-outline" onclick={go_to(CONTACT)}>{ "联系我们" }</button>
                    <button type="button" class="btn btn-primary" onclick={go_to(FUNDING)}>{ "投资机会" }</button>
                </div>

                <button
                    type="button"
                    class="menu-toggle"
                    aria-label="切换菜单"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <Icon kind={if *menu_open { IconKind::X } else { IconKind::Menu }} />
                </button>
            </div>

            if *menu_open {
                <nav class="mobile-nav" aria-label="页面导航">
                    { for NAV_ITEMS.iter().map(|item| nav_button("mobile-nav-link", item.id, item.label)) }
                    <div class="mobile-actions">
                        <button type="button" class="btn btn-outline" onclick={go_to(CONTACT)}>{ "联系我们" }</button>
                        <button type="button" class="btn btn-primary" onclick={go_to(FUNDING)}>{ "投资机会" }</button>
                    </div>
                </nav>
            }
        </header>
    }
}
