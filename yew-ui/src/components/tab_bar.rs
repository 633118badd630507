// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::model::tabs::Tab;

#[derive(Properties, PartialEq)]
pub struct TabBarProps<T: Tab> {
    pub active: T,
    pub on_select: Callback<T>,
    #[prop_or_default]
    pub class: Classes,
}

/// A row of buttons, one per `T::ALL` entry, with the active one marked.
#[function_component(TabBar)]
pub fn tab_bar<T: Tab>(props: &TabBarProps<T>) -> Html {
    html! {
        <div class={classes!("tab-bar", props.class.clone())} role="tablist">
            { for T::ALL.iter().map(|tab| {
                let tab = *tab;
                let is_active = tab == props.active;
                let onclick = props.on_select.reform(move |_: MouseEvent| tab);
                html! {
                    <button
                        type="button"
                        role="tab"
                        class={classes!("tab", is_active.then_some("active"))}
                        aria-selected={is_active.to_string()}
                        data-tab={tab.key()}
                        {onclick}
                    >
                        { tab.label() }
                    </button>
                }
            }) }
        </div>
    }
}
