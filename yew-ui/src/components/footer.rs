// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::hooks::scroll_window_to_top;

#[function_component(Footer)]
pub fn footer() -> Html {
    let to_top = Callback::from(|_: MouseEvent| scroll_window_to_top());

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <button type="button" class="logo" onclick={to_top}>
                        <span class="logo-mark">{ "M" }</span>
                        <span class="logo-text">{ "Mulfin" }</span>
                    </button>
                    <p>{ "AI情绪伙伴，温暖每一个心灵" }</p>
                </div>
                <div class="footer-bottom">
                    <span>{ "© 2024 Mulfin. All rights reserved." }</span>
                    <span class="footer-links">
                        <span>{ "隐私政策" }</span>
                        <span>{ "服务条款" }</span>
                    </span>
                </div>
            </div>
        </footer>
    }
}
