// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct ConfigErrorProps {
    pub message: String,
}

#[function_component(ConfigError)]
pub fn config_error(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="error-container" role="alert">
            <h1>{ "页面配置错误" }</h1>
            <p class="error-message">{ props.message.clone() }</p>
        </div>
    }
}
