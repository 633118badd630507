// SPDX-License-Identifier: MIT OR Apache-2.0

use log::Level;
use mulfin_ui::App;

fn main() {
    let level = if cfg!(feature = "debugAssertions") {
        Level::Debug
    } else {
        Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    console_error_panic_hook::set_once();
    log::info!("mulfin-ui starting");
    yew::Renderer::<App>::new().render();
}
