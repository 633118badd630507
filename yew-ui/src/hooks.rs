// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hooks around the browser scroll position.

use scroll_spy::{
    scroll_to_section, scroll_to_top, scrolled_past, watch_window, ScrollSource, ScrollSpyOptions,
    SectionList, WindowScroll,
};
use yew::prelude::*;

use crate::context::use_page_config;

/// Identifier of the section currently in view among `ids`, kept up to date
/// by a throttled scroll-spy for as long as the component is mounted.
///
/// Starts at the first section and re-evaluates once at mount, so a page
/// restored mid-scroll highlights the right entry straight away.
#[hook]
pub fn use_scroll_spy(ids: &'static [&'static str], options: ScrollSpyOptions) -> String {
    let active = use_state_eq(|| ids.first().copied().unwrap_or_default().to_string());

    {
        let active = active.clone();
        use_effect_with((ids, options), move |(ids, options)| {
            let handle = match SectionList::new(ids.iter().copied()) {
                Ok(sections) => {
                    watch_window(sections, move |id| active.set(id.to_string()), *options)
                }
                Err(e) => {
                    log::error!("scroll-spy disabled: {e}");
                    None
                }
            };
            if let Some(handle) = &handle {
                handle.refresh();
            }

            move || {
                if let Some(handle) = handle {
                    handle.cancel();
                }
            }
        });
    }

    (*active).clone()
}

/// Whether the window is scrolled further than `threshold` pixels.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with(threshold, move |threshold| {
            let threshold = *threshold;
            let listener = WindowScroll::new().map(|page| {
                scrolled.set(scrolled_past(&page, threshold));
                let source = page.clone();
                page.on_scroll(Box::new(move || {
                    scrolled.set(scrolled_past(&source, threshold));
                }))
            });

            move || drop(listener)
        });
    }

    *scrolled
}

/// A callback that smoothly scrolls to the section with the given id, landing
/// just below the fixed header.
#[hook]
pub fn use_scroll_to() -> Callback<&'static str> {
    let offset = use_page_config().nav_offset_px;
    use_callback(offset, |id: &'static str, offset| {
        if let Some(page) = WindowScroll::new() {
            scroll_to_section(&page, id, *offset);
        }
    })
}

/// Smooth scroll back to the top of the page.
pub fn scroll_window_to_top() {
    if let Some(page) = WindowScroll::new() {
        scroll_to_top(&page);
    }
}
