// SPDX-License-Identifier: MIT OR Apache-2.0

//! `web-sys` backed [`ScrollSource`] and [`TimerSource`].

use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::section::SectionList;
use crate::watch::{watch_scroll, ScrollSource, ScrollSpyHandle, ScrollSpyOptions, TimerSource};

/// The browser window's vertical scroll.
#[derive(Debug, Clone)]
pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    /// `None` outside a browsing context (workers, server-side rendering).
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl ScrollSource for WindowScroll {
    type Registration = EventListener;

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn section_top(&self, id: &str) -> Option<f64> {
        let element = self.window.document()?.get_element_by_id(id)?;
        let viewport_top = element.get_bounding_client_rect().top();
        Some(viewport_top + self.scroll_offset())
    }

    fn on_scroll(&self, mut listener: Box<dyn FnMut()>) -> EventListener {
        EventListener::new(&self.window, "scroll", move |_| listener())
    }

    fn scroll_to(&self, position: f64) {
        let options = ScrollToOptions::new();
        options.set_top(position);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// `Date.now()` and `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl TimerSource for BrowserTimers {
    type Timeout = Timeout;

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// [`watch_scroll`] on the current window. `None` outside a browsing context.
pub fn watch_window<F>(
    sections: SectionList,
    on_change: F,
    options: ScrollSpyOptions,
) -> Option<ScrollSpyHandle>
where
    F: Fn(&str) + 'static,
{
    let source = WindowScroll::new()?;
    Some(watch_scroll(
        Rc::new(source),
        Rc::new(BrowserTimers),
        sections,
        on_change,
        options,
    ))
}
