// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scroll-spy for single-page sites.
//!
//! Maps the current vertical scroll offset onto the navigation section the
//! reader is looking at, and reports changes to a listener at a bounded rate.
//!
//! The core is environment-agnostic: the page is reached through the
//! [`ScrollSource`] and [`TimerSource`] traits, so the resolver and the
//! throttled watcher run (and are tested) on the host as well as in a browser.
//!
//! # Features
//!
//! - **`web`**: [`WindowScroll`] and [`BrowserTimers`], backed by `web-sys`
//!   and `gloo`.

mod error;
mod resolver;
mod section;
mod throttle;
mod watch;

// ── Browser backend ───────────────────────────────────────────────────────────

#[cfg(feature = "web")]
mod browser;

pub use error::ScrollSpyError;
pub use resolver::resolve_active_section;
pub use section::{SectionList, SectionPosition};
pub use throttle::{Throttle, ThrottleDecision};
pub use watch::{
    scroll_to_section, scroll_to_top, scrolled_past, watch_scroll, ScrollSource, ScrollSpyHandle,
    ScrollSpyOptions, TimerSource,
};

#[cfg(feature = "web")]
pub use browser::{watch_window, BrowserTimers, WindowScroll};

/// Lookahead added to the scroll position so a section becomes active a bit
/// before its top reaches the viewport top.
pub const DEFAULT_OFFSET_PX: f64 = 100.0;

/// Minimum spacing between two scroll evaluations.
pub const DEFAULT_THROTTLE_MS: u32 = 100;
