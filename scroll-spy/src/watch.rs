// SPDX-License-Identifier: MIT OR Apache-2.0

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::section::SectionList;
use crate::throttle::{Throttle, ThrottleDecision};
use crate::{DEFAULT_OFFSET_PX, DEFAULT_THROTTLE_MS};

/// The page as seen by the scroll-spy: one global vertical scroll position,
/// a way to observe it, and a way to request a new one.
pub trait ScrollSource {
    /// Keeps the scroll listener registered until dropped.
    type Registration: 'static;

    /// Pixels scrolled from the top of the document.
    fn scroll_offset(&self) -> f64;

    /// Top of the element carrying `id`, in document pixels, or `None` when
    /// no such element is rendered.
    fn section_top(&self, id: &str) -> Option<f64>;

    fn on_scroll(&self, listener: Box<dyn FnMut()>) -> Self::Registration;

    /// Animates the viewport towards `position`.
    fn scroll_to(&self, position: f64);
}

/// Clock and one-shot timers of the host event loop.
pub trait TimerSource {
    /// Pending until fired; dropping it cancels the callback.
    type Timeout: 'static;

    fn now_ms(&self) -> f64;

    fn timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Timeout;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSpyOptions {
    /// Lookahead added to the scroll position, usually the height of a fixed
    /// header plus a little slack.
    pub offset: f64,
    pub throttle_ms: u32,
}

impl Default for ScrollSpyOptions {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET_PX,
            throttle_ms: DEFAULT_THROTTLE_MS,
        }
    }
}

/// Starts watching `source` and calls `on_change` with the identifier of the
/// active section whenever it changes.
///
/// The first section counts as already reported, so nothing is emitted while
/// the reader stays at the top of the page. Evaluations are throttled to one
/// per `options.throttle_ms`, with a trailing evaluation for the last event
/// of a burst.
///
/// Watching stops when the returned handle is cancelled or dropped.
pub fn watch_scroll<S, T, F>(
    source: Rc<S>,
    timers: Rc<T>,
    sections: SectionList,
    on_change: F,
    options: ScrollSpyOptions,
) -> ScrollSpyHandle
where
    S: ScrollSource + 'static,
    T: TimerSource + 'static,
    F: Fn(&str) + 'static,
{
    let watcher = Rc::new(Watcher {
        state: RefCell::new(WatchState {
            throttle: Throttle::new(options.throttle_ms),
            reported: sections.first().to_string(),
            registration: None,
            trailing: None,
            cancelled: false,
        }),
        source,
        timers,
        sections,
        offset: options.offset,
        on_change: Box::new(on_change),
    });

    let weak = Rc::downgrade(&watcher);
    let registration = watcher.source.on_scroll(Box::new(move || {
        if let Some(watcher) = weak.upgrade() {
            watcher.handle_scroll();
        }
    }));
    watcher.state.borrow_mut().registration = Some(registration);

    ScrollSpyHandle { watcher }
}

/// Smoothly scrolls so that the top of section `id` lands `offset` pixels
/// below the top of the viewport.
///
/// Returns `false` without touching the page when the section is not
/// rendered, which happens while content is still mounting.
pub fn scroll_to_section<S>(source: &S, id: &str, offset: f64) -> bool
where
    S: ScrollSource + ?Sized,
{
    match source.section_top(id) {
        Some(top) => {
            source.scroll_to((top - offset).max(0.0));
            true
        }
        None => {
            log::debug!("scroll target `{id}` is not rendered, ignoring");
            false
        }
    }
}

pub fn scroll_to_top<S>(source: &S)
where
    S: ScrollSource + ?Sized,
{
    source.scroll_to(0.0);
}

/// Whether the page has been scrolled further than `threshold` pixels.
pub fn scrolled_past<S>(source: &S, threshold: f64) -> bool
where
    S: ScrollSource + ?Sized,
{
    source.scroll_offset() > threshold
}

/// Keeps a [`watch_scroll`] subscription alive.
#[must_use = "scroll-spy stops watching when the handle is dropped"]
pub struct ScrollSpyHandle {
    watcher: Rc<dyn Watch>,
}

impl ScrollSpyHandle {
    /// Removes the scroll listener and disarms any pending trailing
    /// evaluation. Further calls do nothing.
    pub fn cancel(&self) {
        self.watcher.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.watcher.is_cancelled()
    }

    /// Evaluates the current position right away, outside the throttle.
    /// Useful at mount time when the page was restored mid-scroll.
    pub fn refresh(&self) {
        self.watcher.evaluate();
    }

    /// The identifier most recently reported (the first section before any
    /// change).
    pub fn active_section(&self) -> String {
        self.watcher.reported()
    }
}

impl Drop for ScrollSpyHandle {
    fn drop(&mut self) {
        self.watcher.cancel();
    }
}

impl fmt::Debug for ScrollSpyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSpyHandle")
            .field("active", &self.active_section())
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Erases the source and timer types so the handle stays a plain struct.
trait Watch {
    fn cancel(&self);
    fn is_cancelled(&self) -> bool;
    fn evaluate(&self);
    fn reported(&self) -> String;
}

struct WatchState<R, O> {
    throttle: Throttle,
    reported: String,
    registration: Option<R>,
    // Kept after firing and only replaced by the next schedule, so a timer is
    // never dropped from inside its own callback.
    trailing: Option<O>,
    cancelled: bool,
}

struct Watcher<S: ScrollSource, T: TimerSource> {
    state: RefCell<WatchState<S::Registration, T::Timeout>>,
    source: Rc<S>,
    timers: Rc<T>,
    sections: SectionList,
    offset: f64,
    on_change: Box<dyn Fn(&str)>,
}

impl<S, T> Watcher<S, T>
where
    S: ScrollSource + 'static,
    T: TimerSource + 'static,
{
    fn handle_scroll(self: &Rc<Self>) {
        let decision = {
            let mut state = self.state.borrow_mut();
            if state.cancelled {
                return;
            }
            let was_pending = state.throttle.is_trailing_pending();
            let decision = state.throttle.on_event(self.timers.now_ms());
            if decision == ThrottleDecision::Run && was_pending {
                state.trailing = None;
            }
            decision
        };

        match decision {
            ThrottleDecision::Run => self.evaluate(),
            ThrottleDecision::Schedule { delay_ms } => {
                let weak: Weak<Self> = Rc::downgrade(self);
                let timeout = self.timers.timeout(
                    delay_ms,
                    Box::new(move || {
                        if let Some(watcher) = weak.upgrade() {
                            watcher.handle_trailing();
                        }
                    }),
                );
                let previous = self.state.borrow_mut().trailing.replace(timeout);
                drop(previous);
            }
            ThrottleDecision::Coalesce => {}
        }
    }

    fn handle_trailing(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.cancelled {
                return;
            }
            state.throttle.trailing_fired(self.timers.now_ms());
        }
        self.evaluate();
    }
}

impl<S, T> Watch for Watcher<S, T>
where
    S: ScrollSource + 'static,
    T: TimerSource + 'static,
{
    fn cancel(&self) {
        let (registration, trailing) = {
            let mut state = self.state.borrow_mut();
            if state.cancelled {
                return;
            }
            state.cancelled = true;
            (state.registration.take(), state.trailing.take())
        };
        // Dropped outside the borrow: the host may call back into us.
        drop(registration);
        drop(trailing);
    }

    fn is_cancelled(&self) -> bool {
        self.state.borrow().cancelled
    }

    fn evaluate(&self) {
        let offset = self.source.scroll_offset() + self.offset;
        let active = self
            .sections
            .active_at(offset, |id| self.source.section_top(id));

        {
            let mut state = self.state.borrow_mut();
            if state.cancelled || state.reported == active {
                return;
            }
            state.reported = active.to_string();
        }

        log::debug!("active section -> {active}");
        (self.on_change)(active);
    }

    fn reported(&self) -> String {
        self.state.borrow().reported.clone()
    }
}
