// SPDX-License-Identifier: MIT OR Apache-2.0
//
// In-memory page and clock for driving the scroll-spy on the host.
//
// `FakePage` holds a scroll offset, section tops and the registered scroll
// listeners. `FakeClock` keeps a virtual "now" and fires timeouts only when
// the test advances it, so throttle windows are exact.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use scroll_spy::{ScrollSource, TimerSource};

type Listener = Rc<RefCell<Box<dyn FnMut()>>>;

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

#[derive(Default)]
struct PageState {
    offset: f64,
    tops: HashMap<String, f64>,
    listeners: Vec<(usize, Listener)>,
    next_listener: usize,
    scroll_requests: Vec<f64>,
}

#[derive(Clone, Default)]
pub struct FakePage {
    state: Rc<RefCell<PageState>>,
}

impl FakePage {
    pub fn new(sections: &[(&str, f64)]) -> Self {
        let page = Self::default();
        for (id, top) in sections {
            page.insert_section(id, *top);
        }
        page
    }

    pub fn insert_section(&self, id: &str, top: f64) {
        self.state.borrow_mut().tops.insert(id.to_string(), top);
    }

    /// Moves the page and fires every scroll listener, like one browser
    /// `scroll` event.
    pub fn scroll(&self, offset: f64) {
        let listeners: Vec<Listener> = {
            let mut state = self.state.borrow_mut();
            state.offset = offset;
            state.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            (*listener.borrow_mut())();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub fn scroll_requests(&self) -> Vec<f64> {
        self.state.borrow().scroll_requests.clone()
    }
}

pub struct FakeRegistration {
    id: usize,
    page: Weak<RefCell<PageState>>,
}

impl Drop for FakeRegistration {
    fn drop(&mut self) {
        if let Some(page) = self.page.upgrade() {
            page.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl ScrollSource for FakePage {
    type Registration = FakeRegistration;

    fn scroll_offset(&self) -> f64 {
        self.state.borrow().offset
    }

    fn section_top(&self, id: &str) -> Option<f64> {
        self.state.borrow().tops.get(id).copied()
    }

    fn on_scroll(&self, listener: Box<dyn FnMut()>) -> FakeRegistration {
        let mut state = self.state.borrow_mut();
        let id = state.next_listener;
        state.next_listener += 1;
        state.listeners.push((id, Rc::new(RefCell::new(listener))));
        FakeRegistration {
            id,
            page: Rc::downgrade(&self.state),
        }
    }

    fn scroll_to(&self, position: f64) {
        let mut state = self.state.borrow_mut();
        state.scroll_requests.push(position);
        state.offset = position;
    }
}

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

struct PendingTimer {
    id: usize,
    deadline: f64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ClockState {
    now: f64,
    timers: Vec<PendingTimer>,
    next_timer: usize,
    // When set, dropping a timeout leaves it armed. Lets tests reach the
    // late-firing path that cancellation must tolerate.
    ignore_cancel: bool,
}

#[derive(Clone, Default)]
pub struct FakeClock {
    state: Rc<RefCell<ClockState>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock whose timeouts keep running after their handle is dropped.
    pub fn ignoring_cancellation() -> Self {
        let clock = Self::default();
        clock.state.borrow_mut().ignore_cancel = true;
        clock
    }

    pub fn now(&self) -> f64 {
        self.state.borrow().now
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Moves time forward by `ms`, firing due timers in deadline order at
    /// their own deadline.
    pub fn advance(&self, ms: f64) {
        let target = self.now() + ms;
        loop {
            let due = {
                let mut state = self.state.borrow_mut();
                let next = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.deadline <= target)
                    .min_by(|(_, a), (_, b)| a.deadline.total_cmp(&b.deadline))
                    .map(|(i, _)| i);
                next.map(|i| {
                    let timer = state.timers.remove(i);
                    state.now = timer.deadline;
                    timer.callback
                })
            };
            match due {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }
}

pub struct FakeTimeout {
    id: usize,
    clock: Weak<RefCell<ClockState>>,
}

impl Drop for FakeTimeout {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            let mut state = clock.borrow_mut();
            if !state.ignore_cancel {
                state.timers.retain(|t| t.id != self.id);
            }
        }
    }
}

impl TimerSource for FakeClock {
    type Timeout = FakeTimeout;

    fn now_ms(&self) -> f64 {
        self.now()
    }

    fn timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> FakeTimeout {
        let mut state = self.state.borrow_mut();
        let id = state.next_timer;
        state.next_timer += 1;
        let deadline = state.now + f64::from(delay_ms);
        state.timers.push(PendingTimer {
            id,
            deadline,
            callback,
        });
        FakeTimeout {
            id,
            clock: Rc::downgrade(&self.state),
        }
    }
}

// ---------------------------------------------------------------------------
// Notification recorder
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct Recorder {
    seen: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn callback(&self) -> impl Fn(&str) + 'static {
        let seen = self.seen.clone();
        move |id: &str| seen.borrow_mut().push(id.to_string())
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.seen.borrow().len()
    }
}
