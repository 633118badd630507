// SPDX-License-Identifier: MIT OR Apache-2.0

//! Leading-edge throttle with a guaranteed trailing run.
//!
//! The first event of a window runs at once. Events arriving while the window
//! is still open collapse into a single trailing run scheduled for the end of
//! the window, so the last position is always evaluated even when events stop
//! mid-window. The state machine only does the bookkeeping; scheduling the
//! trailing run is the caller's job.

/// What the caller should do with an incoming event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// Evaluate now. Any trailing run still pending must be dropped.
    Run,
    /// Arm a timer; call [`Throttle::trailing_fired`] when it fires.
    Schedule { delay_ms: u32 },
    /// A trailing run is already armed and will cover this event.
    Coalesce,
}

#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    last_run_ms: Option<f64>,
    trailing_pending: bool,
}

impl Throttle {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms),
            last_run_ms: None,
            trailing_pending: false,
        }
    }

    pub fn is_trailing_pending(&self) -> bool {
        self.trailing_pending
    }

    pub fn on_event(&mut self, now_ms: f64) -> ThrottleDecision {
        let remaining = match self.last_run_ms {
            Some(last) => self.interval_ms - (now_ms - last),
            None => 0.0,
        };

        // A remaining time above the interval means the clock went backwards.
        if remaining <= 0.0 || remaining > self.interval_ms {
            self.trailing_pending = false;
            self.last_run_ms = Some(now_ms);
            ThrottleDecision::Run
        } else if self.trailing_pending {
            ThrottleDecision::Coalesce
        } else {
            self.trailing_pending = true;
            ThrottleDecision::Schedule {
                delay_ms: remaining.ceil() as u32,
            }
        }
    }

    /// Records that the armed trailing run has executed at `now_ms`.
    pub fn trailing_fired(&mut self, now_ms: f64) {
        self.trailing_pending = false;
        self.last_run_ms = Some(now_ms);
    }
}
