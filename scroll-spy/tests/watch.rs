// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Throttled scroll watching against an in-memory page and a virtual clock.

mod support;

use std::rc::Rc;

use scroll_spy::{
    resolve_active_section, scroll_to_section, scroll_to_top, scrolled_past, watch_scroll,
    ScrollSpyHandle, ScrollSpyOptions, SectionList, SectionPosition,
};
use support::{FakeClock, FakePage, Recorder};

const SECTIONS: [(&str, f64); 3] = [("hero", 0.0), ("problem", 800.0), ("solution", 1600.0)];

fn sections() -> SectionList {
    SectionList::new(SECTIONS.iter().map(|(id, _)| *id)).unwrap()
}

fn watch(page: &FakePage, clock: &FakeClock, recorder: &Recorder) -> ScrollSpyHandle {
    watch_scroll(
        Rc::new(page.clone()),
        Rc::new(clock.clone()),
        sections(),
        recorder.callback(),
        ScrollSpyOptions::default(),
    )
}

// ---------------------------------------------------------------------------
// Resolution through the watcher
// ---------------------------------------------------------------------------

#[test]
fn reports_sections_as_the_reader_scrolls_down() {
    let page = FakePage::new(&SECTIONS);
    let clock = FakeClock::new();
    let recorder = Recorder::default();
    let handle = watch(&page, &clock, &recorder);

    page.scroll(750.0);
    clock.advance(200.0);
    page.scroll(1550.0);
    clock.advance(200.0);
    page.scroll(0.0);

    assert_eq!(recorder.seen(), vec!["problem", "solution", "hero"]);
    assert_eq!(handle.active_section(), "hero");
}

#[test]
fn same_section_is_not_reported_twice() {
    let page = FakePage::new(&SECTIONS);
    let clock = FakeClock::new();
    let recorder = Recorder::default();
    let _handle = watch(&page, &clock, &recorder);

    // Still inside the hero: nothing to report.
    for offset in [0.0, 120.0, 300.0, 650.0] {
        page.scroll(offset);
        clock.advance(150.0);
    }
    assert_eq!(recorder.count(), 0);

    for offset in [720.0, 900.0, 1200.0] {
        page.scroll(offset);
        clock.advance(150.0);
    }
    assert_eq!(recorder.seen(), vec!["problem"]);
}

#[test]
fn refresh_reports_a_restored_position_without_scrolling() {
    let page = FakePage::new(&SECTIONS);
    page.scroll(1700.0);
    let clock = FakeClock::new();
    let recorder = Recorder::default();
    let handle = watch(&page, &clock, &recorder);

    handle.refresh();
    handle.refresh();
    assert_eq!(recorder.seen(), vec!["solution"]);
}

#[test]
fn sections_rendered_late_are_picked_up() {
    let page = FakePage::new(&[("hero", 0.0)]);
    let clock = FakeClock::new();
    let recorder = Recorder::default();
    let _handle = watch(&page, &clock, &recorder);

    page.scroll(1000.0);
    assert_eq!(recorder.count(), 0, "problem is not rendered yet");

    page.insert_section("problem", 800.0);
    clock.advance(150.0);
    page.scroll(1001.0);
    assert_eq!(recorder.seen(), vec!["problem"]);
}

// ---------------------------------------------------------------------------
// Throttling
// ---------------------------------------------------------------------------

#[test]
fn burst_fires_leading_and_trailing_only() {
    let page = FakePage::new(&SECTIONS);
    let clock = FakeClock::new();
    let recorder = Recorder::default();
    let _handle = watch(&page, &clock, &recorder);

    page.scroll(900.0);
    assert_eq!(recorder.seen(), vec!["problem"], "leading edge fires at once");

    for (step, offset) in [1000.0, 1200.0, 1400.0, 1700.0].into_iter().enumerate() {
        clock.advance(10.0 + step as f64);
        page.scroll(offset);
    }
    assert_eq!(recorder.count(), 1, "events inside the window are held back");
    assert_eq!(clock.pending_timers(), 1, "exactly one trailing run is armed");

    clock.advance(100.0);
    assert_eq!(recorder.seen(), vec!["problem", "solution"]);
    assert_eq!(clock.pending_timers(), 0);
}

#[test]
fn trailing_run_reads_the_last_position_of_the_burst() {
    let page = FakePage::new(&SECTIONS);
    let clock = FakeClock::new();
    let recorder = Recorder::default();
    let _handle = watch(&page, &clock, &recorder);

    let burst = [50.0, 400.0, 1650.0, 1900.0, 820.0];
    for offset in burst {
        page.scroll(offset);
        clock.advance(5.0);
    }
    clock.advance(200.0);

    let last = *burst.last().unwrap();
    let positions: Vec<SectionPosition<'_>> = SECTIONS
        .iter()
        .map(|(id, top)| SectionPosition::new(*id, *top))
        .collect();
    let expected = resolve_active_section(&positions, last + 100.0).unwrap();

    let seen = recorder.seen();
    assert!(seen.len() <= 2, "at most leading + trailing, got {seen:?}");
    assert_eq!(seen.last().map(String::as_str), Some(expected));
}

#[test]
fn event_just_before_the_deadline_is_coalesced() {
    let page = FakePage::new(&SECTIONS);
    let clock = FakeClock::new();
    let recorder = Recorder::default();
    let _handle = watch(&page, &clock, &recorder);

    page.scroll(0.0);
    clock.advance(20.0);
    page.scroll(900.0);
    assert_eq!(clock.pending_timers(), 1);

    // t=99, one millisecond before the trailing deadline.
    clock.advance(79.0);
    page.scroll(950.0);
    assert_eq!(clock.pending_timers(), 1);

    clock.advance(1.0);
    assert_eq!(recorder.seen(), vec!["problem"]);
    assert_eq!(clock.pending_timers(), 0);
}

#[test]
fn custom_interval_is_respected() {
    let page = FakePage::new(&SECTIONS);
    let clock = FakeClock::new();
    let recorder = Recorder::default();
    let _handle = watch_scroll(
        Rc::new(page.clone()),
        Rc::new(clock.clone()),
        sections(),
        recorder.callback(),
        ScrollSpyOptions {
            offset: 0.0,
            throttle_ms: 250,
        },
    );

    page.scroll(10.0);
    clock.advance(100.0);
    page.scroll(800.0);
    clock.advance(100.0);
    assert_eq!(recorder.count(), 0, "window of 250ms has not elapsed");

    clock.advance(50.0);
    assert_eq!(recorder.seen(), vec!["problem"]);
}

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

#[test]
fn cancel_stops_notifications_and_removes_the_listener() {
    let page = FakePage::new(&SECTIONS);
    let clock = FakeClock::new();
    let recorder = Recorder::default();
    let handle = watch(&page, &clock, &recorder);
    assert_eq!(page.listener_count(), 1);

    handle.cancel();
    assert!(handle.is_cancelled());
    assert_eq!(page.listener_count(), 0);

    for offset in [900.0, 1700.0, 0.0, 1700.0] {
        page.scroll(offset);
        clock.advance(150.0);
    }
    assert_eq!(recorder.count(), 0);

    // Idempotent.
    handle.cancel();
    handle.cancel();
    assert!(handle.is_cancelled());
}

#[test]
fn cancel_disarms_a_pending_trailing_run() {
    let page = FakePage::new(&SECTIONS);
    let clock = FakeClock::new();
    let recorder = Recorder::default();
    let handle = watch(&page, &clock, &recorder);

    page.scroll(100.0);
    clock.advance(10.0);
    page.scroll(1700.0);
    assert_eq!(clock.pending_timers(), 1);

    handle.cancel();
    assert_eq!(clock.pending_timers(), 0);
    clock.advance(500.0);
    assert_eq!(recorder.count(), 0);
}

#[test]
fn trailing_run_firing_after_cancel_is_a_no_op() {
    let page = FakePage::new(&SECTIONS);
    let clock = FakeClock::ignoring_cancellation();
    let recorder = Recorder::default();
    let handle = watch(&page, &clock, &recorder);

    page.scroll(100.0);
    clock.advance(10.0);
    page.scroll(1700.0);
    handle.cancel();

    assert_eq!(clock.pending_timers(), 1, "host kept the timer armed");
    clock.advance(500.0);
    assert_eq!(recorder.count(), 0);
}

#[test]
fn dropping_the_handle_cancels() {
    let page = FakePage::new(&SECTIONS);
    let clock = FakeClock::new();
    let recorder = Recorder::default();

    {
        let _handle = watch(&page, &clock, &recorder);
        assert_eq!(page.listener_count(), 1);
    }

    assert_eq!(page.listener_count(), 0);
    page.scroll(1700.0);
    assert_eq!(recorder.count(), 0);
}

#[test]
fn watchers_on_one_page_are_independent() {
    let page = FakePage::new(&SECTIONS);
    let clock = FakeClock::new();
    let desktop = Recorder::default();
    let mobile = Recorder::default();
    let desktop_handle = watch(&page, &clock, &desktop);
    let mobile_handle = watch(&page, &clock, &mobile);

    page.scroll(900.0);
    mobile_handle.cancel();
    clock.advance(150.0);
    page.scroll(1700.0);

    assert_eq!(desktop.seen(), vec!["problem", "solution"]);
    assert_eq!(mobile.seen(), vec!["problem"]);
    assert_eq!(desktop_handle.active_section(), "solution");
    assert_eq!(mobile_handle.active_section(), "problem");
}

// ---------------------------------------------------------------------------
// Scroll requests
// ---------------------------------------------------------------------------

#[test]
fn scroll_to_section_aligns_below_the_header() {
    let page = FakePage::new(&SECTIONS);

    assert!(scroll_to_section(&page, "solution", 80.0));
    assert!(scroll_to_section(&page, "hero", 80.0));
    assert_eq!(page.scroll_requests(), vec![1520.0, 0.0]);
}

#[test]
fn scroll_to_missing_section_is_ignored() {
    let page = FakePage::new(&SECTIONS);

    assert!(!scroll_to_section(&page, "roadmap", 80.0));
    assert!(page.scroll_requests().is_empty());
}

#[test]
fn scroll_helpers_use_the_page_offset() {
    let page = FakePage::new(&SECTIONS);
    page.scroll(40.0);
    assert!(!scrolled_past(&page, 50.0));
    page.scroll(51.0);
    assert!(scrolled_past(&page, 50.0));

    scroll_to_top(&page);
    assert_eq!(page.scroll_requests(), vec![0.0]);
    assert!(!scrolled_past(&page, 50.0));
}
