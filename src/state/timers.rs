//! Periodic Ticks
//!
//! Two recurring timers drive the passive displays: a 1-second tick for the
//! decaying activity level and the clock, and a 2-second tick for the
//! connection status badge. Handles are returned to the caller so the
//! intervals are cleared on teardown instead of leaking.

use gloo_timers::callback::Interval;
use leptos::*;

use super::global::GlobalState;
use super::interaction::activity_level;

/// Owns the running intervals; dropping it cancels both.
pub struct TimerHandles {
    _activity: Interval,
    _status: Interval,
}

/// Current time in milliseconds since the epoch.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Formatted wall-clock time for the footer and chart captions.
pub fn clock_string() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Start the 1s activity tick and the 2s status tick.
pub fn start_timers(state: GlobalState) -> TimerHandles {
    let activity_state = state.clone();
    let activity = Interval::new(1_000, move || {
        let elapsed = now_ms() - activity_state.last_activity.get_untracked();
        activity_state.activity_percent.set(activity_level(elapsed));
        activity_state.clock.set(clock_string());
    });

    let status_state = state;
    let status = Interval::new(2_000, move || {
        let online = window().navigator().on_line();
        status_state.online.set(online);
    });

    TimerHandles {
        _activity: activity,
        _status: status,
    }
}

/// Wire the input events that count as user activity: pointer movement,
/// key presses and clicks anywhere on the page.
pub fn init_activity_tracking(state: GlobalState) {
    let move_state = state.clone();
    window_event_listener(ev::mousemove, move |_| {
        move_state.record_activity(now_ms());
    });

    let key_state = state.clone();
    window_event_listener(ev::keydown, move |_| {
        key_state.record_activity(now_ms());
    });

    window_event_listener(ev::click, move |_| {
        state.record_activity(now_ms());
    });
}
