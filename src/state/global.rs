//! Global Application State
//!
//! Reactive state management using Leptos signals. All widgets read and
//! write this shared state; the backend-mirrored counter is the only value
//! whose source of truth lives outside it.

use leptos::*;
use rand::Rng;

use super::interaction::{
    completion_progress, interaction_progress, response_progress, GridState, DEFAULT_FONT_SIZE,
    DEFAULT_THEME_COLOR,
};
use super::series::{ChartKind, ChartOptions, DataSource, Series};

/// Notification severity, mapped to banner styling by the toast component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient dismissible banner. Banners stack independently; there is no
/// dedup and no queue limit.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Current chart dataset
    pub series: RwSignal<Series>,
    /// Current chart render type
    pub chart_kind: RwSignal<ChartKind>,
    /// Live chart display options
    pub chart_options: RwSignal<ChartOptions>,
    /// Selected data source for the chart
    pub data_source: RwSignal<DataSource>,
    /// Clock string of the last chart refresh
    pub last_updated: RwSignal<Option<String>>,

    /// Monotonic count of widget interactions
    pub interaction_count: RwSignal<u32>,
    /// Mirror of the server-held counter; authoritative source is the backend
    pub counter_value: RwSignal<i64>,
    /// 6x6 toggleable cell grid
    pub grid: RwSignal<GridState>,
    /// Text transformer input
    pub text_input: RwSignal<String>,
    /// Theme color applied to the page's primary accents
    pub theme_color: RwSignal<String>,
    /// Dynamic text font size in px
    pub font_size: RwSignal<u32>,
    /// Simulated response-time meter, resampled on every interaction
    pub response_percent: RwSignal<f64>,
    /// Payload shown in the drop zone for a fixed window after a drop
    pub drop_message: RwSignal<Option<String>>,

    /// Millisecond timestamp of the last tracked input event
    pub last_activity: RwSignal<i64>,
    /// Decayed activity level, recomputed by the 1s tick
    pub activity_percent: RwSignal<f64>,
    /// Formatted current time, updated by the 1s tick
    pub clock: RwSignal<String>,
    /// Browser online status, updated by the 2s tick
    pub online: RwSignal<bool>,
    /// Count of backend requests issued this session
    pub api_calls: RwSignal<u32>,
    /// Global loading state
    pub loading: RwSignal<bool>,

    /// Active notification banners, newest last
    pub notifications: RwSignal<Vec<Notification>>,
    /// Shortcuts help dialog visibility
    pub show_shortcuts: RwSignal<bool>,
    /// Caption naming the last keyboard shortcut used
    pub keyboard_hint: RwSignal<Option<String>>,

    next_notification_id: RwSignal<u64>,
}

impl GlobalState {
    pub fn new() -> GlobalState {
        GlobalState {
            series: create_rw_signal(Series::new(Vec::new(), Vec::new(), "No Data")),
            chart_kind: create_rw_signal(ChartKind::Bar),
            chart_options: create_rw_signal(ChartOptions::default()),
            data_source: create_rw_signal(DataSource::Categories),
            last_updated: create_rw_signal(None),
            interaction_count: create_rw_signal(0),
            counter_value: create_rw_signal(0),
            grid: create_rw_signal(GridState::new()),
            text_input: create_rw_signal(String::new()),
            theme_color: create_rw_signal(DEFAULT_THEME_COLOR.to_string()),
            font_size: create_rw_signal(DEFAULT_FONT_SIZE),
            response_percent: create_rw_signal(100.0),
            drop_message: create_rw_signal(None),
            last_activity: create_rw_signal(chrono::Utc::now().timestamp_millis()),
            activity_percent: create_rw_signal(100.0),
            clock: create_rw_signal(String::new()),
            online: create_rw_signal(true),
            api_calls: create_rw_signal(0),
            loading: create_rw_signal(false),
            notifications: create_rw_signal(Vec::new()),
            show_shortcuts: create_rw_signal(false),
            keyboard_hint: create_rw_signal(None),
            next_notification_id: create_rw_signal(0),
        }
    }

    /// Count one widget interaction and resample the response-time meter.
    pub fn record_interaction(&self, rng: &mut impl Rng) {
        self.interaction_count.update(|c| *c += 1);
        self.response_percent.set(response_progress(rng));
    }

    /// Record a tracked input event (pointer move, key press, click).
    pub fn record_activity(&self, now_ms: i64) {
        self.last_activity.set(now_ms);
    }

    /// Count one backend request.
    pub fn track_api_call(&self) {
        self.api_calls.update(|c| *c += 1);
    }

    /// Interaction meter percentage, reactive when read inside a memo.
    pub fn interaction_percent(&self) -> f64 {
        interaction_progress(self.interaction_count.get())
    }

    /// Completion meter percentage over cells, text length and interactions.
    pub fn completion_percent(&self) -> f64 {
        completion_progress(
            self.grid.get().active_count(),
            self.text_input.get().chars().count(),
            self.interaction_count.get(),
        )
    }

    /// Clear all locally-owned widget state. The counter mirror is
    /// server-owned and is deliberately left untouched.
    pub fn reset(&self, rng: &mut impl Rng) {
        self.interaction_count.set(0);
        self.grid.update(|g| g.clear());
        self.text_input.set(String::new());
        self.theme_color.set(DEFAULT_THEME_COLOR.to_string());
        self.font_size.set(DEFAULT_FONT_SIZE);
        self.response_percent.set(response_progress(rng));
    }

    /// Show a banner that auto-dismisses after 3 seconds.
    pub fn notify(&self, message: &str, severity: Severity) {
        self.notify_for(message, severity, 3_000);
    }

    /// Show a banner that auto-dismisses after `duration_ms` unless the
    /// user dismisses it first.
    pub fn notify_for(&self, message: &str, severity: Severity, duration_ms: u32) {
        let id = self.push_notification(message, severity);
        let notifications = self.notifications;
        gloo_timers::callback::Timeout::new(duration_ms, move || {
            notifications.update(|list| list.retain(|n| n.id != id));
        })
        .forget();
    }

    /// Insert a banner without scheduling removal. Returns its id.
    pub fn push_notification(&self, message: &str, severity: Severity) -> u64 {
        let id = self.next_notification_id.get_untracked();
        self.next_notification_id.set(id + 1);
        self.notifications.update(|list| {
            list.push(Notification {
                id,
                message: message.to_string(),
                severity,
            })
        });
        id
    }

    /// Remove a banner by id. Removing an already-gone banner is a no-op.
    pub fn dismiss(&self, id: u64) {
        self.notifications.update(|list| list.retain(|n| n.id != id));
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

/// Fetch the state provided by [`provide_global_state`].
pub fn expect_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn with_runtime(f: impl FnOnce()) {
        let runtime = create_runtime();
        f();
        runtime.dispose();
    }

    #[test]
    fn record_interaction_increments_and_resamples() {
        with_runtime(|| {
            let state = GlobalState::new();
            let mut rng = StdRng::seed_from_u64(5);
            state.record_interaction(&mut rng);
            state.record_interaction(&mut rng);
            assert_eq!(state.interaction_count.get_untracked(), 2);
            let p = state.response_percent.get_untracked();
            assert!((70.0..100.0).contains(&p));
            assert_eq!(state.interaction_percent(), 10.0);
        });
    }

    #[test]
    fn completion_percent_combines_cells_text_and_count() {
        with_runtime(|| {
            let state = GlobalState::new();
            state.grid.update(|g| {
                g.toggle(0);
                g.toggle(1);
            });
            state.text_input.set("abcde".to_string());
            state.interaction_count.set(18);
            // (2 + 5 + 18) / 50 * 100
            assert_eq!(state.completion_percent(), 50.0);
        });
    }

    #[test]
    fn notifications_stack_and_dismiss_independently() {
        with_runtime(|| {
            let state = GlobalState::new();
            let a = state.push_notification("first", Severity::Info);
            let b = state.push_notification("second", Severity::Error);
            let c = state.push_notification("second", Severity::Error);
            assert_ne!(a, b);
            assert_ne!(b, c);
            // duplicates are not coalesced
            assert_eq!(state.notifications.get_untracked().len(), 3);

            state.dismiss(b);
            let remaining = state.notifications.get_untracked();
            assert_eq!(remaining.len(), 2);
            assert!(remaining.iter().all(|n| n.id != b));

            // dismissing again is a no-op
            state.dismiss(b);
            assert_eq!(state.notifications.get_untracked().len(), 2);
        });
    }

    #[test]
    fn unbounded_stacking_is_allowed() {
        with_runtime(|| {
            let state = GlobalState::new();
            for _ in 0..200 {
                state.push_notification("again", Severity::Warning);
            }
            assert_eq!(state.notifications.get_untracked().len(), 200);
        });
    }

    #[test]
    fn counter_display_is_replaced_by_the_server_value() {
        with_runtime(|| {
            let state = GlobalState::new();
            state.counter_value.set(3);

            // the endpoint answers 5; the display must become exactly 5,
            // never previous + 1
            let response: crate::api::CounterResponse =
                serde_json::from_str(r#"{"value":5}"#).unwrap();
            state.counter_value.set(response.value);
            assert_eq!(state.counter_value.get_untracked(), 5);
        });
    }

    #[test]
    fn reset_clears_local_state_but_not_the_counter_mirror() {
        with_runtime(|| {
            let state = GlobalState::new();
            let mut rng = StdRng::seed_from_u64(9);

            state.counter_value.set(5);
            state.interaction_count.set(12);
            state.grid.update(|g| {
                g.toggle(3);
                g.toggle(30);
            });
            state.text_input.set("hello".to_string());
            state.theme_color.set("#123456".to_string());
            state.font_size.set(24);

            state.reset(&mut rng);

            assert_eq!(state.interaction_count.get_untracked(), 0);
            assert_eq!(state.grid.get_untracked().active_count(), 0);
            assert_eq!(state.text_input.get_untracked(), "");
            assert_eq!(state.theme_color.get_untracked(), DEFAULT_THEME_COLOR);
            assert_eq!(state.font_size.get_untracked(), DEFAULT_FONT_SIZE);
            // server-owned value still on display
            assert_eq!(state.counter_value.get_untracked(), 5);
        });
    }
}
