//! Chart Presenter Component
//!
//! Owns the canvas-rendered main chart: data source selection, pluggable
//! render types, live display options, summary statistics and export.

use leptos::*;
use std::f64::consts::{FRAC_PI_2, TAU};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api;
use crate::state::global::{expect_global_state, GlobalState, Severity};
use crate::state::series::{ChartKind, DataSource, Series};
use crate::state::timers::clock_string;

/// Categorical palette cycled over pie and doughnut slices
const SERIES_COLORS: [&str; 6] = [
    "#FF9800", // Orange (primary)
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
];

/// Single color used by every non-categorical render type
const PRIMARY_COLOR: &str = SERIES_COLORS[0];
const PRIMARY_FILL: &str = "rgba(255, 152, 0, 0.25)";

const BACKGROUND: &str = "#1f2937"; // gray-800
const GRID_LINE: &str = "#374151"; // gray-700
const LABEL_COLOR: &str = "#9ca3af"; // gray-400

const CANVAS_W: f64 = 800.0;
const CANVAS_H: f64 = 400.0;

/// Load a series from the selected source into the global state. Network
/// failure on the stats endpoint falls back to the sample series without
/// retrying.
pub fn load_series(state: GlobalState, source: DataSource) {
    spawn_local(async move {
        state.loading.set(true);
        let series = match source {
            DataSource::Categories => match api::fetch_stats().await {
                Ok(stats) => {
                    state.track_api_call();
                    Series::from_stats(&stats.categories)
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error loading chart data: {}", e).into());
                    state.notify("Stats unavailable, showing sample data", Severity::Warning);
                    Series::sample(&mut rand::thread_rng())
                }
            },
            DataSource::Monthly => Series::monthly(&mut rand::thread_rng()),
            DataSource::Sample => Series::sample(&mut rand::thread_rng()),
        };
        state.series.set(series);
        state.last_updated.set(Some(clock_string()));
        state.loading.set(false);
    });
}

/// Main chart panel
#[component]
pub fn ChartPanel() -> impl IntoView {
    let state = expect_global_state();
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Animation progress in [0, 1]; the epoch invalidates stale frames.
    let progress = create_rw_signal(1.0f64);
    let epoch = create_rw_signal(0u32);
    let hover = create_rw_signal(None::<usize>);

    // Restart the grow-in animation whenever data or render type change.
    let anim_state = state.clone();
    create_effect(move |_| {
        anim_state.series.with(|_| ());
        anim_state.chart_kind.with(|_| ());
        start_animation(
            anim_state.chart_options.get_untracked().animation,
            progress,
            epoch,
        );
    });

    // Redraw on data, type or animation frame changes.
    let draw_state = state.clone();
    create_effect(move |_| {
        let series = draw_state.series.get();
        let kind = draw_state.chart_kind.get();
        let t = ease_out(progress.get());
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &series, kind, t);
        }
    });

    let series_signal = state.series;
    let kind_signal = state.chart_kind;
    let options_signal = state.chart_options;
    let loading = state.loading;
    let last_updated = state.last_updated;

    let on_mousemove = move |ev: web_sys::MouseEvent| {
        if !options_signal.get_untracked().tooltip {
            hover.set(None);
            return;
        }
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let x = ev.offset_x() as f64 * CANVAS_W / canvas.client_width().max(1) as f64;
        let y = ev.offset_y() as f64 * CANVAS_H / canvas.client_height().max(1) as f64;
        let series = series_signal.get_untracked();
        let kind = kind_signal.get_untracked();
        hover.set(hit_index(&series, kind, x, y));
    };

    let summary = create_memo(move |_| series_signal.get().summarize());

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">
                    {move || kind_signal.get().label()}
                </h2>
                {move || {
                    if loading.get() {
                        view! { <span class="text-sm text-primary-400">"Loading..."</span> }
                            .into_view()
                    } else {
                        let caption = last_updated
                            .get()
                            .map(|at| format!("Updated {}", at))
                            .unwrap_or_else(|| "Not loaded yet".to_string());
                        view! { <span class="text-sm text-gray-500">{caption}</span> }
                            .into_view()
                    }
                }}
            </div>

            <ChartControls canvas=canvas_ref />

            <div class="relative mt-4">
                <canvas
                    node_ref=canvas_ref
                    width="800"
                    height="400"
                    on:mousemove=on_mousemove
                    on:mouseleave=move |_| hover.set(None)
                    class="w-full h-64 md:h-96 rounded-lg"
                />
            </div>

            // Hover readout, active when the tooltip option is on
            <div class="h-5 mt-1 text-sm text-gray-400 text-center">
                {move || {
                    let series = series_signal.get();
                    hover.get().and_then(|i| {
                        let label = series.labels.get(i)?;
                        let value = series.values.get(i)?;
                        Some(format!("{}: {:.0}", label, value))
                    })
                }}
            </div>

            <ChartLegend />

            // Summary statistics, recomputed on every data refresh
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mt-6">
                <StatCell label="Total">
                    {move || format!("{:.0}", summary.get().total)}
                </StatCell>
                <StatCell label="Average">
                    {move || format!("{:.0}", summary.get().average)}
                </StatCell>
                <StatCell label="Top Category">
                    <div>{move || summary.get().top_label}</div>
                    <div class="text-sm text-gray-400 font-normal">
                        {move || summary.get().top_caption()}
                    </div>
                </StatCell>
                <StatCell label="Data Points">
                    {move || series_signal.get().len()}
                </StatCell>
            </div>
        </section>
    }
}

#[component]
fn StatCell(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-4 text-center">
            <div class="text-gray-400 text-sm">{label}</div>
            <div class="text-xl font-semibold mt-1">{children()}</div>
        </div>
    }
}

/// Source and type selectors, display options and chart actions
#[component]
fn ChartControls(canvas: NodeRef<html::Canvas>) -> impl IntoView {
    let state = expect_global_state();
    let data_source = state.data_source;
    let chart_kind = state.chart_kind;

    let source_state = state.clone();
    let on_source = move |ev: web_sys::Event| {
        let source = DataSource::parse(&event_target_value(&ev));
        source_state.data_source.set(source);
        load_series(source_state.clone(), source);
    };

    let on_kind = move |ev: web_sys::Event| {
        chart_kind.set(ChartKind::parse(&event_target_value(&ev)));
    };

    let refresh_state = state.clone();
    let on_refresh = move |_| {
        load_series(refresh_state.clone(), refresh_state.data_source.get_untracked());
        refresh_state.notify("Chart refreshed successfully!", Severity::Success);
    };

    let randomize_state = state.clone();
    let on_randomize = move |_| {
        randomize_state
            .series
            .update(|s| s.randomize(&mut rand::thread_rng()));
        randomize_state.notify("Chart data randomized!", Severity::Info);
    };

    let on_download = move |_| {
        let Some(canvas) = canvas.get_untracked() else {
            return;
        };
        if download_chart(&canvas).is_some() {
            state.notify("Chart downloaded!", Severity::Success);
        }
    };

    view! {
        <div class="flex flex-wrap items-center gap-3">
            <select
                on:change=on_source
                prop:value=move || data_source.get().id()
                class="bg-gray-700 rounded-lg px-3 py-2 text-sm border border-gray-600"
            >
                {DataSource::ALL
                    .into_iter()
                    .map(|s| view! { <option value=s.id()>{s.label()}</option> })
                    .collect_view()}
            </select>

            <select
                on:change=on_kind
                prop:value=move || chart_kind.get().id()
                class="bg-gray-700 rounded-lg px-3 py-2 text-sm border border-gray-600"
            >
                {ChartKind::ALL
                    .into_iter()
                    .map(|k| view! { <option value=k.id()>{k.label()}</option> })
                    .collect_view()}
            </select>

            <OptionToggle label="Legend" read=move |o| o.legend write=|o, v| o.legend = v />
            <OptionToggle label="Tooltips" read=move |o| o.tooltip write=|o, v| o.tooltip = v />
            <OptionToggle label="Animation" read=move |o| o.animation write=|o, v| o.animation = v />

            <div class="flex-1" />

            <button on:click=on_refresh class="chart-action">"Refresh"</button>
            <button on:click=on_randomize class="chart-action">"Randomize"</button>
            <button on:click=on_download class="chart-action">"Download"</button>
        </div>
    }
}

#[component]
fn OptionToggle(
    label: &'static str,
    read: impl Fn(crate::state::series::ChartOptions) -> bool + Copy + 'static,
    write: impl Fn(&mut crate::state::series::ChartOptions, bool) + Copy + 'static,
) -> impl IntoView {
    let state = expect_global_state();
    let options = state.chart_options;

    view! {
        <label class="flex items-center space-x-1 text-sm text-gray-300 cursor-pointer">
            <input
                type="checkbox"
                prop:checked=move || read(options.get())
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    options.update(|o| write(o, checked));
                }
            />
            <span>{label}</span>
        </label>
    }
}

/// Legend strip under the chart, hidden by the legend option
#[component]
fn ChartLegend() -> impl IntoView {
    let state = expect_global_state();

    let items_state = state.clone();
    let items = create_memo(move |_| {
        let series = items_state.series.get();
        if items_state.chart_kind.get().is_categorical() {
            series
                .labels
                .iter()
                .enumerate()
                .map(|(i, label)| (label.clone(), SERIES_COLORS[i % SERIES_COLORS.len()]))
                .collect::<Vec<_>>()
        } else {
            vec![(series.title.clone(), PRIMARY_COLOR)]
        }
    });

    view! {
        {move || {
            if !state.chart_options.get().legend {
                return ().into_view();
            }
            view! {
                <div class="flex justify-center flex-wrap gap-4 mt-2">
                    {items.get()
                        .into_iter()
                        .map(|(label, color)| view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-300">{label}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            }
            .into_view()
        }}
    }
}

// ============ Animation ============

fn ease_out(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(3)
}

fn start_animation(enabled: bool, progress: RwSignal<f64>, epoch: RwSignal<u32>) {
    let my_epoch = epoch.get_untracked() + 1;
    epoch.set(my_epoch);
    if !enabled {
        progress.set(1.0);
        return;
    }
    progress.set(0.0);
    step_animation(progress, epoch, my_epoch);
}

fn step_animation(progress: RwSignal<f64>, epoch: RwSignal<u32>, my_epoch: u32) {
    if epoch.get_untracked() != my_epoch {
        return;
    }
    let next = (progress.get_untracked() + 0.05).min(1.0);
    progress.set(next);
    if next < 1.0 {
        request_animation_frame(move || step_animation(progress, epoch, my_epoch));
    }
}

// ============ Canvas rendering ============

struct Plot {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    max: f64,
}

/// Draw the chart on canvas. `t` is the eased animation progress.
fn draw_chart(canvas: &HtmlCanvasElement, series: &Series, kind: ChartKind, t: f64) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    // Clear canvas
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, CANVAS_W, CANVAS_H);

    if series.is_empty() {
        ctx.set_fill_style_str("#6b7280");
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data to display", CANVAS_W / 2.0 - 60.0, CANVAS_H / 2.0);
        return;
    }

    match kind {
        ChartKind::Bar => draw_bar(&ctx, series, t),
        ChartKind::Line => draw_line(&ctx, series, t),
        ChartKind::Pie => draw_pie(&ctx, series, t, false),
        ChartKind::Doughnut => draw_pie(&ctx, series, t, true),
        ChartKind::Radar => draw_radar(&ctx, series, t),
        ChartKind::PolarArea => draw_polar(&ctx, series, t),
    }
}

/// Draw the cartesian frame: gridlines, y-axis values and x labels.
fn draw_axes(ctx: &CanvasRenderingContext2d, series: &Series) -> Plot {
    let plot = Plot {
        left: 60.0,
        top: 20.0,
        width: CANVAS_W - 60.0 - 20.0,
        height: CANVAS_H - 20.0 - 40.0,
        max: padded_max(series),
    };

    ctx.set_stroke_style_str(GRID_LINE);
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    // Horizontal grid lines with y-axis values
    for i in 0..=5 {
        let y = plot.top + (i as f64 / 5.0) * plot.height;
        ctx.begin_path();
        ctx.move_to(plot.left, y);
        ctx.line_to(plot.left + plot.width, y);
        ctx.stroke();

        let value = plot.max * (1.0 - i as f64 / 5.0);
        ctx.set_fill_style_str(LABEL_COLOR);
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // X-axis labels centered under each column
    let slot = plot.width / series.len() as f64;
    ctx.set_text_align("center");
    for (i, label) in series.labels.iter().enumerate() {
        let x = plot.left + slot * (i as f64 + 0.5);
        let _ = ctx.fill_text(&short_label(label, 10), x, CANVAS_H - 12.0);
    }
    ctx.set_text_align("start");

    plot
}

fn draw_bar(ctx: &CanvasRenderingContext2d, series: &Series, t: f64) {
    let plot = draw_axes(ctx, series);
    let slot = plot.width / series.len() as f64;

    ctx.set_fill_style_str(PRIMARY_COLOR);
    for (i, &value) in series.values.iter().enumerate() {
        let height = (value * t / plot.max) * plot.height;
        let x = plot.left + slot * i as f64 + slot * 0.2;
        ctx.fill_rect(x, plot.top + plot.height - height, slot * 0.6, height);
    }
}

fn draw_line(ctx: &CanvasRenderingContext2d, series: &Series, t: f64) {
    let plot = draw_axes(ctx, series);
    let slot = plot.width / series.len() as f64;
    let point = |i: usize, value: f64| {
        let x = plot.left + slot * (i as f64 + 0.5);
        let y = plot.top + plot.height - (value * t / plot.max) * plot.height;
        (x, y)
    };

    ctx.set_stroke_style_str(PRIMARY_COLOR);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, &value) in series.values.iter().enumerate() {
        let (x, y) = point(i, value);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Draw points
    ctx.set_fill_style_str(PRIMARY_COLOR);
    for (i, &value) in series.values.iter().enumerate() {
        let (x, y) = point(i, value);
        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, TAU);
        ctx.fill();
    }
}

fn draw_pie(ctx: &CanvasRenderingContext2d, series: &Series, t: f64, doughnut: bool) {
    let (cx, cy) = (CANVAS_W / 2.0, CANVAS_H / 2.0);
    let radius = CANVAS_H / 2.0 - 30.0;
    let total: f64 = series.values.iter().sum();
    if total <= 0.0 {
        return;
    }

    let mut start = -FRAC_PI_2;
    for (i, &value) in series.values.iter().enumerate() {
        let sweep = value / total * TAU * t;
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, start + sweep);
        ctx.close_path();
        ctx.set_fill_style_str(SERIES_COLORS[i % SERIES_COLORS.len()]);
        ctx.fill();
        ctx.set_stroke_style_str(BACKGROUND);
        ctx.set_line_width(2.0);
        ctx.stroke();
        start += sweep;
    }

    if doughnut {
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, radius * 0.55, 0.0, TAU);
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill();
    }
}

fn draw_radar(ctx: &CanvasRenderingContext2d, series: &Series, t: f64) {
    let (cx, cy) = (CANVAS_W / 2.0, CANVAS_H / 2.0);
    let radius = CANVAS_H / 2.0 - 40.0;
    let n = series.len();
    let step = TAU / n as f64;
    let max = padded_max(series);
    let vertex = |i: usize, r: f64| {
        let angle = -FRAC_PI_2 + step * i as f64;
        (cx + r * angle.cos(), cy + r * angle.sin())
    };

    // Concentric rings and spokes
    ctx.set_stroke_style_str(GRID_LINE);
    ctx.set_line_width(1.0);
    for ring in 1..=4 {
        let r = radius * ring as f64 / 4.0;
        ctx.begin_path();
        for i in 0..=n {
            let (x, y) = vertex(i % n, r);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
    }
    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    for (i, label) in series.labels.iter().enumerate() {
        let (x, y) = vertex(i, radius);
        ctx.begin_path();
        ctx.move_to(cx, cy);
        ctx.line_to(x, y);
        ctx.stroke();

        let (lx, ly) = vertex(i, radius + 16.0);
        let _ = ctx.fill_text(&short_label(label, 10), lx, ly + 4.0);
    }
    ctx.set_text_align("start");

    // Data polygon
    ctx.begin_path();
    for i in 0..=n {
        let value = series.values[i % n];
        let (x, y) = vertex(i % n, value * t / max * radius);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.set_fill_style_str(PRIMARY_FILL);
    ctx.fill();
    ctx.set_stroke_style_str(PRIMARY_COLOR);
    ctx.set_line_width(2.0);
    ctx.stroke();

    ctx.set_fill_style_str(PRIMARY_COLOR);
    for (i, &value) in series.values.iter().enumerate() {
        let (x, y) = vertex(i, value * t / max * radius);
        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, TAU);
        ctx.fill();
    }
}

fn draw_polar(ctx: &CanvasRenderingContext2d, series: &Series, t: f64) {
    let (cx, cy) = (CANVAS_W / 2.0, CANVAS_H / 2.0);
    let radius = CANVAS_H / 2.0 - 40.0;
    let n = series.len();
    let step = TAU / n as f64;
    let max = padded_max(series);

    ctx.set_stroke_style_str(GRID_LINE);
    ctx.set_line_width(1.0);
    for ring in 1..=4 {
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, radius * ring as f64 / 4.0, 0.0, TAU);
        ctx.stroke();
    }

    for (i, &value) in series.values.iter().enumerate() {
        let r = value * t / max * radius;
        let from = -FRAC_PI_2 + step * i as f64;
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, r, from, from + step);
        ctx.close_path();
        ctx.set_fill_style_str(PRIMARY_FILL);
        ctx.fill();
        ctx.set_stroke_style_str(PRIMARY_COLOR);
        ctx.set_line_width(1.5);
        ctx.stroke();
    }
}

fn padded_max(series: &Series) -> f64 {
    let max = series.max_value();
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}

fn short_label(label: &str, limit: usize) -> String {
    if label.chars().count() > limit {
        let head: String = label.chars().take(limit - 1).collect();
        format!("{}…", head)
    } else {
        label.to_string()
    }
}

/// Map canvas coordinates to a series index for the hover readout.
fn hit_index(series: &Series, kind: ChartKind, x: f64, y: f64) -> Option<usize> {
    let n = series.len();
    if n == 0 {
        return None;
    }

    match kind {
        ChartKind::Bar | ChartKind::Line => {
            let left = 60.0;
            let width = CANVAS_W - 60.0 - 20.0;
            if x < left || x >= left + width {
                return None;
            }
            Some((((x - left) / width) * n as f64) as usize)
        }
        _ => {
            let (dx, dy) = (x - CANVAS_W / 2.0, y - CANVAS_H / 2.0);
            let radius = CANVAS_H / 2.0 - 30.0;
            if dx.hypot(dy) > radius + 20.0 {
                return None;
            }
            let mut angle = dy.atan2(dx) + FRAC_PI_2;
            if angle < 0.0 {
                angle += TAU;
            }

            if kind.is_categorical() {
                // Slices are proportional: walk the cumulative sweep
                let total: f64 = series.values.iter().sum();
                if total <= 0.0 {
                    return None;
                }
                let mut acc = 0.0;
                for (i, &value) in series.values.iter().enumerate() {
                    acc += value / total * TAU;
                    if angle < acc {
                        return Some(i);
                    }
                }
                Some(n - 1)
            } else {
                // Equal-angle sectors (radar axes are centered on the spoke)
                let step = TAU / n as f64;
                let shifted = if kind == ChartKind::Radar {
                    (angle + step / 2.0) % TAU
                } else {
                    angle
                };
                Some(((shifted / step) as usize).min(n - 1))
            }
        }
    }
}

/// Export the canvas as a PNG download.
fn download_chart(canvas: &HtmlCanvasElement) -> Option<()> {
    let url = canvas.to_data_url().ok()?;
    let link = document()
        .create_element("a")
        .ok()?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .ok()?;
    link.set_download("chart.png");
    link.set_href(&url);
    link.click();
    Some(())
}
