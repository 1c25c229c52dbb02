//! Chart Components
//!
//! Labeled-series line and bar charts using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// A labeled numeric series, the input both chart widgets consume.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Line chart with one point per series entry.
#[component]
pub fn LineChart(
    #[prop(into)] title: String,
    #[prop(into)] series: Signal<Series>,
    #[prop(default = "#1976d2")] color: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the series changes
    create_effect(move |_| {
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_line_chart(&canvas, &series, color);
        }
    });

    view! {
        <div class="bg-sky-100 border border-sky-200 p-4 rounded-lg">
            <h4 class="text-md font-semibold text-sky-700 mb-2 text-center">{title}</h4>
            <canvas node_ref=canvas_ref width="480" height="320" class="w-full rounded-lg" />
        </div>
    }
}

/// Bar chart with one bar per series entry.
#[component]
pub fn BarChart(
    #[prop(into)] title: String,
    #[prop(into)] series: Signal<Series>,
    #[prop(default = "#fbc02d")] color: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_bar_chart(&canvas, &series, color);
        }
    });

    view! {
        <div class="bg-sky-100 border border-sky-200 p-4 rounded-lg">
            <h4 class="text-md font-semibold text-sky-700 mb-2 text-center">{title}</h4>
            <canvas node_ref=canvas_ref width="480" height="320" class="w-full rounded-lg" />
        </div>
    }
}

/// Padded y-axis range covering every value. Falls back to `(0, 1)` for an
/// empty series so the grid still draws.
fn y_bounds(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(*value);
        max = max.max(*value);
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    // Add padding to y range
    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

struct Frame {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    margin_left: f64,
    margin_top: f64,
    chart_width: f64,
    chart_height: f64,
}

/// Clear the canvas and draw the grid with y-axis labels for the given
/// value range. Returns `None` when the 2d context is unavailable.
fn draw_frame(canvas: &HtmlCanvasElement, y_min: f64, y_max: f64) -> Option<Frame> {
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 48.0;
    let margin_right = 16.0;
    let margin_top = 16.0;
    let margin_bottom = 36.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, width, height);

    // Horizontal grid lines (5 bands)
    ctx.set_stroke_style_str("#e5e7eb");
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = y_max - (i as f64 / 5.0) * (y_max - y_min);
        ctx.set_fill_style_str("#6b7280");
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 4.0, y + 4.0);
    }

    Some(Frame {
        ctx,
        width,
        height,
        margin_left,
        margin_top,
        chart_width,
        chart_height,
    })
}

fn draw_empty_message(frame: &Frame) {
    frame.ctx.set_fill_style_str("#6b7280");
    frame.ctx.set_font("16px sans-serif");
    let _ = frame
        .ctx
        .fill_text("Sin datos", frame.width / 2.0 - 32.0, frame.height / 2.0);
}

fn draw_line_chart(canvas: &HtmlCanvasElement, series: &Series, color: &str) {
    let (y_min, y_max) = y_bounds(&series.values);
    let Some(frame) = draw_frame(canvas, y_min, y_max) else {
        return;
    };

    if series.is_empty() {
        draw_empty_message(&frame);
        return;
    }

    let ctx = &frame.ctx;
    let step = if series.len() > 1 {
        frame.chart_width / (series.len() - 1) as f64
    } else {
        0.0
    };
    // A single point sits in the middle of the chart area
    let x_offset = if series.len() > 1 {
        frame.margin_left
    } else {
        frame.margin_left + frame.chart_width / 2.0
    };

    let x_at = |i: usize| x_offset + i as f64 * step;
    let y_at =
        |value: f64| frame.margin_top + ((y_max - value) / (y_max - y_min)) * frame.chart_height;

    ctx.set_stroke_style_str(color);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, value) in series.values.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x_at(i), y_at(*value));
        } else {
            ctx.line_to(x_at(i), y_at(*value));
        }
    }
    ctx.stroke();

    // Draw points
    ctx.set_fill_style_str(color);
    for (i, value) in series.values.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(x_at(i), y_at(*value), 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // X-axis labels, at most 6 to keep them readable
    ctx.set_fill_style_str("#6b7280");
    ctx.set_font("12px sans-serif");
    let stride = (series.len() / 6).max(1);
    for (i, label) in series.labels.iter().enumerate() {
        if i % stride == 0 {
            let _ = ctx.fill_text(label, x_at(i) - 24.0, frame.height - 8.0);
        }
    }
}

fn draw_bar_chart(canvas: &HtmlCanvasElement, series: &Series, color: &str) {
    // Bars always start at zero
    let max = series.values.iter().fold(0.0_f64, |acc, v| acc.max(*v));
    let y_max = if max > 0.0 { max * 1.1 } else { 1.0 };
    let Some(frame) = draw_frame(canvas, 0.0, y_max) else {
        return;
    };

    if series.is_empty() {
        draw_empty_message(&frame);
        return;
    }

    let ctx = &frame.ctx;
    let slot = frame.chart_width / series.len() as f64;
    let bar_width = (slot * 0.6).min(64.0);

    ctx.set_fill_style_str(color);
    for (i, value) in series.values.iter().enumerate() {
        let bar_height = (value / y_max) * frame.chart_height;
        let x = frame.margin_left + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = frame.margin_top + frame.chart_height - bar_height;
        ctx.fill_rect(x, y, bar_width, bar_height);
    }

    // One label under each bar
    ctx.set_fill_style_str("#6b7280");
    ctx.set_font("12px sans-serif");
    for (i, label) in series.labels.iter().enumerate() {
        let x = frame.margin_left + i as f64 * slot + slot / 2.0 - 24.0;
        let _ = ctx.fill_text(label, x, frame.height - 8.0);
    }
}
