//! Availability Chart Component
//!
//! Donut chart of booked vs. available places, drawn on an HTML5 canvas.

use std::f64::consts::TAU;

use activity_signup::chart::STROKE_WIDTH;
use activity_signup::{
    draw_availability_chart, AvailabilityChart, ChartPalette, ChartSurface, Sector,
};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::AppContext;

/// Canvas chart plus its legend.
///
/// Drawn once the canvas is mounted and again on every theme change.
#[component]
pub fn AvailabilityCanvas(
    /// DOM id for the canvas
    #[prop(into)]
    id: String,
    chart: AvailabilityChart,
    /// Canvas width and height in pixels
    size: u32,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let theme = ctx.theme;
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let palette = ChartPalette::for_theme(theme.get());

        if let Some(canvas) = canvas_ref.get() {
            match CanvasSurface::new(&canvas) {
                Some(surface) => draw_availability_chart(&surface, &chart, &palette),
                None => tracing::warn!("Canvas has no 2d context"),
            }
        }
    });

    view! {
        <div class="availability-chart">
            <canvas
                node_ref=canvas_ref
                id=id
                width=size.to_string()
                height=size.to_string()
                aria-label=format!("{} of {} places booked", chart.booked(), chart.total())
            />

            <div class="chart-legend">
                <div class="legend-item">
                    <span class="legend-color booked" />
                    <span>"Booked"</span>
                </div>
                <div class="legend-item">
                    <span class="legend-color available" />
                    <span>"Available"</span>
                </div>
            </div>
        </div>
    }
}

/// 2d canvas context as a chart surface
struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    fn fill_and_stroke(&self, fill: &str, stroke: &str) {
        self.ctx.set_fill_style(&fill.into());
        self.ctx.fill();
        self.ctx.set_stroke_style(&stroke.into());
        self.ctx.set_line_width(STROKE_WIDTH);
        self.ctx.stroke();
    }
}

impl ChartSurface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn wedge(&self, cx: f64, cy: f64, radius: f64, sector: &Sector, fill: &str, stroke: &str) {
        self.ctx.begin_path();
        self.ctx.move_to(cx, cy);
        let _ = self.ctx.arc(cx, cy, radius, sector.start, sector.end);
        self.ctx.close_path();
        self.fill_and_stroke(fill, stroke);
    }

    fn circle(&self, cx: f64, cy: f64, radius: f64, fill: &str, stroke: &str) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(cx, cy, radius, 0.0, TAU);
        self.fill_and_stroke(fill, stroke);
    }

    fn centered_text(&self, text: &str, x: f64, y: f64, color: &str, font: &str) {
        self.ctx.set_fill_style(&color.into());
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        let _ = self.ctx.fill_text(text, x, y);
    }
}
