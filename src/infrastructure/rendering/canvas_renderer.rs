use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    chart::{LineChartData, PieChartData, PlotArea, curve_segments, line_points, pie_arcs},
    errors::{AppError, RenderingResult},
    logging::LogComponent,
};
use crate::log_debug;

const BACKGROUND: &str = "#ffffff";
const AXIS_COLOR: &str = "#d1d5db";
const TEXT_COLOR: &str = "#374151";
const MUTED_TEXT: &str = "#9ca3af";
const PADDING: f64 = 48.0;
const POINT_RADIUS: f64 = 3.5;

fn js_err(context: &str) -> impl Fn(JsValue) -> AppError + '_ {
    move |e| AppError::Rendering(format!("{}: {:?}", context, e))
}

/// Canvas 2D renderer for the portfolio charts
pub struct CanvasRenderer {
    context: CanvasRenderingContext2d,
    width: u32,
    height: u32,
    currency: String,
}

impl CanvasRenderer {
    /// Size the canvas and grab its 2D context
    pub fn for_canvas(canvas: &HtmlCanvasElement, width: u32, height: u32, currency: &str) -> RenderingResult<Self> {
        canvas.set_width(width);
        canvas.set_height(height);

        let context = canvas
            .get_context("2d")
            .map_err(js_err("Failed to get 2D context"))?
            .ok_or_else(|| AppError::Rendering("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Rendering("Failed to cast to 2D context".to_string()))?;

        Ok(Self { context, width, height, currency: currency.to_string() })
    }

    pub fn for_id(canvas_id: &str, width: u32, height: u32, currency: &str) -> RenderingResult<Self> {
        let canvas = gloo::utils::document()
            .get_element_by_id(canvas_id)
            .ok_or_else(|| AppError::Rendering(format!("canvas '{}' not found", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::Rendering(format!("'{}' is not a canvas", canvas_id)))?;
        Self::for_canvas(&canvas, width, height, currency)
    }

    fn plot_area(&self) -> PlotArea {
        PlotArea::new(self.width as f64, self.height as f64, PADDING)
    }

    fn clear(&self) {
        let ctx = &self.context;
        ctx.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    /// Smoothed value line with point markers and min/max labels
    pub fn render_line_chart(&self, data: &LineChartData) -> RenderingResult<()> {
        self.clear();
        if data.is_empty() {
            return self.render_placeholder();
        }

        let area = self.plot_area();
        let ctx = &self.context;
        self.render_axes(&area);

        let points = line_points(&data.series.points, &area);
        let segments = curve_segments(&points, data.series.tension, &area);

        ctx.set_stroke_style_str(&data.series.color);
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.move_to(points[0].x, points[0].y);
        for seg in &segments {
            ctx.bezier_curve_to(seg.cp1.x, seg.cp1.y, seg.cp2.x, seg.cp2.y, seg.to.x, seg.to.y);
        }
        ctx.stroke();

        ctx.set_fill_style_str(&data.series.color);
        for p in &points {
            ctx.begin_path();
            ctx.arc(p.x, p.y, POINT_RADIUS, 0.0, std::f64::consts::TAU)
                .map_err(js_err("Failed to draw point"))?;
            ctx.fill();
        }

        ctx.set_font("12px sans-serif");
        ctx.set_fill_style_str(TEXT_COLOR);
        if let Some((min, max)) = data.value_range() {
            ctx.set_text_align("right");
            ctx.fill_text(&format!("{}{:.0}", self.currency, max), area.left() - 6.0, area.top() + 4.0)
                .map_err(js_err("Failed to draw label"))?;
            ctx.fill_text(&format!("{}{:.0}", self.currency, min), area.left() - 6.0, area.bottom() + 4.0)
                .map_err(js_err("Failed to draw label"))?;
        }

        ctx.set_fill_style_str(MUTED_TEXT);
        if let Some(first) = data.labels.first() {
            ctx.set_text_align("left");
            ctx.fill_text(first, area.left(), area.bottom() + 20.0)
                .map_err(js_err("Failed to draw label"))?;
        }
        if data.labels.len() > 1 {
            if let Some(last) = data.labels.last() {
                ctx.set_text_align("right");
                ctx.fill_text(last, area.right(), area.bottom() + 20.0)
                    .map_err(js_err("Failed to draw label"))?;
            }
        }

        log_debug!(
            LogComponent::Infrastructure("CanvasRenderer"),
            "line chart: {} points",
            points.len()
        );
        Ok(())
    }

    /// Pie with a legend listing every bucket and its count
    pub fn render_pie_chart(&self, data: &PieChartData) -> RenderingResult<()> {
        self.clear();
        if data.total() == 0 {
            return self.render_placeholder();
        }

        let ctx = &self.context;
        let area = self.plot_area();
        let legend_width = 130.0;
        let radius = ((area.inner_width() - legend_width).min(area.inner_height()) / 2.0).max(10.0);
        let cx = area.left() + radius;
        let cy = area.top() + area.inner_height() / 2.0;

        for arc in pie_arcs(data) {
            ctx.set_fill_style_str(&arc.color);
            ctx.begin_path();
            ctx.move_to(cx, cy);
            ctx.arc(cx, cy, radius, arc.start_angle, arc.end_angle)
                .map_err(js_err("Failed to draw slice"))?;
            ctx.close_path();
            ctx.fill();
        }

        let legend_x = cx + radius + 24.0;
        ctx.set_font("13px sans-serif");
        ctx.set_text_align("left");
        for (i, slice) in data.slices.iter().enumerate() {
            let y = cy - 30.0 + i as f64 * 24.0;
            ctx.set_fill_style_str(&slice.color);
            ctx.fill_rect(legend_x, y - 10.0, 12.0, 12.0);
            ctx.set_fill_style_str(TEXT_COLOR);
            ctx.fill_text(&format!("{} ({})", slice.label, slice.value), legend_x + 18.0, y)
                .map_err(js_err("Failed to draw legend"))?;
        }

        log_debug!(
            LogComponent::Infrastructure("CanvasRenderer"),
            "pie chart: {} holdings",
            data.total()
        );
        Ok(())
    }

    fn render_axes(&self, area: &PlotArea) {
        let ctx = &self.context;
        ctx.set_stroke_style_str(AXIS_COLOR);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(area.left(), area.top());
        ctx.line_to(area.left(), area.bottom());
        ctx.line_to(area.right(), area.bottom());
        ctx.stroke();
    }

    fn render_placeholder(&self) -> RenderingResult<()> {
        let ctx = &self.context;
        ctx.set_fill_style_str(MUTED_TEXT);
        ctx.set_font("14px sans-serif");
        ctx.set_text_align("center");
        ctx.fill_text("No holdings yet", self.width as f64 / 2.0, self.height as f64 / 2.0)
            .map_err(js_err("Failed to draw placeholder"))
    }
}
