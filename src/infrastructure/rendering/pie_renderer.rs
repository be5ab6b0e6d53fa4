use crate::domain::chart::PieSlice;
use crate::domain::logging::LogComponent;
use crate::log_debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas 2D renderer for the party pie chart - Infrastructure implementation
pub struct PieChartRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl PieChartRenderer {
    pub fn new(canvas_id: impl Into<String>, width: u32, height: u32) -> Self {
        Self { canvas_id: canvas_id.into(), width, height }
    }

    /// Центр диаграммы в пикселях canvas
    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    pub fn radius(&self) -> f64 {
        (self.width.min(self.height) as f64 / 2.0) * 0.84
    }

    /// Get canvas element and context
    fn canvas_context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        let document = gloo::utils::document();
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| JsValue::from_str("Canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("Element is not a canvas"))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("Failed to get 2D context"))?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))
    }

    /// Draw the slices; an empty layout leaves a blank chart area
    pub fn render(&self, slices: &[PieSlice]) -> Result<(), JsValue> {
        let context = self.canvas_context()?;

        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);

        // Dark panel background matching the page styling
        context.set_fill_style(&JsValue::from("#2c3e50"));
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        if slices.is_empty() {
            log_debug!(LogComponent::Infrastructure("PieRenderer"), "Empty tally, rendered zero segments");
            return Ok(());
        }

        let (cx, cy) = self.center();
        let radius = self.radius();

        for slice in slices {
            context.begin_path();
            context.move_to(cx, cy);
            context.arc(cx, cy, radius, slice.start_angle, slice.end_angle)?;
            context.close_path();

            context.set_fill_style(&JsValue::from(slice.color.to_css()));
            context.fill();

            context.set_stroke_style(&JsValue::from("#1e2b38"));
            context.set_line_width(2.0);
            context.stroke();
        }

        log_debug!(LogComponent::Infrastructure("PieRenderer"), "🥧 Rendered {} party segments", slices.len());

        Ok(())
    }
}
