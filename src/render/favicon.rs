use super::helpers::rounded_rect_path;
use crate::core::waveform::{
    favicon_bar_heights, favicon_bars_start_x, FAVICON_BAR_GAP, FAVICON_BAR_WIDTH, FAVICON_SIZE,
};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Offscreen 32×32 canvas that renders the "speaking" favicon.
pub struct FaviconPainter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl FaviconPainter {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        canvas.set_width(FAVICON_SIZE);
        canvas.set_height(FAVICON_SIZE);
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    /// Render the frame for `now_ms` and return it as a PNG data URL.
    pub fn frame(&self, now_ms: f64) -> Option<String> {
        let ctx = &self.ctx;
        let size = FAVICON_SIZE as f64;
        ctx.clear_rect(0.0, 0.0, size, size);

        let grad = ctx.create_linear_gradient(0.0, 0.0, size, size);
        _ = grad.add_color_stop(0.0, "#7c3aed");
        _ = grad.add_color_stop(1.0, "#06b6d4");
        ctx.begin_path();
        _ = ctx.arc(size / 2.0, size / 2.0, size / 2.0 - 1.0, 0.0, std::f64::consts::TAU);
        ctx.set_fill_style_canvas_gradient(&grad);
        ctx.fill();

        ctx.set_fill_style_str("white");
        let start_x = favicon_bars_start_x();
        for (i, h) in favicon_bar_heights(now_ms).into_iter().enumerate() {
            let x = start_x + i as f64 * (FAVICON_BAR_WIDTH + FAVICON_BAR_GAP);
            ctx.begin_path();
            rounded_rect_path(ctx, x, (size - h) / 2.0, FAVICON_BAR_WIDTH, h, 1.5);
            ctx.fill();
        }

        self.canvas.to_data_url_with_type("image/png").ok()
    }
}
