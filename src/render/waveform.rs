use super::helpers::{clear, rgba, rounded_rect_path};
use crate::core::waveform::{Bar, BAR_RADIUS, BAR_WIDTH};
use web_sys as web;

/// Paint one frame of bars, vertically centred on the canvas.
pub fn draw_bars(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement, bars: &[Bar]) {
    clear(ctx, canvas);
    let center_y = canvas.height() as f64 / 2.0;
    for bar in bars {
        ctx.set_fill_style_str(&rgba(bar.rgb, bar.alpha));
        ctx.begin_path();
        rounded_rect_path(
            ctx,
            bar.x,
            center_y - bar.height / 2.0,
            BAR_WIDTH,
            bar.height,
            BAR_RADIUS,
        );
        ctx.fill();
    }
}
