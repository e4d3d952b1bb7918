use glam::DVec2;
use std::f64::consts::TAU;
use web_sys as web;

#[inline]
pub fn rgba(rgb: [u8; 3], alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha)
}

#[inline]
pub fn clear(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
}

pub fn fill_circle(ctx: &web::CanvasRenderingContext2d, center: DVec2, radius: f64, style: &str) {
    ctx.begin_path();
    _ = ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU);
    ctx.set_fill_style_str(style);
    ctx.fill();
}

pub fn stroke_line(
    ctx: &web::CanvasRenderingContext2d,
    from: DVec2,
    to: DVec2,
    width: f64,
    style: &str,
) {
    ctx.begin_path();
    ctx.set_stroke_style_str(style);
    ctx.set_line_width(width);
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke();
}

/// Append a rounded rectangle to the current path. The radius shrinks to
/// fit short bars.
pub fn rounded_rect_path(
    ctx: &web::CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    radius: f64,
) {
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    ctx.move_to(x + r, y);
    _ = ctx.arc_to(x + w, y, x + w, y + h, r);
    _ = ctx.arc_to(x + w, y + h, x, y + h, r);
    _ = ctx.arc_to(x, y + h, x, y, r);
    _ = ctx.arc_to(x, y, x + w, y, r);
    ctx.close_path();
}

/// Append a polyline to the current path.
pub fn polyline(ctx: &web::CanvasRenderingContext2d, points: &[DVec2]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
}
