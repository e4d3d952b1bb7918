use super::helpers::{clear, fill_circle, polyline, rgba, stroke_line};
use crate::constants::{GLOBE_CANVAS_ID, GLOBE_PIXEL_SCALE};
use crate::core::globe::{connections, depth_alpha, pulse_size, Globe, RADIUS_FRACTION};
use crate::dom;
use crate::frame::AnimationLoop;
use glam::DVec2;
use web_sys as web;

const VIOLET: [u8; 3] = [124, 58, 237];
const CYAN: [u8; 3] = [6, 182, 212];
const WHITE: [u8; 3] = [255, 255, 255];

const INNER_DOT_PX: f64 = 2.0;
const GLOW_SCALE: f64 = 3.0;

/// Rotating wireframe globe with pulsing city markers.
pub fn init(document: &web::Document) -> anyhow::Result<Option<AnimationLoop>> {
    let Some(canvas) = dom::by_id::<web::HtmlCanvasElement>(document, GLOBE_CANVAS_ID) else {
        log::debug!("no #{GLOBE_CANVAS_ID}, skipping globe");
        return Ok(None);
    };
    let ctx = dom::context_2d(&canvas)?;

    dom::sync_canvas_to_parent(&canvas, GLOBE_PIXEL_SCALE, None, None);
    {
        let canvas = canvas.clone();
        dom::on_resize(move || {
            dom::sync_canvas_to_parent(&canvas, GLOBE_PIXEL_SCALE, None, None);
        });
    }

    let mut globe = Globe::default();
    let handle = AnimationLoop::forever(move || {
        draw(&ctx, &canvas, &globe, js_sys::Date::now());
        globe.advance();
    });
    Ok(Some(handle))
}

fn draw(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    globe: &Globe,
    now_ms: f64,
) {
    clear(ctx, canvas);
    let (w, h) = (canvas.width() as f64, canvas.height() as f64);
    let center = DVec2::new(w / 2.0, h / 2.0);
    let radius = w * RADIUS_FRACTION;
    if radius <= 0.0 {
        return;
    }

    draw_body(ctx, center, radius, w, h);

    // Graticule segments share one style, so they go out as a single path
    ctx.begin_path();
    for seg in globe.grid_segments(center, radius) {
        polyline(ctx, &seg);
    }
    ctx.set_stroke_style_str(&rgba(VIOLET, 0.06));
    ctx.set_line_width(1.0);
    ctx.stroke();

    let visible = globe.visible_cities(center, radius);
    for city in &visible {
        let alpha = depth_alpha(city.depth, radius);
        let pulse = pulse_size(now_ms, city.index);
        fill_circle(ctx, city.screen, pulse * GLOW_SCALE, &rgba(CYAN, alpha * 0.1));
        fill_circle(ctx, city.screen, pulse, &rgba(CYAN, alpha));
        fill_circle(ctx, city.screen, INNER_DOT_PX, &rgba(WHITE, alpha));
    }

    for c in connections(&visible, radius) {
        stroke_line(
            ctx,
            visible[c.a].screen,
            visible[c.b].screen,
            1.0,
            &rgba(CYAN, c.alpha),
        );
    }
}

fn draw_body(ctx: &web::CanvasRenderingContext2d, center: DVec2, radius: f64, w: f64, h: f64) {
    if let Ok(glow) =
        ctx.create_radial_gradient(center.x, center.y, radius * 0.8, center.x, center.y, radius * 1.3)
    {
        _ = glow.add_color_stop(0.0, &rgba(VIOLET, 0.05));
        _ = glow.add_color_stop(1.0, "transparent");
        ctx.set_fill_style_canvas_gradient(&glow);
        ctx.fill_rect(0.0, 0.0, w, h);
    }

    ctx.begin_path();
    _ = ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU);
    ctx.set_fill_style_str(&rgba(VIOLET, 0.03));
    ctx.fill();
    ctx.set_stroke_style_str(&rgba(VIOLET, 0.15));
    ctx.set_line_width(1.5);
    ctx.stroke();
}
