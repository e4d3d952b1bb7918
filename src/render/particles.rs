use super::helpers::{clear, fill_circle, rgba, stroke_line};
use crate::constants::PARTICLES_CANVAS_ID;
use crate::core::particles::{ParticleField, Tint};
use crate::dom;
use crate::frame::AnimationLoop;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const LINK_WIDTH: f64 = 0.5;

/// Full-viewport drifting particle background.
pub fn init(document: &web::Document) -> anyhow::Result<Option<AnimationLoop>> {
    let Some(canvas) = dom::by_id::<web::HtmlCanvasElement>(document, PARTICLES_CANVAS_ID) else {
        log::debug!("no #{PARTICLES_CANVAS_ID}, skipping particles");
        return Ok(None);
    };
    let ctx = dom::context_2d(&canvas)?;

    let (w, h) = dom::sync_canvas_to_viewport(&canvas);
    let field = Rc::new(RefCell::new(ParticleField::new(w, h, &mut rand::thread_rng())));
    log::info!(
        "[particles] {}x{} -> {} particles",
        w,
        h,
        field.borrow().particles.len()
    );

    {
        let canvas = canvas.clone();
        let field = field.clone();
        dom::on_resize(move || {
            let (w, h) = dom::sync_canvas_to_viewport(&canvas);
            field.borrow_mut().resize(w, h);
        });
    }

    let handle = AnimationLoop::forever(move || {
        let mut field = field.borrow_mut();
        field.step();
        draw(&ctx, &canvas, &field);
    });
    Ok(Some(handle))
}

fn draw(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement, field: &ParticleField) {
    clear(ctx, canvas);
    for p in &field.particles {
        fill_circle(ctx, DVec2::new(p.x, p.y), p.size, &rgba(p.tint.rgb(), p.opacity));
    }
    for link in field.links() {
        let (a, b) = (&field.particles[link.a], &field.particles[link.b]);
        stroke_line(
            ctx,
            DVec2::new(a.x, a.y),
            DVec2::new(b.x, b.y),
            LINK_WIDTH,
            &rgba(Tint::Violet.rgb(), link.opacity),
        );
    }
}
