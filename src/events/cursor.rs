use crate::constants::{CLASS_VISIBLE, CURSOR_GLOW_ID};
use crate::core::nav::{glow_enabled, GlowFollower};
use crate::dom;
use crate::frame::AnimationLoop;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Soft glow trailing the mouse on desktop-sized viewports.
pub fn init(document: &web::Document) -> anyhow::Result<Option<AnimationLoop>> {
    let Some(glow) = dom::by_id::<web::HtmlElement>(document, CURSOR_GLOW_ID) else {
        return Ok(None);
    };
    let width = dom::inner_size().map(|(w, _)| w).unwrap_or(0.0);
    if !glow_enabled(width) {
        log::debug!("viewport {width}px too narrow for cursor glow");
        return Ok(None);
    }

    let follower = Rc::new(RefCell::new(GlowFollower::default()));
    {
        let follower = follower.clone();
        let glow = glow.clone();
        dom::on_event(document, "mousemove", move |ev: web::MouseEvent| {
            follower.borrow_mut().target = input::client_position(&ev);
            dom::add_class(&glow, CLASS_VISIBLE);
        });
    }
    {
        let glow = glow.clone();
        dom::on(document, "mouseleave", move || dom::remove_class(&glow, CLASS_VISIBLE));
    }

    let handle = AnimationLoop::forever(move || {
        let pos = follower.borrow_mut().step();
        dom::set_style(&glow, "left", &format!("{}px", pos.x));
        dom::set_style(&glow, "top", &format!("{}px", pos.y));
    });
    Ok(Some(handle))
}
