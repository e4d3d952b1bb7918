#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod contact;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod player;
mod render;
mod reveal;

use frame::AnimationLoop;

/// Frame loops started at boot. They run for the page lifetime; the handles
/// are kept so an embedding page can tear everything down.
#[derive(Default)]
struct Loops {
    handles: Vec<AnimationLoop>,
}

impl Loops {
    fn keep(&mut self, name: &str, started: anyhow::Result<Option<AnimationLoop>>) {
        match started {
            Ok(Some(h)) => {
                log::debug!("[{name}] loop started");
                self.handles.push(h);
            }
            Ok(None) => {}
            Err(e) => log::error!("[{name}] init error: {:?}", e),
        }
    }
}

thread_local! {
    static LOOPS: std::cell::RefCell<Loops> = std::cell::RefCell::new(Loops::default());
}

fn report(name: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[{name}] init error: {:?}", e);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("edhana-site starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let once = wasm_bindgen::closure::Closure::once(move || init(&doc));
        document
            .add_event_listener_with_callback("DOMContentLoaded", once.as_ref().unchecked_ref())?;
        once.forget();
    } else {
        init(&document);
    }
    Ok(())
}

/// Bring up every component once the DOM is parsed. Components are
/// independent: one failing to start does not stop the rest.
fn init(document: &web::Document) {
    report("preloader", overlay::init_preloader(document));
    LOOPS.with(|loops| {
        let mut loops = loops.borrow_mut();
        loops.keep("particles", render::particles::init(document));
        loops.keep("player", player::init(document));
        loops.keep("globe", render::globe::init(document));
        loops.keep("cursor", events::cursor::init(document));
    });
    report("navbar", events::navbar::init(document));
    report("reveal", reveal::init_reveals(document));
    report("counters", reveal::init_counters(document));
    report("eval-bars", reveal::init_eval_bars(document));
    report("smooth-scroll", events::scroll::init_smooth_scroll(document));
    report("contact", contact::init(document));
    report("active-nav", events::scroll::init_active_nav(document));
    log::info!("edhana-site ready");
}

/// Stop every boot-time frame loop.
#[wasm_bindgen]
pub fn stop_animations() {
    LOOPS.with(|loops| {
        let mut loops = loops.borrow_mut();
        for h in loops.handles.drain(..) {
            h.stop();
        }
        log::info!("animation loops stopped");
    });
}
