use crate::constants::{
    CLASS_ANIMATED, CLASS_REVEALED, COUNTER_SELECTOR, EVAL_FILL_SELECTOR, REVEAL_SELECTOR,
};
use crate::core::reveal::{
    counter_progress, parse_delay_ms, Counter, COUNTER_THRESHOLD, EVAL_BAR_THRESHOLD,
    REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
};
use crate::dom;
use crate::frame::{AnimationLoop, LoopControl};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Watch `elements` and call `on_enter` the first time each one becomes
/// visible past `threshold`; the element is unobserved right after.
fn observe_once(
    elements: Vec<web::Element>,
    threshold: f64,
    root_margin: Option<&str>,
    on_enter: impl Fn(web::Element) + 'static,
) -> anyhow::Result<()> {
    if elements.is_empty() {
        return Ok(());
    }
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_enter(target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        opts.set_root_margin(margin);
    }
    let observer = web::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    cb.forget();
    for el in &elements {
        observer.observe(el);
    }
    Ok(())
}

/// `.reveal-up` → `revealed`, honouring `data-delay` (ms).
pub fn init_reveals(document: &web::Document) -> anyhow::Result<()> {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    log::debug!("[reveal] watching {} elements", elements.len());
    observe_once(elements, REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), |el| {
        let delay = parse_delay_ms(el.get_attribute("data-delay").as_deref());
        dom::set_timeout(delay, move || dom::add_class(&el, CLASS_REVEALED));
    })
}

/// `.stat-number[data-target]` counts up once when scrolled into view.
pub fn init_counters(document: &web::Document) -> anyhow::Result<()> {
    let elements = dom::query_all(document, COUNTER_SELECTOR);
    observe_once(elements, COUNTER_THRESHOLD, None, |el| {
        let counter = Counter::from_attributes(
            el.get_attribute("data-target").as_deref(),
            el.get_attribute("data-suffix").as_deref(),
            el.get_attribute("data-decimal").as_deref(),
        );
        match counter {
            Some(counter) => animate_counter(el, counter),
            None => log::debug!("[reveal] counter without a numeric data-target"),
        }
    })
}

/// `.eval-metric-fill` gets `animated`, which drives its CSS width transition.
pub fn init_eval_bars(document: &web::Document) -> anyhow::Result<()> {
    let elements = dom::query_all(document, EVAL_FILL_SELECTOR);
    observe_once(elements, EVAL_BAR_THRESHOLD, None, |el| {
        dom::add_class(&el, CLASS_ANIMATED)
    })
}

fn animate_counter(el: web::Element, counter: Counter) {
    let start = Instant::now();
    AnimationLoop::start(move || {
        let p = counter_progress(start.elapsed().as_secs_f64() * 1000.0);
        el.set_text_content(Some(&counter.text_at(p)));
        if p < 1.0 {
            LoopControl::Continue
        } else {
            LoopControl::Stop
        }
    });
}
