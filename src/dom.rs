use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Typed lookup by id; `None` if missing or of another element type.
#[inline]
pub fn by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// All elements matching `selector` under `root` (empty on a bad selector).
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    collect_nodes(root.query_selector_all(selector).ok())
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    collect_nodes(root.query_selector_all(selector).ok())
}

fn collect_nodes(list: Option<web::NodeList>) -> Vec<web::Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Attach a listener that ignores its event argument. The closure lives for
/// the page lifetime.
pub fn on(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`on`] but hands the handler the typed event.
pub fn on_event<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Passive listener, for scroll handlers that never call `preventDefault`.
pub fn on_passive(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once(f);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        ms,
    );
    cb.forget();
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    _ = el.class_list().remove_1(class);
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str) {
    _ = el.class_list().toggle(class);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Smooth-scroll `el` into view with the given block alignment.
pub fn scroll_into_view_smooth(el: &web::Element, block: web::ScrollLogicalPosition) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(block);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[inline]
pub fn inner_size() -> Option<(f64, f64)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Acquire a 2D context for `canvas`.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Size the backing store to `scale` × the parent's CSS width. The backing
/// and CSS heights default to square. Returns the new backing width.
pub fn sync_canvas_to_parent(
    canvas: &web::HtmlCanvasElement,
    scale: f64,
    backing_height: Option<u32>,
    css_height: Option<f64>,
) -> u32 {
    let parent_width = canvas
        .parent_element()
        .map(|p| p.get_bounding_client_rect().width())
        .unwrap_or(0.0);
    let w_px = (parent_width * scale) as u32;
    let h_px = backing_height.unwrap_or(w_px);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let css_h = css_height.unwrap_or(parent_width);
    set_style(canvas, "width", &format!("{parent_width}px"));
    set_style(canvas, "height", &format!("{css_h}px"));
    w_px
}

/// Keep the backing store equal to the viewport size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (w, h) = inner_size().unwrap_or((0.0, 0.0));
    let (w_px, h_px) = (w as u32, h as u32);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

/// Call `f` on every window `resize`.
pub fn on_resize(f: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        on(&window, "resize", f);
    }
}
