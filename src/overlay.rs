use crate::constants::{
    CLASS_HIDDEN, PRELOADER_AFTER_LOAD_MS, PRELOADER_FALLBACK_MS, PRELOADER_ID,
};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(el: &web::Element) {
    dom::remove_class(el, CLASS_HIDDEN);
}

#[inline]
pub fn hide(el: &web::Element) {
    dom::add_class(el, CLASS_HIDDEN);
}

#[inline]
pub fn is_hidden(el: &web::Element) -> bool {
    el.class_list().contains(CLASS_HIDDEN)
}

/// Fade the preloader shortly after `load`, or after a fixed fallback if
/// `load` is slow to arrive.
pub fn init_preloader(document: &web::Document) -> anyhow::Result<()> {
    let Some(preloader) = document.get_element_by_id(PRELOADER_ID) else {
        log::debug!("no #{PRELOADER_ID}, skipping");
        return Ok(());
    };
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let on_load = preloader.clone();
    dom::on(&window, "load", move || {
        let el = on_load.clone();
        dom::set_timeout(PRELOADER_AFTER_LOAD_MS, move || hide(&el));
    });

    dom::set_timeout(PRELOADER_FALLBACK_MS, move || {
        if !is_hidden(&preloader) {
            log::debug!("preloader hidden by fallback timeout");
        }
        hide(&preloader);
    });
    Ok(())
}
