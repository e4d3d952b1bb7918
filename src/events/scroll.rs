use crate::constants::{ACTIVE_NAV_LINK_SELECTOR, ANCHOR_SELECTOR, CLASS_ACTIVE, SECTION_SELECTOR};
use crate::core::nav::{active_section, section_href, SectionBounds};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// In-page `#anchor` links scroll smoothly instead of jumping.
pub fn init_smooth_scroll(document: &web::Document) -> anyhow::Result<()> {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let href_src = anchor.clone();
        dom::on_event(&anchor, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(href) = href_src.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector; nothing to scroll to.
            if let Ok(Some(target)) = doc.query_selector(&href) {
                dom::scroll_into_view_smooth(&target, web::ScrollLogicalPosition::Start);
            }
        });
    }
    Ok(())
}

/// Highlight the nav link of the section currently under the header.
pub fn init_active_nav(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let sections: Vec<web::HtmlElement> = dom::query_all(document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    let links = dom::query_all(document, ACTIVE_NAV_LINK_SELECTOR);
    if sections.is_empty() || links.is_empty() {
        log::debug!("no sections or nav links, skipping active nav");
        return Ok(());
    }

    let w = window.clone();
    let update = move || {
        let bounds: Vec<SectionBounds> = sections
            .iter()
            .map(|s| SectionBounds {
                id: s.id(),
                top: s.offset_top() as f64,
                height: s.offset_height() as f64,
            })
            .collect();
        let Some(id) = active_section(w.scroll_y().unwrap_or(0.0), &bounds) else {
            return;
        };
        let href = section_href(id);
        for link in &links {
            let is_current = link.get_attribute("href").as_deref() == Some(href.as_str());
            dom::set_class(link, CLASS_ACTIVE, is_current);
        }
    };
    update();
    dom::on_passive(&window, "scroll", update);
    Ok(())
}
