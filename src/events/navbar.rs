use crate::constants::{
    CLASS_ACTIVE, CLASS_OPEN, CLASS_SCROLLED, NAVBAR_ID, NAV_LINKS_ID, NAV_LINK_SELECTOR,
    NAV_TOGGLE_ID,
};
use crate::core::nav::is_scrolled;
use crate::dom;
use web_sys as web;

/// Compact navbar once the page scrolls, plus the mobile menu toggle.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    match document.get_element_by_id(NAVBAR_ID) {
        Some(navbar) => {
            let w = window.clone();
            dom::on(&window, "scroll", move || {
                let y = w.scroll_y().unwrap_or(0.0);
                dom::set_class(&navbar, CLASS_SCROLLED, is_scrolled(y));
            });
        }
        None => log::debug!("no #{NAVBAR_ID}, skipping scroll state"),
    }

    let (Some(toggle), Some(links)) = (
        document.get_element_by_id(NAV_TOGGLE_ID),
        document.get_element_by_id(NAV_LINKS_ID),
    ) else {
        return Ok(());
    };

    {
        let (toggle_el, links) = (toggle.clone(), links.clone());
        dom::on(&toggle, "click", move || {
            dom::toggle_class(&toggle_el, CLASS_ACTIVE);
            dom::toggle_class(&links, CLASS_OPEN);
        });
    }

    // Picking a destination closes the mobile menu.
    for link in dom::query_all_in(&links, NAV_LINK_SELECTOR) {
        let (toggle, links) = (toggle.clone(), links.clone());
        dom::on(&link, "click", move || {
            dom::remove_class(&toggle, CLASS_ACTIVE);
            dom::remove_class(&links, CLASS_OPEN);
        });
    }
    Ok(())
}
