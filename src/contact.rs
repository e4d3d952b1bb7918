use crate::constants::{CONTACT_FORM_ID, SPIN_CSS, SUBMIT_BUTTON_SELECTOR};
use crate::core::form::{ButtonPhase, FormPayload, Settlement, SubmitError, SUBMIT_ENDPOINT};
use crate::dom;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Contact form: JSON POST to the sheet endpoint with a three-state button.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let Some(form) = dom::by_id::<web::HtmlFormElement>(document, CONTACT_FORM_ID) else {
        log::debug!("no #{CONTACT_FORM_ID}, skipping contact form");
        return Ok(());
    };
    inject_spinner_style(document)?;

    let form_el = form.clone();
    dom::on_event(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let form = form_el.clone();
        spawn_local(submit(form));
    });
    Ok(())
}

/// `@keyframes spin` for the sending indicator.
fn inject_spinner_style(document: &web::Document) -> anyhow::Result<()> {
    let style = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    style.set_text_content(Some(SPIN_CSS));
    let head = document.head().ok_or_else(|| anyhow::anyhow!("no <head>"))?;
    head.append_child(&style)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

async fn submit(form: web::HtmlFormElement) {
    let button = form
        .query_selector(SUBMIT_BUTTON_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
    let original = button.as_ref().map(|b| b.inner_html()).unwrap_or_default();
    if let Some(b) = &button {
        apply_phase(b, ButtonPhase::Sending, &original);
    }

    let payload = collect_payload(&form);
    let result = post_json(&payload).await;
    match &result {
        Ok(()) => log::info!("[contact] submission sent"),
        Err(e) => log::warn!("[contact] submission failed: {}", e),
    }

    let settlement = Settlement::from_result(&result);
    if let Some(b) = &button {
        apply_phase(b, settlement.phase, &original);
    }
    dom::set_timeout(settlement.reset_after_ms, move || {
        if let Some(b) = &button {
            apply_phase(b, ButtonPhase::Idle, &original);
        }
        if settlement.clear_fields {
            form.reset();
        }
    });
}

fn collect_payload(form: &web::HtmlFormElement) -> FormPayload {
    let data = web::FormData::new_with_form(form).ok();
    FormPayload::collect(|name| data.as_ref().and_then(|d| d.get(name).as_string()))
}

fn apply_phase(button: &web::HtmlButtonElement, phase: ButtonPhase, original: &str) {
    let html = phase.inner_html().unwrap_or_else(|| original.to_string());
    button.set_inner_html(&html);
    button.set_disabled(phase.disabled());
    dom::set_style(button, "opacity", phase.opacity());
    dom::set_style(button, "background", phase.background());
}

/// Fire-and-forget POST. With `no-cors` the response is opaque, so only a
/// rejected fetch counts as failure.
async fn post_json(payload: &FormPayload) -> Result<(), SubmitError> {
    let body = payload.to_json()?;

    let headers = web::Headers::new().map_err(|e| SubmitError::Request(format!("{:?}", e)))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| SubmitError::Request(format!("{:?}", e)))?;

    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(web::RequestMode::NoCors);
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));

    let request = web::Request::new_with_str_and_init(SUBMIT_ENDPOINT, &opts)
        .map_err(|e| SubmitError::Request(format!("{:?}", e)))?;
    let window = web::window().ok_or_else(|| SubmitError::Network("no window".into()))?;
    JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| SubmitError::Network(format!("{:?}", e)))?;
    Ok(())
}
