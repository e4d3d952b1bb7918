// Host-side tests for the contact form payload and submit button states.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod form {
    include!("../src/core/form.rs");
}

use form::*;
use std::collections::HashMap;

fn filled() -> HashMap<&'static str, String> {
    HashMap::from([
        ("name", "Ada Lovelace".to_string()),
        ("email", "ada@example.com".to_string()),
        ("company", "Analytical Engines".to_string()),
        ("industry", "fintech".to_string()),
        ("message", "Hello \"there\"".to_string()),
    ])
}

#[test]
fn collect_reads_every_field() {
    let fields = filled();
    let payload = FormPayload::collect(|name| fields.get(name).cloned());
    assert_eq!(payload.name, "Ada Lovelace");
    assert_eq!(payload.industry, "fintech");
    assert_eq!(payload.message, "Hello \"there\"");
}

#[test]
fn missing_fields_become_empty() {
    let payload = FormPayload::collect(|name| (name == "email").then(|| "x@y.z".to_string()));
    assert_eq!(
        payload,
        FormPayload {
            email: "x@y.z".into(),
            ..Default::default()
        }
    );
}

#[test]
fn collect_asks_for_each_known_field_once() {
    let mut asked = Vec::new();
    FormPayload::collect(|name| {
        asked.push(name.to_string());
        None
    });
    assert_eq!(asked, FORM_FIELDS);
}

#[test]
fn json_body_keeps_field_order() {
    let fields = filled();
    let json = FormPayload::collect(|name| fields.get(name).cloned())
        .to_json()
        .unwrap();
    assert_eq!(
        json,
        r#"{"name":"Ada Lovelace","email":"ada@example.com","company":"Analytical Engines","industry":"fintech","message":"Hello \"there\""}"#
    );
}

#[test]
fn empty_payload_serializes_empty_strings() {
    let json = FormPayload::default().to_json().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    for f in FORM_FIELDS {
        assert_eq!(v[f], "");
    }
}

#[test]
fn settlement_follows_result() {
    let ok: Result<(), SubmitError> = Ok(());
    let s = Settlement::from_result(&ok);
    assert_eq!(s.phase, ButtonPhase::Succeeded);
    assert_eq!(s.reset_after_ms, 3000);
    assert!(s.clear_fields);

    let err: Result<(), SubmitError> = Err(SubmitError::Network("offline".into()));
    let s = Settlement::from_result(&err);
    assert_eq!(s.phase, ButtonPhase::Failed);
    assert_eq!(s.reset_after_ms, 3000);
    assert!(!s.clear_fields);
}

#[test]
fn button_markup_per_phase() {
    assert_eq!(ButtonPhase::Idle.inner_html(), None);

    let sending = ButtonPhase::Sending.inner_html().unwrap();
    assert!(sending.starts_with("<span>Sending...</span><svg"));
    assert!(sending.contains(r#"class="spin""#));

    let ok = ButtonPhase::Succeeded.inner_html().unwrap();
    assert!(ok.contains("Thank you! We'll be in touch."));
    assert!(!ok.contains("spin"));

    let failed = ButtonPhase::Failed.inner_html().unwrap();
    assert!(failed.contains("Something went wrong. Try again."));
}

#[test]
fn only_idle_button_is_enabled() {
    assert!(!ButtonPhase::Idle.disabled());
    assert!(ButtonPhase::Sending.disabled());
    assert!(ButtonPhase::Succeeded.disabled());
    assert!(ButtonPhase::Failed.disabled());
}

#[test]
fn inline_styles_per_phase() {
    assert_eq!(ButtonPhase::Sending.opacity(), "0.7");
    assert_eq!(ButtonPhase::Succeeded.opacity(), "1");
    assert_eq!(ButtonPhase::Idle.opacity(), "");

    assert_eq!(
        ButtonPhase::Succeeded.background(),
        "linear-gradient(135deg, #059669, #10b981)"
    );
    assert_eq!(
        ButtonPhase::Failed.background(),
        "linear-gradient(135deg, #dc2626, #ef4444)"
    );
    assert_eq!(ButtonPhase::Sending.background(), "");
    assert_eq!(ButtonPhase::Idle.background(), "");
}

#[test]
fn error_messages() {
    let e = SubmitError::Network("TypeError: Failed to fetch".into());
    assert_eq!(e.to_string(), "network request failed: TypeError: Failed to fetch");

    let e = SubmitError::Request("bad url".into());
    assert_eq!(e.to_string(), "could not build request: bad url");

    let json_err = serde_json::from_str::<u8>("x").unwrap_err();
    let e = SubmitError::from(json_err);
    assert!(e.to_string().starts_with("could not encode form payload: "));
}
