// Host-side tests for the page wiring constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_bare() {
    let ids = [
        PRELOADER_ID,
        PARTICLES_CANVAS_ID,
        WAVEFORM_CANVAS_ID,
        DEMO_AUDIO_ID,
        PLAY_BUTTON_ID,
        PROGRESS_FILL_ID,
        PROGRESS_HANDLE_ID,
        PROGRESS_WRAP_ID,
        DURATION_LABEL_ID,
        VOLUME_BUTTON_ID,
        WAVEFORM_OVERLAY_ID,
        WAVEFORM_WRAPPER_ID,
        DEMO_PLAYER_ID,
        GLOBE_CANVAS_ID,
        NAVBAR_ID,
        NAV_TOGGLE_ID,
        NAV_LINKS_ID,
        CURSOR_GLOW_ID,
        CONTACT_FORM_ID,
    ];
    for id in ids {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "{id}");
        assert!(!id.contains(' '), "{id}");
    }
}

#[test]
fn class_names_are_bare() {
    for class in [
        CLASS_HIDDEN,
        CLASS_ACTIVE,
        CLASS_PLAYING,
        CLASS_MUTED,
        CLASS_REVEALED,
        CLASS_ANIMATED,
        CLASS_SCROLLED,
        CLASS_OPEN,
        CLASS_VISIBLE,
    ] {
        assert!(!class.is_empty() && !class.starts_with('.'), "{class}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn preloader_fallback_outlasts_load_delay() {
    assert!(PRELOADER_AFTER_LOAD_MS > 0);
    assert!(PRELOADER_FALLBACK_MS > PRELOADER_AFTER_LOAD_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn analyser_settings() {
    // AnalyserNode requires a power of two in [32, 32768]
    assert!(ANALYSER_FFT_SIZE.is_power_of_two());
    assert!((32..=32768).contains(&ANALYSER_FFT_SIZE));
    assert!((0.0..1.0).contains(&ANALYSER_SMOOTHING));
}

#[test]
fn waveform_canvas_geometry() {
    assert_eq!(WAVEFORM_CANVAS_HEIGHT, 200);
    assert_eq!(WAVEFORM_PIXEL_SCALE, 2.0);
    assert_eq!(GLOBE_PIXEL_SCALE, 2.0);
}

#[test]
fn spinner_css_defines_spin() {
    assert!(SPIN_CSS.contains("@keyframes spin"));
    assert!(SPIN_CSS.contains(".spin"));
}
