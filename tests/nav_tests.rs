// Host-side tests for navbar state, active section tracking and the cursor
// glow follower. The main crate is wasm-only, so we include the pure-Rust
// module directly.

#![allow(dead_code)]
mod nav {
    include!("../src/core/nav.rs");
}

use glam::DVec2;
use nav::*;

fn section(id: &str, top: f64, height: f64) -> SectionBounds {
    SectionBounds {
        id: id.to_string(),
        top,
        height,
    }
}

#[test]
fn scrolled_past_fifty_pixels() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(50.5));
    assert!(is_scrolled(2000.0));
}

#[test]
fn active_section_uses_offset_probe() {
    let sections = [
        section("hero", 0.0, 800.0),
        section("demo", 800.0, 600.0),
        section("contact", 1400.0, 500.0),
    ];
    assert_eq!(active_section(0.0, &sections), Some("hero"));
    // probe at 799 is still hero, 800 flips to demo
    assert_eq!(active_section(679.0, &sections), Some("hero"));
    assert_eq!(active_section(680.0, &sections), Some("demo"));
    assert_eq!(active_section(1280.0, &sections), Some("contact"));
    assert_eq!(active_section(5000.0, &sections), None);
}

#[test]
fn overlapping_sections_prefer_the_later_one() {
    let sections = [section("outer", 0.0, 2000.0), section("inner", 500.0, 200.0)];
    assert_eq!(active_section(400.0, &sections), Some("inner"));
    assert_eq!(active_section(100.0, &sections), Some("outer"));
}

#[test]
fn no_sections_no_active() {
    assert_eq!(active_section(0.0, &[]), None);
}

#[test]
fn href_for_section() {
    assert_eq!(section_href("features"), "#features");
}

#[test]
fn glow_only_on_wide_viewports() {
    assert!(!glow_enabled(767.0));
    assert!(glow_enabled(768.0));
    assert!(glow_enabled(1920.0));
}

#[test]
fn glow_eases_toward_target() {
    let mut glow = GlowFollower {
        position: DVec2::ZERO,
        target: DVec2::new(100.0, 50.0),
    };
    let first = glow.step();
    assert!((first - DVec2::new(8.0, 4.0)).length() < 1e-12);

    let mut prev = first.distance(glow.target);
    for _ in 0..200 {
        let d = glow.step().distance(glow.target);
        assert!(d < prev);
        prev = d;
    }
    assert!(prev < 0.01);
}
