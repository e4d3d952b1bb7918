// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn fraction_across_box() {
    assert_eq!(horizontal_fraction(100.0, 100.0, 400.0), Some(0.0));
    assert_eq!(horizontal_fraction(200.0, 100.0, 400.0), Some(0.25));
    assert_eq!(horizontal_fraction(500.0, 100.0, 400.0), Some(1.0));
}

#[test]
fn fraction_is_not_clamped() {
    assert_eq!(horizontal_fraction(50.0, 100.0, 400.0), Some(-0.125));
    assert_eq!(horizontal_fraction(600.0, 100.0, 400.0), Some(1.25));
}

#[test]
fn collapsed_box_has_no_fraction() {
    assert_eq!(horizontal_fraction(10.0, 0.0, 0.0), None);
    assert_eq!(horizontal_fraction(10.0, 0.0, -5.0), None);
}
