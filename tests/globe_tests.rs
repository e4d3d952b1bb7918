// Host-side tests for globe projection, culling and connection geometry.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod globe {
    include!("../src/core/globe.rs");
}

use glam::{DVec2, DVec3};
use globe::*;

const EPS: f64 = 1e-9;

fn approx(a: DVec3, b: DVec3) -> bool {
    (a - b).length() < EPS
}

#[test]
fn twelve_distinct_cities() {
    assert_eq!(CITIES.len(), 12);
    for (i, a) in CITIES.iter().enumerate() {
        assert!(a.lat.abs() <= 90.0 && a.lng.abs() <= 180.0, "{}", a.name);
        for b in &CITIES[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn projection_matches_spherical_formula() {
    // Equator, lng 90: straight at the viewer
    let p = project(0.0, 90.0, 0.0, 100.0);
    assert!(approx(p, DVec3::new(0.0, 0.0, 100.0)));
    assert!(is_front_facing(p));

    // North pole sits on the silhouette
    let pole = project(90.0, 0.0, 0.0, 100.0);
    assert!(approx(pole, DVec3::new(0.0, 100.0, 0.0)));
    assert!(!is_front_facing(pole));
}

#[test]
fn projection_stays_on_sphere() {
    for c in CITIES {
        for rot in [0.0, 33.3, 180.0, 1234.5] {
            let p = project(c.lat, c.lng, rot, 50.0);
            assert!((p.length() - 50.0).abs() < 1e-9);
        }
    }
}

#[test]
fn rotation_is_equivalent_to_longitude_shift() {
    let a = project(20.0, 10.0, 45.0, 1.0);
    let b = project(20.0, 55.0, 0.0, 1.0);
    assert!(approx(a, b));
}

#[test]
fn zero_depth_is_not_front_facing() {
    // Equator at lng 0 with no rotation: z = sin(0) = 0
    let p = project(0.0, 0.0, 0.0, 1.0);
    assert_eq!(p.z, 0.0);
    assert!(!is_front_facing(p));
}

#[test]
fn screen_space_flips_y() {
    let s = to_screen(DVec2::new(100.0, 100.0), DVec3::new(10.0, 20.0, 5.0));
    assert_eq!(s, DVec2::new(110.0, 80.0));
}

#[test]
fn only_front_facing_cities_are_visible() {
    let center = DVec2::new(200.0, 200.0);
    let radius = 140.0;
    let mut globe = Globe::default();
    for _ in 0..2400 {
        let visible = globe.visible_cities(center, radius);
        for v in &visible {
            assert!(v.depth > 0.0);
            let c = CITIES[v.index];
            let p = project(c.lat, c.lng, globe.rotation_deg, radius);
            assert!(is_front_facing(p));
        }
        for (i, c) in CITIES.iter().enumerate() {
            if visible.iter().all(|v| v.index != i) {
                assert!(project(c.lat, c.lng, globe.rotation_deg, radius).z <= 0.0);
            }
        }
        // connections only ever reference the visible slice
        for conn in connections(&visible, radius) {
            assert!(conn.a < visible.len() && conn.b < visible.len());
        }
        globe.advance();
    }
}

#[test]
fn rotation_accumulates_without_wrapping() {
    let mut globe = Globe::default();
    for _ in 0..10_000 {
        globe.advance();
    }
    assert!((globe.rotation_deg - 1500.0).abs() < 1e-6);
}

#[test]
fn connections_fade_with_distance() {
    let at = |index: usize, x: f64| ProjectedCity {
        index,
        screen: DVec2::new(x, 0.0),
        depth: 1.0,
    };
    let visible = [at(0, 0.0), at(1, 50.0), at(2, 500.0)];
    let conns = connections(&visible, 100.0);
    assert_eq!(conns.len(), 1);
    assert_eq!((conns[0].a, conns[0].b), (0, 1));
    let expected = (1.0 - 50.0 / 120.0) * LINK_MAX_ALPHA;
    assert!((conns[0].alpha - expected).abs() < EPS);
}

#[test]
fn connection_threshold_is_exclusive() {
    let at = |index: usize, x: f64| ProjectedCity {
        index,
        screen: DVec2::new(x, 0.0),
        depth: 1.0,
    };
    assert!(connections(&[at(0, 0.0), at(1, 120.0)], 100.0).is_empty());
    assert_eq!(connections(&[at(0, 0.0), at(1, 119.0)], 100.0).len(), 1);
}

#[test]
fn equator_is_one_visible_arc_without_rotation() {
    let globe = Globe::default();
    let segs = globe.latitude_segments(0.0, DVec2::ZERO, 1.0);
    assert_eq!(segs.len(), 1);
    assert!(segs[0].len() >= 59);
}

#[test]
fn arc_crossing_the_seam_is_split() {
    // Visible longitudes wrap past 360 and restart at 0: two runs.
    let globe = Globe { rotation_deg: 45.0 };
    let segs = globe.latitude_segments(0.0, DVec2::ZERO, 1.0);
    assert_eq!(segs.len(), 2);
}

#[test]
fn grid_segments_stay_on_the_disc() {
    let center = DVec2::new(300.0, 300.0);
    let radius = 200.0;
    let globe = Globe { rotation_deg: 17.0 };
    let segs = globe.grid_segments(center, radius);
    assert!(!segs.is_empty());
    for seg in &segs {
        assert!(seg.len() >= 2);
        for p in seg {
            assert!(p.distance(center) <= radius + 1e-9);
        }
    }
}

#[test]
fn depth_alpha_spans_far_to_near() {
    assert!((depth_alpha(0.0, 10.0) - 0.4).abs() < EPS);
    assert!((depth_alpha(10.0, 10.0) - 1.0).abs() < EPS);
}

#[test]
fn pulse_stays_in_range() {
    for i in 0..12 {
        for t in [0.0, 500.0, 1e6, 1.7e12] {
            let s = pulse_size(t, i);
            assert!((2.0..=6.0).contains(&s), "pulse {s}");
        }
    }
}
