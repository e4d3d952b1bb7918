// Host-side tests for the particle field simulation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod particles {
    include!("../src/core/particles.rs");
}

use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn particle(x: f64, y: f64, speed_x: f64, speed_y: f64) -> Particle {
    Particle {
        x,
        y,
        speed_x,
        speed_y,
        size: 1.0,
        opacity: 0.3,
        tint: Tint::Cyan,
    }
}

#[test]
fn particle_count_scales_with_area_and_caps_at_80() {
    assert_eq!(particle_count(0, 0), 0);
    assert_eq!(particle_count(100, 100), 0); // 10k px² < 15k
    assert_eq!(particle_count(300, 100), 2);
    assert_eq!(particle_count(640, 480), 20);
    assert_eq!(particle_count(1920, 1080), MAX_PARTICLES);

    for (w, h) in [(1, 1), (800, 600), (1280, 720), (3840, 2160), (u32::MAX, u32::MAX)] {
        assert!(particle_count(w, h) <= MAX_PARTICLES, "{w}x{h}");
    }
}

#[test]
fn new_field_seeds_particles_inside_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::new(1280, 720, &mut rng);
    assert_eq!(field.bounds(), (1280.0, 720.0));
    assert_eq!(field.particles.len(), 61);
    for p in &field.particles {
        assert!(p.x >= 0.0 && p.x < 1280.0);
        assert!(p.y >= 0.0 && p.y < 720.0);
        assert!(p.size >= SIZE_MIN && p.size < SIZE_MIN + SIZE_SPAN);
        assert!(p.opacity >= OPACITY_MIN && p.opacity < OPACITY_MIN + OPACITY_SPAN);
        assert!(p.speed_x.abs() <= SPEED_SPAN / 2.0);
        assert!(p.speed_y.abs() <= SPEED_SPAN / 2.0);
    }
}

#[test]
fn field_uses_both_tints() {
    let mut rng = StdRng::seed_from_u64(42);
    let field = ParticleField::new(1920, 1080, &mut rng);
    assert!(field.particles.iter().any(|p| p.tint == Tint::Violet));
    assert!(field.particles.iter().any(|p| p.tint == Tint::Cyan));
}

#[test]
fn particle_reaching_right_wall_reverses() {
    let mut p = particle(99.9, 50.0, 0.3, 0.0);
    p.step(100.0, 100.0);
    assert!(p.x >= 100.0);
    assert_eq!(p.speed_x, -0.3);
    assert_eq!(p.speed_y, 0.0);
}

#[test]
fn particle_landing_exactly_on_wall_reverses() {
    let mut p = particle(99.5, 50.0, 0.5, 0.0);
    p.step(100.0, 100.0);
    assert_eq!(p.x, 100.0);
    assert_eq!(p.speed_x, -0.5);
}

#[test]
fn particle_crossing_top_reverses_vertical_only() {
    let mut p = particle(50.0, 0.1, 0.2, -0.3);
    p.step(100.0, 100.0);
    assert_eq!(p.speed_y, 0.3);
    assert_eq!(p.speed_x, 0.2);
}

#[test]
fn particle_in_open_space_keeps_velocity() {
    let mut p = particle(50.0, 50.0, 0.1, -0.1);
    p.step(100.0, 100.0);
    assert!((p.x - 50.1).abs() < 1e-12);
    assert!((p.y - 49.9).abs() < 1e-12);
    assert_eq!((p.speed_x, p.speed_y), (0.1, -0.1));
}

#[test]
fn resize_moves_walls_without_clamping_or_reseeding() {
    let mut field = ParticleField::from_particles(
        vec![particle(900.0, 500.0, 0.1, 0.1), particle(10.0, 10.0, 0.1, 0.1)],
        1000.0,
        600.0,
    );
    field.resize(400, 300);
    assert_eq!(field.bounds(), (400.0, 300.0));
    assert_eq!(field.particles.len(), 2);
    assert_eq!(field.particles[0].x, 900.0);

    for _ in 0..10 {
        field.step();
    }
    // Stranded outside the new bounds, flipping in place.
    assert!(field.particles[0].x > 400.0);
    assert!(field.particles[0].y > 300.0);
    assert!(field.particles[1].x < 400.0);
}

#[test]
fn link_opacity_falls_off_linearly() {
    assert_eq!(link_opacity(0.0), Some(LINK_MAX_OPACITY));
    let mid = link_opacity(75.0).unwrap();
    assert!((mid - 0.04).abs() < 1e-12);
    assert!(link_opacity(149.9).unwrap() > 0.0);
    assert_eq!(link_opacity(150.0), None);
    assert_eq!(link_opacity(400.0), None);
}

#[test]
fn links_cover_only_close_unordered_pairs() {
    let field = ParticleField::from_particles(
        vec![
            particle(0.0, 0.0, 0.0, 0.0),
            particle(100.0, 0.0, 0.0, 0.0),
            particle(300.0, 0.0, 0.0, 0.0),
        ],
        500.0,
        500.0,
    );
    let links: Vec<Link> = field.links().collect();
    assert_eq!(links.len(), 1);
    assert_eq!((links[0].a, links[0].b), (0, 1));
    let expected = (1.0 - 100.0 / 150.0) * 0.08;
    assert!((links[0].opacity - expected).abs() < 1e-12);
}

#[test]
fn dense_cluster_links_every_pair_once() {
    let ps = (0..5).map(|i| particle(i as f64, 0.0, 0.0, 0.0)).collect();
    let field = ParticleField::from_particles(ps, 100.0, 100.0);
    assert_eq!(field.links().count(), 10); // 5 choose 2
    assert!(field.links().all(|l| l.a < l.b));
}
