use rand::prelude::*;

/// Upper bound on the number of particles regardless of canvas area.
pub const MAX_PARTICLES: usize = 80;
/// Canvas area (px²) that "pays" for one particle.
pub const AREA_PER_PARTICLE: u64 = 15_000;
/// Pairs closer than this (px) are joined by a line.
pub const LINK_DISTANCE: f64 = 150.0;
/// Opacity of a link between two coincident particles.
pub const LINK_MAX_OPACITY: f64 = 0.08;

// Per-particle randomisation ranges
pub const SIZE_MIN: f64 = 0.5;
pub const SIZE_SPAN: f64 = 1.5;
pub const SPEED_SPAN: f64 = 0.3; // speed in [-SPAN/2, SPAN/2)
pub const OPACITY_MIN: f64 = 0.1;
pub const OPACITY_SPAN: f64 = 0.4;

/// Two-color palette particles are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Violet,
    Cyan,
}

impl Tint {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Tint::Violet => [124, 58, 237],
            Tint::Cyan => [6, 182, 212],
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub size: f64,
    pub opacity: f64,
    pub tint: Tint,
}

impl Particle {
    /// Place a particle uniformly inside `[0, width) x [0, height)` with a
    /// small random drift.
    pub fn random<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Self {
        Self {
            x: rng.gen::<f64>() * width,
            y: rng.gen::<f64>() * height,
            speed_x: (rng.gen::<f64>() - 0.5) * SPEED_SPAN,
            speed_y: (rng.gen::<f64>() - 0.5) * SPEED_SPAN,
            size: rng.gen::<f64>() * SIZE_SPAN + SIZE_MIN,
            opacity: rng.gen::<f64>() * OPACITY_SPAN + OPACITY_MIN,
            tint: if rng.gen_bool(0.5) {
                Tint::Violet
            } else {
                Tint::Cyan
            },
        }
    }

    /// Advance one frame, then flip any velocity component whose axis is at
    /// or past a wall.
    ///
    /// A particle left outside the bounds by a resize keeps flipping every
    /// frame until its own drift happens to carry it back; positions are
    /// never clamped.
    pub fn step(&mut self, width: f64, height: f64) {
        self.x += self.speed_x;
        self.y += self.speed_y;
        if self.x <= 0.0 || self.x >= width {
            self.speed_x = -self.speed_x;
        }
        if self.y <= 0.0 || self.y >= height {
            self.speed_y = -self.speed_y;
        }
    }
}

/// A proximity line between particles `a` and `b` (indices into the field).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f64,
}

/// Number of particles for a canvas of the given backing size.
#[inline]
pub fn particle_count(width: u32, height: u32) -> usize {
    let area = width as u64 * height as u64;
    ((area / AREA_PER_PARTICLE) as usize).min(MAX_PARTICLES)
}

/// Link opacity for two particles `distance` px apart, if they are close enough.
#[inline]
pub fn link_opacity(distance: f64) -> Option<f64> {
    (distance < LINK_DISTANCE).then(|| (1.0 - distance / LINK_DISTANCE) * LINK_MAX_OPACITY)
}

/// Drifting particles bouncing inside a rectangle.
///
/// The particle count is fixed when the field is built; `resize` only moves
/// the walls.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Self {
        let (w, h) = (width as f64, height as f64);
        let particles = (0..particle_count(width, height))
            .map(|_| Particle::random(w, h, rng))
            .collect();
        Self::from_particles(particles, w, h)
    }

    pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
        Self {
            particles,
            width,
            height,
        }
    }

    #[inline]
    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f64;
        self.height = height as f64;
    }

    pub fn step(&mut self) {
        let (w, h) = self.bounds();
        for p in &mut self.particles {
            p.step(w, h);
        }
    }

    /// Every unordered pair closer than [`LINK_DISTANCE`].
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |a| {
            ((a + 1)..ps.len()).filter_map(move |b| {
                let dx = ps[a].x - ps[b].x;
                let dy = ps[a].y - ps[b].y;
                link_opacity((dx * dx + dy * dy).sqrt()).map(|opacity| Link { a, b, opacity })
            })
        })
    }
}
