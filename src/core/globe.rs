use glam::{DVec2, DVec3};
use smallvec::SmallVec;

/// Degrees added to the rotation every frame (west-to-east spin).
pub const ROTATION_STEP_DEG: f64 = 0.15;
/// Sphere radius as a fraction of the canvas width.
pub const RADIUS_FRACTION: f64 = 0.35;
/// Visible cities closer than `LINK_RANGE * radius` on screen are connected.
pub const LINK_RANGE: f64 = 1.2;
pub const LINK_MAX_ALPHA: f64 = 0.15;

// Graticule
pub const GRID_LATITUDES: [f64; 5] = [-60.0, -30.0, 0.0, 30.0, 60.0];
pub const GRID_LONGITUDE_STEP_DEG: usize = 30;
pub const GRID_SAMPLE_STEP_DEG: usize = 3;

// City marker shading
pub const DEPTH_ALPHA_BASE: f64 = 0.4;
pub const DEPTH_ALPHA_SPAN: f64 = 0.6;
pub const PULSE_BASE_PX: f64 = 4.0;
pub const PULSE_AMPLITUDE_PX: f64 = 2.0;
pub const PULSE_RATE_PER_MS: f64 = 0.003;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct City {
    pub lat: f64,
    pub lng: f64,
    pub name: &'static str,
}

const fn city(lat: f64, lng: f64, name: &'static str) -> City {
    City { lat, lng, name }
}

pub const CITIES: [City; 12] = [
    city(40.7, -74.0, "New York"),
    city(51.5, -0.1, "London"),
    city(35.7, 139.7, "Tokyo"),
    city(-33.9, 151.2, "Sydney"),
    city(19.1, 72.9, "Mumbai"),
    city(55.8, 37.6, "Moscow"),
    city(-23.5, -46.6, "São Paulo"),
    city(1.3, 103.8, "Singapore"),
    city(37.6, 127.0, "Seoul"),
    city(31.2, 121.5, "Shanghai"),
    city(48.9, 2.35, "Paris"),
    city(25.2, 55.3, "Dubai"),
];

/// Project a lat/lng (degrees) onto a sphere of `radius` rotated by
/// `rotation_deg` around the vertical axis. `z > 0` faces the viewer.
#[inline]
pub fn project(lat: f64, lng: f64, rotation_deg: f64, radius: f64) -> DVec3 {
    let phi = (90.0 - lat).to_radians();
    let lambda = (lng + rotation_deg).to_radians();
    DVec3::new(
        radius * phi.sin() * lambda.cos(),
        radius * phi.cos(),
        radius * phi.sin() * lambda.sin(),
    )
}

#[inline]
pub fn is_front_facing(p: DVec3) -> bool {
    p.z > 0.0
}

/// Screen position for a projected point; screen y grows downward.
#[inline]
pub fn to_screen(center: DVec2, p: DVec3) -> DVec2 {
    DVec2::new(center.x + p.x, center.y - p.y)
}

#[inline]
pub fn depth_alpha(z: f64, radius: f64) -> f64 {
    DEPTH_ALPHA_BASE + (z / radius) * DEPTH_ALPHA_SPAN
}

/// Marker radius for city `index` at wall-clock `now_ms`.
#[inline]
pub fn pulse_size(now_ms: f64, index: usize) -> f64 {
    PULSE_BASE_PX + (now_ms * PULSE_RATE_PER_MS + index as f64).sin() * PULSE_AMPLITUDE_PX
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedCity {
    pub index: usize,
    pub screen: DVec2,
    pub depth: f64,
}

/// Line between two entries of a visible-city slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub alpha: f64,
}

/// A run of consecutive front-facing samples, in screen space.
pub type Segment = Vec<DVec2>;

/// Rotation accumulator plus the per-frame geometry derived from it.
#[derive(Clone, Debug, Default)]
pub struct Globe {
    pub rotation_deg: f64,
}

impl Globe {
    pub fn advance(&mut self) {
        self.rotation_deg += ROTATION_STEP_DEG;
    }

    /// Cities on the visible hemisphere for this frame.
    pub fn visible_cities(&self, center: DVec2, radius: f64) -> SmallVec<[ProjectedCity; 12]> {
        CITIES
            .iter()
            .enumerate()
            .filter_map(|(index, c)| {
                let p = project(c.lat, c.lng, self.rotation_deg, radius);
                is_front_facing(p).then(|| ProjectedCity {
                    index,
                    screen: to_screen(center, p),
                    depth: p.z,
                })
            })
            .collect()
    }

    pub fn latitude_segments(&self, lat: f64, center: DVec2, radius: f64) -> Vec<Segment> {
        let samples = (0..=360)
            .step_by(GRID_SAMPLE_STEP_DEG)
            .map(|lng| project(lat, lng as f64, self.rotation_deg, radius));
        split_visible(samples, center)
    }

    pub fn longitude_segments(&self, lng: f64, center: DVec2, radius: f64) -> Vec<Segment> {
        let samples = (-90..=90)
            .step_by(GRID_SAMPLE_STEP_DEG)
            .map(|lat| project(lat as f64, lng, self.rotation_deg, radius));
        split_visible(samples, center)
    }

    /// All graticule segments (latitude rings first, then meridians).
    pub fn grid_segments(&self, center: DVec2, radius: f64) -> Vec<Segment> {
        let mut out = Vec::new();
        for lat in GRID_LATITUDES {
            out.extend(self.latitude_segments(lat, center, radius));
        }
        for lng in (0..360).step_by(GRID_LONGITUDE_STEP_DEG) {
            out.extend(self.longitude_segments(lng as f64, center, radius));
        }
        out
    }
}

/// Pairs of visible cities within [`LINK_RANGE`] radii of each other on screen.
pub fn connections(visible: &[ProjectedCity], radius: f64) -> Vec<Connection> {
    let max_dist = radius * LINK_RANGE;
    let mut out = Vec::new();
    for a in 0..visible.len() {
        for b in (a + 1)..visible.len() {
            let dist = visible[a].screen.distance(visible[b].screen);
            if dist < max_dist {
                out.push(Connection {
                    a,
                    b,
                    alpha: (1.0 - dist / max_dist) * LINK_MAX_ALPHA,
                });
            }
        }
    }
    out
}

/// Cut a sampled polyline wherever it dips behind the sphere; single-point
/// runs are dropped.
fn split_visible(samples: impl Iterator<Item = DVec3>, center: DVec2) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current: Segment = Vec::new();
    for p in samples {
        if is_front_facing(p) {
            current.push(to_screen(center, p));
        } else {
            if current.len() > 1 {
                segments.push(std::mem::take(&mut current));
            }
            current.clear();
        }
    }
    if current.len() > 1 {
        segments.push(current);
    }
    segments
}
