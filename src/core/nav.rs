use glam::DVec2;

/// Navbar gets its compact "scrolled" look past this offset (px).
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// Probe line below the top of the viewport used to pick the active section.
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 120.0;

/// Fraction of the remaining distance the cursor glow covers each frame.
pub const GLOW_FOLLOW: f64 = 0.08;
/// Narrower viewports (touch devices, mostly) get no cursor glow.
pub const GLOW_MIN_VIEWPORT_PX: f64 = 768.0;

#[inline]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// Vertical extent of a `section[id]` in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Id of the section under the probe line. With overlapping sections the
/// last one in document order wins; `None` leaves the nav untouched.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_y + ACTIVE_SECTION_OFFSET_PX;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(probe))
        .map(|s| s.id.as_str())
}

#[inline]
pub fn section_href(id: &str) -> String {
    format!("#{id}")
}

#[inline]
pub fn glow_enabled(viewport_width: f64) -> bool {
    viewport_width >= GLOW_MIN_VIEWPORT_PX
}

/// Cursor glow position easing toward the last pointer position.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlowFollower {
    pub position: DVec2,
    pub target: DVec2,
}

impl GlowFollower {
    pub fn step(&mut self) -> DVec2 {
        self.position += (self.target - self.position) * GLOW_FOLLOW;
        self.position
    }
}
