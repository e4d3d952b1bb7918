use glam::DVec2;
use web_sys as web;

/// Horizontal position of `client_x` within a box starting at `left` that is
/// `width` wide, as a fraction. Not clamped: the caller decides what a click
/// on the border means.
#[inline]
pub fn horizontal_fraction(client_x: f64, left: f64, width: f64) -> Option<f64> {
    (width > 0.0).then(|| (client_x - left) / width)
}

/// Click position along `el` (0 = left edge, 1 = right edge).
#[inline]
pub fn pointer_fraction(ev: &web::MouseEvent, el: &web::Element) -> Option<f64> {
    let rect = el.get_bounding_client_rect();
    horizontal_fraction(ev.client_x() as f64, rect.left(), rect.width())
}

#[inline]
pub fn client_position(ev: &web::MouseEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}
