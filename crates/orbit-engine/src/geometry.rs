// geometry.rs
//
// Ellipse boundary math — no dependencies on the tree or renderer, just glam.

use glam::Vec2;

const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// Map an angle in degrees to the point on the boundary of the ellipse
/// inscribed in a `width` × `height` box anchored at the origin.
///
/// 0° is the rightmost point; angles grow clockwise in screen coordinates
/// (y-down) and wrap naturally outside [0, 360).
#[inline]
pub fn position_on_ellipse(width: f32, height: f32, angle_degrees: f32) -> Vec2 {
    let rad = angle_degrees * DEG_TO_RAD;
    Vec2::new(
        width / 2.0 + (width / 2.0) * rad.cos(),
        height / 2.0 + (height / 2.0) * rad.sin(),
    )
}
