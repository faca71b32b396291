//! Collision and visibility tests
//!
//! Everything in the game collides as a circle, so the tests are all
//! squared-distance comparisons.

use glam::Vec2;

/// Half-height of the on-screen window (half-width is the aspect ratio)
pub const SCREEN_HALF_HEIGHT: f32 = 1.0;

/// Check whether two circles overlap
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    a.distance_squared(b) < reach * reach
}

/// Check whether `pos` lies inside the screen window centered on `center`
///
/// The window is ±`aspect_ratio` wide and ±1 tall, edges inclusive.
#[inline]
pub fn on_screen(center: Vec2, pos: Vec2, aspect_ratio: f32) -> bool {
    let delta = (pos - center).abs();
    delta.x <= aspect_ratio && delta.y <= SCREEN_HALF_HEIGHT
}

/// Check whether a point has left the containment circle (touching counts)
#[inline]
pub fn outside_boundary(pos: Vec2, boundary_radius: f32) -> bool {
    pos.length_squared() >= boundary_radius * boundary_radius
}
