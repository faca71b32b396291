//! Guardian of the Cosmos - a small 2D arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, enemy AI, bullets, collisions, round state)
//! - `renderer`: Render-data registry and per-frame snapshots (no GPU calls)
//! - `clock`: Frame timing and FPS statistics
//! - `settings`: Display/session settings persisted as JSON
//! - `tuning`: Data-driven game balance

pub mod clock;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use clock::FrameClock;
pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default screen dimensions (aspect ratio source)
    pub const SCREEN_WIDTH: u32 = 1920;
    pub const SCREEN_HEIGHT: u32 = 1080;
    pub const WINDOW_NAME: &str = "Guardian of the Cosmos";

    /// Entity caps
    pub const NUM_ENEMIES: usize = 6;
    pub const NUM_WORMHOLES: usize = 3;
    pub const NUM_ASTEROIDS: usize = 12;
    pub const PLAYER_BULLET_CAPACITY: usize = 32;
    pub const ENEMY_BULLET_CAPACITY: usize = 64;

    /// Playable containment circle
    pub const BOUNDARY_SIDES: u32 = 256;
    pub const BOUNDARY_RADIUS: f32 = 5.0;

    /// Player movement (units/s and rad/s)
    pub const PLAYER_SPEED: f32 = 1.2;
    pub const PLAYER_ROTATION_RATE: f32 = 5.0;
    pub const PLAYER_HITBOX_RADIUS: f32 = 0.05;

    /// Enemy movement and hitbox
    pub const ENEMY_SPEED: f32 = 0.5;
    pub const ENEMY_HITBOX_RADIUS: f32 = 0.08;

    /// Firing (shots per second, bullet speed in units/s)
    pub const PLAYER_FIRE_RATE: f32 = 8.0;
    pub const PLAYER_BULLET_SPEED: f32 = 4.0;
    pub const PLAYER_BULLET_RADIUS: f32 = 0.01;
    pub const ENEMY_FIRE_RATE: f32 = 1.0;
    pub const ENEMY_BULLET_SPEED: f32 = 2.0;
    pub const ENEMY_BULLET_RADIUS: f32 = 0.015;

    /// Damage amounts (health is in [0, 1])
    pub const RAM_DAMAGE: f32 = 0.5;
    pub const PLAYER_BULLET_DAMAGE: f32 = 0.1;
    pub const ENEMY_BULLET_DAMAGE: f32 = 0.25;

    /// Decorative animation rates
    pub const WORMHOLE_SPIN_RATE: f32 = 20.0;
    pub const TINT_FADE_RATE: f32 = 1.0;

    /// Health below this is treated as zero (absorbs f32 drift from repeated 0.1 hits)
    pub const HEALTH_EPSILON: f32 = 1e-4;

    /// Largest frame delta the clock hands to the simulation (seconds)
    pub const MAX_FRAME_DELTA: f32 = 0.1;
}

/// Normalize angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Unit vector for a facing angle. Angle 0 points along +Y, π/2 along +X.
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.sin(), angle.cos())
}

/// Facing angle that points from `from` toward `to` under the `heading` convention
///
/// Note the argument order: `atan2(dx, dy)`, so `heading(bearing(a, b))` points at `b`.
#[inline]
pub fn bearing(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    delta.x.atan2(delta.y)
}

/// 4x4 rotation matrix (column array) as uploaded to the vertex shader
pub fn rotation_matrix(angle: f32) -> [f32; 16] {
    let (s, c) = angle.sin_cos();
    [
        c, -s, 0.0, 0.0, //
        s, c, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_normalize_angle_range() {
        assert!((normalize_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((normalize_angle(-0.5) - (TAU - 0.5)).abs() < 1e-5);
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!(normalize_angle(-1e-9) < TAU);
    }

    #[test]
    fn test_heading_convention() {
        let up = heading(0.0);
        assert!(up.x.abs() < 1e-6 && (up.y - 1.0).abs() < 1e-6);

        let right = heading(FRAC_PI_2);
        assert!((right.x - 1.0).abs() < 1e-6 && right.y.abs() < 1e-6);
    }

    #[test]
    fn test_bearing_points_at_target() {
        let from = Vec2::new(1.0, 1.0);
        for to in [Vec2::new(1.0, 3.0), Vec2::new(-2.0, 1.0), Vec2::new(4.0, -5.0)] {
            let dir = heading(bearing(from, to));
            let expected = (to - from).normalize();
            assert!((dir - expected).length() < 1e-5);
        }
        // Target directly below
        assert!((bearing(Vec2::ZERO, Vec2::new(0.0, -1.0)).abs() - PI).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_matrix_identity_at_zero() {
        let m = rotation_matrix(0.0);
        let identity = glam::Mat4::IDENTITY.to_cols_array();
        for (a, b) in m.iter().zip(identity.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }
}
