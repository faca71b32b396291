//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here so a round can be
//! replayed or rebalanced without touching code. Defaults mirror `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player translation speed (units/s)
    pub player_speed: f32,
    /// Player rotation rate while a rotate key is held (rad/s)
    pub player_rotation_rate: f32,
    pub player_hitbox_radius: f32,

    /// Enemy chase speed (units/s)
    pub enemy_speed: f32,
    pub enemy_hitbox_radius: f32,

    /// Player shots per second while shoot is held
    pub player_fire_rate: f32,
    pub player_bullet_speed: f32,
    pub player_bullet_radius: f32,
    pub player_bullet_capacity: usize,

    /// Enemy shots per second while the enemy is on screen
    pub enemy_fire_rate: f32,
    pub enemy_bullet_speed: f32,
    pub enemy_bullet_radius: f32,
    pub enemy_bullet_capacity: usize,

    /// Player health lost when an enemy rams the player
    pub ram_damage: f32,
    /// Enemy health lost per player bullet
    pub player_bullet_damage: f32,
    /// Player health lost per enemy bullet
    pub enemy_bullet_damage: f32,

    /// Radius of the containment circle
    pub boundary_radius: f32,

    // === Cosmetic ===
    pub wormhole_spin_rate: f32,
    pub tint_fade_rate: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            player_rotation_rate: PLAYER_ROTATION_RATE,
            player_hitbox_radius: PLAYER_HITBOX_RADIUS,

            enemy_speed: ENEMY_SPEED,
            enemy_hitbox_radius: ENEMY_HITBOX_RADIUS,

            player_fire_rate: PLAYER_FIRE_RATE,
            player_bullet_speed: PLAYER_BULLET_SPEED,
            player_bullet_radius: PLAYER_BULLET_RADIUS,
            player_bullet_capacity: PLAYER_BULLET_CAPACITY,

            enemy_fire_rate: ENEMY_FIRE_RATE,
            enemy_bullet_speed: ENEMY_BULLET_SPEED,
            enemy_bullet_radius: ENEMY_BULLET_RADIUS,
            enemy_bullet_capacity: ENEMY_BULLET_CAPACITY,

            ram_damage: RAM_DAMAGE,
            player_bullet_damage: PLAYER_BULLET_DAMAGE,
            enemy_bullet_damage: ENEMY_BULLET_DAMAGE,

            boundary_radius: BOUNDARY_RADIUS,

            wormhole_spin_rate: WORMHOLE_SPIN_RATE,
            tint_fade_rate: TINT_FADE_RATE,
        }
    }
}

impl Tuning {
    /// Seconds between shots for the player (1 / fire rate)
    #[inline]
    pub fn player_fire_period(&self) -> f32 {
        1.0 / self.player_fire_rate
    }

    /// Seconds between shots for each enemy
    #[inline]
    pub fn enemy_fire_period(&self) -> f32 {
        1.0 / self.enemy_fire_rate
    }

    /// Check the values the simulation divides by or sizes pools with.
    ///
    /// Returns a description of the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("player_fire_rate", self.player_fire_rate),
            ("enemy_fire_rate", self.enemy_fire_rate),
            ("player_hitbox_radius", self.player_hitbox_radius),
            ("enemy_hitbox_radius", self.enemy_hitbox_radius),
            ("player_bullet_radius", self.player_bullet_radius),
            ("enemy_bullet_radius", self.enemy_bullet_radius),
            ("boundary_radius", self.boundary_radius),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{name} must be positive, got {value}"));
            }
        }

        let non_negative = [
            ("player_speed", self.player_speed),
            ("player_rotation_rate", self.player_rotation_rate),
            ("enemy_speed", self.enemy_speed),
            ("player_bullet_speed", self.player_bullet_speed),
            ("enemy_bullet_speed", self.enemy_bullet_speed),
            ("ram_damage", self.ram_damage),
            ("player_bullet_damage", self.player_bullet_damage),
            ("enemy_bullet_damage", self.enemy_bullet_damage),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{name} must be non-negative, got {value}"));
            }
        }

        if self.player_bullet_capacity == 0 {
            return Err("player_bullet_capacity must be at least 1".to_string());
        }
        if self.enemy_bullet_capacity == 0 {
            return Err("enemy_bullet_capacity must be at least 1".to_string());
        }
        Ok(())
    }
}
