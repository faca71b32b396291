//! Per-frame render snapshot
//!
//! Captured after the tick, read by the render collaborator, never fed back
//! into the simulation.

use super::vertex::{AsteroidInstance, BulletInstance, EnemyInstance};
use crate::rotation_matrix;
use crate::sim::{BulletPool, GameState};

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub aspect_ratio: f32,
    /// Playing time in seconds (drives shader animation)
    pub elapsed: f32,

    pub player_position: [f32; 2],
    pub player_rotation: [f32; 16],
    /// RGBA; red channel pulses
    pub player_color: [f32; 4],
    pub player_health: f32,

    /// One entry per enemy slot, inactive ones included (flagged)
    pub enemies: Vec<EnemyInstance>,
    pub enemy_rotations: Vec<[f32; 16]>,

    pub wormholes: Vec<[f32; 2]>,
    pub wormhole_rotation: [f32; 16],

    pub asteroids: Vec<AsteroidInstance>,

    /// Active bullets only
    pub player_bullets: Vec<BulletInstance>,
    pub enemy_bullets: Vec<BulletInstance>,

    pub boundary_radius: f32,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let player = &state.player;
        Self {
            aspect_ratio: state.aspect_ratio,
            elapsed: state.elapsed,

            player_position: player.pos.to_array(),
            player_rotation: rotation_matrix(player.angle),
            player_color: [state.tint.red, 0.0, 1.0, 1.0],
            player_health: player.health,

            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyInstance {
                    position: e.pos.to_array(),
                    angle: e.angle,
                    active: if e.active { 1.0 } else { 0.0 },
                })
                .collect(),
            enemy_rotations: state
                .enemies
                .iter()
                .map(|e| rotation_matrix(e.angle))
                .collect(),

            wormholes: state.wormholes.iter().map(|w| w.pos.to_array()).collect(),
            wormhole_rotation: rotation_matrix(state.wormhole_angle),

            asteroids: state
                .asteroids
                .iter()
                .map(|a| AsteroidInstance {
                    position: a.pos.to_array(),
                    angle: a.angle,
                    size: a.size,
                })
                .collect(),

            player_bullets: bullet_instances(&state.player_bullets),
            enemy_bullets: bullet_instances(&state.enemy_bullets),

            boundary_radius: state.boundary.radius,
        }
    }

    pub fn enemy_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.enemies)
    }
}

fn bullet_instances(pool: &BulletPool) -> Vec<BulletInstance> {
    pool.active()
        .map(|(_, b)| BulletInstance {
            position: b.pos.to_array(),
            angle: b.angle,
        })
        .collect()
}
