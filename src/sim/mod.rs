//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Variable frame delta supplied by the caller, no clocks
//! - Seeded RNG only (decorations)
//! - Stable iteration order (by slot/array index)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod pool;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use collision::{circles_overlap, on_screen, outside_boundary};
pub use input::{InputLatch, Key, TickInput};
pub use pool::{Bullet, BulletPool, PoolKind};
pub use state::{
    Asteroid, Boundary, Enemy, GameEvent, GamePhase, GameState, LossReason, Player, Tint,
    Wormhole, ENEMY_SPAWNS, WORMHOLE_SPAWNS,
};
pub use tick::{advance_fire_timer, movement_direction, tick};
