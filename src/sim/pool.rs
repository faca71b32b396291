//! Fixed-capacity bullet pools
//!
//! Slots are recycled, never freed. A spawn takes the first inactive slot;
//! when every slot is live the spawn is dropped and counted.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which pool a bullet lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolKind {
    Player,
    Enemy,
}

/// One pool slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    /// Facing at spawn (for rendering)
    pub angle: f32,
    /// Displacement applied every tick (already scaled by the spawn delta)
    pub vel: Vec2,
    pub active: bool,
}

impl Bullet {
    pub const INACTIVE: Bullet = Bullet {
        pos: Vec2::ZERO,
        angle: 0.0,
        vel: Vec2::ZERO,
        active: false,
    };
}

/// A pool of reusable bullet slots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletPool {
    pub kind: PoolKind,
    slots: Vec<Bullet>,
    /// Spawns lost because every slot was live
    pub dropped_spawns: u64,
}

impl BulletPool {
    pub fn new(kind: PoolKind, capacity: usize) -> Self {
        Self {
            kind,
            slots: vec![Bullet::INACTIVE; capacity],
            dropped_spawns: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Bullet] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Bullet] {
        &mut self.slots
    }

    pub fn get(&self, slot: usize) -> Option<&Bullet> {
        self.slots.get(slot)
    }

    /// Live bullets with their slot index
    pub fn active(&self) -> impl Iterator<Item = (usize, &Bullet)> {
        self.slots.iter().enumerate().filter(|(_, b)| b.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|b| b.active).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|b| b.active)
    }

    /// Place a bullet in the first free slot.
    ///
    /// Returns the slot index, or `None` when the pool is exhausted (the
    /// pool is left untouched apart from the drop counter).
    pub fn spawn(&mut self, pos: Vec2, angle: f32, vel: Vec2) -> Option<usize> {
        match self.slots.iter().position(|b| !b.active) {
            Some(slot) => {
                self.slots[slot] = Bullet {
                    pos,
                    angle,
                    vel,
                    active: true,
                };
                Some(slot)
            }
            None => {
                self.dropped_spawns += 1;
                log::debug!("{:?} bullet pool exhausted, spawn dropped", self.kind);
                None
            }
        }
    }

    /// Free a slot for reuse
    pub fn deactivate(&mut self, slot: usize) {
        if let Some(bullet) = self.slots.get_mut(slot) {
            bullet.active = false;
        }
    }

    /// Free every slot
    pub fn clear(&mut self) {
        for bullet in &mut self.slots {
            bullet.active = false;
        }
    }
}
