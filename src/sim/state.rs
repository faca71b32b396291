//! Game state and core simulation types
//!
//! All state the simulation owns lives in `GameState`. The caller holds it,
//! passes it to `tick` once per frame and hands a read-only view to the
//! renderer afterwards.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::pool::{BulletPool, PoolKind};
use crate::Tuning;
use crate::consts::{BOUNDARY_SIDES, HEALTH_EPSILON, NUM_ASTEROIDS};
use crate::normalize_angle;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Frozen until the next pause toggle
    Paused,
    /// Every enemy defeated
    Won,
    /// Player destroyed or left the boundary (see `GameState::loss_reason`)
    Lost,
    /// Player quit mid-round
    Abandoned,
}

impl GamePhase {
    /// Terminal phases never change again
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost | GamePhase::Abandoned)
    }

    /// Legacy process exit code for a terminal phase
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            GamePhase::Won | GamePhase::Abandoned => Some(0),
            GamePhase::Lost => Some(-1),
            GamePhase::Playing | GamePhase::Paused => None,
        }
    }
}

/// Why a round was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    HealthDepleted,
    OutOfBounds,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerFired { slot: usize },
    EnemyFired { enemy: usize, slot: usize },
    /// Pool exhausted, bullet not spawned
    SpawnDropped { pool: PoolKind },
    /// Bullet left the screen window
    BulletExpired { pool: PoolKind, slot: usize },
    /// Enemy collided with the player
    PlayerRammed { enemy: usize },
    EnemyHit { enemy: usize, slot: usize },
    EnemyDestroyed { enemy: usize },
    PlayerHit { slot: usize },
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Subtract `amount` from a health value, keeping it in [0, 1]
///
/// Residue below `HEALTH_EPSILON` snaps to exactly zero.
pub fn drain_health(health: &mut f32, amount: f32) {
    let next = (*health - amount).clamp(0.0, 1.0);
    *health = if next < HEALTH_EPSILON { 0.0 } else { next };
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Facing angle (radians, [0, 2π), 0 = +Y)
    pub angle: f32,
    /// Displacement applied during the last tick
    pub vel: Vec2,
    /// Health in [0, 1]
    pub health: f32,
    /// Current rotation rate (rad/s), set from input every tick
    pub rotation_rate: f32,
    /// Fire-rate accumulator (seconds)
    pub fire_timer: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            angle: 0.0,
            vel: Vec2::ZERO,
            health: 1.0,
            rotation_rate: 0.0,
            fire_timer: 0.0,
        }
    }
}

/// An enemy ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// Facing angle (bearing to the player after each tick)
    pub angle: f32,
    /// Health in [0, 1]
    pub health: f32,
    pub active: bool,
    /// Whether the player's screen window contained this enemy last tick
    pub on_screen: bool,
    /// Fire-rate accumulator (seconds)
    pub fire_timer: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self {
            pos,
            angle,
            health: 1.0,
            active: true,
            on_screen: false,
            fire_timer: 0.0,
        }
    }

    /// Counts toward the win condition
    pub fn is_defeated(&self) -> bool {
        !self.active && self.health <= 0.0
    }
}

/// Starting enemy layout: (x, y, angle)
pub const ENEMY_SPAWNS: [(f32, f32, f32); 6] = [
    (-4.0, 0.0, 1.0),
    (0.0, -4.0, 2.0),
    (4.0, 0.0, 3.0),
    (1.0, 3.0, 4.0),
    (0.0, 4.0, 5.0),
    (-1.0, 3.0, 6.0),
];

/// Decorative wormhole (shares the global spin angle)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wormhole {
    pub pos: Vec2,
}

/// Wormhole locations
pub const WORMHOLE_SPAWNS: [(f32, f32); 3] = [(-4.0, 0.2), (4.0, -0.2), (0.0, 4.3)];

/// Decorative asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub angle: f32,
    /// rad/s, either direction
    pub spin_rate: f32,
    /// Outline scale
    pub size: f32,
}

/// Circular containment region
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Boundary {
    pub radius: f32,
    /// Polygon sides used to draw it
    pub sides: u32,
}

impl Boundary {
    pub fn contains(&self, pos: Vec2) -> bool {
        !super::collision::outside_boundary(pos, self.radius)
    }
}

/// Red-channel pulse applied to the player ship
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tint {
    /// Red channel in [0, 1]
    pub red: f32,
    /// +1 fading in, -1 fading out
    pub direction: f32,
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            red: 0.0,
            direction: 1.0,
        }
    }
}

impl Tint {
    /// Advance the fade, bouncing at 0 and 1
    pub fn advance(&mut self, rate: f32, dt: f32) {
        self.red += self.direction * rate * dt;
        if self.red >= 1.0 {
            self.red = 1.0;
            self.direction = -1.0;
        } else if self.red <= 0.0 {
            self.red = 0.0;
            self.direction = 1.0;
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed for the decorative asteroid field
    pub seed: u64,
    /// Game balance in effect for this round
    pub tuning: Tuning,
    /// Screen width over height; sizes the on-screen window
    pub aspect_ratio: f32,
    /// Current phase
    pub phase: GamePhase,
    /// Set when the phase becomes `Lost`
    pub loss_reason: Option<LossReason>,
    /// Playing ticks simulated
    pub time_ticks: u64,
    /// Playing time simulated (seconds)
    pub elapsed: f32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub player_bullets: BulletPool,
    pub enemy_bullets: BulletPool,
    pub boundary: Boundary,
    pub wormholes: Vec<Wormhole>,
    /// Spin angle shared by every wormhole
    pub wormhole_angle: f32,
    pub asteroids: Vec<Asteroid>,
    pub tint: Tint,
    /// Events produced by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new round with the standard enemy layout
    pub fn new(seed: u64, tuning: Tuning, aspect_ratio: f32) -> Self {
        let mut state = Self::empty(seed, tuning, aspect_ratio);
        state.enemies = ENEMY_SPAWNS
            .iter()
            .map(|&(x, y, angle)| Enemy::new(Vec2::new(x, y), angle))
            .collect();
        state.wormholes = WORMHOLE_SPAWNS
            .iter()
            .map(|&(x, y)| Wormhole { pos: Vec2::new(x, y) })
            .collect();
        state.asteroids = seed_asteroids(seed, NUM_ASTEROIDS, state.boundary.radius);

        log::info!(
            "Round started: {} enemies, {} asteroids, seed {}",
            state.enemies.len(),
            state.asteroids.len(),
            seed
        );
        state
    }

    /// A round with no enemies or decorations (callers place their own)
    pub fn empty(seed: u64, tuning: Tuning, aspect_ratio: f32) -> Self {
        let player_bullets = BulletPool::new(PoolKind::Player, tuning.player_bullet_capacity);
        let enemy_bullets = BulletPool::new(PoolKind::Enemy, tuning.enemy_bullet_capacity);
        let boundary = Boundary {
            radius: tuning.boundary_radius,
            sides: BOUNDARY_SIDES,
        };
        Self {
            seed,
            tuning,
            aspect_ratio,
            phase: GamePhase::Playing,
            loss_reason: None,
            time_ticks: 0,
            elapsed: 0.0,
            player: Player::default(),
            enemies: Vec::new(),
            player_bullets,
            enemy_bullets,
            boundary,
            wormholes: Vec::new(),
            wormhole_angle: 0.0,
            asteroids: Vec::new(),
            tint: Tint::default(),
            events: Vec::new(),
        }
    }

    /// Every enemy is both inactive and out of health
    pub fn all_enemies_defeated(&self) -> bool {
        self.enemies.iter().all(Enemy::is_defeated)
    }

    pub fn active_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.active).count()
    }

    pub fn pool(&self, kind: PoolKind) -> &BulletPool {
        match kind {
            PoolKind::Player => &self.player_bullets,
            PoolKind::Enemy => &self.enemy_bullets,
        }
    }

    /// Move to a new phase, recording the transition
    pub fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
        log::info!("Phase {:?} -> {:?} at tick {}", from, to, self.time_ticks);
    }

    /// End the round in failure
    pub fn lose(&mut self, reason: LossReason) {
        self.loss_reason = Some(reason);
        log::info!("Round lost: {:?}", reason);
        self.set_phase(GamePhase::Lost);
    }
}

/// Scatter asteroids across the annulus between the spawn area and the boundary
pub fn seed_asteroids(seed: u64, count: usize, boundary_radius: f32) -> Vec<Asteroid> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let inner = 1.5_f32.min(boundary_radius * 0.5);
    let outer = (boundary_radius - 0.5).max(inner);

    (0..count)
        .map(|_| {
            let theta = rng.random_range(0.0..std::f32::consts::TAU);
            // Uniform over the annulus area, not over the radius
            let t: f32 = rng.random();
            let r = (inner * inner + t * (outer * outer - inner * inner)).sqrt();
            Asteroid {
                pos: Vec2::new(r * theta.sin(), r * theta.cos()),
                angle: normalize_angle(rng.random_range(0.0..std::f32::consts::TAU)),
                spin_rate: rng.random_range(-1.5..1.5),
                size: rng.random_range(0.06..0.14),
            }
        })
        .collect()
}
