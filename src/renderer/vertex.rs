//! Vertex and instance types handed to the render collaborator

use bytemuck::{Pod, Zeroable};

/// 2D vertex with a shape tag the vertex shader switches on
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub kind: f32,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, kind: f32) -> Self {
        Self {
            position: [x, y],
            kind,
        }
    }

    /// Bytes per vertex in a packed buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Per-enemy instance data: xy, facing angle, 1.0 when active
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct EnemyInstance {
    pub position: [f32; 2],
    pub angle: f32,
    pub active: f32,
}

/// Per-bullet instance data
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BulletInstance {
    pub position: [f32; 2],
    pub angle: f32,
}

/// Per-asteroid instance data
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct AsteroidInstance {
    pub position: [f32; 2],
    pub angle: f32,
    pub size: f32,
}

/// Shape tags written into `Vertex::kind`
pub mod kinds {
    pub const PLAYER: f32 = 0.0;
    pub const ENEMY: f32 = 0.1;
    pub const WORMHOLE: f32 = 0.2;
    pub const BOUNDARY: f32 = 0.3;
    pub const ASTEROID: f32 = 0.4;
    pub const PLAYER_BULLET: f32 = 0.5;
    pub const ENEMY_BULLET: f32 = 0.6;
}
