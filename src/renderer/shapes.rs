//! Shape generation for the game's outline meshes

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use super::registry::{MeshDescriptor, Primitive};
use super::vertex::{Vertex, kinds};

/// Enemy outline before scaling: middle hull, two connectors, two side pods
const ENEMY_OUTLINE: [(f32, f32); 25] = [
    // Middle section (0 - 6)
    (-0.05, -0.2),
    (-0.1, -0.15),
    (-0.1, 0.3),
    (0.0, 0.5),
    (0.1, 0.3),
    (0.1, -0.15),
    (0.05, -0.2),
    // Left connector (7 - 10)
    (-0.1, -0.1),
    (-0.2, -0.1),
    (-0.1, 0.1),
    (-0.2, 0.1),
    // Right connector (11 - 14)
    (0.1, -0.1),
    (0.2, -0.1),
    (0.1, 0.1),
    (0.2, 0.1),
    // Left section (15 - 19)
    (-0.2, -0.15),
    (-0.2, 0.15),
    (-0.25, 0.2),
    (-0.3, 0.15),
    (-0.3, -0.15),
    // Right section (20 - 24)
    (0.2, -0.15),
    (0.2, 0.15),
    (0.25, 0.2),
    (0.3, 0.15),
    (0.3, -0.15),
];

#[rustfmt::skip]
const ENEMY_SEGMENTS: [u32; 42] = [
    0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 0,
    7, 8, 9, 10, 11, 12, 13, 14,
    15, 16, 16, 17, 17, 18, 18, 19, 19, 15,
    20, 21, 21, 22, 22, 23, 23, 24, 24, 20,
];

/// Scale applied to the enemy outline
pub const ENEMY_SCALE: f32 = 0.2;
/// Scale applied to the 8-sided wormhole ring
pub const WORMHOLE_SCALE: f32 = 0.2;
pub const WORMHOLE_SIDES: u32 = 8;
pub const ASTEROID_SIDES: u32 = 9;

/// Player ship: a closed triangle pointing along +Y
pub fn player_ship() -> MeshDescriptor {
    MeshDescriptor::new(
        "player",
        Primitive::LineLoop,
        vec![
            Vertex::new(-0.04, -0.04, kinds::PLAYER),
            Vertex::new(0.04, -0.04, kinds::PLAYER),
            Vertex::new(0.0, 0.08, kinds::PLAYER),
        ],
        vec![0, 1, 2],
    )
}

/// Enemy ship drawn as independent line segments
pub fn enemy_ship() -> MeshDescriptor {
    let vertices = ENEMY_OUTLINE
        .iter()
        .map(|&(x, y)| Vertex::new(x * ENEMY_SCALE, y * ENEMY_SCALE, kinds::ENEMY))
        .collect();
    MeshDescriptor::new("enemy", Primitive::Lines, vertices, ENEMY_SEGMENTS.to_vec())
}

/// Regular polygon of `sides` points on a circle of `radius`, first point on +X
pub fn circle(name: &str, sides: u32, radius: f32, kind: f32) -> MeshDescriptor {
    let sides = sides.max(3);
    let vertices = (0..sides)
        .map(|i| {
            let angle = i as f32 / sides as f32 * TAU;
            Vertex::new(radius * angle.cos(), radius * angle.sin(), kind)
        })
        .collect();
    MeshDescriptor::new(name, Primitive::LineLoop, vertices, (0..sides).collect())
}

pub fn wormhole() -> MeshDescriptor {
    circle("wormhole", WORMHOLE_SIDES, WORMHOLE_SCALE, kinds::WORMHOLE)
}

pub fn boundary(sides: u32, radius: f32) -> MeshDescriptor {
    circle("boundary", sides, radius, kinds::BOUNDARY)
}

/// Unit-size jagged asteroid outline; per-instance size scales it
pub fn asteroid(seed: u64) -> MeshDescriptor {
    let mut rng = Pcg32::seed_from_u64(seed);
    let vertices = (0..ASTEROID_SIDES)
        .map(|i| {
            let angle = i as f32 / ASTEROID_SIDES as f32 * TAU;
            let r: f32 = rng.random_range(0.7..1.0);
            Vertex::new(r * angle.cos(), r * angle.sin(), kinds::ASTEROID)
        })
        .collect();
    MeshDescriptor::new(
        "asteroid",
        Primitive::LineLoop,
        vertices,
        (0..ASTEROID_SIDES).collect(),
    )
}

/// Short streak along +Y, rotated per instance by the bullet's angle
pub fn bullet(name: &str, length: f32, kind: f32) -> MeshDescriptor {
    MeshDescriptor::new(
        name,
        Primitive::Lines,
        vec![
            Vertex::new(0.0, -length * 0.5, kind),
            Vertex::new(0.0, length * 0.5, kind),
        ],
        vec![0, 1],
    )
}
