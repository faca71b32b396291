//! The game's mesh set and per-frame draw list

use super::frame::FrameSnapshot;
use super::registry::{DrawRange, MeshHandle, MeshRegistry, PackedMeshes, RegistryError};
use super::shapes;
use super::vertex::kinds;
use crate::sim::GameState;

/// Handles of every mesh the game draws
#[derive(Debug, Clone, Copy)]
pub struct SceneMeshes {
    pub player: MeshHandle,
    pub enemy: MeshHandle,
    pub wormhole: MeshHandle,
    pub boundary: MeshHandle,
    pub asteroid: MeshHandle,
    pub player_bullet: MeshHandle,
    pub enemy_bullet: MeshHandle,
}

impl SceneMeshes {
    /// Register the standard meshes for a round
    pub fn register(registry: &mut MeshRegistry, state: &GameState) -> Result<Self, RegistryError> {
        let meshes = Self {
            player: registry.register(shapes::player_ship())?,
            enemy: registry.register(shapes::enemy_ship())?,
            wormhole: registry.register(shapes::wormhole())?,
            boundary: registry.register(shapes::boundary(
                state.boundary.sides,
                state.boundary.radius,
            ))?,
            asteroid: registry.register(shapes::asteroid(state.seed))?,
            player_bullet: registry.register(shapes::bullet(
                "player_bullet",
                0.03,
                kinds::PLAYER_BULLET,
            ))?,
            enemy_bullet: registry.register(shapes::bullet(
                "enemy_bullet",
                0.04,
                kinds::ENEMY_BULLET,
            ))?,
        };
        log::info!("Registered {} meshes", registry.len());
        Ok(meshes)
    }
}

/// One (possibly instanced) draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub range: DrawRange,
    pub instance_count: u32,
}

/// Draws for a frame, in painter's order; empty instance sets are skipped
pub fn draw_list(
    meshes: &SceneMeshes,
    packed: &PackedMeshes,
    frame: &FrameSnapshot,
) -> Result<Vec<DrawCall>, RegistryError> {
    let draws = [
        (meshes.boundary, 1),
        (meshes.asteroid, frame.asteroids.len()),
        (meshes.wormhole, frame.wormholes.len()),
        (meshes.enemy, frame.enemies.len()),
        (meshes.enemy_bullet, frame.enemy_bullets.len()),
        (meshes.player_bullet, frame.player_bullets.len()),
        (meshes.player, 1),
    ];

    let mut calls = Vec::with_capacity(draws.len());
    for (handle, count) in draws {
        if count == 0 {
            continue;
        }
        calls.push(DrawCall {
            range: packed.range(handle)?,
            instance_count: count as u32,
        });
    }
    Ok(calls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::renderer::registry::Primitive;
    use glam::Vec2;

    #[test]
    fn test_draw_list_for_new_round() {
        let mut state = GameState::new(2, Tuning::default(), 16.0 / 9.0);
        let mut registry = MeshRegistry::new();
        let meshes = SceneMeshes::register(&mut registry, &state).unwrap();
        let packed = registry.pack();

        let frame = FrameSnapshot::capture(&state);
        let calls = draw_list(&meshes, &packed, &frame).unwrap();
        // No bullets yet
        assert_eq!(calls.len(), 5);
        assert_eq!(calls[0].range.index_count, state.boundary.sides);
        assert_eq!(calls[3].instance_count, 6);
        assert_eq!(calls[3].range.primitive, Primitive::Lines);
        assert_eq!(calls.last().unwrap().range, packed.range(meshes.player).unwrap());

        state.enemy_bullets.spawn(Vec2::ZERO, 0.0, Vec2::ZERO);
        let frame = FrameSnapshot::capture(&state);
        let calls = draw_list(&meshes, &packed, &frame).unwrap();
        assert_eq!(calls.len(), 6);
    }

    #[test]
    fn test_unknown_handle_is_error() {
        let state = GameState::new(2, Tuning::default(), 1.0);
        let mut registry = MeshRegistry::new();
        let meshes = SceneMeshes::register(&mut registry, &state).unwrap();
        registry.remove(meshes.wormhole).unwrap();
        let packed = registry.pack();

        let frame = FrameSnapshot::capture(&state);
        assert_eq!(
            draw_list(&meshes, &packed, &frame),
            Err(RegistryError::UnknownHandle)
        );
    }
}
