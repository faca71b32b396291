//! Render data module
//!
//! Builds the data a graphics backend consumes (meshes, packed buffers,
//! per-frame instance data) without touching a graphics API.

pub mod frame;
pub mod registry;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use frame::FrameSnapshot;
pub use registry::{
    DrawRange, MeshDescriptor, MeshHandle, MeshRegistry, PackedMeshes, Primitive, RegistryError,
};
pub use scene::{DrawCall, SceneMeshes, draw_list};
pub use vertex::{AsteroidInstance, BulletInstance, EnemyInstance, Vertex};
