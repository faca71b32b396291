//! Render-data registry
//!
//! Meshes are registered once and addressed by stable handles. `pack` lays
//! every mesh out back to back in one vertex buffer and one index buffer,
//! rebasing each mesh's indices by its vertex offset, and reports where each
//! handle's indices landed.

use slotmap::{SecondaryMap, SlotMap};

use super::vertex::Vertex;

slotmap::new_key_type! {
    /// Stable reference to a registered mesh
    pub struct MeshHandle;
}

/// How the index list is assembled into primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Closed outline through every index
    LineLoop,
    /// Independent segments, two indices each
    Lines,
    Triangles,
}

/// A mesh as registered (indices are local to its own vertex list)
#[derive(Debug, Clone, PartialEq)]
pub struct MeshDescriptor {
    pub name: String,
    pub primitive: Primitive,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshDescriptor {
    pub fn new(
        name: impl Into<String>,
        primitive: Primitive,
        vertices: Vec<Vertex>,
        indices: Vec<u32>,
    ) -> Self {
        Self {
            name: name.into(),
            primitive,
            vertices,
            indices,
        }
    }
}

/// Registry errors
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("mesh '{0}' has no vertices or no indices")]
    EmptyMesh(String),

    #[error("mesh '{name}' index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        name: String,
        index: u32,
        vertex_count: usize,
    },

    #[error("mesh '{name}' has {count} indices, not a multiple of {multiple}")]
    IncompletePrimitive {
        name: String,
        count: usize,
        multiple: usize,
    },

    #[error("unknown mesh handle")]
    UnknownHandle,
}

/// Where a mesh lives inside the packed buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRange {
    pub primitive: Primitive,
    /// Offset into the packed index buffer (in indices)
    pub first_index: u32,
    pub index_count: u32,
    /// Offset into the packed vertex buffer (in vertices)
    pub base_vertex: u32,
}

impl DrawRange {
    /// Byte offset of the first index, as passed to an indexed draw call
    pub fn index_byte_offset(&self) -> usize {
        self.first_index as usize * std::mem::size_of::<u32>()
    }
}

/// All registered meshes concatenated for upload
#[derive(Debug, Clone, Default)]
pub struct PackedMeshes {
    pub vertices: Vec<Vertex>,
    /// Indices already rebased onto the packed vertex buffer
    pub indices: Vec<u32>,
    ranges: SecondaryMap<MeshHandle, DrawRange>,
}

impl PackedMeshes {
    pub fn range(&self, handle: MeshHandle) -> Result<DrawRange, RegistryError> {
        self.ranges
            .get(handle)
            .copied()
            .ok_or(RegistryError::UnknownHandle)
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Registry of meshes keyed by stable handles
#[derive(Debug, Default)]
pub struct MeshRegistry {
    meshes: SlotMap<MeshHandle, MeshDescriptor>,
    /// Registration order, which is also packing order
    order: Vec<MeshHandle>,
}

impl MeshRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a mesh
    pub fn register(&mut self, mesh: MeshDescriptor) -> Result<MeshHandle, RegistryError> {
        validate(&mesh)?;
        log::debug!(
            "Registered mesh '{}' ({} vertices, {} indices)",
            mesh.name,
            mesh.vertices.len(),
            mesh.indices.len()
        );
        let handle = self.meshes.insert(mesh);
        self.order.push(handle);
        Ok(handle)
    }

    pub fn get(&self, handle: MeshHandle) -> Option<&MeshDescriptor> {
        self.meshes.get(handle)
    }

    /// Look a mesh up by name (first match in registration order)
    pub fn find(&self, name: &str) -> Option<MeshHandle> {
        self.order
            .iter()
            .copied()
            .find(|&h| self.meshes.get(h).is_some_and(|m| m.name == name))
    }

    pub fn remove(&mut self, handle: MeshHandle) -> Result<MeshDescriptor, RegistryError> {
        let mesh = self
            .meshes
            .remove(handle)
            .ok_or(RegistryError::UnknownHandle)?;
        self.order.retain(|&h| h != handle);
        Ok(mesh)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Concatenate every mesh into shared buffers
    pub fn pack(&self) -> PackedMeshes {
        let vertex_total = self.meshes.values().map(|m| m.vertices.len()).sum();
        let index_total = self.meshes.values().map(|m| m.indices.len()).sum();

        let mut packed = PackedMeshes {
            vertices: Vec::with_capacity(vertex_total),
            indices: Vec::with_capacity(index_total),
            ranges: SecondaryMap::new(),
        };

        for &handle in &self.order {
            let Some(mesh) = self.meshes.get(handle) else {
                continue;
            };
            let base_vertex = packed.vertices.len() as u32;
            let first_index = packed.indices.len() as u32;

            packed.vertices.extend_from_slice(&mesh.vertices);
            packed
                .indices
                .extend(mesh.indices.iter().map(|&i| i + base_vertex));
            packed.ranges.insert(
                handle,
                DrawRange {
                    primitive: mesh.primitive,
                    first_index,
                    index_count: mesh.indices.len() as u32,
                    base_vertex,
                },
            );
        }

        packed
    }
}

fn validate(mesh: &MeshDescriptor) -> Result<(), RegistryError> {
    if mesh.vertices.is_empty() || mesh.indices.is_empty() {
        return Err(RegistryError::EmptyMesh(mesh.name.clone()));
    }

    let multiple = match mesh.primitive {
        Primitive::LineLoop => 1,
        Primitive::Lines => 2,
        Primitive::Triangles => 3,
    };
    if mesh.indices.len() % multiple != 0 {
        return Err(RegistryError::IncompletePrimitive {
            name: mesh.name.clone(),
            count: mesh.indices.len(),
            multiple,
        });
    }

    let vertex_count = mesh.vertices.len();
    if let Some(&index) = mesh.indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(RegistryError::IndexOutOfRange {
            name: mesh.name.clone(),
            index,
            vertex_count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(name: &str) -> MeshDescriptor {
        MeshDescriptor::new(
            name,
            Primitive::Triangles,
            vec![
                Vertex::new(0.0, 0.0, 0.0),
                Vertex::new(1.0, 0.0, 0.0),
                Vertex::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn test_pack_rebases_indices() {
        let mut registry = MeshRegistry::new();
        let a = registry.register(triangle("a")).unwrap();
        let b = registry.register(triangle("b")).unwrap();

        let packed = registry.pack();
        assert_eq!(packed.vertices.len(), 6);
        assert_eq!(packed.indices, vec![0, 1, 2, 3, 4, 5]);

        let range_b = packed.range(b).unwrap();
        assert_eq!(range_b.first_index, 3);
        assert_eq!(range_b.base_vertex, 3);
        assert_eq!(range_b.index_count, 3);
        assert_eq!(range_b.index_byte_offset(), 12);
        assert_eq!(packed.range(a).unwrap().first_index, 0);
    }

    #[test]
    fn test_handles_survive_removal() {
        let mut registry = MeshRegistry::new();
        let a = registry.register(triangle("a")).unwrap();
        let b = registry.register(triangle("b")).unwrap();

        registry.remove(a).unwrap();
        assert!(registry.get(a).is_none());
        assert_eq!(registry.get(b).unwrap().name, "b");
        assert_eq!(registry.remove(a), Err(RegistryError::UnknownHandle));

        let packed = registry.pack();
        assert_eq!(packed.range(b).unwrap().first_index, 0);
        assert_eq!(packed.range(a), Err(RegistryError::UnknownHandle));
    }

    #[test]
    fn test_register_rejects_bad_meshes() {
        let mut registry = MeshRegistry::new();

        let empty = MeshDescriptor::new("empty", Primitive::LineLoop, vec![], vec![]);
        assert_eq!(
            registry.register(empty),
            Err(RegistryError::EmptyMesh("empty".to_string()))
        );

        let mut bad_index = triangle("bad");
        bad_index.indices = vec![0, 1, 7];
        assert!(matches!(
            registry.register(bad_index),
            Err(RegistryError::IndexOutOfRange { index: 7, .. })
        ));

        let mut odd_lines = triangle("odd");
        odd_lines.primitive = Primitive::Lines;
        assert!(matches!(
            registry.register(odd_lines),
            Err(RegistryError::IncompletePrimitive { multiple: 2, .. })
        ));

        assert!(registry.is_empty());
    }

    #[test]
    fn test_find_by_name() {
        let mut registry = MeshRegistry::new();
        registry.register(triangle("a")).unwrap();
        let b = registry.register(triangle("b")).unwrap();
        assert_eq!(registry.find("b"), Some(b));
        assert_eq!(registry.find("missing"), None);
    }

    #[test]
    fn test_byte_views() {
        let mut registry = MeshRegistry::new();
        registry.register(triangle("a")).unwrap();
        let packed = registry.pack();
        assert_eq!(packed.vertex_bytes().len(), 3 * Vertex::STRIDE);
        assert_eq!(packed.index_bytes().len(), 3 * 4);
    }
}
