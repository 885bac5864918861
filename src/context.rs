//! Host context: the scene a paint pass reads from and writes into.
//!
//! A host editor implements [`Scene`] over its own scene graph. [`MemoryScene`]
//! is the owned implementation used for OBJ files and tests.

use std::fmt;

use crate::data_structures::mesh::{MeshBuffer, PaintableMesh};

/// Opaque handle to a mesh in a [`Scene`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MeshId(pub u32);

impl fmt::Display for MeshId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mesh #{}", self.0)
    }
}

pub trait Scene {
    type Mesh: PaintableMesh;

    fn mesh(&self, id: MeshId) -> Option<&Self::Mesh>;

    fn mesh_mut(&mut self, id: MeshId) -> Option<&mut Self::Mesh>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryScene {
    meshes: Vec<MeshBuffer>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mesh and returns its handle. Handles are never reused.
    pub fn add_mesh(&mut self, mesh: MeshBuffer) -> MeshId {
        let id = MeshId(self.meshes.len() as u32);
        self.meshes.push(mesh);
        id
    }

    pub fn mesh_ids(&self) -> impl Iterator<Item = MeshId> + '_ {
        (0..self.meshes.len() as u32).map(MeshId)
    }

    pub fn meshes(&self) -> &[MeshBuffer] {
        &self.meshes
    }

    pub fn find(&self, name: &str) -> Option<MeshId> {
        self.meshes
            .iter()
            .position(|m| m.name == name)
            .map(|i| MeshId(i as u32))
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

impl Scene for MemoryScene {
    type Mesh = MeshBuffer;

    fn mesh(&self, id: MeshId) -> Option<&MeshBuffer> {
        self.meshes.get(id.0 as usize)
    }

    fn mesh_mut(&mut self, id: MeshId) -> Option<&mut MeshBuffer> {
        self.meshes.get_mut(id.0 as usize)
    }
}

impl FromIterator<MeshBuffer> for MemoryScene {
    fn from_iter<T: IntoIterator<Item = MeshBuffer>>(iter: T) -> Self {
        Self {
            meshes: iter.into_iter().collect(),
        }
    }
}
