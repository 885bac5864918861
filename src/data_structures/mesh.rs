//! Mesh access for painting.
//!
//! [`PaintableMesh`] is the seam between the paint engine and whatever owns
//! the geometry. A host editor implements it over its own mesh handles; the
//! crate ships [`MeshBuffer`] as an owned, in-memory implementation used by
//! the OBJ loader and the tests.

use cgmath::Point3;

use crate::data_structures::{bounds::BoundingBox, color::Color};

/// Read/write access to the vertices of one mesh.
///
/// Vertices are addressed by index in `0..vertex_count()`. Callers validate
/// indices before writing; implementations may panic on an out-of-range index.
pub trait PaintableMesh {
    fn vertex_count(&self) -> usize;

    fn position(&self, vertex: usize) -> Point3<f32>;

    fn color(&self, vertex: usize) -> Color;

    fn set_color(&mut self, vertex: usize, color: Color);

    /// Axis-aligned bounds of every vertex position. `None` for an empty mesh.
    ///
    /// Hosts that cache bounds should override this.
    fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points((0..self.vertex_count()).map(|i| self.position(i)))
    }
}

/// Vertex layout of a [`MeshBuffer`], ready to be copied into a vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: Color,
}

impl ColorVertex {
    pub fn new(position: [f32; 3], color: Color) -> Self {
        Self { position, color }
    }
}

/// Owned mesh with per-vertex colors.
///
/// `indices` are vertex indices of the faces; `face_arities` holds the vertex
/// count of each face. An empty `face_arities` means every face is a triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffer {
    pub name: String,
    pub vertices: Vec<ColorVertex>,
    pub indices: Vec<u32>,
    pub face_arities: Vec<u32>,
}

impl MeshBuffer {
    pub fn new(name: &str, vertices: Vec<ColorVertex>) -> Self {
        Self {
            name: name.to_string(),
            vertices,
            indices: Vec::new(),
            face_arities: Vec::new(),
        }
    }

    /// Mesh made of bare positions, every vertex colored `color`.
    pub fn from_positions<I>(name: &str, positions: I, color: Color) -> Self
    where
        I: IntoIterator<Item = [f32; 3]>,
    {
        let vertices = positions
            .into_iter()
            .map(|p| ColorVertex::new(p, color))
            .collect();
        Self::new(name, vertices)
    }

    pub fn with_faces(mut self, indices: Vec<u32>, face_arities: Vec<u32>) -> Self {
        self.indices = indices;
        self.face_arities = face_arities;
        self
    }

    /// Faces as slices into `indices`.
    pub fn faces(&self) -> Vec<&[u32]> {
        if self.face_arities.is_empty() {
            return self.indices.chunks(3).collect();
        }
        let mut faces = Vec::with_capacity(self.face_arities.len());
        let mut start = 0usize;
        for &arity in &self.face_arities {
            let end = (start + arity as usize).min(self.indices.len());
            faces.push(&self.indices[start..end]);
            start = end;
        }
        faces
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.vertices.iter().map(|v| v.color)
    }

    /// Raw vertex data (`position` then `color`, tightly packed).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl PaintableMesh for MeshBuffer {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn position(&self, vertex: usize) -> Point3<f32> {
        self.vertices[vertex].position.into()
    }

    fn color(&self, vertex: usize) -> Color {
        self.vertices[vertex].color
    }

    fn set_color(&mut self, vertex: usize, color: Color) {
        self.vertices[vertex].color = color;
    }
}
