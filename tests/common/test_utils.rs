use vertex_color_bench::{
    Color, MeshBuffer, MeshId, PaintableMesh, Point3, Scene, context::MemoryScene,
};

pub const EPSILON: f32 = 1e-5;

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() <= EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub fn assert_color_eq(actual: Color, expected: Color) {
    let a: [f32; 4] = actual.into();
    let e: [f32; 4] = expected.into();
    for (channel, (a, e)) in a.iter().zip(e.iter()).enumerate() {
        assert!(
            (a - e).abs() <= EPSILON,
            "channel {channel} differs: expected {expected:?}, got {actual:?}"
        );
    }
}

pub fn p(x: f32, y: f32, z: f32) -> Point3<f32> {
    Point3::new(x, y, z)
}

/// Vertices along the x axis at the given coordinates.
pub fn line_mesh(name: &str, xs: &[f32], color: Color) -> MeshBuffer {
    MeshBuffer::from_positions(name, xs.iter().map(|&x| [x, 0.0, 0.0]), color)
}

/// The eight corners of the box spanning `min`..`max`.
pub fn box_mesh(name: &str, min: [f32; 3], max: [f32; 3], color: Color) -> MeshBuffer {
    let corners = (0..8).map(|i| {
        [
            if i & 1 == 0 { min[0] } else { max[0] },
            if i & 2 == 0 { min[1] } else { max[1] },
            if i & 4 == 0 { min[2] } else { max[2] },
        ]
    });
    MeshBuffer::from_positions(name, corners, color)
}

/// Mesh wrapper recording every `set_color` call.
#[derive(Debug, Default)]
pub struct RecordingMesh {
    pub inner: MeshBuffer,
    pub writes: Vec<usize>,
}

impl PaintableMesh for RecordingMesh {
    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    fn position(&self, vertex: usize) -> Point3<f32> {
        self.inner.position(vertex)
    }

    fn color(&self, vertex: usize) -> Color {
        self.inner.color(vertex)
    }

    fn set_color(&mut self, vertex: usize, color: Color) {
        self.writes.push(vertex);
        self.inner.set_color(vertex, color);
    }
}

/// Host-style scene over recording meshes.
#[derive(Debug, Default)]
pub struct RecordingScene {
    pub meshes: Vec<RecordingMesh>,
}

impl RecordingScene {
    pub fn add(&mut self, mesh: MeshBuffer) -> MeshId {
        self.meshes.push(RecordingMesh {
            inner: mesh,
            writes: Vec::new(),
        });
        MeshId(self.meshes.len() as u32 - 1)
    }

    pub fn total_writes(&self) -> usize {
        self.meshes.iter().map(|m| m.writes.len()).sum()
    }
}

impl Scene for RecordingScene {
    type Mesh = RecordingMesh;

    fn mesh(&self, id: MeshId) -> Option<&RecordingMesh> {
        self.meshes.get(id.0 as usize)
    }

    fn mesh_mut(&mut self, id: MeshId) -> Option<&mut RecordingMesh> {
        self.meshes.get_mut(id.0 as usize)
    }
}

pub fn colors_of(scene: &MemoryScene, id: MeshId) -> Vec<Color> {
    scene
        .mesh(id)
        .map(|m| m.colors().collect())
        .unwrap_or_default()
}
