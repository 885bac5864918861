use crate::data_structures::{
    color::Color,
    mesh::{ColorVertex, MeshBuffer},
};

/**
 * Converts loaded OBJ models into paintable meshes.
 *
 * OBJ vertex colors (`v x y z r g b`) carry no alpha, so loaded colors are opaque.
 * Models without vertex colors start out white, the default vertex color of most editors.
 */
pub fn load_meshes(models: &[tobj::Model]) -> Vec<MeshBuffer> {
    models
        .iter()
        .map(|m| {
            let has_colors = m.mesh.vertex_color.len() == m.mesh.positions.len();
            if !has_colors && !m.mesh.vertex_color.is_empty() {
                log::warn!(
                    "Mesh {} has {} color values for {} position values; ignoring its vertex colors.",
                    m.name,
                    m.mesh.vertex_color.len(),
                    m.mesh.positions.len()
                );
            }

            let vertices = (0..m.mesh.positions.len() / 3)
                .map(|i| {
                    let position = [
                        m.mesh.positions[i * 3],
                        m.mesh.positions[i * 3 + 1],
                        m.mesh.positions[i * 3 + 2],
                    ];
                    let color = if has_colors {
                        Color::new(
                            m.mesh.vertex_color[i * 3],
                            m.mesh.vertex_color[i * 3 + 1],
                            m.mesh.vertex_color[i * 3 + 2],
                            1.0,
                        )
                    } else {
                        Color::white()
                    };
                    ColorVertex::new(position, color)
                })
                .collect::<Vec<_>>();

            MeshBuffer::new(&m.name, vertices)
                .with_faces(m.mesh.indices.clone(), m.mesh.face_arities.clone())
        })
        .collect::<Vec<_>>()
}
