//! Selection resolution.
//!
//! Turns the host's selection into the set of vertices a paint pass touches,
//! validating item types and cardinality on the way. Resolution only reads
//! the scene; every failure here happens before any vertex is written.
//! Warnings are returned, not logged, so an aborted pass never reports one.

use std::collections::BTreeSet;

use crate::{
    context::{MeshId, Scene},
    data_structures::{bounds::Axis, mesh::PaintableMesh},
    engine::gradient::GradientFrame,
    error::{PaintError, PaintWarning},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ComponentKind {
    Edge,
    Face,
    Uv,
}

/// One entry of the host selection, in selection order.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionItem {
    /// A whole mesh object.
    Mesh(MeshId),
    /// A single mesh vertex.
    Vertex { mesh: MeshId, vertex: usize },
    /// Edges, faces or UVs, already converted by the host to the vertices
    /// they touch.
    Components {
        mesh: MeshId,
        kind: ComponentKind,
        vertices: Vec<usize>,
    },
    /// Anything that is not mesh geometry (cameras, lights, curves, ...).
    Other(String),
}

impl SelectionItem {
    pub fn mesh_id(&self) -> Option<MeshId> {
        match self {
            SelectionItem::Mesh(mesh)
            | SelectionItem::Vertex { mesh, .. }
            | SelectionItem::Components { mesh, .. } => Some(*mesh),
            SelectionItem::Other(_) => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            SelectionItem::Mesh(mesh) => format!("{mesh}"),
            SelectionItem::Vertex { mesh, vertex } => format!("vertex {vertex} of {mesh}"),
            SelectionItem::Components { mesh, kind, .. } => {
                format!("{kind:?} components of {mesh}").to_lowercase()
            }
            SelectionItem::Other(name) => format!("`{name}`"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VertexSet {
    All,
    /// Sorted, without duplicates.
    Indices(Vec<usize>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeshTarget {
    pub mesh: MeshId,
    pub vertices: VertexSet,
}

impl MeshTarget {
    pub fn whole(mesh: MeshId) -> Self {
        Self {
            mesh,
            vertices: VertexSet::All,
        }
    }
}

/// Vertices to paint, grouped by mesh in order of first selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resolved {
    pub targets: Vec<MeshTarget>,
    pub warnings: Vec<PaintWarning>,
}

/// Resolves a selection for flat painting.
///
/// Mesh objects contribute all of their vertices; vertices and converted
/// components contribute just those vertices. Every selected mesh is painted
/// and each vertex appears once, however many times it was selected.
pub fn resolve_components<S: Scene>(
    scene: &S,
    selection: &[SelectionItem],
) -> Result<Resolved, PaintError> {
    ensure_not_empty(selection)?;

    // `None` marks a mesh selected as a whole object.
    let mut groups: Vec<(MeshId, Option<BTreeSet<usize>>)> = Vec::new();
    for item in selection {
        let (mesh, picked): (MeshId, Option<&[usize]>) = match item {
            SelectionItem::Mesh(mesh) => (*mesh, None),
            SelectionItem::Vertex { mesh, vertex } => (*mesh, Some(std::slice::from_ref(vertex))),
            SelectionItem::Components { mesh, vertices, .. } => (*mesh, Some(vertices.as_slice())),
            SelectionItem::Other(_) => {
                return Err(invalid(item, "mesh objects or mesh components"));
            }
        };
        let count = lookup(scene, mesh)?.vertex_count();
        if let Some(vertex) = picked.and_then(|p| p.iter().find(|&&v| v >= count)) {
            return Err(PaintError::VertexOutOfRange {
                mesh,
                vertex: *vertex,
            });
        }

        let index = match groups.iter().position(|(id, _)| *id == mesh) {
            Some(i) => i,
            None => {
                groups.push((mesh, Some(BTreeSet::new())));
                groups.len() - 1
            }
        };
        let group = &mut groups[index].1;
        match picked {
            None => *group = None,
            Some(picked) => {
                if let Some(set) = group.as_mut() {
                    set.extend(picked.iter().copied());
                }
            }
        }
    }

    let targets = groups
        .into_iter()
        .filter_map(|(mesh, group)| {
            let vertices = match group {
                None => VertexSet::All,
                Some(set) if set.is_empty() => return None,
                Some(set) => VertexSet::Indices(set.into_iter().collect()),
            };
            Some(MeshTarget { mesh, vertices })
        })
        .collect();

    Ok(Resolved {
        targets,
        warnings: Vec::new(),
    })
}

/// Resolves a selection for a gradient across a mesh's bounding box.
///
/// Only mesh objects are accepted. With several meshes selected the first one
/// is used and a warning is raised.
pub fn resolve_mesh_bounds<S: Scene>(
    scene: &S,
    selection: &[SelectionItem],
    axis: Axis,
) -> Result<(Resolved, GradientFrame), PaintError> {
    ensure_not_empty(selection)?;

    let mut meshes: Vec<MeshId> = Vec::new();
    for item in selection {
        match item {
            SelectionItem::Mesh(mesh) => {
                if !meshes.contains(mesh) {
                    meshes.push(*mesh);
                }
            }
            _ => return Err(invalid(item, "mesh objects")),
        }
    }

    let mut warnings = Vec::new();
    if meshes.len() > 1 {
        warnings.push(PaintWarning::MultipleMeshesSelected {
            selected: meshes.len(),
        });
    }

    let mesh = meshes[0];
    let bounds = lookup(scene, mesh)?
        .bounding_box()
        .ok_or(PaintError::DegenerateBounds)?;
    let frame = GradientFrame::mesh_bounds(bounds, axis)?;

    Ok((
        Resolved {
            targets: vec![MeshTarget::whole(mesh)],
            warnings,
        },
        frame,
    ))
}

/// Resolves a selection for a gradient between two picked vertices.
///
/// Only vertices are accepted, all from one mesh. The first selected vertex
/// is the gradient start and the second its end; any further vertices are
/// ignored with a warning, raised only once every vertex is known to share
/// the mesh. The whole owning mesh is painted.
pub fn resolve_point_to_point<S: Scene>(
    scene: &S,
    selection: &[SelectionItem],
) -> Result<(Resolved, GradientFrame), PaintError> {
    ensure_not_empty(selection)?;

    let mut picked: Vec<(MeshId, usize)> = Vec::with_capacity(selection.len());
    for item in selection {
        match item {
            SelectionItem::Vertex { mesh, vertex } => picked.push((*mesh, *vertex)),
            _ => return Err(invalid(item, "mesh vertices")),
        }
    }

    if picked.len() < 2 {
        return Err(PaintError::InsufficientVertices {
            selected: picked.len(),
        });
    }

    let mesh = picked[0].0;
    if picked.iter().any(|(id, _)| *id != mesh) {
        return Err(PaintError::VerticesFromMultipleMeshes);
    }

    let mut warnings = Vec::new();
    if picked.len() > 2 {
        warnings.push(PaintWarning::ExcessVerticesSelected {
            selected: picked.len(),
        });
    }

    let target = lookup(scene, mesh)?;
    let position = |vertex: usize| {
        if vertex < target.vertex_count() {
            Ok(target.position(vertex))
        } else {
            Err(PaintError::VertexOutOfRange { mesh, vertex })
        }
    };
    let frame = GradientFrame::point_to_point(position(picked[0].1)?, position(picked[1].1)?)?;

    Ok((
        Resolved {
            targets: vec![MeshTarget::whole(mesh)],
            warnings,
        },
        frame,
    ))
}

fn ensure_not_empty(selection: &[SelectionItem]) -> Result<(), PaintError> {
    if selection.is_empty() {
        return Err(PaintError::EmptySelection);
    }
    Ok(())
}

fn lookup<S: Scene>(scene: &S, mesh: MeshId) -> Result<&S::Mesh, PaintError> {
    scene.mesh(mesh).ok_or(PaintError::UnknownMesh { mesh })
}

fn invalid(item: &SelectionItem, expected: &'static str) -> PaintError {
    PaintError::InvalidObjectType {
        item: item.describe(),
        expected,
    }
}
