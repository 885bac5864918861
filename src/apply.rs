//! The apply pass.
//!
//! [`apply`] is the single entry point a host calls when the user presses
//! "Apply":
//!
//! 1. resolve and validate the selection for the chosen mode (see
//!    [`crate::selection`]), building the gradient frame in gradient mode
//! 2. for every resolved vertex, exactly once, read its color, compute the
//!    incoming color, combine the two and write the result back
//!
//! Validation sits in step 1, and step 2 re-checks the targets against the
//! scene before its first write, so an error leaves the scene untouched.
//! The host selection is only read, never changed.

use crate::{
    context::Scene,
    data_structures::mesh::PaintableMesh,
    engine::Shading,
    error::{PaintError, PaintWarning},
    selection::{self, MeshTarget, SelectionItem, VertexSet},
    settings::{BlendMode, GradientBounds, PaintMode, PaintSettings},
};

/// Outcome of a successful apply.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplyReport {
    /// Number of vertices written.
    pub painted: usize,
    /// Number of meshes touched.
    pub meshes: usize,
    pub warnings: Vec<PaintWarning>,
}

/// A validated paint pass, ready to run against the scene it was built from.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintPlan {
    pub targets: Vec<MeshTarget>,
    pub shading: Shading,
    pub blend: BlendMode,
    pub warnings: Vec<PaintWarning>,
}

impl PaintPlan {
    /// Validates `selection` against `scene` under `settings`.
    pub fn build<S: Scene>(
        scene: &S,
        selection: &[SelectionItem],
        settings: &PaintSettings,
    ) -> Result<Self, PaintError> {
        let (resolved, shading) = match settings.mode {
            PaintMode::Standard => (
                selection::resolve_components(scene, selection)?,
                Shading::Constant(settings.main),
            ),
            PaintMode::Gradient => {
                let (resolved, frame) = match settings.bounds {
                    GradientBounds::MeshBounds => {
                        selection::resolve_mesh_bounds(scene, selection, settings.axis)?
                    }
                    GradientBounds::PointToPoint => {
                        selection::resolve_point_to_point(scene, selection)?
                    }
                };
                let shading = Shading::Gradient {
                    frame,
                    main: settings.main,
                    sub: settings.sub,
                };
                (resolved, shading)
            }
        };

        Ok(Self {
            targets: resolved.targets,
            shading,
            blend: settings.blend,
            warnings: resolved.warnings,
        })
    }

    /// Paints every target vertex.
    ///
    /// The scene may have changed since the plan was built, so every target
    /// is checked against it again before the first write. A mesh that is
    /// gone or has lost vertices aborts the whole pass.
    pub fn execute<S: Scene>(self, scene: &mut S) -> Result<ApplyReport, PaintError> {
        for target in &self.targets {
            check_target(scene, target)?;
        }

        let mut report = ApplyReport {
            warnings: self.warnings,
            ..Default::default()
        };
        for target in &self.targets {
            let mesh = scene
                .mesh_mut(target.mesh)
                .ok_or(PaintError::UnknownMesh { mesh: target.mesh })?;
            let painted = match &target.vertices {
                VertexSet::All => {
                    let count = mesh.vertex_count();
                    paint_vertices(mesh, 0..count, &self.shading, self.blend)
                }
                VertexSet::Indices(indices) => {
                    paint_vertices(mesh, indices.iter().copied(), &self.shading, self.blend)
                }
            };
            log::debug!("painted {painted} vertices on {}", target.mesh);
            report.painted += painted;
            report.meshes += 1;
        }

        Ok(report)
    }
}

fn check_target<S: Scene>(scene: &S, target: &MeshTarget) -> Result<(), PaintError> {
    let mesh = scene
        .mesh(target.mesh)
        .ok_or(PaintError::UnknownMesh { mesh: target.mesh })?;
    if let VertexSet::Indices(indices) = &target.vertices {
        let count = mesh.vertex_count();
        if let Some(vertex) = indices.iter().copied().find(|&v| v >= count) {
            return Err(PaintError::VertexOutOfRange {
                mesh: target.mesh,
                vertex,
            });
        }
    }
    Ok(())
}

/// Resolves `selection`, then paints it. Nothing is written on error.
pub fn apply<S: Scene>(
    scene: &mut S,
    selection: &[SelectionItem],
    settings: &PaintSettings,
) -> Result<ApplyReport, PaintError> {
    log::debug!(
        "apply: mode={:?} blend={:?} bounds={:?} axis={:?}, {} selected",
        settings.mode,
        settings.blend,
        settings.bounds,
        settings.axis,
        selection.len()
    );
    let plan = PaintPlan::build(scene, selection, settings).inspect_err(|e| log::error!("{e}"))?;
    let report = plan.execute(scene).inspect_err(|e| log::error!("{e}"))?;
    for warning in &report.warnings {
        log::warn!("{warning}");
    }
    log::info!(
        "painted {} vertices across {} mesh(es)",
        report.painted,
        report.meshes
    );
    Ok(report)
}

/// Applies `shading` to the given vertices of one mesh and returns how many
/// were written. Indices must be in range.
pub fn paint_vertices<M, I>(mesh: &mut M, vertices: I, shading: &Shading, blend: BlendMode) -> usize
where
    M: PaintableMesh + ?Sized,
    I: IntoIterator<Item = usize>,
{
    let mut painted = 0;
    for vertex in vertices {
        let color = shading.shade(blend, mesh.position(vertex), mesh.color(vertex));
        mesh.set_color(vertex, color);
        painted += 1;
    }
    painted
}
