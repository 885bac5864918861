//! Error and warning taxonomy for a paint pass.
//!
//! Every [`PaintError`] is raised while resolving the selection, building
//! the gradient frame or re-checking the plan against the scene, always
//! before any vertex is written. [`PaintWarning`]s do not
//! abort; the pass continues on a deterministic subset of the selection.

use std::fmt;

use thiserror::Error;

use crate::context::MeshId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaintError {
    #[error("you must select something before performing this operation")]
    EmptySelection,
    #[error("the selection contains {item}, which this operation does not accept (expected {expected})")]
    InvalidObjectType {
        item: String,
        expected: &'static str,
    },
    #[error("you must select two mesh vertices before performing this operation (got {selected})")]
    InsufficientVertices { selected: usize },
    #[error("reference vertices must all belong to a single mesh")]
    VerticesFromMultipleMeshes,
    #[error("{mesh} does not exist in the scene")]
    UnknownMesh { mesh: MeshId },
    #[error("vertex {vertex} is out of range for {mesh}")]
    VertexOutOfRange { mesh: MeshId, vertex: usize },
    #[error("gradient reference points coincide; the gradient has zero length")]
    DegenerateReference,
    #[error("mesh bounds have zero extent along the gradient axis")]
    DegenerateBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintWarning {
    /// Only the first of `selected` meshes is painted.
    MultipleMeshesSelected { selected: usize },
    /// Only the first two of `selected` vertices are used as references.
    ExcessVerticesSelected { selected: usize },
}

impl fmt::Display for PaintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaintWarning::MultipleMeshesSelected { selected } => write!(
                f,
                "{selected} meshes selected; operation will only be performed on the first selected mesh"
            ),
            PaintWarning::ExcessVerticesSelected { selected } => write!(
                f,
                "{selected} vertices selected; operation will be performed using only the first two selected vertices"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("setting `{key}` has the wrong type (expected {expected})")]
    WrongType { key: &'static str, expected: &'static str },
    #[error("setting `{key}` holds unknown code {code}")]
    UnknownCode { key: &'static str, code: i32 },
    #[error("setting `{key}` holds a NaN or infinite value")]
    NonFinite { key: &'static str },
}
