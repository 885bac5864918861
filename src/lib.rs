//! vertex-color-bench
//!
//! Per-vertex color painting for meshes living in a host 3D editor. A paint
//! pass either fills the selection with one color or lays a two-color
//! gradient across it, measured along an axis of the mesh's bounding box or
//! between two picked vertices, and composites the result onto the existing
//! vertex colors by replacing, adding or multiplying.
//!
//! The host stays in charge of its UI and scene graph. It hands the crate an
//! immutable settings snapshot, its current selection and access to its
//! meshes through the `Scene`/`PaintableMesh` traits, and gets the colors
//! written back through the same traits.
//!
//! High-level modules
//! - `apply`: the apply pass, validation first, then one write per vertex
//! - `context`: the `Scene` trait and the in-memory `MemoryScene`
//! - `data_structures`: colors, bounding boxes and paintable meshes
//! - `engine`: gradient fractions, color interpolation and blend modes
//! - `error`: aborting errors and non-aborting warnings of a paint pass
//! - `logging`: optional `env_logger` setup
//! - `resources`: OBJ loading and saving with vertex colors
//! - `selection`: selection validation and resolution per paint mode
//! - `settings`: the settings snapshot and its key-value storage
//!

pub mod apply;
pub mod context;
pub mod data_structures;
pub mod engine;
pub mod error;
pub mod logging;
pub mod resources;
pub mod selection;
pub mod settings;

// Re-exports commonly used types for convenience in downstream code.
pub use apply::{ApplyReport, PaintPlan, apply};
pub use cgmath::Point3;
pub use context::{MemoryScene, MeshId, Scene};
pub use data_structures::{
    bounds::{Axis, BoundingBox},
    color::Color,
    mesh::{ColorVertex, MeshBuffer, PaintableMesh},
};
pub use error::{PaintError, PaintWarning, SettingsError};
pub use selection::{ComponentKind, SelectionItem};
pub use settings::{BlendMode, GradientBounds, PaintMode, PaintSettings};
