//! Paint data structures: colors, bounds and meshes.
//!
//! - `color` holds the RGBA vertex color and its component-wise arithmetic
//! - `bounds` holds axis-aligned bounding boxes and the `Axis` selector
//! - `mesh` holds the `PaintableMesh` access trait and the owned `MeshBuffer`

pub mod bounds;
pub mod color;
pub mod mesh;
