use cgmath::{MetricSpace, Point3};

use crate::{
    data_structures::{
        bounds::{Axis, BoundingBox},
        color::Color,
    },
    error::PaintError,
    settings::GradientBounds,
};

/// Reference frame a gradient fraction is measured in.
///
/// Only the validating constructors build a frame, so [`GradientFrame::fraction`]
/// never divides by zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GradientFrame {
    MeshBounds {
        bounds: BoundingBox,
        axis: Axis,
    },
    PointToPoint {
        start: Point3<f32>,
        end: Point3<f32>,
        length: f32,
    },
}

impl GradientFrame {
    pub fn mesh_bounds(bounds: BoundingBox, axis: Axis) -> Result<Self, PaintError> {
        let extent = bounds.extent(axis);
        if extent == 0.0 || !extent.is_finite() {
            return Err(PaintError::DegenerateBounds);
        }
        Ok(Self::MeshBounds { bounds, axis })
    }

    pub fn point_to_point(start: Point3<f32>, end: Point3<f32>) -> Result<Self, PaintError> {
        let length = start.distance(end);
        if length == 0.0 || !length.is_finite() {
            return Err(PaintError::DegenerateReference);
        }
        Ok(Self::PointToPoint { start, end, length })
    }

    /// Normalized position of `p` in this frame.
    ///
    /// Point-to-point fractions are the distance from `start` over the
    /// segment length, clamped to `[0, 1]`. Mesh-bounds fractions are measured
    /// from the box's max side towards its min side and are left unclamped: a
    /// position outside the box yields a fraction above 1, which extrapolates
    /// past the sub color.
    pub fn fraction(&self, p: Point3<f32>) -> f32 {
        match *self {
            GradientFrame::MeshBounds { bounds, axis } => {
                let max = axis.component(bounds.max);
                ((axis.component(p) - max) / (max - axis.component(bounds.min))).abs()
            }
            GradientFrame::PointToPoint { start, length, .. } => {
                (p.distance(start) / length).clamp(0.0, 1.0)
            }
        }
    }
}

/// One-shot form of [`GradientFrame::fraction`].
///
/// `refs` are the ordered reference points for point-to-point gradients and
/// `bounds` the mesh bounds for mesh-bounds gradients; the one the kind does
/// not use is ignored.
pub fn distance(
    position: Point3<f32>,
    kind: GradientBounds,
    axis: Axis,
    refs: &[Point3<f32>],
    bounds: Option<&BoundingBox>,
) -> Result<f32, PaintError> {
    let frame = match kind {
        GradientBounds::MeshBounds => {
            let bounds = bounds.ok_or(PaintError::DegenerateBounds)?;
            GradientFrame::mesh_bounds(*bounds, axis)?
        }
        GradientBounds::PointToPoint => match refs {
            [start, end, ..] => GradientFrame::point_to_point(*start, *end)?,
            _ => {
                return Err(PaintError::InsufficientVertices {
                    selected: refs.len(),
                });
            }
        },
    };
    Ok(frame.fraction(position))
}

/// Interpolates main towards sub by `fraction`, alpha included. No clamping.
pub fn lerp_color(
    main: [f32; 3],
    sub: [f32; 3],
    alpha_main: f32,
    alpha_sub: f32,
    fraction: f32,
) -> Color {
    Color::from_rgb_alpha(main, alpha_main).lerp(Color::from_rgb_alpha(sub, alpha_sub), fraction)
}
