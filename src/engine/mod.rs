//! Gradient evaluation and color blending.
//!
//! Everything in here is a pure function of its inputs:
//!
//! - `gradient` turns a vertex position into a fraction inside a reference
//!   frame and interpolates two colors by it
//! - `blend` composites an incoming color onto a vertex's existing color
//!
//! [`Shading`] ties the two together into the per-vertex color source an
//! apply pass evaluates.

pub mod blend;
pub mod gradient;

use cgmath::Point3;

use crate::{
    data_structures::color::Color,
    engine::gradient::GradientFrame,
    settings::BlendMode,
};

pub use blend::combine;
pub use gradient::{distance, lerp_color};

/// Source of the incoming color for each vertex.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shading {
    Constant(Color),
    Gradient {
        frame: GradientFrame,
        main: Color,
        sub: Color,
    },
}

impl Shading {
    pub fn incoming(&self, position: Point3<f32>) -> Color {
        match self {
            Shading::Constant(color) => *color,
            Shading::Gradient { frame, main, sub } => main.lerp(*sub, frame.fraction(position)),
        }
    }

    /// The color a vertex at `position` ends up with, given its current color.
    #[inline]
    pub fn shade(&self, blend: BlendMode, position: Point3<f32>, existing: Color) -> Color {
        blend.combine(existing, self.incoming(position))
    }
}
