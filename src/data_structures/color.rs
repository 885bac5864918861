//! RGBA vertex colors.
//!
//! Channels are plain `f32` values. They are conventionally in `[0, 1]` but
//! nothing here clamps them: additive blending and gradient extrapolation are
//! allowed to leave that range, and the host decides what to do with it.

use std::ops::{Add, Mul};

/// Straight-alpha RGBA color as stored per vertex.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Builds a color from an RGB triple and a separate alpha, which is how
    /// the settings store keeps them.
    #[inline]
    pub const fn from_rgb_alpha(rgb: [f32; 3], alpha: f32) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], alpha)
    }

    #[inline]
    pub const fn rgb(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Linear interpolation towards `other`. `t` is not clamped, so values
    /// outside `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl Add<Color> for Color {
    type Output = Self;

    fn add(self, rhs: Color) -> Self::Output {
        Color {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
            a: self.a + rhs.a,
        }
    }
}

impl Mul<Color> for Color {
    type Output = Self;

    fn mul(self, rhs: Color) -> Self::Output {
        Color {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
            a: self.a * rhs.a,
        }
    }
}

impl<'a, 'b> Add<&'b Color> for &'a Color {
    type Output = Color;

    fn add(self, rhs: &'b Color) -> Self::Output {
        *self + *rhs
    }
}

impl<'a, 'b> Mul<&'b Color> for &'a Color {
    type Output = Color;

    fn mul(self, rhs: &'b Color) -> Self::Output {
        *self * *rhs
    }
}
