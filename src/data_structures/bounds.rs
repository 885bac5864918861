//! Axis-aligned bounding boxes over mesh vertex positions.

use cgmath::Point3;

/// A world axis used to pick one component out of a position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component of `p` along this axis.
    #[inline]
    pub fn component(self, p: Point3<f32>) -> f32 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
            Axis::Z => p.z,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl BoundingBox {
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self { min, max }
    }

    /// Smallest box holding every point, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3<f32>>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let bounds = points.fold(Self::new(first, first), |mut acc, p| {
            acc.min.x = acc.min.x.min(p.x);
            acc.min.y = acc.min.y.min(p.y);
            acc.min.z = acc.min.z.min(p.z);
            acc.max.x = acc.max.x.max(p.x);
            acc.max.y = acc.max.y.max(p.y);
            acc.max.z = acc.max.z.max(p.z);
            acc
        });
        Some(bounds)
    }

    /// `max - min` along `axis`.
    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        axis.component(self.max) - axis.component(self.min)
    }

    pub fn contains(&self, p: Point3<f32>) -> bool {
        Axis::ALL.iter().all(|&axis| {
            let v = axis.component(p);
            v >= axis.component(self.min) && v <= axis.component(self.max)
        })
    }
}
