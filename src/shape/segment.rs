//! Definition of the segment shape.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SupportMap;

/// A line segment between two points.
///
/// Segments are not query operands on their own: they are the cores of
/// capsules and the edges of triangles.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The start point, at parameter 0.
    pub a: Point<Real>,
    /// The end point, at parameter 1.
    pub b: Point<Real>,
}

/// Where a projected point landed on a segment.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum SegmentPointLocation {
    /// On one endpoint: 0 for `a`, 1 for `b`.
    OnVertex(u32),
    /// Strictly inside, with the weights of `a` and `b`.
    OnEdge([Real; 2]),
}

impl SegmentPointLocation {
    /// The weights of `a` and `b` for this location.
    pub fn barycentric_coordinates(&self) -> [Real; 2] {
        match *self {
            Self::OnVertex(0) => [1.0, 0.0],
            Self::OnVertex(_) => [0.0, 1.0],
            Self::OnEdge(weights) => weights,
        }
    }
}

impl Segment {
    /// Creates a segment going from `a` to `b`.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The vector `b - a`.
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// Both endpoints moved by `pos`.
    #[must_use]
    pub fn transformed(&self, pos: &Isometry<Real>) -> Self {
        Segment::new(pos * self.a, pos * self.b)
    }

    /// Both endpoints moved by `shift`.
    #[must_use]
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Segment::new(self.a + shift, self.b + shift)
    }

    /// The point of this segment described by `location`.
    pub fn point_at(&self, location: &SegmentPointLocation) -> Point<Real> {
        let [wa, wb] = location.barycentric_coordinates();
        Point::from(self.a.coords * wa + self.b.coords * wb)
    }

    /// The point `a + (b - a) * t`.
    #[inline]
    pub fn point_at_param(&self, t: Real) -> Point<Real> {
        self.a + self.scaled_direction() * t
    }
}

impl SupportMap for Segment {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        if self.scaled_direction().dot(dir) >= 0.0 {
            self.b
        } else {
            self.a
        }
    }
}
