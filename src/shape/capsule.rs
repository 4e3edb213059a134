use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{Segment, SupportMap};
use na::Unit;

/// A segment swept by a ball: every point within `radius` of `segment`.
///
/// A capsule with both segment endpoints at the same location is a ball;
/// sweeps of moving balls are computed as sweeps of such degenerate capsules.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Capsule {
    /// The inner segment, joining the centers of the two hemispherical caps.
    pub segment: Segment,
    /// The distance from the inner segment to the capsule surface.
    pub radius: Real,
}

impl Capsule {
    /// A capsule centered at the origin, spanning `[-half_height, half_height]` along `x`.
    pub fn new_x(half_height: Real, radius: Real) -> Self {
        Self::along_axis(Vector::x(), half_height, radius)
    }

    /// A capsule centered at the origin, spanning `[-half_height, half_height]` along `y`.
    pub fn new_y(half_height: Real, radius: Real) -> Self {
        Self::along_axis(Vector::y(), half_height, radius)
    }

    /// A capsule centered at the origin, spanning `[-half_height, half_height]` along `z`.
    pub fn new_z(half_height: Real, radius: Real) -> Self {
        Self::along_axis(Vector::z(), half_height, radius)
    }

    fn along_axis(axis: Vector<Real>, half_height: Real, radius: Real) -> Self {
        let tip = Point::from(axis * half_height);
        Self::new(-tip, tip, radius)
    }

    /// A capsule around the segment `[a, b]`.
    pub fn new(a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        debug_assert!(radius >= 0.0, "A capsule radius must be non-negative.");
        Self {
            segment: Segment::new(a, b),
            radius,
        }
    }

    /// A capsule with both endpoints on `center`, i.e., a ball.
    pub fn degenerate(center: Point<Real>, radius: Real) -> Self {
        Self::new(center, center, radius)
    }

    /// Whether the inner segment is reduced to a single point.
    pub fn is_ball(&self) -> bool {
        self.segment.a == self.segment.b
    }

    /// This capsule placed at `pos`.
    #[must_use]
    pub fn transform_by(&self, pos: &Isometry<Real>) -> Self {
        Self {
            segment: self.segment.transformed(pos),
            radius: self.radius,
        }
    }

    /// This capsule moved by `shift`.
    #[must_use]
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Self {
            segment: self.segment.translated(shift),
            radius: self.radius,
        }
    }

    /// This capsule with its radius increased by `amount`.
    #[must_use]
    pub fn inflated(&self, amount: Real) -> Self {
        Self::new(self.segment.a, self.segment.b, self.radius + amount)
    }
}

impl SupportMap for Capsule {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let dir = Unit::try_new(*dir, 0.0).unwrap_or(Vector::y_axis());
        self.local_support_point_toward(&dir)
    }

    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.segment.local_support_point(dir) + **dir * self.radius
    }
}
