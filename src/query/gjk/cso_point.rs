use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SupportMap;
use core::ops::Sub;

/// A point of the Minkowski difference of two shapes.
///
/// GJK and EPA work on the Configuration-Space Obstacle (CSO) `g1 - g2`. Each of its vertices
/// keeps track of the two support points it was computed from, so closest points and witnesses
/// can be recovered on both shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CSOPoint {
    /// The point of the CSO. Equal to `orig1 - orig2`, unless it was translated.
    pub point: Point<Real>,
    /// The support point on the first shape.
    pub orig1: Point<Real>,
    /// The support point on the second shape.
    pub orig2: Point<Real>,
}

impl CSOPoint {
    /// The CSO point `orig1 - orig2`.
    pub fn new(orig1: Point<Real>, orig2: Point<Real>) -> Self {
        Self {
            point: Point::from(orig1 - orig2),
            orig1,
            orig2,
        }
    }

    /// A CSO point of a single shape, its second support point being the origin.
    pub fn single_point(point: Point<Real>) -> Self {
        Self {
            point,
            orig1: point,
            orig2: Point::origin(),
        }
    }

    /// The CSO point at the origin.
    pub fn origin() -> Self {
        Self::single_point(Point::origin())
    }

    /// The support point of the CSO of `g1` and `g2` along `dir`.
    ///
    /// `pos12` is the pose of `g2` relative to `g1`; the result is expressed in the local frame
    /// of `g1`.
    pub fn from_shapes<G1, G2>(pos12: &Isometry<Real>, g1: &G1, g2: &G2, dir: &Vector<Real>) -> Self
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        Self::new(
            g1.local_support_point(dir),
            g2.support_point(pos12, &-*dir),
        )
    }

    /// This point translated by `shift`, its support points unchanged.
    #[must_use]
    pub fn translate(&self, shift: &Vector<Real>) -> Self {
        Self {
            point: self.point + shift,
            ..*self
        }
    }

    /// Translates this point by `shift` in-place, its support points unchanged.
    pub fn translate_mut(&mut self, shift: &Vector<Real>) {
        self.point += shift;
    }
}

impl Sub<CSOPoint> for CSOPoint {
    type Output = Vector<Real>;

    #[inline]
    fn sub(self, rhs: CSOPoint) -> Vector<Real> {
        self.point - rhs.point
    }
}
