//! Convex shapes queried through their support function.

use crate::math::{Isometry, Point, Real, Vector};
use na::Unit;

/// A convex shape described by its support function.
///
/// The support point of a shape along a direction is one of its points that is the furthest
/// along that direction. It is all GJK and EPA need to know about a convex shape.
pub trait SupportMap {
    /// The support point along `dir`, both in the local frame of the shape.
    ///
    /// `dir` doesn't need to be normalized.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// The support point along the unit direction `dir`.
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }

    /// The support point along `dir` of this shape placed at `transform`.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }

    /// The support point along the unit direction `dir` of this shape placed at `transform`.
    fn support_point_toward(
        &self,
        transform: &Isometry<Real>,
        dir: &Unit<Vector<Real>>,
    ) -> Point<Real> {
        let local_dir = Unit::new_unchecked(transform.inverse_transform_vector(dir));
        transform * self.local_support_point_toward(&local_dir)
    }
}
