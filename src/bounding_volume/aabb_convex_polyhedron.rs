use crate::bounding_volume::{point_cloud_aabb, Aabb};
use crate::math::{Isometry, Real};
use crate::shape::ConvexPolyhedron;

impl ConvexPolyhedron {
    /// Computes the world-space [`Aabb`] of this convex polyhedron, transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        point_cloud_aabb(pos, self.vertices())
    }

    /// Computes the local-space [`Aabb`] of this convex polyhedron.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices())
    }
}
