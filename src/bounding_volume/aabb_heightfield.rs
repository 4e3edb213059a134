use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real};
use crate::shape::{CompositeShape, HeightField};

impl HeightField<'_> {
    /// Computes the world-space [`Aabb`] of this heightfield, transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        CompositeShape::local_aabb(self).transform_by(pos)
    }
}
