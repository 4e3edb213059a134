use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real};
use crate::shape::Triangle;

impl Triangle {
    /// Computes the world-space [`Aabb`] of this triangle, transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        self.transformed(pos).local_aabb()
    }

    /// Computes the local-space [`Aabb`] of this triangle.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let a = self.a.coords;
        let b = self.b.coords;
        let c = self.c.coords;

        Aabb::new(a.inf(&b).inf(&c).into(), a.sup(&b).sup(&c).into())
    }
}
