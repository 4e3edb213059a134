use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Ball;

/// Computes the Axis-Aligned Bounding Box of a ball of the given radius, centered at `center`.
#[inline]
pub fn ball_aabb(center: &Point<Real>, radius: Real) -> Aabb {
    Aabb::new(
        *center + Vector::repeat(-radius),
        *center + Vector::repeat(radius),
    )
}

impl Ball {
    /// Computes the world-space Aabb of this ball transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        ball_aabb(&Point::from(pos.translation.vector), self.radius)
    }

    /// Computes the local-space Aabb of this ball.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        ball_aabb(&Point::origin(), self.radius)
    }
}
