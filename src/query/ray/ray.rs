//! Traits and structure needed to cast rays.

use crate::math::{Isometry, Point, Real, Vector};
use crate::query::{Hit, HitFlags};

/// A Ray.
///
/// Queries expect `dir` to be a unit vector so that times of impact are
/// distances.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray starting from `origin` and with the direction `dir`.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Transforms this ray by the given isometry.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(m * self.origin, m * self.dir)
    }

    /// Transforms this ray by the inverse of the given isometry.
    #[inline]
    pub fn inverse_transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(
            m.inverse_transform_point(&self.origin),
            m.inverse_transform_vector(&self.dir),
        )
    }

    /// Translates this ray by the given vector. Its direction is left unchanged.
    #[inline]
    pub fn translate_by(&self, v: Vector<Real>) -> Self {
        Self::new(self.origin + v, self.dir)
    }

    /// Computes the point at the given parameter on this line.
    ///
    /// This computes `self.origin + self.dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}

/// Structure containing the result of a successful ray cast, in the local frame of the shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayIntersection {
    /// The time of impact of the ray with the object.
    ///
    /// The exact contact point can be computed with: `ray.point_at(time_of_impact)`.
    pub time_of_impact: Real,

    /// The normal at the intersection point.
    ///
    /// A ray starting inside of a solid shape gets `time_of_impact == 0` and a normal equal to
    /// `-ray.dir`.
    pub normal: Vector<Real>,

    /// The index of the face hit, or [`Hit::NO_FACE`].
    pub face_index: u32,
}

impl RayIntersection {
    /// Creates a new `RayIntersection`.
    #[inline]
    pub fn new(time_of_impact: Real, normal: Vector<Real>, face_index: u32) -> RayIntersection {
        RayIntersection {
            time_of_impact,
            normal,
            face_index,
        }
    }

    /// The intersection of a ray starting inside of a solid.
    #[inline]
    pub fn initial_overlap(ray: &Ray) -> RayIntersection {
        Self::new(0.0, -ray.dir, Hit::NO_FACE)
    }

    /// Converts this local-space intersection of `local_ray` into a world-space hit.
    ///
    /// Only the outputs requested by `flags` are reported; the normal is zeroed if it wasn't
    /// requested.
    pub fn to_world_hit(&self, pos: &Isometry<Real>, local_ray: &Ray, flags: HitFlags) -> Hit {
        let requested = flags & (HitFlags::POSITION | HitFlags::NORMAL);
        let normal = if requested.contains(HitFlags::NORMAL) {
            pos * self.normal
        } else {
            Vector::zeros()
        };

        Hit {
            position: pos * local_ray.point_at(self.time_of_impact),
            normal,
            distance: self.time_of_impact,
            face_index: self.face_index,
            flags: requested | HitFlags::DISTANCE,
        }
    }
}
