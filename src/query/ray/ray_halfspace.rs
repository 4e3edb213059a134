use crate::math::Real;
use crate::query::{Hit, Ray, RayIntersection};
use crate::shape::HalfSpace;

/// Computes the time of impact of a ray with the boundary plane of a half-space.
///
/// Rays that don't point against the plane normal never hit it, even when they start
/// inside of the half-space, so that objects behind a ground plane can still be picked.
#[inline]
pub fn ray_toi_with_halfspace(halfspace: &HalfSpace, ray: &Ray) -> Option<Real> {
    let dpos = halfspace.signed_distance(&ray.origin);
    let dot_normal_dir = halfspace.normal.dot(&ray.dir);

    if dot_normal_dir >= 0.0 {
        return None;
    }

    let t = -dpos / dot_normal_dir;

    if t >= 0.0 {
        Some(t)
    } else {
        None
    }
}

/// Casts a ray on a half-space, in its local frame. The normal is always the plane normal.
#[inline]
pub fn local_ray_intersection_with_halfspace(
    halfspace: &HalfSpace,
    ray: &Ray,
    max_toi: Real,
) -> Option<RayIntersection> {
    let toi = ray_toi_with_halfspace(halfspace, ray).filter(|t| *t <= max_toi)?;
    Some(RayIntersection::new(toi, *halfspace.normal, Hit::NO_FACE))
}
