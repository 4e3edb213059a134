use crate::math::{Isometry, Real};
use crate::query::{DefaultQueryDispatcher, HitFlags, QueryDispatcher, Ray, RaycastHits};
use crate::shape::TypedShape;

/// Casts a world-space ray on a shape placed at `pos`.
///
/// `ray.dir` must be a unit vector. At most `max_hits` hits are reported; only triangle meshes
/// and heightfields can report more than one hit.
pub fn raycast(
    pos: &Isometry<Real>,
    g: &TypedShape,
    ray: &Ray,
    max_dist: Real,
    flags: HitFlags,
    max_hits: usize,
) -> RaycastHits {
    match DefaultQueryDispatcher.raycast(pos, g, ray, max_dist, flags, max_hits) {
        Ok(hits) => hits,
        Err(err) => {
            log::warn!("raycast on {:?}: {}", g.shape_type(), err);
            debug_assert!(false, "{}", err);
            RaycastHits::none()
        }
    }
}
