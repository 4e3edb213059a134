use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::query::{Ray, RayIntersection};
use crate::shape::Cuboid;

/// Casts a ray on a cuboid, in the local frame of the cuboid.
///
/// A ray starting inside of the cuboid hits it at `t = 0` with the normal `-ray.dir`.
#[inline]
pub fn local_ray_intersection_with_cuboid(
    cuboid: &Cuboid,
    ray: &Ray,
    max_toi: Real,
) -> Option<RayIntersection> {
    let dl = Point::from(-cuboid.half_extents);
    let ur = Point::from(cuboid.half_extents);
    Aabb::new(dl, ur).cast_local_ray_and_get_normal(ray, max_toi)
}
