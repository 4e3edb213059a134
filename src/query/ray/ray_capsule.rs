use crate::math::Real;
use crate::query::closest_points::closest_points_point_segment;
use crate::query::{Hit, Ray, RayIntersection};
use crate::shape::Capsule;

use super::ray_toi_with_ball;

/// Casts a ray on a capsule, in its local frame.
///
/// The capsule is the union of a finite cylinder and two end balls; since the
/// ray starts outside of all three, its first impact is the earliest of the three.
pub fn local_ray_intersection_with_capsule(
    capsule: &Capsule,
    ray: &Ray,
    max_toi: Real,
) -> Option<RayIntersection> {
    let seg = &capsule.segment;
    let radius = capsule.radius;
    let (sq_dist, _) = closest_points_point_segment(&ray.origin, seg);

    if sq_dist <= radius * radius {
        return Some(RayIntersection::initial_overlap(ray));
    }

    let mut toi = Real::MAX;

    for center in [seg.a, seg.b] {
        if let Some(t) = ray_toi_with_ball(&center, radius, ray) {
            toi = toi.min(t);
        }
    }

    // Lateral surface of the cylinder.
    let d = seg.scaled_direction();
    let m = ray.origin - seg.a;
    let dd = d.norm_squared();
    let md = m.dot(&d);
    let nd = ray.dir.dot(&d);
    let a = dd * ray.dir.norm_squared() - nd * nd;
    let b = dd * m.dot(&ray.dir) - nd * md;
    let c = dd * (m.norm_squared() - radius * radius) - md * md;

    if a > crate::math::DEFAULT_EPSILON * dd {
        let delta = b * b - a * c;

        if delta >= 0.0 {
            let t = (-b - delta.sqrt()) / a;
            let axial = md + t * nd;

            if t >= 0.0 && axial >= 0.0 && axial <= dd {
                toi = toi.min(t);
            }
        }
    }

    if toi > max_toi {
        return None;
    }

    let impact = ray.point_at(toi);
    let (_, location) = closest_points_point_segment(&impact, seg);
    let normal = (impact - seg.point_at(&location)).try_normalize(0.0)?;

    Some(RayIntersection::new(toi, normal, Hit::NO_FACE))
}
