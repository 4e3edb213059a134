use crate::math::{Isometry, Real};
use crate::query::ray::local_ray_intersection_with_capsule;
use crate::query::{Hit, Ray};
use crate::shape::{Capsule, RoundConvex, TypedShape};

use super::{sweep_round_convex_round_convex, SweepParams};

/// Sweeps a capsule against a capsule. Balls are degenerate capsules.
///
/// When either capsule is a ball, the sweep reduces to a ray cast against a capsule of
/// radius the sum of both radii, which is exact. Otherwise GJK is used.
pub fn sweep_capsule_capsule(
    pos1: &Isometry<Real>,
    g1: &Capsule,
    pos2: &Isometry<Real>,
    g2: &Capsule,
    params: &SweepParams,
) -> Option<Hit> {
    let moving = g1.transform_by(pos1).inflated(params.inflation);
    let target = g2.transform_by(pos2);
    let radius_sum = moving.radius + target.radius;

    if moving.is_ball() {
        let ray = Ray::new(moving.segment.a, params.dir);
        let minkowski = Capsule::new(target.segment.a, target.segment.b, radius_sum);
        let inter = local_ray_intersection_with_capsule(&minkowski, &ray, params.max_dist)?;

        if inter.time_of_impact == 0.0 {
            return Some(Hit::initial_overlap(ray.origin, &params.dir, Hit::NO_FACE));
        }

        let position = ray.point_at(inter.time_of_impact) - inter.normal * moving.radius;
        Some(Hit::new(
            position,
            inter.normal,
            inter.time_of_impact,
            Hit::NO_FACE,
        ))
    } else if target.is_ball() {
        // Cast the target backward against the moving capsule.
        let ray = Ray::new(target.segment.a, -params.dir);
        let minkowski = Capsule::new(moving.segment.a, moving.segment.b, radius_sum);
        let inter = local_ray_intersection_with_capsule(&minkowski, &ray, params.max_dist)?;

        if inter.time_of_impact == 0.0 {
            return Some(Hit::initial_overlap(ray.origin, &params.dir, Hit::NO_FACE));
        }

        let normal = -inter.normal;
        Some(Hit::new(
            ray.origin + normal * target.radius,
            normal,
            inter.time_of_impact,
            Hit::NO_FACE,
        ))
    } else {
        let g1 = RoundConvex::from_typed_shape(&TypedShape::Capsule(g1), params.inflation)?;
        let g2 = RoundConvex::from_typed_shape(&TypedShape::Capsule(g2), 0.0)?;
        sweep_round_convex_round_convex(pos1, &g1, pos2, &g2, params)
    }
}
