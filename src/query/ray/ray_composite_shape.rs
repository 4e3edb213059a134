use crate::math::{Isometry, Real};
use crate::partitioning::VisitStatus;
use crate::query::consts::RAY_DUPLICATE_EPSILON;
use crate::query::{ray_triangle_intersection, Hit, HitFlags, Ray, RayIntersection, RaycastHits};
use crate::shape::CompositeShape;

/// Casts a world-space ray on a triangle mesh or heightfield placed at `pos`.
///
/// Back faces are culled unless [`HitFlags::DOUBLE_SIDED`] or [`HitFlags::MESH_BOTH_SIDES`] is
/// set. Reported normals are the triangle normals, flipped to oppose the ray only for
/// [`HitFlags::DOUBLE_SIDED`] queries.
///
/// With `max_hits > 1` up to `max_hits` hits are gathered in traversal order, hits closer than
/// [`RAY_DUPLICATE_EPSILON`] to a stored one are merged, and `overflow` is set if a hit is found
/// once the buffer is full. Otherwise the first hit is reported if [`HitFlags::ANY_HIT`] is set,
/// and the closest one if it isn't.
pub fn raycast_composite_shape(
    pos: &Isometry<Real>,
    shape: &dyn CompositeShape,
    ray: &Ray,
    max_dist: Real,
    flags: HitFlags,
    max_hits: usize,
) -> RaycastHits {
    let mut result = RaycastHits::none();

    if max_hits == 0 {
        return result;
    }

    let local_ray = ray.inverse_transform_by(pos);
    let cull_back_faces = !flags.hits_back_faces();
    let double_sided = flags.contains(HitFlags::DOUBLE_SIDED);
    let mut max_toi = max_dist;
    let mut best: Option<Hit> = None;

    let _ = shape.map_triangles_along_ray(&local_ray, max_dist, &mut |id, tri| {
        let Some(inter) = ray_triangle_intersection(tri, &local_ray, max_toi, cull_back_faces)
        else {
            return VisitStatus::Continue;
        };
        let Some(mut normal) = tri.normal().map(|n| n.into_inner()) else {
            return VisitStatus::Continue;
        };

        if double_sided && inter.back_face {
            normal = -normal;
        }

        let hit = RayIntersection::new(inter.time_of_impact, normal, id).to_world_hit(
            pos,
            &local_ray,
            flags | HitFlags::POSITION,
        );

        if max_hits > 1 {
            if result.hits.len() == max_hits {
                result.overflow = true;
                return VisitStatus::ExitEarly;
            }

            if !result
                .hits
                .iter()
                .any(|h| (h.distance - hit.distance).abs() < RAY_DUPLICATE_EPSILON)
            {
                result.hits.push(hit);
            }

            VisitStatus::Continue
        } else if flags.contains(HitFlags::ANY_HIT) {
            best = Some(hit);
            VisitStatus::ExitEarly
        } else {
            max_toi = hit.distance;
            best = Some(hit);
            VisitStatus::Continue
        }
    });

    if let Some(best) = best {
        result.hits.push(best);
    }

    result
}
