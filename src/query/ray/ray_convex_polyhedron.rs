use crate::math::Real;
use crate::query::consts::CONVEX_RAY_END_EPSILON;
use crate::query::{Ray, RayIntersection};
use crate::shape::ConvexPolyhedron;

/// Casts a ray on a convex polyhedron by clipping it against the face planes.
///
/// Faces the ray enters through and exits through are tracked separately: the ray hits the
/// polyhedron if the latest entry happens before the earliest exit. The entry face is reported.
pub fn local_ray_intersection_with_convex_polyhedron(
    poly: &ConvexPolyhedron,
    ray: &Ray,
    max_toi: Real,
) -> Option<RayIntersection> {
    let mut origin_inside = true;
    let mut latest_entry = -Real::MAX;
    let mut earliest_exit = Real::MAX;
    let mut entry_face = None;

    for (i, face) in poly.faces().iter().enumerate() {
        let dist = face.signed_distance(&ray.origin);
        let dn = face.normal.dot(&ray.dir);

        if dist > 0.0 {
            origin_inside = false;
        }

        if dn > 1.0e-7 {
            earliest_exit = earliest_exit.min(-dist / dn);
        } else if dn < -1.0e-7 {
            let t = -dist / dn;
            if t > latest_entry {
                latest_entry = t;
                entry_face = Some(i);
            }
        } else if dist > 0.0 {
            // Parallel to a face plane, on its outer side.
            return None;
        }
    }

    if origin_inside {
        return Some(RayIntersection::initial_overlap(ray));
    }

    let face = entry_face?;

    if latest_entry < earliest_exit
        && latest_entry > 0.0
        && latest_entry < max_toi - CONVEX_RAY_END_EPSILON
    {
        Some(RayIntersection::new(
            latest_entry,
            *poly.faces()[face].normal,
            face as u32,
        ))
    } else {
        None
    }
}
