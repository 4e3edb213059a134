use crate::math::{Real, DEFAULT_EPSILON};
use crate::query::Ray;
use crate::shape::Triangle;

/// The intersection of a ray with a triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayTriangleIntersection {
    /// The time of impact of the ray.
    pub time_of_impact: Real,
    /// The barycentric coordinates of the impact point, relative to `b` and `c`.
    pub uv: [Real; 2],
    /// Did the ray hit the back face of the triangle?
    pub back_face: bool,
}

/// Computes the intersection between a ray and a two-sided triangle.
///
/// Back-face hits are reported with `back_face` set, unless `cull_back_faces` is set in which
/// case they are ignored. Impacts on edges are reported by both triangles sharing the edge.
pub fn ray_triangle_intersection(
    tri: &Triangle,
    ray: &Ray,
    max_toi: Real,
    cull_back_faces: bool,
) -> Option<RayTriangleIntersection> {
    let ab = tri.b - tri.a;
    let ac = tri.c - tri.a;

    let pvec = ray.dir.cross(&ac);
    let det = ab.dot(&pvec);
    let scale = ab.norm_squared().max(ac.norm_squared()) * ray.dir.norm();

    // Parallel ray or degenerate triangle.
    if det.abs() <= DEFAULT_EPSILON * scale {
        return None;
    }

    // The triangle normal is ab × ac and det = -(ab × ac) · dir.
    let back_face = det < 0.0;
    if back_face && cull_back_faces {
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = ray.origin - tri.a;
    let u = tvec.dot(&pvec) * inv_det;
    let tolerance = 1.0e-5;

    if u < -tolerance || u > 1.0 + tolerance {
        return None;
    }

    let qvec = tvec.cross(&ab);
    let v = ray.dir.dot(&qvec) * inv_det;

    if v < -tolerance || u + v > 1.0 + tolerance {
        return None;
    }

    let toi = ac.dot(&qvec) * inv_det;

    if toi < 0.0 || toi > max_toi {
        return None;
    }

    Some(RayTriangleIntersection {
        time_of_impact: toi,
        uv: [u, v],
        back_face,
    })
}
