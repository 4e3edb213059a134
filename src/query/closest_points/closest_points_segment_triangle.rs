use crate::math::{Point, Real};
use crate::query::closest_points::{
    closest_points_point_triangle, closest_points_segment_segment,
};
use crate::query::ray_triangle_intersection;
use crate::query::Ray;
use crate::shape::{Segment, Triangle};

/// The closest points between a segment and a triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentTriangleClosest {
    /// The squared distance between the segment and the triangle.
    pub sq_dist: Real,
    /// The parameter of the closest point on the segment.
    pub t: Real,
    /// The barycentric coordinates of the closest point on the triangle.
    pub bcoords: [Real; 3],
    /// The closest point on the segment.
    pub p1: Point<Real>,
    /// The closest point on the triangle.
    pub p2: Point<Real>,
}

/// Closest points between a segment and a triangle expressed in the same frame.
///
/// If the segment crosses the triangle, the result has a zero distance and locates the crossing
/// point. Otherwise the closest pair is realized either by a segment endpoint and the triangle,
/// or by the segment and one of the triangle edges.
pub fn closest_points_segment_triangle(seg: &Segment, tri: &Triangle) -> SegmentTriangleClosest {
    let dir = seg.scaled_direction();

    if dir.norm_squared() > crate::math::DEFAULT_EPSILON {
        let ray = Ray::new(seg.a, dir);
        if let Some(inter) = ray_triangle_intersection(tri, &ray, 1.0, false) {
            let [u, v] = inter.uv;
            let p = seg.point_at_param(inter.time_of_impact);
            return SegmentTriangleClosest {
                sq_dist: 0.0,
                t: inter.time_of_impact,
                bcoords: [1.0 - u - v, u, v],
                p1: p,
                p2: p,
            };
        }
    }

    let mut best = SegmentTriangleClosest {
        sq_dist: Real::MAX,
        t: 0.0,
        bcoords: [1.0, 0.0, 0.0],
        p1: seg.a,
        p2: tri.a,
    };

    for (t, endpoint) in [(0.0, seg.a), (1.0, seg.b)] {
        let (proj, loc) = closest_points_point_triangle(&endpoint, tri);
        let sq_dist = na::distance_squared(&endpoint, &proj);
        if sq_dist < best.sq_dist {
            best = SegmentTriangleClosest {
                sq_dist,
                t,
                bcoords: loc.barycentric_coordinates(),
                p1: endpoint,
                p2: proj,
            };
        }
    }

    // Edges in `Triangle::edges` order: AB, BC, CA.
    for (i, edge) in tri.edges().iter().enumerate() {
        let closest = closest_points_segment_segment(seg, edge);
        if closest.sq_dist < best.sq_dist {
            let mut bcoords = [0.0; 3];
            bcoords[i] = 1.0 - closest.t;
            bcoords[(i + 1) % 3] = closest.t;
            best = SegmentTriangleClosest {
                sq_dist: closest.sq_dist,
                t: closest.s,
                bcoords,
                p1: closest.p1,
                p2: closest.p2,
            };
        }
    }

    best
}
