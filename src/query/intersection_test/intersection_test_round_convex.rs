use crate::math::{Isometry, Point, Real};
use crate::query::closest_points::{
    closest_points_point_cuboid, closest_points_point_triangle, closest_points_segment_triangle,
};
use crate::query::sat;
use crate::shape::{ConvexCore, RoundConvex, Triangle};

use super::{intersection_test_segment_segment, intersection_test_support_map_support_map};

/// Intersection test between two rounded convex shapes.
///
/// `pos12` is the pose of `g2` relative to `g1`. Rounded points and segments use the exact
/// closest-point kernels, unrounded cuboid pairs the separating axis theorem, and everything
/// else GJK on the cores.
pub fn intersection_test_round_convex_round_convex(
    pos12: &Isometry<Real>,
    g1: &RoundConvex,
    g2: &RoundConvex,
) -> bool {
    let margin = g1.border_radius + g2.border_radius;

    match (&g1.core, &g2.core) {
        (ConvexCore::Point | ConvexCore::Segment(_), ConvexCore::Point | ConvexCore::Segment(_)) => {
            match (
                g1.core_segment(&Isometry::identity()),
                g2.core_segment(pos12),
            ) {
                (Some(s1), Some(s2)) => intersection_test_segment_segment(&s1, &s2, margin),
                _ => false,
            }
        }
        (ConvexCore::Cuboid(c1), ConvexCore::Point) => {
            let center = Point::from(pos12.translation.vector);
            let (proj, inside) = closest_points_point_cuboid(&center, c1);
            inside || na::distance_squared(&proj, &center) <= margin * margin
        }
        (ConvexCore::Point, ConvexCore::Cuboid(c2)) => {
            let center = pos12.inverse_transform_point(&Point::origin());
            let (proj, inside) = closest_points_point_cuboid(&center, c2);
            inside || na::distance_squared(&proj, &center) <= margin * margin
        }
        (ConvexCore::Cuboid(c1), ConvexCore::Cuboid(c2)) if margin == 0.0 => {
            sat::cuboid_cuboid_intersect(c1, c2, pos12)
        }
        _ => intersection_test_support_map_support_map(
            pos12,
            g1.core_support_map(),
            g2.core_support_map(),
            margin,
        ),
    }
}

/// Intersection test between a rounded convex shape and a triangle.
///
/// `pos12` is the pose of `g1` relative to the frame `tri` is expressed in. Triangles are
/// tested from both sides.
pub fn intersection_test_round_convex_triangle(
    pos12: &Isometry<Real>,
    g1: &RoundConvex,
    tri: &Triangle,
) -> bool {
    let margin = g1.border_radius;

    match &g1.core {
        ConvexCore::Point => {
            let center = Point::from(pos12.translation.vector);
            let (proj, _) = closest_points_point_triangle(&center, tri);
            na::distance_squared(&proj, &center) <= margin * margin
        }
        ConvexCore::Segment(s) => {
            closest_points_segment_triangle(&s.transformed(pos12), tri).sq_dist <= margin * margin
        }
        ConvexCore::Cuboid(c) if margin == 0.0 => {
            sat::cuboid_triangle_intersect(c, tri, &pos12.inverse())
        }
        _ => intersection_test_support_map_support_map(
            &pos12.inverse(),
            g1.core_support_map(),
            tri,
            margin,
        ),
    }
}
