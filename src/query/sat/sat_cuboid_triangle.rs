use crate::math::{Isometry, Real, Vector};
use crate::query::sat;
use crate::shape::{Cuboid, Triangle};

/// Finds the best separating axis among the cross products of the cuboid axes and the triangle edges.
pub fn cuboid_triangle_find_local_separating_edge_twoway(
    cube1: &Cuboid,
    triangle2: &Triangle,
    pos12: &Isometry<Real>,
) -> (Real, Vector<Real>) {
    let edges2 = [
        pos12 * (triangle2.b - triangle2.a),
        pos12 * (triangle2.c - triangle2.b),
        pos12 * (triangle2.a - triangle2.c),
    ];
    let axes = sat::cuboid_edge_cross_axes(&edges2);
    sat::cuboid_support_map_find_local_separating_edge_twoway(cube1, triangle2, &axes, pos12)
}

/// Computes the separation along the triangle normal, expressed in the local frame of the cuboid.
///
/// The returned axis points from the cuboid toward the triangle plane. Degenerate triangles
/// have no normal and yield `-Real::MAX`.
pub fn cuboid_triangle_find_local_separating_normal(
    cube1: &Cuboid,
    triangle2: &Triangle,
    pos12: &Isometry<Real>,
) -> (Real, Vector<Real>) {
    let Some(normal2) = triangle2.normal() else {
        return (-Real::MAX, Vector::zeros());
    };

    let n1 = pos12 * *normal2;
    let plane_dist = n1.dot(&(pos12 * triangle2.a).coords);
    let radius = n1.abs().dot(&cube1.half_extents);
    let axis = if plane_dist >= 0.0 { n1 } else { -n1 };

    (plane_dist.abs() - radius, axis)
}

/// Finds the axis of largest separation between a cuboid and a triangle, among all 13 SAT axes.
///
/// The axis is expressed in the local frame of the cuboid and points toward the triangle.
pub fn cuboid_triangle_find_local_separating_axis(
    cube1: &Cuboid,
    triangle2: &Triangle,
    pos12: &Isometry<Real>,
) -> (Real, Vector<Real>) {
    let (mut best_sep, mut best_axis) =
        sat::cuboid_support_map_find_local_separating_normal_oneway(cube1, triangle2, pos12);

    let (sep2, axis2) = cuboid_triangle_find_local_separating_normal(cube1, triangle2, pos12);
    if sep2 > best_sep {
        best_sep = sep2;
        best_axis = axis2;
    }

    let (sep3, axis3) = cuboid_triangle_find_local_separating_edge_twoway(cube1, triangle2, pos12);
    // Favor face normals when edge axes are equally good.
    if sep3 > best_sep + crate::query::consts::SAME_DISTANCE_EPSILON * 1.0e-2 {
        best_sep = sep3;
        best_axis = axis3;
    }

    (best_sep, best_axis)
}

/// Tests if a cuboid and a triangle intersect, `pos12` being the pose of the triangle relative
/// to the cuboid.
#[inline]
pub fn cuboid_triangle_intersect(
    cube1: &Cuboid,
    triangle2: &Triangle,
    pos12: &Isometry<Real>,
) -> bool {
    sat::cuboid_support_map_find_local_separating_normal_oneway(cube1, triangle2, pos12).0 <= 0.0
        && cuboid_triangle_find_local_separating_normal(cube1, triangle2, pos12).0 <= 0.0
        && cuboid_triangle_find_local_separating_edge_twoway(cube1, triangle2, pos12).0 <= 0.0
}
