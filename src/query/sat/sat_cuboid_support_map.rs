use crate::math::{Isometry, Real, Vector, DEFAULT_EPSILON, DIM};
use crate::shape::{Cuboid, SupportMap};
use na::Unit;

/// Finds the best separating axis among the given edge cross products.
///
/// Each axis is tried with both orientations. Axes too short to be normalized are skipped, so
/// parallel edges never yield a separating direction. The returned direction is expressed in
/// the local frame of `cube1` and points toward `shape2`.
pub fn cuboid_support_map_find_local_separating_edge_twoway(
    cube1: &Cuboid,
    shape2: &(impl SupportMap + ?Sized),
    axes: &[Vector<Real>],
    pos12: &Isometry<Real>,
) -> (Real, Vector<Real>) {
    let mut best = (-Real::MAX, Vector::zeros());

    for axis in axes {
        let Some(axis) = Unit::try_new(*axis, DEFAULT_EPSILON * 100.0) else {
            continue;
        };

        for dir in [-axis, axis] {
            let p1 = cube1.local_support_point_toward(&dir);
            let p2 = shape2.support_point_toward(pos12, &-dir);
            let separation = (p2 - p1).dot(&dir);

            if separation > best.0 {
                best = (separation, *dir);
            }
        }
    }

    best
}

/// Finds the best separating axis among the six face normals of `cube1`.
pub fn cuboid_support_map_find_local_separating_normal_oneway(
    cube1: &Cuboid,
    shape2: &(impl SupportMap + ?Sized),
    pos12: &Isometry<Real>,
) -> (Real, Vector<Real>) {
    let mut best = (-Real::MAX, Vector::zeros());

    for i in 0..DIM {
        for sign in [-1.0, 1.0] {
            let normal = Vector::ith(i, sign);
            let deepest = shape2.support_point(pos12, &-normal);
            let separation = deepest[i] * sign - cube1.half_extents[i];

            if separation > best.0 {
                best = (separation, normal);
            }
        }
    }

    best
}
