use crate::math::{Isometry, Real, Vector, DIM};
use crate::query::sat;
use crate::shape::{Cuboid, SupportMap};

/// Finds the best separating axis among the 9 cross products of the edge directions of both cuboids.
pub fn cuboid_cuboid_find_local_separating_edge_twoway(
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    pos12: &Isometry<Real>,
) -> (Real, Vector<Real>) {
    let edges2 = [pos12 * Vector::x(), pos12 * Vector::y(), pos12 * Vector::z()];
    let axes = sat::cuboid_edge_cross_axes(&edges2);
    sat::cuboid_support_map_find_local_separating_edge_twoway(cuboid1, cuboid2, &axes, pos12)
}

/// Finds the best separating axis among the face normals of `cuboid1`.
///
/// Cuboids being symmetric, only the normal facing `cuboid2` needs to be tested on each axis.
pub fn cuboid_cuboid_find_local_separating_normal_oneway(
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    pos12: &Isometry<Real>,
) -> (Real, Vector<Real>) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    for i in 0..DIM {
        let sign = (1.0 as Real).copysign(pos12.translation.vector[i]);
        let axis1 = Vector::ith(i, sign);
        let pt2 = cuboid2.support_point(pos12, &-axis1);
        let separation = pt2[i] * sign - cuboid1.half_extents[i];

        if separation > best_separation {
            best_separation = separation;
            best_dir = axis1;
        }
    }

    (best_separation, best_dir)
}

/// Finds the axis of largest separation between two cuboids, among all 15 SAT axes.
///
/// The returned axis is expressed in the local frame of `cuboid1` and points toward `cuboid2`.
pub fn cuboid_cuboid_find_local_separating_axis(
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    pos12: &Isometry<Real>,
) -> (Real, Vector<Real>) {
    let (mut best_sep, mut best_axis) =
        cuboid_cuboid_find_local_separating_normal_oneway(cuboid1, cuboid2, pos12);

    let pos21 = pos12.inverse();
    let (sep2, axis2) = cuboid_cuboid_find_local_separating_normal_oneway(cuboid2, cuboid1, &pos21);
    if sep2 > best_sep {
        best_sep = sep2;
        best_axis = pos12 * -axis2;
    }

    let (sep3, axis3) = cuboid_cuboid_find_local_separating_edge_twoway(cuboid1, cuboid2, pos12);
    // Favor face normals when edge axes are equally good.
    if sep3 > best_sep + crate::query::consts::SAME_DISTANCE_EPSILON * 1.0e-2 {
        best_sep = sep3;
        best_axis = axis3;
    }

    (best_sep, best_axis)
}

/// Tests if two cuboids intersect, `pos12` being the pose of `cuboid2` relative to `cuboid1`.
#[inline]
pub fn cuboid_cuboid_intersect(cuboid1: &Cuboid, cuboid2: &Cuboid, pos12: &Isometry<Real>) -> bool {
    // Cheapest axes first.
    cuboid_cuboid_find_local_separating_normal_oneway(cuboid1, cuboid2, pos12).0 <= 0.0
        && cuboid_cuboid_find_local_separating_normal_oneway(cuboid2, cuboid1, &pos12.inverse()).0
            <= 0.0
        && cuboid_cuboid_find_local_separating_edge_twoway(cuboid1, cuboid2, pos12).0 <= 0.0
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Isometry, Real, Vector};
    use crate::shape::Cuboid;

    #[test]
    fn cuboid_cuboid_separation_on_faces() {
        let c = Cuboid::new(Vector::repeat(1.0));
        let pos12 = Isometry::translation(2.5, 0.0, 0.0);

        let (sep, axis) = cuboid_cuboid_find_local_separating_axis(&c, &c, &pos12);
        assert_relative_eq!(sep, 0.5, epsilon = 1.0e-5);
        assert_relative_eq!(axis, Vector::x(), epsilon = 1.0e-5);
        assert!(!cuboid_cuboid_intersect(&c, &c, &pos12));

        let pos12 = Isometry::translation(0.0, -1.75, 0.0);
        let (sep, axis) = cuboid_cuboid_find_local_separating_axis(&c, &c, &pos12);
        assert_relative_eq!(sep, -0.25, epsilon = 1.0e-5);
        assert_relative_eq!(axis, -Vector::y(), epsilon = 1.0e-5);
        assert!(cuboid_cuboid_intersect(&c, &c, &pos12));
    }

    #[test]
    fn cuboid_cuboid_separated_by_edge_axis() {
        // Two cubes whose closest features are crossing edges.
        let c = Cuboid::new(Vector::repeat(1.0));
        let quarter = std::f64::consts::FRAC_PI_4 as Real;
        let shift = 2.0 * (2.0 as Real).sqrt() + 0.1;
        let pos1 = Isometry::rotation(Vector::z() * quarter);
        let pos2 = Isometry::new(Vector::x() * shift, Vector::y() * quarter);
        let pos12 = pos1.inv_mul(&pos2);

        let face1 = cuboid_cuboid_find_local_separating_normal_oneway(&c, &c, &pos12).0;
        let face2 = cuboid_cuboid_find_local_separating_normal_oneway(&c, &c, &pos12.inverse()).0;
        let (edge, _) = cuboid_cuboid_find_local_separating_edge_twoway(&c, &c, &pos12);
        assert!(face1 < 0.0);
        assert!(face2 < 0.0);
        assert_relative_eq!(edge, 0.1, epsilon = 1.0e-4);
        assert!(!cuboid_cuboid_intersect(&c, &c, &pos12));

        let (best, _) = cuboid_cuboid_find_local_separating_axis(&c, &c, &pos12);
        assert_relative_eq!(best, 0.1, epsilon = 1.0e-4);
    }
}
