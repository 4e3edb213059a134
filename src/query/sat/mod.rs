//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! Two convex shapes do not intersect if and only if there exists an axis onto which their
//! projections do not overlap. For boxes and triangles, the candidate axes are the face normals
//! of both shapes and the cross products of their edge directions.
//!
//! Every function here returns a *separation*: positive if the shapes are separated along the
//! returned axis, negative if they overlap (the opposite of the penetration depth along that
//! axis). The axis with the largest separation is the best separating axis, or the axis of
//! minimum penetration when all separations are negative.

use crate::math::{Real, Vector, DIM};

pub use self::sat_cuboid_cuboid::*;
pub use self::sat_cuboid_support_map::*;
pub use self::sat_cuboid_triangle::*;

mod sat_cuboid_cuboid;
mod sat_cuboid_support_map;
mod sat_cuboid_triangle;

/// The cross products of the three axes of a cuboid with each of the edge directions `edges`,
/// all expressed in the local frame of the cuboid.
pub(crate) fn cuboid_edge_cross_axes(edges: &[Vector<Real>; 3]) -> [Vector<Real>; 9] {
    let mut axes = [Vector::zeros(); 9];

    for (j, edge) in edges.iter().enumerate() {
        for i in 0..DIM {
            axes[j * DIM + i] = Vector::ith(i, 1.0).cross(edge);
        }
    }

    axes
}
