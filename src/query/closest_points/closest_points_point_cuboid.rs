use crate::math::{Point, Real, DIM};
use crate::shape::Cuboid;

/// Projects a point, expressed in the local frame of `cuboid`, on the cuboid's surface.
///
/// Returns the projection and a boolean set to `true` if the point was inside the cuboid.
/// Points inside are projected on the closest face.
pub fn closest_points_point_cuboid(pt: &Point<Real>, cuboid: &Cuboid) -> (Point<Real>, bool) {
    let he = cuboid.half_extents;
    let clamped = Point::from(pt.coords.sup(&-he).inf(&he));

    if clamped != *pt {
        return (clamped, false);
    }

    let mut best_axis = 0;
    let mut best_depth = Real::MAX;

    for i in 0..DIM {
        let depth = he[i] - pt[i].abs();
        if depth < best_depth {
            best_depth = depth;
            best_axis = i;
        }
    }

    let mut proj = *pt;
    proj[best_axis] = if pt[best_axis] >= 0.0 {
        he[best_axis]
    } else {
        -he[best_axis]
    };

    (proj, true)
}
