use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON, DIM};
use crate::query::closest_points::closest_points_segment_segment;
use crate::query::epa::EPA;
use crate::query::gjk::{self, CSOPoint, GJKResult, VoronoiSimplex};
use crate::query::Hit;
use crate::shape::{ConvexCore, Cuboid, RoundConvex, SupportMap};
use na::Unit;

use super::Mtd;

/// The signed distance between two support-mapped shapes.
///
/// `pos12` is the pose of `g2` relative to `g1`. Returns the closest (or deepest) points of
/// both shapes, the outward normal of `g1` pointing toward `g2`, and the distance between the
/// shapes, negative if they overlap. Everything is expressed in the frame of `g1`.
pub fn signed_distance_support_map_support_map<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
) -> Option<(Point<Real>, Point<Real>, Unit<Vector<Real>>, Real)>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let dir = Unit::try_new(pos12.translation.vector, DEFAULT_EPSILON).unwrap_or(Vector::x_axis());
    let mut simplex = VoronoiSimplex::new();
    simplex.reset(CSOPoint::from_shapes(pos12, g1, g2, &dir));

    match gjk::closest_points(pos12, g1, g2, Real::MAX, true, &mut simplex) {
        GJKResult::ClosestPoints(p1, p2, _) => {
            let (normal, dist) = Unit::try_new_and_get(p2 - p1, DEFAULT_EPSILON)?;
            Some((p1, p2, normal, dist))
        }
        GJKResult::Intersection => {
            let (p1, p2, normal) = EPA::new().closest_points(pos12, g1, g2, &simplex)?;
            Some((p1, p2, normal, -(p1 - p2).dot(&normal)))
        }
        GJKResult::Proximity(_) | GJKResult::NoIntersection(_) => None,
    }
}

/// The point of the surface of `cuboid` closest to `pt`, the outward normal there, and the
/// signed distance from the surface to `pt` (negative inside).
fn point_cuboid_separation(
    pt: &Point<Real>,
    cuboid: &Cuboid,
) -> Option<(Point<Real>, Unit<Vector<Real>>, Real)> {
    let he = cuboid.half_extents;
    let clamped = Point::from(pt.coords.sup(&-he).inf(&he));

    if clamped != *pt {
        let (normal, dist) = Unit::try_new_and_get(pt - clamped, DEFAULT_EPSILON)?;
        return Some((clamped, normal, dist));
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

    let sign = if pt[best_axis] >= 0.0 { 1.0 } else { -1.0 };
    let mut proj = *pt;
    proj[best_axis] = he[best_axis] * sign;
    let normal = Unit::new_unchecked(Vector::ith(best_axis, sign));

    Some((proj, normal, -best_depth))
}

/// The minimum translation separating the moving rounded convex shape `g1` from `g2`.
///
/// Rounded points and segments use the exact segment kernels, rounded points against cuboids
/// the closest face, and everything else GJK with EPA on the cores. The depth is negative if
/// the shapes are separated. Returns `None` if the cores touch at a single point, which leaves
/// the direction undefined.
pub fn mtd_round_convex_round_convex(
    pos1: &Isometry<Real>,
    g1: &RoundConvex,
    pos2: &Isometry<Real>,
    g2: &RoundConvex,
) -> Option<Mtd> {
    let margin = g1.border_radius + g2.border_radius;

    match (&g1.core, &g2.core) {
        (ConvexCore::Point | ConvexCore::Segment(_), ConvexCore::Point | ConvexCore::Segment(_)) => {
            let seg1 = g1.core_segment(pos1)?;
            let seg2 = g2.core_segment(pos2)?;
            let closest = closest_points_segment_segment(&seg1, &seg2);
            let (normal, dist) = Unit::try_new_and_get(closest.p1 - closest.p2, DEFAULT_EPSILON)?;

            Some(Mtd {
                normal,
                depth: margin - dist,
                point: closest.p2 + *normal * g2.border_radius,
                face_index: Hit::NO_FACE,
            })
        }
        (ConvexCore::Point, ConvexCore::Cuboid(cuboid)) => {
            let center = pos2.inverse_transform_point(&Point::from(pos1.translation.vector));
            let (proj, normal, dist) = point_cuboid_separation(&center, cuboid)?;

            Some(Mtd {
                normal: pos2 * normal,
                depth: margin - dist,
                point: pos2 * proj,
                face_index: Hit::NO_FACE,
            })
        }
        (ConvexCore::Cuboid(cuboid), ConvexCore::Point) => {
            let center2 = Point::from(pos2.translation.vector);
            let center = pos1.inverse_transform_point(&center2);
            let (_, normal, dist) = point_cuboid_separation(&center, cuboid)?;
            let normal = -(pos1 * normal);

            Some(Mtd {
                normal,
                depth: margin - dist,
                point: center2 + *normal * g2.border_radius,
                face_index: Hit::NO_FACE,
            })
        }
        _ => {
            let pos21 = pos2.inv_mul(pos1);
            let (p2, _, normal, dist) = signed_distance_support_map_support_map(
                &pos21,
                g2.core_support_map(),
                g1.core_support_map(),
            )?;

            Some(Mtd {
                normal,
                depth: margin - dist,
                point: p2 + *normal * g2.border_radius,
                face_index: Hit::NO_FACE,
            }
            .transform_by(pos2))
        }
    }
}
