use na::Unit;

use crate::math::{Isometry, Real, Vector};
use crate::query::gjk::{self, CSOPoint, GJKResult, VoronoiSimplex};
use crate::shape::SupportMap;

/// Are two convex shapes closer than `margin`?
///
/// Rounded shapes are tested this way: GJK runs on their cores and stops as soon as they are
/// proven closer than the sum of their radii.
pub fn intersection_test_support_map_support_map<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    margin: Real,
) -> bool
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let dir = Unit::try_new(pos12.translation.vector, crate::math::DEFAULT_EPSILON)
        .unwrap_or(Vector::x_axis());
    let mut simplex = VoronoiSimplex::new();
    simplex.reset(CSOPoint::from_shapes(pos12, g1, g2, &dir));

    match gjk::closest_points(pos12, g1, g2, margin, false, &mut simplex) {
        GJKResult::Intersection | GJKResult::Proximity(_) => true,
        GJKResult::ClosestPoints(p1, p2, _) => na::distance_squared(&p1, &p2) <= margin * margin,
        GJKResult::NoIntersection(_) => false,
    }
}
