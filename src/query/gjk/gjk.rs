//! The Gilbert–Johnson–Keerthi algorithm on the Minkowski difference of two support maps.

use na::{ComplexField, Unit};

use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::query::consts::{GJK_MAX_ITERATIONS, GJK_TOLERANCE};
use crate::query::gjk::{CSOPoint, VoronoiSimplex};
use crate::query::Ray;
use crate::shape::SupportMap;

/// The outcome of [`closest_points`].
///
/// Points and directions are expressed in the local frame of the first shape.
#[derive(Clone, Debug, PartialEq)]
pub enum GJKResult {
    /// The origin is inside the CSO: the shapes overlap.
    Intersection,
    /// The closest points of both shapes, and the unit direction from the first toward the
    /// second.
    ClosestPoints(Point<Real>, Point<Real>, Unit<Vector<Real>>),
    /// The shapes are disjoint but closer than the requested distance. Only returned when the
    /// exact distance was not requested.
    Proximity(Unit<Vector<Real>>),
    /// The shapes are further apart than the requested distance, along the given separating
    /// direction.
    NoIntersection(Unit<Vector<Real>>),
}

fn relative_tolerance() -> Real {
    ComplexField::sqrt(GJK_TOLERANCE)
}

/// Runs GJK between `g1` and `g2` placed at `pos12` relative to `g1`.
///
/// The simplex must already contain at least one point of the CSO, usually
/// `CSOPoint::from_shapes(pos12, g1, g2, &dir)` for some arbitrary `dir`.
///
/// The iteration stops as soon as the shapes are proven further apart than `max_dist`. When
/// `exact_dist` is `false`, it also stops as soon as they are proven disjoint but closer than
/// `max_dist`, returning [`GJKResult::Proximity`] instead of the closest points.
pub fn closest_points<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    max_dist: Real,
    exact_dist: bool,
    simplex: &mut VoronoiSimplex,
) -> GJKResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let rel_tol = relative_tolerance();
    let mut proj = simplex.project_origin_and_reduce();
    let Some(mut prev_dir) = Unit::try_new(-proj.coords, 0.0) else {
        return GJKResult::Intersection;
    };
    let mut upper_bound = Real::MAX;

    for _ in 0..GJK_MAX_ITERATIONS {
        let Some((dir, dist)) = Unit::try_new_and_get(-proj.coords, GJK_TOLERANCE) else {
            // The origin lies on the simplex.
            return GJKResult::Intersection;
        };

        if dist >= upper_bound {
            // The simplex stopped getting closer to the origin.
            return separated(simplex, true, prev_dir, exact_dist);
        }
        upper_bound = dist;

        let support = CSOPoint::from_shapes(pos12, g1, g2, &dir);
        let lower_bound = -dir.dot(&support.point.coords);

        if !lower_bound.is_finite() {
            log::debug!("GJK: non-finite support point.");
            return GJKResult::NoIntersection(dir);
        }

        if lower_bound > max_dist {
            return GJKResult::NoIntersection(dir);
        }

        if !exact_dist && lower_bound > 0.0 && upper_bound <= max_dist {
            return GJKResult::Proximity(prev_dir);
        }

        if upper_bound - lower_bound <= rel_tol * upper_bound || !simplex.add_point(support) {
            // Converged, or the support point is already part of the simplex.
            return separated(simplex, false, dir, exact_dist);
        }

        prev_dir = dir;
        proj = simplex.project_origin_and_reduce();

        if simplex.dimension() == DIM {
            return if lower_bound >= GJK_TOLERANCE {
                separated(simplex, true, prev_dir, exact_dist)
            } else {
                GJKResult::Intersection
            };
        }
    }

    log::debug!("GJK did not converge after {} iterations.", GJK_MAX_ITERATIONS);
    GJKResult::NoIntersection(Vector::x_axis())
}

/// The distance `g2` can travel along `dir` before touching `g1`.
///
/// `pos12` is the pose of `g2` relative to `g1`, and `dir` is expressed in the local frame of
/// `g1`. Returns the travelled distance (in units of `|dir|`), the outward normal of `g1` at the
/// contact, and the contact points on `g1` and on `g2` at its initial position. A zero distance
/// means the shapes already overlap: the normal and points are then meaningless.
pub fn directional_distance<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    dir: &Vector<Real>,
    simplex: &mut VoronoiSimplex,
) -> Option<(Real, Vector<Real>, Point<Real>, Point<Real>)>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let ray = Ray::new(Point::origin(), *dir);
    let (toi, normal) = minkowski_ray_cast(pos12, g1, g2, &ray, Real::MAX, simplex)?;

    let (p1, p2) = if toi == 0.0 {
        (Point::origin(), Point::origin())
    } else {
        witness_points(simplex, simplex.dimension() == DIM)
    };

    Some((toi, normal, p1, p2))
}

// Casts `ray` on the CSO `g1 - pos12 * g2` by conservative advancement of its origin.
fn minkowski_ray_cast<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    ray: &Ray,
    max_toi: Real,
    simplex: &mut VoronoiSimplex,
) -> Option<(Real, Vector<Real>)>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let rel_tol = relative_tolerance();
    let ray_len = ray.dir.norm();

    if relative_eq!(ray_len, 0.0) {
        return None;
    }

    let unit_dir = ray.dir / ray_len;
    let mut origin = ray.origin;
    // Distance travelled so far, and the normal of the last plane the origin was advanced to.
    let mut travelled = 0.0;
    let mut hit_normal = -unit_dir;

    let first = CSOPoint::from_shapes(pos12, g1, g2, &hit_normal);
    simplex.reset(first.translate(&-origin.coords));

    let mut proj = simplex.project_origin_and_reduce();
    let mut upper_bound = Real::MAX;
    let mut last_chance = false;

    for _ in 0..GJK_MAX_ITERATIONS {
        let Some((dir, dist)) = Unit::try_new_and_get(-proj.coords, GJK_TOLERANCE) else {
            return Some((travelled / ray_len, hit_normal));
        };

        let support = if dist >= upper_bound {
            // No progress: use the projection itself as the support point, once.
            last_chance = true;
            CSOPoint::single_point(proj + origin.coords)
        } else {
            CSOPoint::from_shapes(pos12, g1, g2, &dir)
        };
        upper_bound = dist;

        if last_chance && travelled > 0.0 {
            return Some((travelled / ray_len, hit_normal));
        }

        let facing = dir.dot(&unit_dir);

        match ray_plane_toi(&support.point, &dir, &origin, &unit_dir) {
            Some(t) if facing < 0.0 && t > 0.0 => {
                // The support plane is ahead: move the origin onto it.
                hit_normal = *dir;
                travelled += t;

                // Compared after dividing so an infinite `max_toi` can't overflow.
                if travelled / ray_len > max_toi {
                    return None;
                }

                let shift = unit_dir * t;
                origin += shift;
                upper_bound = Real::MAX;
                simplex.modify_pnts(&|pt| pt.translate_mut(&-shift));
                last_chance = false;
            }
            None if facing > GJK_TOLERANCE => return None,
            _ => {}
        }

        if last_chance {
            return None;
        }

        let lower_bound = -dir.dot(&(support.point.coords - origin.coords));

        if !lower_bound.is_finite() || upper_bound - lower_bound <= rel_tol * upper_bound {
            return None;
        }

        let _ = simplex.add_point(support.translate(&-origin.coords));
        proj = simplex.project_origin_and_reduce();

        if simplex.dimension() == DIM {
            return (lower_bound < GJK_TOLERANCE).then_some((travelled / ray_len, hit_normal));
        }
    }

    log::debug!(
        "GJK ray cast did not converge after {} iterations.",
        GJK_MAX_ITERATIONS
    );
    None
}

// Two-sided intersection of a ray with the plane through `center`. Hits behind the origin are
// discarded.
fn ray_plane_toi(
    center: &Point<Real>,
    normal: &Vector<Real>,
    origin: &Point<Real>,
    dir: &Vector<Real>,
) -> Option<Real> {
    let t = normal.dot(&(center - origin)) / normal.dot(dir);
    (t >= 0.0).then_some(t)
}

fn separated(
    simplex: &VoronoiSimplex,
    prev: bool,
    dir: Unit<Vector<Real>>,
    exact_dist: bool,
) -> GJKResult {
    if exact_dist {
        let (p1, p2) = witness_points(simplex, prev);
        GJKResult::ClosestPoints(p1, p2, dir)
    } else {
        GJKResult::Proximity(dir)
    }
}

// The points of both shapes matching the projection of the origin on the current, or previous,
// simplex.
fn witness_points(simplex: &VoronoiSimplex, prev: bool) -> (Point<Real>, Point<Real>) {
    let mut p1 = Point::origin();
    let mut p2 = Point::origin();
    let dim = if prev {
        simplex.prev_dimension()
    } else {
        simplex.dimension()
    };

    for i in 0..=dim {
        let (w, pt) = if prev {
            (simplex.prev_proj_coord(i), simplex.prev_point(i))
        } else {
            (simplex.proj_coord(i), simplex.point(i))
        };
        p1 += pt.orig1.coords * w;
        p2 += pt.orig2.coords * w;
    }

    (p1, p2)
}
