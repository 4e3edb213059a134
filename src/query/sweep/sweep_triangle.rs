use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::closest_points::{closest_points_point_triangle, closest_points_segment_triangle};
use crate::query::gjk::{self, VoronoiSimplex};
use crate::query::ray::local_ray_intersection_with_capsule;
use crate::query::Ray;
use crate::shape::{Capsule, ConvexCore, RoundConvex, Segment, Triangle};
use arrayvec::ArrayVec;
use na::Unit;

/// The impact of a shape swept against a single triangle.
///
/// Everything is expressed in the frame of the triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleSweepHit {
    /// The distance traveled before the impact, zero if the shapes already overlap.
    pub toi: Real,
    /// The unit impact normal, opposing the motion.
    pub normal: Vector<Real>,
    /// The impact point on the triangle.
    pub witness: Point<Real>,
}

impl TriangleSweepHit {
    fn initial_overlap(witness: Point<Real>, dir: &Vector<Real>) -> Self {
        Self {
            toi: 0.0,
            normal: -dir,
            witness,
        }
    }
}

/// Sweeps a ball of the given `center` and `radius` along the unit vector `dir` against `tri`.
///
/// The face plane is tested first; edges and vertices are handled as capsules of radius
/// `radius` cast against the ball center.
pub fn sweep_sphere_triangle(
    center: &Point<Real>,
    radius: Real,
    dir: &Vector<Real>,
    tri: &Triangle,
    max_toi: Real,
) -> Option<TriangleSweepHit> {
    let (proj, _) = closest_points_point_triangle(center, tri);
    if na::distance_squared(&proj, center) <= radius * radius {
        return Some(TriangleSweepHit::initial_overlap(proj, dir));
    }

    if let Some(normal) = tri.normal() {
        let normal = if normal.dot(dir) > 0.0 {
            -*normal
        } else {
            *normal
        };
        let dn = normal.dot(dir);

        if dn < -DEFAULT_EPSILON {
            let dist = normal.dot(&(center - tri.a)) - radius;

            if dist >= 0.0 {
                let toi = dist / -dn;
                let witness = center + dir * toi - normal * radius;

                if toi <= max_toi && closest_points_point_triangle(&witness, tri).1.is_on_face() {
                    return Some(TriangleSweepHit {
                        toi,
                        normal,
                        witness,
                    });
                }
            }
        }
    }

    let ray = Ray::new(*center, *dir);
    let mut best: Option<TriangleSweepHit> = None;

    for edge in tri.edges() {
        let capsule = Capsule::new(edge.a, edge.b, radius);
        let max_toi = best.map_or(max_toi, |b| b.toi);

        if let Some(inter) = local_ray_intersection_with_capsule(&capsule, &ray, max_toi) {
            if best.map_or(true, |b| inter.time_of_impact < b.toi) {
                best = Some(TriangleSweepHit {
                    toi: inter.time_of_impact,
                    normal: inter.normal,
                    witness: ray.point_at(inter.time_of_impact) - inter.normal * radius,
                });
            }
        }
    }

    best
}

/// The triangles bounding the volume swept by `tri` translated along `shift`, restricted to the
/// ones a point moving along `dir` can enter through.
///
/// The side quads are split into two triangles each. Only the cap facing the motion is kept.
pub fn extrude_triangle(
    tri: &Triangle,
    shift: &Vector<Real>,
    dir: &Vector<Real>,
) -> ArrayVec<Triangle, 7> {
    let mut result = ArrayVec::new();
    let moved = tri.translated(shift);

    if let Some(normal) = tri.normal() {
        let ns = normal.dot(shift);
        let nd = normal.dot(dir);

        if ns.abs() <= DEFAULT_EPSILON * shift.norm() {
            // Flat extrusion: both caps are coplanar.
            result.push(*tri);
        } else if nd != 0.0 {
            if (ns > 0.0) == (nd > 0.0) {
                result.push(*tri);
            } else {
                result.push(moved);
            }
        }
    }

    for edge in tri.edges() {
        let (p, q) = (edge.a, edge.b);
        result.push(Triangle::new(p, q, q + shift));
        result.push(Triangle::new(p, q + shift, p + shift));
    }

    result
}

/// Sweeps a capsule with the core segment `seg` and the given `radius` along the unit vector
/// `dir` against `tri`.
///
/// The triangle is extruded along the capsule axis so the capsule reduces to a ball centered
/// on `seg.a`.
pub fn sweep_capsule_triangle(
    seg: &Segment,
    radius: Real,
    dir: &Vector<Real>,
    tri: &Triangle,
    max_toi: Real,
) -> Option<TriangleSweepHit> {
    let closest = closest_points_segment_triangle(seg, tri);
    if closest.sq_dist <= radius * radius {
        return Some(TriangleSweepHit::initial_overlap(closest.p2, dir));
    }

    let shift = seg.a - seg.b;
    if shift.norm_squared() <= DEFAULT_EPSILON * DEFAULT_EPSILON {
        return sweep_sphere_triangle(&seg.a, radius, dir, tri, max_toi);
    }

    let mut best: Option<TriangleSweepHit> = None;

    for extruded in extrude_triangle(tri, &shift, dir) {
        let max_toi = best.map_or(max_toi, |b| b.toi);

        if let Some(hit) = sweep_sphere_triangle(&seg.a, radius, dir, &extruded, max_toi) {
            if best.map_or(true, |b| hit.toi < b.toi) {
                best = Some(hit);
            }
        }
    }

    let mut hit = best?;
    let moved = seg.translated(&(dir * hit.toi));
    hit.witness = closest_points_segment_triangle(&moved, tri).p2;
    Some(hit)
}

/// Sweeps a rounded convex shape along the unit vector `dir` against `tri`.
///
/// `pos12` is the pose of `g` relative to the triangle and `dir` is expressed in the frame of
/// the triangle. Balls and capsules use the exact kernels; other cores use GJK.
pub fn sweep_round_convex_triangle(
    pos12: &Isometry<Real>,
    g: &RoundConvex,
    dir: &Vector<Real>,
    tri: &Triangle,
    max_toi: Real,
) -> Option<TriangleSweepHit> {
    match &g.core {
        ConvexCore::Point => {
            let center = Point::from(pos12.translation.vector);
            sweep_sphere_triangle(&center, g.border_radius, dir, tri, max_toi)
        }
        ConvexCore::Segment(seg) => {
            sweep_capsule_triangle(&seg.transformed(pos12), g.border_radius, dir, tri, max_toi)
        }
        ConvexCore::Cuboid(_) | ConvexCore::ConvexPolyhedron(_) => {
            let (toi, normal, witness, _) = gjk::directional_distance(
                pos12,
                tri,
                g,
                dir,
                &mut VoronoiSimplex::new(),
            )?;

            if toi > max_toi {
                return None;
            }

            if toi == 0.0 {
                return Some(TriangleSweepHit::initial_overlap(tri.center(), dir));
            }

            let normal = Unit::try_new(normal, DEFAULT_EPSILON).map_or(-dir, |n| *n);
            Some(TriangleSweepHit {
                toi,
                normal,
                witness,
            })
        }
    }
}
