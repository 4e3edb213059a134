use crate::math::{Isometry, Real};
use crate::partitioning::VisitStatus;
use crate::query::consts::SAME_DISTANCE_EPSILON;
use crate::query::{Hit, HitFlags};
use crate::shape::{CompositeShape, RoundConvex};

use super::{sweep_round_convex_triangle, SweepParams, TriangleSweepHit};

/// Should a sweep hit on a triangle replace the best hit found so far?
///
/// The alignment of a hit is the dot product between the normal of its triangle and the
/// motion. Hits closer than [`SAME_DISTANCE_EPSILON`] are considered simultaneous; the one
/// whose triangle is the most opposed to the motion wins.
#[inline]
pub fn is_better_sweep_hit(
    toi: Real,
    alignment: Real,
    best_toi: Real,
    best_alignment: Real,
) -> bool {
    toi < best_toi - SAME_DISTANCE_EPSILON
        || ((toi - best_toi).abs() <= SAME_DISTANCE_EPSILON && alignment < best_alignment)
}

/// Sweeps a rounded convex shape against a composite shape (`TriMesh`, `HeightField`).
///
/// `pos1` is the pose of the moving shape `g1` and `pos2` the pose of `g2`. Triangles facing
/// away from the motion are skipped unless `params.flags` hits back faces; a hit on such a
/// triangle gets its normal flipped to oppose the motion. With
/// [`HitFlags::ASSUME_NO_INITIAL_OVERLAP`], triangles touched at the start of the motion are
/// ignored.
pub fn sweep_round_convex_composite_shape(
    pos1: &Isometry<Real>,
    g1: &RoundConvex,
    pos2: &Isometry<Real>,
    g2: &dyn CompositeShape,
    params: &SweepParams,
) -> Option<Hit> {
    let pos12 = pos2.inv_mul(pos1);
    let local_dir = pos2.inverse_transform_vector(&params.dir);
    let swept_aabb = g1.aabb(&pos12).swept(&(local_dir * params.max_dist));
    let hits_back_faces = params.flags.hits_back_faces();
    let any_hit = params.flags.contains(HitFlags::ANY_HIT);
    let skip_overlaps = params.flags.contains(HitFlags::ASSUME_NO_INITIAL_OVERLAP);

    let mut best: Option<(u32, TriangleSweepHit, Real)> = None;

    let _ = g2.map_triangles_in_local_aabb(&swept_aabb, &mut |id, tri| {
        let Some(tri_normal) = tri.normal() else {
            return VisitStatus::Continue;
        };

        let alignment = tri_normal.dot(&local_dir);
        if !hits_back_faces && alignment >= 0.0 {
            return VisitStatus::Continue;
        }

        let max_toi = best.as_ref().map_or(params.max_dist, |(_, hit, _)| {
            (hit.toi + SAME_DISTANCE_EPSILON).min(params.max_dist)
        });

        if let Some(hit) = sweep_round_convex_triangle(&pos12, g1, &local_dir, tri, max_toi) {
            if skip_overlaps && hit.toi == 0.0 {
                return VisitStatus::Continue;
            }

            let replace = match &best {
                Some((_, best_hit, best_alignment)) => {
                    is_better_sweep_hit(hit.toi, alignment, best_hit.toi, *best_alignment)
                }
                None => true,
            };

            if replace {
                best = Some((id, hit, alignment));
            }
        }

        VisitStatus::exit_if(any_hit && best.is_some())
    });

    let (face_index, hit, alignment) = best?;

    if hit.toi == 0.0 {
        return Some(Hit::initial_overlap(
            pos2 * hit.witness,
            &params.dir,
            face_index,
        ));
    }

    let mut normal = hit.normal;

    if alignment > 0.0 && normal.dot(&local_dir) > 0.0 {
        normal = -normal;
    }

    Some(Hit::new(
        pos2 * hit.witness,
        pos2 * normal,
        hit.toi,
        face_index,
    ))
}
