use crate::math::{Isometry, Real, DEFAULT_EPSILON};
use crate::query::gjk::{self, VoronoiSimplex};
use crate::query::Hit;
use crate::shape::RoundConvex;
use na::Unit;

use super::SweepParams;

/// Sweeps the rounded convex shape `g1` against the rounded convex shape `g2` with GJK.
///
/// `pos1` and `pos2` are the poses of the moving shape `g1` and of the target `g2`. The hit
/// point lies on the surface of `g2`; if `g2` is a convex polyhedron, the index of the face hit
/// is reported too.
pub fn sweep_round_convex_round_convex(
    pos1: &Isometry<Real>,
    g1: &RoundConvex,
    pos2: &Isometry<Real>,
    g2: &RoundConvex,
    params: &SweepParams,
) -> Option<Hit> {
    let pos21 = pos2.inv_mul(pos1);
    let local_dir = pos2.inverse_transform_vector(&params.dir);
    let (toi, normal, witness, _) =
        gjk::directional_distance(&pos21, g2, g1, &local_dir, &mut VoronoiSimplex::new())?;

    if toi > params.max_dist {
        return None;
    }

    if toi == 0.0 {
        return Some(Hit::initial_overlap(
            pos1.translation.vector.into(),
            &params.dir,
            Hit::NO_FACE,
        ));
    }

    let normal = Unit::try_new(normal, DEFAULT_EPSILON).map_or(-local_dir, |n| *n);
    let face_index = g2
        .as_convex_polyhedron()
        .map_or(Hit::NO_FACE, |poly| poly.find_sweep_face(&witness, &local_dir));

    Some(Hit::new(pos2 * witness, pos2 * normal, toi, face_index))
}
