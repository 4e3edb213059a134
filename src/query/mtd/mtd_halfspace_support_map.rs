use crate::math::{Isometry, Real};
use crate::query::Hit;
use crate::shape::{HalfSpace, SupportMap};

use super::Mtd;

/// The minimum translation separating the moving support-mapped shape `g1` from a half-space.
///
/// The translation follows the plane normal and brings the deepest point of `g1` back on the
/// plane. The depth is negative if `g1` is above the plane.
pub fn mtd_support_map_halfspace<G: ?Sized + SupportMap>(
    pos1: &Isometry<Real>,
    g1: &G,
    pos2: &Isometry<Real>,
    halfspace: &HalfSpace,
) -> Mtd {
    let pos21 = pos2.inv_mul(pos1);
    let deepest = g1.support_point_toward(&pos21, &-halfspace.normal);

    Mtd {
        normal: halfspace.normal,
        depth: -halfspace.signed_distance(&deepest),
        point: halfspace.project_on_plane(&deepest),
        face_index: Hit::NO_FACE,
    }
    .transform_by(pos2)
}
