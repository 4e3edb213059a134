use crate::math::{Isometry, Real, Vector, DEFAULT_EPSILON};
use crate::partitioning::VisitStatus;
use crate::query::consts::{MTD_CONVEX_ITERATIONS, MTD_ITERATIONS};
use crate::shape::{CompositeShape, ConvexCore, RoundConvex};
use na::Unit;

use super::{mtd_round_convex_triangle, Mtd};

/// The minimum translation separating the moving rounded convex shape `g1` from a composite
/// shape (`TriMesh`, `HeightField`).
///
/// The translation is found iteratively: at each step, `g1` is pushed out of the triangle it
/// penetrates the most, until it no longer penetrates any triangle. Triangles seen from behind
/// are ignored unless `double_sided` is set.
///
/// If `g1` penetrates no triangle initially, the closest triangle yields a zero depth. Returns
/// `None` if no triangle is close to `g1` or if the pushes cancel out.
pub fn mtd_round_convex_composite_shape(
    pos1: &Isometry<Real>,
    g1: &RoundConvex,
    pos2: &Isometry<Real>,
    g2: &dyn CompositeShape,
    double_sided: bool,
) -> Option<Mtd> {
    let max_iterations = match g1.core {
        ConvexCore::ConvexPolyhedron(_) => MTD_CONVEX_ITERATIONS,
        _ => MTD_ITERATIONS,
    };

    let mut pos12 = pos2.inv_mul(pos1);
    let mut translation = Vector::zeros();
    let mut first_contact = None;

    for i in 0..max_iterations {
        let aabb = g1.aabb(&pos12);
        let mut deepest: Option<Mtd> = None;

        let _ = g2.map_triangles_in_local_aabb(&aabb, &mut |id, tri| {
            let Some(mtd) = mtd_round_convex_triangle(&pos12, g1, tri) else {
                return VisitStatus::Continue;
            };

            let facing = tri.normal().map_or(true, |n| mtd.normal.dot(&n) >= 0.0);
            if (double_sided || facing) && deepest.map_or(true, |d| mtd.depth > d.depth) {
                deepest = Some(Mtd {
                    face_index: id,
                    ..mtd
                });
            }

            VisitStatus::Continue
        });

        let Some(mtd) = deepest else {
            break;
        };

        if mtd.depth <= 0.0 {
            if i == 0 {
                return Some(
                    Mtd {
                        depth: 0.0,
                        ..mtd
                    }
                    .transform_by(pos2),
                );
            }
            break;
        }

        let push = *mtd.normal * mtd.depth;
        translation += push;
        pos12.append_translation_mut(&push.into());
        let _ = first_contact.get_or_insert(mtd);
    }

    let contact = first_contact?;

    let Some((normal, depth)) = Unit::try_new_and_get(translation, DEFAULT_EPSILON) else {
        log::warn!("the depenetration pushes of a composite shape cancel out");
        return None;
    };

    Some(
        Mtd {
            normal,
            depth,
            ..contact
        }
        .transform_by(pos2),
    )
}
