use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{RoundConvex, TypedShape};
use na::Unit;

use super::{
    mtd_round_convex_composite_shape, mtd_round_convex_round_convex, mtd_support_map_halfspace,
};

/// The minimum translation separating two overlapping shapes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mtd {
    /// The direction the moving shape must be translated along to stop overlapping.
    ///
    /// It points from the other shape toward the moving shape.
    pub normal: Unit<Vector<Real>>,
    /// The length of the translation.
    ///
    /// The kernels report negative values for separated shapes; [`compute_mtd`] clamps them
    /// to zero.
    pub depth: Real,
    /// A point of the contact region.
    pub point: Point<Real>,
    /// The index of the mesh or heightfield triangle involved.
    ///
    /// [`Hit::NO_FACE`](crate::query::Hit::NO_FACE) for other shapes.
    pub face_index: u32,
}

impl Mtd {
    /// Transforms this result by `pos`.
    #[inline]
    #[must_use]
    pub fn transform_by(&self, pos: &Isometry<Real>) -> Self {
        Self {
            normal: pos * self.normal,
            point: pos * self.point,
            ..*self
        }
    }
}

/// Computes the minimum translation separating the shape `g1`, moving, from `g2`.
///
/// Returns `None` if no separation direction can be found, e.g. for balls with coinciding
/// centers, or if both shapes are half-spaces, meshes or heightfields. Triangles are treated as
/// single-sided.
pub fn compute_mtd(
    pos1: &Isometry<Real>,
    g1: &TypedShape,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
) -> Option<Mtd> {
    let mtd = match RoundConvex::from_typed_shape(g1, 0.0) {
        Some(round1) => mtd_round_convex_shape(pos1, &round1, pos2, g2, false)?,
        None => {
            // Move `g2` instead and flip the result.
            let round2 = RoundConvex::from_typed_shape(g2, 0.0)?;
            let mtd = mtd_round_convex_shape(pos2, &round2, pos1, g1, false)?;
            Mtd {
                normal: -mtd.normal,
                ..mtd
            }
        }
    };

    Some(Mtd {
        depth: mtd.depth.max(0.0),
        ..mtd
    })
}

/// The minimum translation separating the moving rounded convex shape `g1` from `g2`.
///
/// The depth is negative if the shapes are separated.
pub(crate) fn mtd_round_convex_shape(
    pos1: &Isometry<Real>,
    g1: &RoundConvex,
    pos2: &Isometry<Real>,
    g2: &TypedShape,
    double_sided: bool,
) -> Option<Mtd> {
    if let Some(round2) = RoundConvex::from_typed_shape(g2, 0.0) {
        mtd_round_convex_round_convex(pos1, g1, pos2, &round2)
    } else if let TypedShape::HalfSpace(halfspace) = g2 {
        Some(mtd_support_map_halfspace(pos1, g1, pos2, halfspace))
    } else {
        let composite = g2.as_composite_shape()?;
        mtd_round_convex_composite_shape(pos1, g1, pos2, composite, double_sided)
    }
}
