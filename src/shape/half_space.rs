//! Support mapping based HalfSpace shape.
use crate::math::{Point, Real, Vector};
use na::Unit;

/// An infinite plane, or rather the half-space it bounds.
///
/// The plane is the set of points `x` such that `normal · x = offset`. The
/// solid half-space lies on the side opposite to `normal`.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct HalfSpace {
    /// The halfspace planar boundary's outward normal.
    pub normal: Unit<Vector<Real>>,
    /// The signed distance from the local origin to the plane, along `normal`.
    pub offset: Real,
}

impl HalfSpace {
    /// Builds a new halfspace from its center and its normal.
    #[inline]
    pub fn new(normal: Unit<Vector<Real>>) -> HalfSpace {
        HalfSpace {
            normal,
            offset: 0.0,
        }
    }

    /// Builds the half-space bounded by the plane `normal · x = offset`.
    #[inline]
    pub fn with_offset(normal: Unit<Vector<Real>>, offset: Real) -> HalfSpace {
        HalfSpace { normal, offset }
    }

    /// The signed distance from `pt` to the boundary plane; negative inside the solid.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.offset
    }

    /// The orthogonal projection of `pt` on the boundary plane.
    #[inline]
    pub fn project_on_plane(&self, pt: &Point<Real>) -> Point<Real> {
        pt - *self.normal * self.signed_distance(pt)
    }
}
