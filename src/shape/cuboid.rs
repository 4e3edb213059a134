//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use crate::utils::WSign;

/// Shape of a box.
///
/// The box is centered on the origin of its local frame and aligned with its
/// axes; its center and rotation are given by the pose it is queried with.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be non-negative.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        debug_assert!(half_extents.iter().all(|e| *e >= 0.0));
        Cuboid { half_extents }
    }

    /// The eight corners of this cuboid, in its local frame.
    ///
    /// Corner `i` has coordinate `k` positive iff bit `k` of `i` is set.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let he = self.half_extents;
        core::array::from_fn(|i| {
            Point::new(
                if i & 1 != 0 { he.x } else { -he.x },
                if i & 2 != 0 { he.y } else { -he.y },
                if i & 4 != 0 { he.z } else { -he.z },
            )
        })
    }

    /// The outward unit normal of the face with the given index.
    ///
    /// Faces `0..3` are the positive faces along `x`, `y`, `z`; faces `3..6` the negative ones.
    pub fn face_normal(&self, face: usize) -> Vector<Real> {
        let mut normal = Vector::zeros();
        normal[face % 3] = if face < 3 { 1.0 } else { -1.0 };
        normal
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        dir.copy_sign_to(self.half_extents).into()
    }
}
