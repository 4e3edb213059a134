//! Miscellaneous utilities.

use crate::math::{Real, Vector};

/// Trait to copy the sign of each component of one scalar/vector to another.
pub trait WSign<Rhs>: Sized {
    /// Copy the sign of each component of `self` to the corresponding component of `to`.
    fn copy_sign_to(self, to: Rhs) -> Rhs;
}

impl WSign<Real> for Real {
    #[inline]
    fn copy_sign_to(self, to: Self) -> Self {
        to.copysign(self)
    }
}

impl WSign<Vector<Real>> for Vector<Real> {
    #[inline]
    fn copy_sign_to(self, to: Vector<Real>) -> Vector<Real> {
        Vector::new(
            self.x.copy_sign_to(to.x),
            self.y.copy_sign_to(to.y),
            self.z.copy_sign_to(to.z),
        )
    }
}

/// Trait to compute the orthonormal basis of a vector.
pub trait WBasis: Sized {
    /// Computes the two vectors which, when combined with `self`, form an orthonormal basis.
    fn orthonormal_basis(self) -> [Vector<Real>; 2];
}

impl WBasis for Vector<Real> {
    // Branchless construction from Pixar's "Building an Orthonormal Basis, Revisited".
    fn orthonormal_basis(self) -> [Vector<Real>; 2] {
        let sign = self.z.copy_sign_to(1.0);
        let a = -1.0 / (sign + self.z);
        let b = self.x * self.y * a;

        [
            Vector::new(1.0 + sign * self.x * self.x * a, sign * b, -sign * self.x),
            Vector::new(b, sign + self.y * self.y * a, -self.y),
        ]
    }
}
