use crate::math::{Isometry, Real, Vector};

/// Extra operations with isometries.
pub trait IsometryOps {
    /// Rotates `v` by the component-wise absolute value of the rotation of `self`.
    ///
    /// Maps the half-extents of a local box to those of the world-space box enclosing it.
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real>;
}

impl IsometryOps for Isometry<Real> {
    #[inline]
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.rotation.to_rotation_matrix().into_inner().abs() * *v
    }
}
