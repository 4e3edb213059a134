use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// The support map of a single point at the local origin.
///
/// This is the core of rounded balls, and the second operand of the ray casts GJK performs on a
/// single shape.
#[derive(Copy, Clone, Debug, Default)]
pub struct ConstantOrigin;

impl SupportMap for ConstantOrigin {
    #[inline]
    fn local_support_point(&self, _: &Vector<Real>) -> Point<Real> {
        Point::origin()
    }
}
