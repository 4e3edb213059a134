use na::Unit;

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A sphere centered on the origin of its local frame.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball from its radius.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        debug_assert!(radius >= 0.0, "A ball radius must be non-negative.");
        Ball { radius }
    }
}

impl SupportMap for Ball {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // Any point of the ball supports the null direction.
        match Unit::try_new(*dir, 0.0) {
            Some(dir) => self.local_support_point_toward(&dir),
            None => Point::from(Vector::x() * self.radius),
        }
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        Point::from(dir.into_inner() * self.radius)
    }
}
