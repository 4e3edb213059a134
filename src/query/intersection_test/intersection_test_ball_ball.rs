use crate::math::{Point, Real};
use crate::shape::Ball;

/// Do two balls touch or overlap?
///
/// `center12` is the center of `b2` in the local frame of `b1`.
#[inline]
pub fn intersection_test_ball_ball(center12: &Point<Real>, b1: &Ball, b2: &Ball) -> bool {
    let reach = b1.radius + b2.radius;
    center12.coords.norm_squared() <= reach * reach
}
