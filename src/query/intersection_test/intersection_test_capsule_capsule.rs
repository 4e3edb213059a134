use crate::math::Real;
use crate::query::closest_points::closest_points_segment_segment;
use crate::shape::Segment;

/// Intersection test between two segments inflated by `margin`.
///
/// This is the exact test between balls and capsules, which are all rounded segments.
#[inline]
pub fn intersection_test_segment_segment(seg1: &Segment, seg2: &Segment, margin: Real) -> bool {
    closest_points_segment_segment(seg1, seg2).sq_dist <= margin * margin
}
