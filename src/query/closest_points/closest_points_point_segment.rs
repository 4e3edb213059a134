use crate::math::{Point, Real};
use crate::shape::{Segment, SegmentPointLocation};

/// The squared distance between a point and a segment, and the location of its projection.
///
/// A degenerate segment projects everything on its first vertex.
#[inline]
pub fn closest_points_point_segment(
    pt: &Point<Real>,
    seg: &Segment,
) -> (Real, SegmentPointLocation) {
    let ab = seg.b - seg.a;
    let ap = pt - seg.a;
    let ab_ap = ab.dot(&ap);
    let sqnab = ab.norm_squared();

    if ab_ap <= 0.0 || sqnab <= crate::math::DEFAULT_EPSILON {
        // Voronoï region of vertex 'a'.
        (ap.norm_squared(), SegmentPointLocation::OnVertex(0))
    } else if ab_ap >= sqnab {
        // Voronoï region of vertex 'b'.
        ((pt - seg.b).norm_squared(), SegmentPointLocation::OnVertex(1))
    } else {
        // Voronoï region of the segment interior.
        let u = ab_ap / sqnab;
        let proj = seg.a + ab * u;
        ((pt - proj).norm_squared(), SegmentPointLocation::OnEdge([1.0 - u, u]))
    }
}
