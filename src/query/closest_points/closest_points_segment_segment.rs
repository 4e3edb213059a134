use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::shape::Segment;

/// The closest points between two segments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentSegmentClosest {
    /// The squared distance between the segments.
    pub sq_dist: Real,
    /// The parameter of the closest point on the first segment.
    pub s: Real,
    /// The parameter of the closest point on the second segment.
    pub t: Real,
    /// The closest point on the first segment.
    pub p1: Point<Real>,
    /// The closest point on the second segment.
    pub p2: Point<Real>,
}

/// Closest points between two segments expressed in the same frame.
///
/// Parallel segments get one of their (infinitely many) pairs of closest points.
#[inline]
pub fn closest_points_segment_segment(seg1: &Segment, seg2: &Segment) -> SegmentSegmentClosest {
    // Inspired by Real-time collision detection by Christer Ericson.
    let d1 = seg1.scaled_direction();
    let d2 = seg2.scaled_direction();
    let r = seg1.a - seg2.a;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let mut s;
    let mut t;

    let eps = DEFAULT_EPSILON;
    if a <= eps && e <= eps {
        s = 0.0;
        t = 0.0;
    } else if a <= eps {
        s = 0.0;
        t = na::clamp(f / e, 0.0, 1.0);
    } else {
        let c = d1.dot(&r);
        if e <= eps {
            t = 0.0;
            s = na::clamp(-c / a, 0.0, 1.0);
        } else {
            let b = d1.dot(&d2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            // Use absolute and ulps error to test collinearity.
            if denom > eps && !ulps_eq!(ae, bb) {
                s = na::clamp((b * f - c * e) / denom, 0.0, 1.0);
            } else {
                s = 0.0;
            }

            t = (b * s + f) / e;

            if t < 0.0 {
                t = 0.0;
                s = na::clamp(-c / a, 0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = na::clamp((b - c) / a, 0.0, 1.0);
            }
        }
    }

    let p1 = seg1.point_at_param(s);
    let p2 = seg2.point_at_param(t);

    SegmentSegmentClosest {
        sq_dist: na::distance_squared(&p1, &p2),
        s,
        t,
        p1,
        p2,
    }
}
