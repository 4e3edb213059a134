use crate::math::{Point, Real};
use crate::query::closest_points::closest_points_point_segment;
use crate::shape::{Segment, Triangle, TrianglePointLocation};

/// The point of `tri` closest to `pt`, and its location on the triangle.
///
/// Triangles with a vanishing area are handled as the union of their edges.
pub fn closest_points_point_triangle(
    pt: &Point<Real>,
    tri: &Triangle,
) -> (Point<Real>, TrianglePointLocation) {
    let Triangle { a, b, c } = *tri;
    let (ab, ac, bc) = (b - a, c - a, c - b);
    let (ap, bp, cp) = (pt - a, pt - b, pt - c);

    // Projections of the point on the two edges leaving `a`, measured from each vertex.
    let (ab_ap, ac_ap) = (ab.dot(&ap), ac.dot(&ap));
    let (ab_bp, ac_bp) = (ab.dot(&bp), ac.dot(&bp));
    let (ab_cp, ac_cp) = (ab.dot(&cp), ac.dot(&cp));

    if ab_ap <= 0.0 && ac_ap <= 0.0 {
        return (a, TrianglePointLocation::OnVertex(0));
    }
    if ab_bp >= 0.0 && ac_bp <= ab_bp {
        return (b, TrianglePointLocation::OnVertex(1));
    }
    if ac_cp >= 0.0 && ab_cp <= ac_cp {
        return (c, TrianglePointLocation::OnVertex(2));
    }

    // Signed areas of the sub-triangles opposite to each vertex, scaled by the face normal.
    let n = ab.cross(&ac);
    let vc = n.dot(&ab.cross(&ap));
    if vc < 0.0 && ab_ap >= 0.0 && ab_bp <= 0.0 {
        let v = ab_ap / ab.norm_squared();
        return (a + ab * v, TrianglePointLocation::OnEdge(0, [1.0 - v, v]));
    }

    let vb = -n.dot(&ac.cross(&cp));
    if vb < 0.0 && ac_ap >= 0.0 && ac_cp <= 0.0 {
        let w = ac_ap / ac.norm_squared();
        return (a + ac * w, TrianglePointLocation::OnEdge(2, [1.0 - w, w]));
    }

    let va = n.dot(&bc.cross(&bp));
    if va < 0.0 && ac_bp >= ab_bp && ab_cp >= ac_cp {
        let w = bc.dot(&bp) / bc.norm_squared();
        return (b + bc * w, TrianglePointLocation::OnEdge(1, [1.0 - w, w]));
    }

    let sum = va + vb + vc;
    if sum == 0.0 {
        return closest_on_edges(pt, tri);
    }

    let side = u32::from(n.dot(&ap) < 0.0);
    let (v, w) = (vb / sum, vc / sum);
    (
        a + ab * v + ac * w,
        TrianglePointLocation::OnFace(side, [1.0 - v - w, v, w]),
    )
}

fn closest_on_edges(pt: &Point<Real>, tri: &Triangle) -> (Point<Real>, TrianglePointLocation) {
    // Edge ids follow the `TrianglePointLocation` numbering: AB, BC, AC.
    let edges = [
        Segment::new(tri.a, tri.b),
        Segment::new(tri.b, tri.c),
        Segment::new(tri.a, tri.c),
    ];

    let mut best = (Real::MAX, Point::origin(), TrianglePointLocation::OnVertex(0));

    for (i, edge) in edges.iter().enumerate() {
        let (sq_dist, loc) = closest_points_point_segment(pt, edge);
        if sq_dist < best.0 {
            best = (
                sq_dist,
                edge.point_at(&loc),
                TrianglePointLocation::OnEdge(i as u32, loc.barycentric_coordinates()),
            );
        }
    }

    (best.1, best.2)
}
