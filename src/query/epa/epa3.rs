//! Three-dimensional penetration depth queries using the Expanding Polytope Algorithm.

use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::consts::{EPA_EPSILON, EPA_MAX_ITERATIONS, GJK_TOLERANCE};
use crate::query::closest_points::closest_points_point_triangle;
use crate::query::gjk::{CSOPoint, VoronoiSimplex};
use crate::shape::{SupportMap, Triangle};
use crate::utils::WBasis;
use na::Unit;
use ordered_float::OrderedFloat;
use core::cmp::Reverse;
use std::collections::BinaryHeap;

// Faces are popped by increasing distance to the origin.
type FaceId = (Reverse<OrderedFloat<Real>>, usize);

fn face_id(id: usize, dist: Real) -> Option<FaceId> {
    if dist < -GJK_TOLERANCE {
        None
    } else {
        Some((Reverse(OrderedFloat(dist)), id))
    }
}

/// A triangle of the polytope, wound so its normal points away from the origin.
#[derive(Clone, Debug)]
struct Face {
    /// Indices of the three vertices, counter-clockwise.
    pts: [usize; 3],
    /// `adj[k]` shares the edge from `pts[k]` to `pts[(k + 1) % 3]`.
    adj: [usize; 3],
    normal: Unit<Vector<Real>>,
    /// Barycentric coordinates of the projection of the origin.
    bcoords: [Real; 3],
    deleted: bool,
}

impl Face {
    fn triangle(vertices: &[CSOPoint], pts: [usize; 3]) -> Triangle {
        let [a, b, c] = pts.map(|i| vertices[i].point);
        Triangle::new(a, b, c)
    }

    /// Builds the face and tells whether the origin projects inside it, or onto it within
    /// `EPA_EPSILON` when the projection falls on its boundary.
    fn new(vertices: &[CSOPoint], pts: [usize; 3], adj: [usize; 3]) -> (Self, bool) {
        let tri = Self::triangle(vertices, pts);
        let (proj, loc) = closest_points_point_triangle(&Point::origin(), &tri);
        let proj_inside =
            loc.is_on_face() || proj.coords.norm_squared() <= EPA_EPSILON * EPA_EPSILON;

        // Degenerate faces get a zero normal so they are never seen as a silhouette boundary.
        let normal = tri
            .normal()
            .unwrap_or_else(|| Unit::new_unchecked(Vector::zeros()));

        let face = Face {
            pts,
            adj,
            normal,
            bcoords: loc.barycentric_coordinates(),
            deleted: false,
        };
        (face, proj_inside)
    }

    /// The points of both shapes matching the projection of the origin on this face.
    fn closest_points(&self, vertices: &[CSOPoint]) -> (Point<Real>, Point<Real>) {
        let mut p1 = Vector::zeros();
        let mut p2 = Vector::zeros();

        for (&i, w) in self.pts.iter().zip(self.bcoords) {
            p1 += vertices[i].orig1.coords * w;
            p2 += vertices[i].orig2.coords * w;
        }

        (p1.into(), p2.into())
    }

    /// The position, in `pts`, of the vertex following `vertex`.
    fn next_ccw_pt_id(&self, vertex: usize) -> usize {
        match self.pts.iter().position(|&pt| pt == vertex) {
            Some(k) => (k + 1) % 3,
            None => {
                log::debug!("EPA: vertex {} is not part of face {:?}.", vertex, self.pts);
                0
            }
        }
    }

    /// Whether `vertex` is in front of this face, as seen across the edge opposite to
    /// `pts[opp]`.
    fn can_be_seen_by(&self, vertices: &[CSOPoint], vertex: usize, opp: usize) -> bool {
        let [p0, p1, p2] = [0, 1, 2].map(|k| vertices[self.pts[(opp + k) % 3]].point);
        let pt = vertices[vertex].point;

        // A zero normal makes the first test pass: degenerate faces are always visible.
        (pt - p0).dot(&self.normal) >= -GJK_TOLERANCE
            || Triangle::new(p1, p2, pt).area() <= GJK_TOLERANCE
    }
}

/// An edge of the horizon seen from a new support point: the edge of `face` opposite to its
/// vertex `opp`.
struct SilhouetteEdge {
    face: usize,
    opp: usize,
}

/// The Expanding Polytope Algorithm in 3D.
///
/// The buffers are kept between calls so that the same `EPA` can be reused without
/// reallocating.
#[derive(Default)]
pub struct EPA {
    vertices: Vec<CSOPoint>,
    faces: Vec<Face>,
    silhouette: Vec<SilhouetteEdge>,
    heap: BinaryHeap<FaceId>,
}

impl EPA {
    /// Creates a new instance of the 3D Expanding Polytope Algorithm.
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.heap.clear();
        self.silhouette.clear();
    }

    /// The penetration of `g1` and `g2`, given the GJK simplex that proved their intersection.
    ///
    /// `pos12` is the pose of `g2` relative to `g1`. Returns the deepest points of both shapes
    /// and the outward normal of `g1` at its deepest point, all in the local frame of `g1`.
    /// Returns `None` if the shapes don't overlap or if the polytope degenerates.
    pub fn closest_points<G1, G2>(
        &mut self,
        pos12: &Isometry<Real>,
        g1: &G1,
        g2: &G2,
        simplex: &VoronoiSimplex,
    ) -> Option<(Point<Real>, Point<Real>, Unit<Vector<Real>>)>
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        self.reset();
        self.vertices
            .extend((0..=simplex.dimension()).map(|i| *simplex.point(i)));

        match simplex.dimension() {
            // The origin is a support point of both shapes: they are just touching.
            0 => return Some((Point::origin(), Point::origin(), Vector::y_axis())),
            3 => self.init_from_tetrahedron()?,
            _ => self.init_from_triangle(pos12, g1, g2)?,
        }

        let mut upper_bound = Real::MAX;
        let mut best = *self.heap.peek()?;
        let mut prev_dist = 0.0;
        let mut niter = 0;

        while let Some(top) = self.heap.pop() {
            let face = self.faces[top.1].clone();

            if face.deleted {
                continue;
            }

            let support = CSOPoint::from_shapes(pos12, g1, g2, &face.normal);
            let support_id = self.vertices.len();
            self.vertices.push(support);

            let candidate = support.point.coords.dot(&face.normal);
            if candidate < upper_bound {
                best = top;
                upper_bound = candidate;
            }

            let dist = (top.0).0 .0;

            // The second test catches polytopes that stopped growing because of rounding errors.
            if upper_bound - dist < EPA_EPSILON
                || ((dist - prev_dist).abs() < DEFAULT_EPSILON && candidate < upper_bound)
            {
                return Some(self.penetration(best.1));
            }

            prev_dist = dist;
            self.faces[top.1].deleted = true;

            for k in 0..3 {
                let opp = self.faces[face.adj[k]].next_ccw_pt_id(face.pts[k]);
                self.compute_silhouette(support_id, face.adj[k], opp);
            }

            if self.silhouette.is_empty() {
                log::debug!("EPA: empty silhouette.");
                return None;
            }

            let first_new_face = self.faces.len();
            let silhouette = core::mem::take(&mut self.silhouette);

            for edge in &silhouette {
                if self.faces[edge.face].deleted {
                    continue;
                }

                let new_id = self.faces.len();
                let neighbor = &mut self.faces[edge.face];
                let pts = [
                    neighbor.pts[(edge.opp + 2) % 3],
                    neighbor.pts[(edge.opp + 1) % 3],
                    support_id,
                ];
                neighbor.adj[(edge.opp + 1) % 3] = new_id;

                let adj = [edge.face, new_id + 1, new_id - 1];
                let (new_face, proj_inside) = Face::new(&self.vertices, pts, adj);
                let new_dist = new_face
                    .normal
                    .dot(&self.vertices[new_face.pts[0]].point.coords);
                self.faces.push(new_face);

                if proj_inside {
                    if new_dist < dist {
                        // Rounding errors made the polytope non-convex.
                        let (p1, p2) = face.closest_points(&self.vertices);
                        return Some((p1, p2, face.normal));
                    }

                    self.heap.push(face_id(new_id, new_dist)?);
                }
            }

            self.silhouette = silhouette;
            self.silhouette.clear();

            if first_new_face == self.faces.len() {
                log::debug!("EPA: the silhouette only had deleted faces.");
                return None;
            }

            // Close the fan of new faces.
            let last_new_face = self.faces.len() - 1;
            self.faces[first_new_face].adj[2] = last_new_face;
            self.faces[last_new_face].adj[1] = first_new_face;

            niter += 1;
            if niter > EPA_MAX_ITERATIONS {
                break;
            }
        }

        // Out of iterations: the best face so far is usually close enough.
        Some(self.penetration(best.1))
    }

    fn penetration(&self, face: usize) -> (Point<Real>, Point<Real>, Unit<Vector<Real>>) {
        let face = &self.faces[face];
        let (p1, p2) = face.closest_points(&self.vertices);
        (p1, p2, face.normal)
    }

    fn init_from_tetrahedron(&mut self) -> Option<()> {
        let dp1 = self.vertices[1] - self.vertices[0];
        let dp2 = self.vertices[2] - self.vertices[0];
        let dp3 = self.vertices[3] - self.vertices[0];

        if dp1.cross(&dp2).dot(&dp3) > 0.0 {
            self.vertices.swap(1, 2)
        }

        const PTS: [[usize; 3]; 4] = [[0, 1, 2], [1, 3, 2], [0, 2, 3], [0, 3, 1]];
        const ADJ: [[usize; 3]; 4] = [[3, 1, 2], [3, 2, 0], [0, 1, 3], [2, 1, 0]];
        let mut any_proj_inside = false;

        for (i, (pts, adj)) in PTS.into_iter().zip(ADJ).enumerate() {
            let (face, proj_inside) = Face::new(&self.vertices, pts, adj);

            if proj_inside {
                let dist = face.normal.dot(&self.vertices[face.pts[0]].point.coords);
                self.heap.push(face_id(i, dist)?);
                any_proj_inside = true;
            }

            self.faces.push(face);
        }

        if !any_proj_inside {
            log::debug!("EPA: the origin does not project inside the initial simplex.");
            return None;
        }

        Some(())
    }

    // Starts from two opposite faces on a triangle, completing a segment with a support point
    // orthogonal to it.
    fn init_from_triangle<G1, G2>(&mut self, pos12: &Isometry<Real>, g1: &G1, g2: &G2) -> Option<()>
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        if self.vertices.len() == 2 {
            let dir = (self.vertices[1] - self.vertices[0])
                .try_normalize(DEFAULT_EPSILON)?
                .orthonormal_basis()[0];
            self.vertices
                .push(CSOPoint::from_shapes(pos12, g1, g2, &dir));
        }

        let (front, _) = Face::new(&self.vertices, [0, 1, 2], [1, 1, 1]);
        let (back, _) = Face::new(&self.vertices, [0, 2, 1], [0, 0, 0]);
        self.faces.push(front);
        self.faces.push(back);
        self.heap.push(face_id(0, 0.0)?);
        self.heap.push(face_id(1, 0.0)?);
        Some(())
    }

    fn compute_silhouette(&mut self, vertex: usize, id: usize, opp: usize) {
        if self.faces[id].deleted {
            return;
        }

        if !self.faces[id].can_be_seen_by(&self.vertices, vertex, opp) {
            self.silhouette.push(SilhouetteEdge { face: id, opp });
            return;
        }

        self.faces[id].deleted = true;

        // Walk across the two edges of the face touching `pts[opp]`.
        for k in [(opp + 2) % 3, opp] {
            let neighbor = self.faces[id].adj[k];
            let neighbor_opp = self.faces[neighbor].next_ccw_pt_id(self.faces[id].pts[k]);
            self.compute_silhouette(vertex, neighbor, neighbor_opp);
        }
    }
}
