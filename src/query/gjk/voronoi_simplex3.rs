use crate::math::{Point, Real};
use crate::query::closest_points::{closest_points_point_segment, closest_points_point_triangle};
use crate::query::consts::GJK_TOLERANCE;
use crate::query::gjk::CSOPoint;
use crate::shape::{Segment, SegmentPointLocation, Triangle, TrianglePointLocation};

/// A simplex of dimension up to 3 using Voronoï regions for computing point projections.
#[derive(Clone, Debug)]
pub struct VoronoiSimplex {
    prev_vertices: [usize; 4],
    prev_dim: usize,
    prev_proj: [Real; 4],

    vertices: [CSOPoint; 4],
    proj: [Real; 4],
    dim: usize,
}

impl Default for VoronoiSimplex {
    fn default() -> Self {
        Self::new()
    }
}

impl VoronoiSimplex {
    /// Creates a new empty simplex.
    pub fn new() -> VoronoiSimplex {
        VoronoiSimplex {
            prev_vertices: [0, 1, 2, 3],
            prev_proj: [0.0; 4],
            prev_dim: 0,
            vertices: [CSOPoint::origin(); 4],
            proj: [0.0; 4],
            dim: 0,
        }
    }

    /// Resets this simplex to a single point.
    pub fn reset(&mut self, pt: CSOPoint) {
        self.prev_dim = 0;
        self.dim = 0;
        self.prev_vertices = [0, 1, 2, 3];
        self.vertices[0] = pt;
        self.proj[0] = 1.0;
    }

    /// Add a point to this simplex.
    ///
    /// Returns `false` if the point is too close to an existing vertex or if the simplex is
    /// already a tetrahedron.
    pub fn add_point(&mut self, pt: CSOPoint) -> bool {
        if self.dim == 3 {
            return false;
        }

        self.prev_dim = self.dim;
        self.prev_proj = self.proj;
        self.prev_vertices = [0, 1, 2, 3];

        for i in 0..self.dim + 1 {
            if (self.vertices[i].point - pt.point).norm_squared() < GJK_TOLERANCE {
                return false;
            }
        }

        self.dim += 1;
        self.vertices[self.dim] = pt;
        true
    }

    /// Retrieves the barycentric coordinate associated to the `i`-th vertex by the last call
    /// to `project_origin_and_reduce`.
    pub fn proj_coord(&self, i: usize) -> Real {
        debug_assert!(i <= self.dim, "Index out of bounds.");
        self.proj[i]
    }

    /// The i-th point of this simplex.
    pub fn point(&self, i: usize) -> &CSOPoint {
        debug_assert!(i <= self.dim, "Index out of bounds.");
        &self.vertices[i]
    }

    /// Retrieves the barycentric coordinate associated to the `i`-th vertex before the last
    /// call to `project_origin_and_reduce`.
    pub fn prev_proj_coord(&self, i: usize) -> Real {
        debug_assert!(i <= self.prev_dim, "Index out of bounds.");
        self.prev_proj[i]
    }

    /// The i-th point of the simplex before the last call to `project_origin_and_reduce`.
    pub fn prev_point(&self, i: usize) -> &CSOPoint {
        debug_assert!(i <= self.prev_dim, "Index out of bounds.");
        &self.vertices[self.prev_vertices[i]]
    }

    /// The dimension of the smallest subspace that can contain this simplex.
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// The dimension of the simplex before the last call to `project_origin_and_reduce`.
    pub fn prev_dimension(&self) -> usize {
        self.prev_dim
    }

    /// The maximum squared length of the vertices of this simplex.
    pub fn max_sq_len(&self) -> Real {
        self.vertices[..self.dim + 1]
            .iter()
            .map(|v| v.point.coords.norm_squared())
            .fold(0.0, Real::max)
    }

    /// Apply a function to all the vertices of this simplex.
    pub fn modify_pnts(&mut self, f: &dyn Fn(&mut CSOPoint)) {
        for i in 0..self.dim + 1 {
            f(&mut self.vertices[i])
        }
    }

    /// Projects the origin on the boundary of this simplex and reduces `self` the smallest
    /// subsimplex containing the origin projection.
    ///
    /// Returns the result of the projection, or `Point::origin()` if the origin lies inside of
    /// the tetrahedron. The state of the simplex before projection is saved, and can be
    /// retrieved using the methods prefixed by `prev_`.
    pub fn project_origin_and_reduce(&mut self) -> Point<Real> {
        match self.dim {
            0 => {
                self.proj[0] = 1.0;
                self.vertices[0].point
            }
            1 => {
                let seg = Segment::new(self.vertices[0].point, self.vertices[1].point);
                let (_, location) = closest_points_point_segment(&Point::origin(), &seg);

                match location {
                    SegmentPointLocation::OnVertex(i) => self.reduce(&[i as usize], &[1.0]),
                    SegmentPointLocation::OnEdge(coords) => self.proj[..2].copy_from_slice(&coords),
                }

                seg.point_at(&location)
            }
            2 => {
                let tri = Triangle::new(
                    self.vertices[0].point,
                    self.vertices[1].point,
                    self.vertices[2].point,
                );
                let (proj, location) = closest_points_point_triangle(&Point::origin(), &tri);
                self.reduce_to_triangle_feature([0, 1, 2], location);
                proj
            }
            _ => self.project_origin_on_tetrahedron(),
        }
    }

    fn project_origin_on_tetrahedron(&mut self) -> Point<Real> {
        // Each face with the index of the vertex opposite to it.
        const FACES: [([usize; 3], usize); 4] = [
            ([0, 1, 2], 3),
            ([0, 1, 3], 2),
            ([0, 2, 3], 1),
            ([1, 2, 3], 0),
        ];

        let pts = self.vertices.map(|v| v.point);
        let volume = (pts[1] - pts[0])
            .cross(&(pts[2] - pts[0]))
            .dot(&(pts[3] - pts[0]));
        let degenerate = volume.abs() <= GJK_TOLERANCE * self.max_sq_len().max(1.0);

        let mut inside = !degenerate;
        let mut bcoords = [0.0; 4];
        let mut best: Option<(Real, Point<Real>, [usize; 3], TrianglePointLocation)> = None;

        for (face, opp) in FACES {
            let [a, b, c] = face.map(|i| pts[i]);
            let n = (b - a).cross(&(c - a));
            let origin_side = -n.dot(&a.coords);
            let opp_side = n.dot(&(pts[opp] - a));

            // The origin can't be projected on faces it lies behind, unless the tetrahedron
            // is flat in which case every face is a candidate.
            if !degenerate && origin_side * opp_side >= 0.0 {
                bcoords[opp] = origin_side / opp_side;
                continue;
            }

            inside = false;
            let tri = Triangle::new(a, b, c);
            let (proj, location) = closest_points_point_triangle(&Point::origin(), &tri);
            let sq_dist = proj.coords.norm_squared();

            if best.as_ref().map_or(true, |(d, ..)| sq_dist < *d) {
                best = Some((sq_dist, proj, face, location));
            }
        }

        match best {
            Some((_, proj, face, location)) if !inside => {
                self.reduce_to_triangle_feature(face, location);
                proj
            }
            _ => {
                self.proj = bcoords;
                Point::origin()
            }
        }
    }

    fn reduce_to_triangle_feature(&mut self, face: [usize; 3], location: TrianglePointLocation) {
        match location {
            TrianglePointLocation::OnVertex(i) => self.reduce(&[face[i as usize]], &[1.0]),
            // Edges follow the AB, BC, AC numbering.
            TrianglePointLocation::OnEdge(0, coords) => self.reduce(&[face[0], face[1]], &coords),
            TrianglePointLocation::OnEdge(1, coords) => self.reduce(&[face[1], face[2]], &coords),
            TrianglePointLocation::OnEdge(_, coords) => self.reduce(&[face[0], face[2]], &coords),
            TrianglePointLocation::OnFace(_, coords) => self.reduce(&face, &coords),
        }
    }

    /// Keeps only the vertices `ids`, moved in front of the vertex array in this order, with the
    /// barycentric coordinates `coords`.
    ///
    /// The discarded vertices are kept behind so the previous simplex remains accessible.
    fn reduce(&mut self, ids: &[usize], coords: &[Real]) {
        let mut order = [0; 4];
        let mut len = 0;

        for id in ids {
            order[len] = *id;
            len += 1;
        }

        for i in 0..self.dim + 1 {
            if !ids.contains(&i) {
                order[len] = i;
                len += 1;
            }
        }

        let old_vertices = self.vertices;
        let mut new_position = [0; 4];

        for (new_id, old_id) in order[..len].iter().enumerate() {
            self.vertices[new_id] = old_vertices[*old_id];
            new_position[*old_id] = new_id;
        }

        for v in &mut self.prev_vertices[..self.prev_dim + 1] {
            *v = new_position[*v];
        }

        self.proj[..coords.len()].copy_from_slice(coords);
        self.dim = ids.len() - 1;
    }
}
