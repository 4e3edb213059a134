use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::consts::CONVEX_FACE_EPSILON;
use crate::shape::SupportMap;
use na::Unit;

/// A polygonal face of a convex polyhedron and its supporting plane.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct PolyhedronFace {
    first_vertex: u32,
    num_vertices: u32,
    /// The outward unit normal of the face.
    pub normal: Unit<Vector<Real>>,
    /// The plane offset: every point `x` of the face satisfies `normal · x = offset`.
    pub offset: Real,
}

impl PolyhedronFace {
    /// The signed distance from `pt` to this face's plane, positive outside of the polyhedron.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.offset
    }
}

/// A convex polyhedron, the convex hull shape of the query API.
///
/// Vertices and faces are stored explicitly. Each face is a convex polygon whose
/// vertices are listed counter-clockwise when seen from outside, consistently with
/// its outward normal.
///
/// Hulls with many vertices can be given a vertex adjacency structure with
/// [`ConvexPolyhedron::with_adjacency`], in which case support points are found by
/// hill-climbing instead of scanning every vertex.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexPolyhedron {
    vertices: Vec<Point<Real>>,
    faces: Vec<PolyhedronFace>,
    face_vertex_ids: Vec<u32>,
    // Empty unless `with_adjacency` was called.
    neighbor_offsets: Vec<u32>,
    neighbors: Vec<u32>,
}

impl ConvexPolyhedron {
    /// Creates a convex polyhedron from its vertices and the vertex indices of its faces.
    ///
    /// The face normals are deduced from the face windings. Returns `None` if a face has fewer
    /// than three vertices, references an unknown vertex, has a zero area, or if a vertex lies
    /// outside of a face plane (which happens for non-convex inputs or inconsistent windings).
    pub fn from_convex_hull_faces<F: AsRef<[u32]>>(
        vertices: Vec<Point<Real>>,
        faces: &[F],
    ) -> Option<Self> {
        if vertices.is_empty() || faces.is_empty() {
            return None;
        }

        let scale = vertices
            .iter()
            .map(|v| v.coords.amax())
            .fold(1.0, Real::max);
        let tolerance = scale * 1.0e-4;
        let mut polyhedron_faces = Vec::with_capacity(faces.len());
        let mut face_vertex_ids = Vec::new();

        for face in faces {
            let ids = face.as_ref();
            if ids.len() < 3 || ids.iter().any(|id| *id as usize >= vertices.len()) {
                return None;
            }

            // Newell's method is robust to slightly non-planar polygons.
            let mut scaled_normal = Vector::zeros();
            let mut centroid = Vector::zeros();
            for (k, id) in ids.iter().enumerate() {
                let curr = vertices[*id as usize];
                let next = vertices[ids[(k + 1) % ids.len()] as usize];
                scaled_normal += (curr - next).cross(&(curr.coords + next.coords));
                centroid += curr.coords;
            }
            // The sum above yields `4 * area * normal` for a counter-clockwise face.
            let normal = Unit::try_new(scaled_normal, DEFAULT_EPSILON)?;
            centroid /= ids.len() as Real;
            let offset = normal.dot(&centroid);

            if vertices
                .iter()
                .any(|v| normal.dot(&v.coords) - offset > tolerance)
            {
                return None;
            }

            polyhedron_faces.push(PolyhedronFace {
                first_vertex: face_vertex_ids.len() as u32,
                num_vertices: ids.len() as u32,
                normal,
                offset,
            });
            face_vertex_ids.extend_from_slice(ids);
        }

        Some(Self {
            vertices,
            faces: polyhedron_faces,
            face_vertex_ids,
            neighbor_offsets: Vec::new(),
            neighbors: Vec::new(),
        })
    }

    /// A convex polyhedron with the shape of an axis-aligned box with the given half-extents.
    pub fn cuboid(half_extents: Vector<Real>) -> Self {
        let he = half_extents;
        let vertices: Vec<_> = (0..8)
            .map(|i| {
                Point::new(
                    if i & 1 != 0 { he.x } else { -he.x },
                    if i & 2 != 0 { he.y } else { -he.y },
                    if i & 4 != 0 { he.z } else { -he.z },
                )
            })
            .collect();
        let faces = [
            [1, 3, 7, 5],
            [0, 4, 6, 2],
            [2, 6, 7, 3],
            [0, 1, 5, 4],
            [4, 5, 7, 6],
            [0, 2, 3, 1],
        ];

        let mut faces_desc = Vec::with_capacity(6);
        let mut face_vertex_ids = Vec::with_capacity(24);
        for (i, face) in faces.iter().enumerate() {
            let mut normal = Vector::zeros();
            normal[i / 2] = if i % 2 == 0 { 1.0 } else { -1.0 };
            faces_desc.push(PolyhedronFace {
                first_vertex: face_vertex_ids.len() as u32,
                num_vertices: 4,
                normal: Unit::new_unchecked(normal),
                offset: he[i / 2],
            });
            face_vertex_ids.extend_from_slice(face);
        }

        Self {
            vertices,
            faces: faces_desc,
            face_vertex_ids,
            neighbor_offsets: Vec::new(),
            neighbors: Vec::new(),
        }
    }

    /// Builds the vertex adjacency used to speed-up support point queries by hill-climbing.
    #[must_use]
    pub fn with_adjacency(mut self) -> Self {
        let mut adjacency: Vec<Vec<u32>> = vec![Vec::new(); self.vertices.len()];

        for face in &self.faces {
            let ids = self.face_vertices_of(face);
            for k in 0..ids.len() {
                let (v1, v2) = (ids[k], ids[(k + 1) % ids.len()]);
                if !adjacency[v1 as usize].contains(&v2) {
                    adjacency[v1 as usize].push(v2);
                }
                if !adjacency[v2 as usize].contains(&v1) {
                    adjacency[v2 as usize].push(v1);
                }
            }
        }

        self.neighbor_offsets.clear();
        self.neighbors.clear();
        for list in adjacency {
            self.neighbor_offsets.push(self.neighbors.len() as u32);
            self.neighbors.extend(list);
        }
        self.neighbor_offsets.push(self.neighbors.len() as u32);
        self
    }

    /// The vertices of this polyhedron.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The faces of this polyhedron.
    #[inline]
    pub fn faces(&self) -> &[PolyhedronFace] {
        &self.faces
    }

    /// The indices of the vertices of the `i`-th face, in counter-clockwise order.
    #[inline]
    pub fn face_vertices(&self, i: usize) -> &[u32] {
        self.face_vertices_of(&self.faces[i])
    }

    fn face_vertices_of(&self, face: &PolyhedronFace) -> &[u32] {
        let start = face.first_vertex as usize;
        &self.face_vertex_ids[start..start + face.num_vertices as usize]
    }

    /// Does this polyhedron have a vertex adjacency structure?
    #[inline]
    pub fn has_adjacency(&self) -> bool {
        !self.neighbor_offsets.is_empty()
    }

    /// Is the point `pt` inside of this polyhedron, or on its boundary?
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        self.faces.iter().all(|f| f.signed_distance(pt) <= 0.0)
    }

    /// The index of the face hit by a sweep at `local_point`, moving along `local_dir`.
    ///
    /// The face whose plane is the closest to `local_point` is selected. Among the faces with
    /// a plane distance within [`CONVEX_FACE_EPSILON`] of that closest one, the face the most
    /// opposed to `local_dir` wins.
    pub fn find_sweep_face(&self, local_point: &Point<Real>, local_dir: &Vector<Real>) -> u32 {
        let min_dist = self
            .faces
            .iter()
            .map(|f| f.signed_distance(local_point).abs())
            .fold(Real::MAX, Real::min);

        let mut best = 0;
        let mut best_dot = Real::MAX;

        for (i, face) in self.faces.iter().enumerate() {
            if face.signed_distance(local_point).abs() > min_dist + CONVEX_FACE_EPSILON {
                continue;
            }

            let dot = face.normal.dot(local_dir);
            if dot < best_dot {
                best_dot = dot;
                best = i as u32;
            }
        }

        best
    }

    fn hill_climb_support_point_id(&self, dir: &Vector<Real>) -> usize {
        let mut best = 0;
        let mut best_dot = self.vertices[0].coords.dot(dir);

        loop {
            let start = self.neighbor_offsets[best] as usize;
            let end = self.neighbor_offsets[best + 1] as usize;
            let mut improved = false;

            for neighbor in &self.neighbors[start..end] {
                let dot = self.vertices[*neighbor as usize].coords.dot(dir);
                if dot > best_dot {
                    best_dot = dot;
                    best = *neighbor as usize;
                    improved = true;
                }
            }

            if !improved {
                return best;
            }
        }
    }
}

impl SupportMap for ConvexPolyhedron {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        if self.has_adjacency() {
            return self.vertices[self.hill_climb_support_point_id(dir)];
        }

        let mut best = 0;
        let mut best_dot = self.vertices[0].coords.dot(dir);

        for (i, pt) in self.vertices.iter().enumerate().skip(1) {
            let dot = pt.coords.dot(dir);
            if dot > best_dot {
                best_dot = dot;
                best = i;
            }
        }

        self.vertices[best]
    }
}
