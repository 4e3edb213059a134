use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::partitioning::{MeshMidphase, VisitStatus};
use crate::query::Ray;
use crate::shape::{CompositeShape, ShapeError, Triangle};
use core::fmt;

/// A read-only view on a caller-owned triangle mesh.
///
/// The vertex and index buffers, as well as the acceleration structure used to
/// find candidate triangles, are borrowed: building them ("cooking") is the
/// caller's responsibility. The face index of a triangle is its position in the
/// index buffer. Triangles are single-sided: their front face is the one seen
/// counter-clockwise.
#[derive(Copy, Clone)]
pub struct TriMesh<'a> {
    vertices: &'a [Point<Real>],
    indices: &'a [[u32; 3]],
    midphase: &'a dyn MeshMidphase,
    aabb: Aabb,
}

impl fmt::Debug for TriMesh<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriMesh")
            .field("num_vertices", &self.vertices.len())
            .field("num_triangles", &self.indices.len())
            .field("aabb", &self.aabb)
            .finish()
    }
}

impl<'a> TriMesh<'a> {
    /// Creates a triangle mesh view, checking that every index refers to an existing vertex.
    pub fn try_new(
        vertices: &'a [Point<Real>],
        indices: &'a [[u32; 3]],
        midphase: &'a dyn MeshMidphase,
    ) -> Result<Self, ShapeError> {
        for (triangle, idx) in indices.iter().enumerate() {
            if let Some(index) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(ShapeError::VertexIndexOutOfBounds {
                    triangle: triangle as u32,
                    index: *index,
                    num_vertices: vertices.len() as u32,
                });
            }
        }

        let aabb = if indices.is_empty() {
            Aabb::new_invalid()
        } else {
            Aabb::from_points(indices.iter().flatten().map(|i| &vertices[*i as usize]))
        };

        Ok(Self {
            vertices,
            indices,
            midphase,
            aabb,
        })
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &'a [Point<Real>] {
        self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &'a [[u32; 3]] {
        self.indices
    }

    /// The acceleration structure used to find candidate triangles.
    #[inline]
    pub fn midphase(&self) -> &'a dyn MeshMidphase {
        self.midphase
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// The `i`-th triangle of this mesh.
    ///
    /// Panics if `i` is out of bounds.
    #[inline]
    pub fn triangle_unchecked(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this mesh, in face-index order.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.indices.len() as u32).map(move |i| self.triangle_unchecked(i))
    }
}

impl CompositeShape for TriMesh<'_> {
    fn triangle(&self, face_index: u32) -> Option<Triangle> {
        ((face_index as usize) < self.indices.len()).then(|| self.triangle_unchecked(face_index))
    }

    fn local_aabb(&self) -> Aabb {
        self.aabb
    }

    fn map_triangles_in_local_aabb(
        &self,
        aabb: &Aabb,
        f: &mut dyn FnMut(u32, &Triangle) -> VisitStatus,
    ) -> VisitStatus {
        self.midphase.traverse_aabb(aabb, &mut |id| {
            if (id as usize) < self.indices.len() {
                f(id, &self.triangle_unchecked(id))
            } else {
                VisitStatus::Continue
            }
        })
    }

    fn map_triangles_along_ray(
        &self,
        ray: &Ray,
        max_toi: Real,
        f: &mut dyn FnMut(u32, &Triangle) -> VisitStatus,
    ) -> VisitStatus {
        self.midphase.traverse_ray(ray, max_toi, &mut |id| {
            if (id as usize) < self.indices.len() {
                f(id, &self.triangle_unchecked(id))
            } else {
                VisitStatus::Continue
            }
        })
    }
}
