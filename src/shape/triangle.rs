use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{Segment, SupportMap};

use na::Unit;

/// A triangle given by its three vertices.
///
/// Triangles are produced by triangle meshes and height fields; their
/// counter-clockwise winding `(a, b, c)` defines their front face.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// Vertex A.
    pub a: Point<Real>,
    /// Vertex B.
    pub b: Point<Real>,
    /// Vertex C.
    pub c: Point<Real>,
}

/// Where the projection of a point on a triangle lies.
#[derive(Copy, Clone, Debug)]
pub enum TrianglePointLocation {
    /// The point lies on a vertex.
    OnVertex(u32),
    /// The point lies on an edge: 0 for AB, 1 for BC, 2 for AC.
    ///
    /// Unlike [`Triangle::edges`], the third edge goes from A to C.
    OnEdge(u32, [Real; 2]),
    /// The point lies inside the triangle, on its front side (0) or back side (1).
    OnFace(u32, [Real; 3]),
}

impl TrianglePointLocation {
    /// The weights of A, B and C for this location.
    pub fn barycentric_coordinates(&self) -> [Real; 3] {
        match *self {
            Self::OnVertex(0) => [1.0, 0.0, 0.0],
            Self::OnVertex(1) => [0.0, 1.0, 0.0],
            Self::OnVertex(_) => [0.0, 0.0, 1.0],
            Self::OnEdge(0, [u, v]) => [u, v, 0.0],
            Self::OnEdge(1, [u, v]) => [0.0, u, v],
            Self::OnEdge(_, [u, v]) => [u, 0.0, v],
            Self::OnFace(_, weights) => weights,
        }
    }

    /// Whether the point projects strictly inside the triangle.
    pub fn is_on_face(&self) -> bool {
        matches!(self, Self::OnFace(..))
    }
}

impl Triangle {
    /// A triangle with the vertices `a`, `b` and `c`, in this order.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The unit normal `AB × AC` of the front face, or `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_normal(), crate::math::DEFAULT_EPSILON)
    }

    /// The cross product `AB × AC`. Its length is twice the area.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    /// The edges AB, BC and CA.
    #[inline]
    pub fn edges(&self) -> [Segment; 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)].map(|(p, q)| Segment::new(p, q))
    }

    /// Half the length of [`Self::scaled_normal`].
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The mean of the three vertices.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.point_at_bcoords(&[1.0 / 3.0; 3])
    }

    /// This triangle placed at `pos`.
    #[inline]
    #[must_use]
    pub fn transformed(&self, pos: &Isometry<Real>) -> Self {
        Triangle::new(pos * self.a, pos * self.b, pos * self.c)
    }

    /// This triangle moved by `shift`.
    #[inline]
    #[must_use]
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Triangle::new(self.a + shift, self.b + shift, self.c + shift)
    }

    /// The point `a * w[0] + b * w[1] + c * w[2]`.
    #[inline]
    pub fn point_at_bcoords(&self, w: &[Real; 3]) -> Point<Real> {
        Point::from(self.a.coords * w[0] + self.b.coords * w[1] + self.c.coords * w[2])
    }
}

impl SupportMap for Triangle {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut best = self.a;
        let mut best_dot = self.a.coords.dot(dir);

        for pt in [self.b, self.c] {
            let dot = pt.coords.dot(dir);
            if dot >= best_dot {
                best = pt;
                best_dot = dot;
            }
        }

        best
    }
}
