//! Convex shapes seen as a core inflated by a border radius.

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::query::gjk::ConstantOrigin;
use crate::shape::{ConvexPolyhedron, Cuboid, Segment, SupportMap, TypedShape};
use na::Unit;

/// The core of a [`RoundConvex`].
#[derive(Copy, Clone, Debug)]
pub enum ConvexCore<'a> {
    /// The local origin. Balls are rounded points.
    Point,
    /// A segment. Capsules are rounded segments.
    Segment(Segment),
    /// A cuboid.
    Cuboid(&'a Cuboid),
    /// A convex polyhedron.
    ConvexPolyhedron(&'a ConvexPolyhedron),
}

/// A convex shape with rounded borders.
///
/// Every convex query operand is handled as the Minkowski sum of a core (a point, a
/// segment, a cuboid or a polyhedron) and a ball of radius `border_radius`. This is how
/// balls and capsules get exact distance kernels on their cores, and how sweeps inflate
/// the moving shape.
#[derive(Copy, Clone, Debug)]
pub struct RoundConvex<'a> {
    /// The shape being rounded.
    pub core: ConvexCore<'a>,
    /// The radius of the rounded border.
    pub border_radius: Real,
}

impl<'a> RoundConvex<'a> {
    /// The rounded-core view of `shape`, with its border radius increased by `inflation`.
    ///
    /// Returns `None` for half-spaces, triangle meshes, and heightfields.
    pub fn from_typed_shape(shape: &TypedShape<'a>, inflation: Real) -> Option<Self> {
        let (core, radius) = match *shape {
            TypedShape::Ball(b) => (ConvexCore::Point, b.radius),
            TypedShape::Capsule(c) => (ConvexCore::Segment(c.segment), c.radius),
            TypedShape::Cuboid(c) => (ConvexCore::Cuboid(c), 0.0),
            TypedShape::ConvexPolyhedron(c) => (ConvexCore::ConvexPolyhedron(c), 0.0),
            TypedShape::HalfSpace(_) | TypedShape::TriMesh(_) | TypedShape::HeightField(_) => {
                return None
            }
        };

        Some(Self {
            core,
            border_radius: radius + inflation,
        })
    }

    /// This shape with its border radius increased by `amount`.
    #[must_use]
    pub fn inflated(self, amount: Real) -> Self {
        Self {
            core: self.core,
            border_radius: self.border_radius + amount,
        }
    }

    /// The support map of the core, without the border.
    pub fn core_support_map(&self) -> &dyn SupportMap {
        match &self.core {
            ConvexCore::Point => &ConstantOrigin,
            ConvexCore::Segment(s) => s,
            ConvexCore::Cuboid(c) => *c,
            ConvexCore::ConvexPolyhedron(c) => *c,
        }
    }

    /// The core segment transformed by `pos`, if the core is a point or a segment.
    ///
    /// A point core yields a degenerate segment.
    pub fn core_segment(&self, pos: &Isometry<Real>) -> Option<Segment> {
        match &self.core {
            ConvexCore::Point => {
                let center = Point::from(pos.translation.vector);
                Some(Segment::new(center, center))
            }
            ConvexCore::Segment(s) => Some(s.transformed(pos)),
            _ => None,
        }
    }

    /// The convex polyhedron core, if any.
    pub fn as_convex_polyhedron(&self) -> Option<&'a ConvexPolyhedron> {
        match self.core {
            ConvexCore::ConvexPolyhedron(c) => Some(c),
            _ => None,
        }
    }

    /// The axis-aligned bounding box of this shape placed at `pos`.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        let core = match &self.core {
            ConvexCore::Point => {
                let center = Point::from(pos.translation.vector);
                Aabb::new(center, center)
            }
            ConvexCore::Segment(s) => {
                let s = s.transformed(pos);
                Aabb::new(s.a.inf(&s.b), s.a.sup(&s.b))
            }
            ConvexCore::Cuboid(c) => c.aabb(pos),
            ConvexCore::ConvexPolyhedron(c) => c.aabb(pos),
        };

        core.loosened(self.border_radius)
    }
}

impl SupportMap for RoundConvex<'_> {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        match Unit::try_new(*dir, 0.0) {
            Some(dir) => self.local_support_point_toward(&dir),
            None => self.core_support_map().local_support_point(dir),
        }
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.core_support_map().local_support_point_toward(dir) + **dir * self.border_radius
    }
}
