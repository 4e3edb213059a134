use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real};
use crate::shape::{
    Ball, Capsule, CompositeShape, ConvexPolyhedron, Cuboid, HalfSpace, HeightField,
    SupportMap, TriMesh,
};
use num::Bounded;
use num_derive::FromPrimitive;

/// The number of shape types.
pub const NUM_SHAPE_TYPES: usize = 7;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// Enum representing the type of a shape.
///
/// The declaration order is the canonical order used to index the dispatch tables.
pub enum ShapeType {
    /// A ball shape.
    Ball = 0,
    /// A shape representing a full half-space.
    HalfSpace,
    /// A capsule shape.
    Capsule,
    /// A cuboid shape.
    Cuboid,
    /// A convex polyhedron.
    ConvexPolyhedron,
    /// A triangle mesh shape.
    TriMesh,
    /// A heightfield shape.
    HeightField,
}

impl ShapeType {
    /// All the shape types, in canonical order.
    pub const ALL: [ShapeType; NUM_SHAPE_TYPES] = [
        ShapeType::Ball,
        ShapeType::HalfSpace,
        ShapeType::Capsule,
        ShapeType::Cuboid,
        ShapeType::ConvexPolyhedron,
        ShapeType::TriMesh,
        ShapeType::HeightField,
    ];
}

#[derive(Copy, Clone, Debug)]
/// Enum representing the shape with its actual type.
///
/// This is the closed set of geometries the query functions accept. Shapes are
/// borrowed: the queries never retain nor mutate them.
pub enum TypedShape<'a> {
    /// A ball shape.
    Ball(&'a Ball),
    /// A shape representing a full half-space.
    HalfSpace(&'a HalfSpace),
    /// A capsule shape.
    Capsule(&'a Capsule),
    /// A cuboid shape.
    Cuboid(&'a Cuboid),
    /// A convex polyhedron.
    ConvexPolyhedron(&'a ConvexPolyhedron),
    /// A triangle mesh shape.
    TriMesh(&'a TriMesh<'a>),
    /// A heightfield shape.
    HeightField(&'a HeightField<'a>),
}

impl<'a> TypedShape<'a> {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            TypedShape::Ball(_) => ShapeType::Ball,
            TypedShape::HalfSpace(_) => ShapeType::HalfSpace,
            TypedShape::Capsule(_) => ShapeType::Capsule,
            TypedShape::Cuboid(_) => ShapeType::Cuboid,
            TypedShape::ConvexPolyhedron(_) => ShapeType::ConvexPolyhedron,
            TypedShape::TriMesh(_) => ShapeType::TriMesh,
            TypedShape::HeightField(_) => ShapeType::HeightField,
        }
    }

    /// Converts this shape into its support-map representation, if it has one.
    pub fn as_support_map(&self) -> Option<&'a dyn SupportMap> {
        match *self {
            TypedShape::Ball(b) => Some(b),
            TypedShape::Capsule(c) => Some(c),
            TypedShape::Cuboid(c) => Some(c),
            TypedShape::ConvexPolyhedron(c) => Some(c),
            _ => None,
        }
    }

    /// Converts this shape into a composite shape, if it is made of triangles.
    pub fn as_composite_shape(&self) -> Option<&'a dyn CompositeShape> {
        match *self {
            TypedShape::TriMesh(m) => Some(m),
            TypedShape::HeightField(h) => Some(h),
            _ => None,
        }
    }

    /// Computes the world-space [`Aabb`] of this shape, placed at `pos`.
    ///
    /// Half-spaces are unbounded; their Aabb covers the whole representable space.
    pub fn compute_aabb(&self, pos: &Isometry<Real>) -> Aabb {
        match self {
            TypedShape::Ball(b) => b.aabb(pos),
            TypedShape::HalfSpace(_) => Aabb::new(
                Point::new(-Real::max_value(), -Real::max_value(), -Real::max_value()),
                Point::new(Real::max_value(), Real::max_value(), Real::max_value()),
            ),
            TypedShape::Capsule(c) => c.aabb(pos),
            TypedShape::Cuboid(c) => c.aabb(pos),
            TypedShape::ConvexPolyhedron(c) => c.aabb(pos),
            TypedShape::TriMesh(m) => m.local_aabb().transform_by(pos),
            TypedShape::HeightField(h) => h.aabb(pos),
        }
    }
}

macro_rules! impl_from_shape(
    ($($Variant: ident($Shape: ty)),*) => {$(
        impl<'a> From<&'a $Shape> for TypedShape<'a> {
            #[inline]
            fn from(shape: &'a $Shape) -> Self {
                TypedShape::$Variant(shape)
            }
        }
    )*}
);

impl_from_shape!(
    Ball(Ball),
    HalfSpace(HalfSpace),
    Capsule(Capsule),
    Cuboid(Cuboid),
    ConvexPolyhedron(ConvexPolyhedron),
    TriMesh(TriMesh<'a>),
    HeightField(HeightField<'a>)
);
