//! Shapes supported by geoquery3d.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::composite_shape::CompositeShape;
pub use self::convex_polyhedron::{ConvexPolyhedron, PolyhedronFace};
pub use self::cuboid::Cuboid;
pub use self::half_space::HalfSpace;
pub use self::heightfield3::{HeightField, HeightFieldCellStatus};
pub use self::round_shape::{ConvexCore, RoundConvex};
pub use self::segment::{Segment, SegmentPointLocation};
pub use self::shape::{ShapeType, TypedShape, NUM_SHAPE_TYPES};
pub use self::shape_error::ShapeError;
pub use self::support_map::SupportMap;
pub use self::triangle::{Triangle, TrianglePointLocation};
pub use self::trimesh::TriMesh;

mod ball;
mod capsule;
mod composite_shape;
mod convex_polyhedron;
mod cuboid;
mod half_space;
mod heightfield3;
mod round_shape;
mod segment;
mod shape;
mod shape_error;
mod support_map;
mod triangle;
mod trimesh;
