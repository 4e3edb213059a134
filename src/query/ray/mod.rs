//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::{Ray, RayIntersection};
pub use self::ray_ball::{local_ray_intersection_with_ball, ray_toi_with_ball};
pub use self::ray_capsule::local_ray_intersection_with_capsule;
pub use self::ray_composite_shape::raycast_composite_shape;
pub use self::ray_convex_polyhedron::local_ray_intersection_with_convex_polyhedron;
pub use self::ray_cuboid::local_ray_intersection_with_cuboid;
pub use self::ray_halfspace::{local_ray_intersection_with_halfspace, ray_toi_with_halfspace};
pub use self::ray_triangle::{ray_triangle_intersection, RayTriangleIntersection};
pub use self::raycast::raycast;

#[doc(hidden)]
pub mod ray;
mod ray_aabb;
mod ray_ball;
mod ray_capsule;
mod ray_composite_shape;
mod ray_convex_polyhedron;
mod ray_cuboid;
mod ray_halfspace;
mod ray_triangle;
mod raycast;
