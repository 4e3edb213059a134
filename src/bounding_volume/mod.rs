//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;

#[doc(hidden)]
pub mod aabb;
mod aabb_ball;
mod aabb_capsule;
mod aabb_convex_polyhedron;
mod aabb_cuboid;
mod aabb_heightfield;
mod aabb_triangle;
mod aabb_utils;

pub use self::aabb_ball::ball_aabb;
pub use self::aabb_utils::{local_support_map_aabb, point_cloud_aabb, support_map_aabb};
