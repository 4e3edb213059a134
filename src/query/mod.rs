//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::overlap()`](overlap) to determine if two shapes are intersecting or not.
//! * [`query::raycast()`](raycast) to find where a ray hits a shape.
//! * [`query::sweep()`](sweep) to determine when a shape moving along a direction first hits
//!   another one.
//! * [`query::find_overlap_triangles()`](find_overlap_triangles) to list the triangles of a mesh
//!   or heightfield overlapping a convex shape.
//! * [`query::compute_mtd()`](compute_mtd) to find the minimum translation separating two
//!   overlapping shapes.
//!
//! All of them go through the [`DefaultQueryDispatcher`], which picks the kernel of each pair of
//! shape types from the static tables of the [`dispatch`] module.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the ones
//! described above. They have the form `[operation]_[shape1]_[shape2]()` where:
//!
//! * `[operation]` can be `intersection_test`, `sweep`, `mtd` or `closest_points`.
//! * `[shape1]` is the type of the first shape passed to the function, e.g., `ball`, or
//!   `halfspace`. Can also identify a family of supported shapes, e.g., `round_convex`.
//! * `[shape2]` is the type of the second shape passed to the function.

pub use self::default_query_dispatcher::DefaultQueryDispatcher;
pub use self::error::Unsupported;
pub use self::hit::{Hit, HitFlags, RaycastHits};
pub use self::intersection_test::{find_overlap_triangles, overlap};
pub use self::mtd::{compute_mtd, Mtd};
pub use self::query_dispatcher::{QueryDispatcher, QueryDispatcherChain};
pub use self::ray::{ray_triangle_intersection, raycast, Ray, RayIntersection};
pub use self::sweep::{sweep, SweepParams};

pub mod closest_points;
pub mod consts;
mod default_query_dispatcher;
pub mod dispatch;
pub mod epa;
mod error;
pub mod gjk;
mod hit;
mod intersection_test;
mod mtd;
mod query_dispatcher;
mod ray;
pub mod sat;
mod sweep;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::closest_points::*;
    pub use super::intersection_test::*;
    pub use super::mtd::*;
    pub use super::ray::{
        local_ray_intersection_with_ball, local_ray_intersection_with_capsule,
        local_ray_intersection_with_convex_polyhedron, local_ray_intersection_with_cuboid,
        local_ray_intersection_with_halfspace, ray_toi_with_ball, ray_toi_with_halfspace,
        raycast_composite_shape, RayTriangleIntersection,
    };
    pub use super::sweep::*;
}
