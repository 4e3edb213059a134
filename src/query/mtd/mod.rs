//! Minimum translation distances between overlapping shapes.

pub use self::mtd::{compute_mtd, Mtd};
pub use self::mtd_composite_shape::mtd_round_convex_composite_shape;
pub use self::mtd_halfspace_support_map::mtd_support_map_halfspace;
pub use self::mtd_round_convex_round_convex::{
    mtd_round_convex_round_convex, signed_distance_support_map_support_map,
};
pub use self::mtd_round_convex_triangle::mtd_round_convex_triangle;

pub(crate) use self::mtd::mtd_round_convex_shape;

#[allow(clippy::module_inception)]
mod mtd;
mod mtd_composite_shape;
mod mtd_halfspace_support_map;
mod mtd_round_convex_round_convex;
mod mtd_round_convex_triangle;
