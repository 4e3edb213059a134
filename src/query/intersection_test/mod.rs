//! Implementation details of the `overlap` and `find_overlap_triangles` functions.

pub use self::intersection_test::overlap;
pub(crate) use self::intersection_test::intersection_test_round_convex_shape;
pub use self::intersection_test_ball_ball::intersection_test_ball_ball;
pub use self::intersection_test_capsule_capsule::intersection_test_segment_segment;
pub use self::intersection_test_composite_shape_shape::{
    find_overlap_triangles, find_overlap_triangles_composite_shape,
    intersection_test_composite_shape_round_convex,
};
pub use self::intersection_test_halfspace_support_map::{
    intersection_test_halfspace_support_map, intersection_test_support_map_halfspace,
};
pub use self::intersection_test_round_convex::{
    intersection_test_round_convex_round_convex, intersection_test_round_convex_triangle,
};
pub use self::intersection_test_support_map_support_map::intersection_test_support_map_support_map;

mod intersection_test_ball_ball;
mod intersection_test_capsule_capsule;
mod intersection_test_composite_shape_shape;
mod intersection_test_halfspace_support_map;
mod intersection_test_round_convex;
mod intersection_test_support_map_support_map;
