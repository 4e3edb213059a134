//! Closest points between primitives.
//!
//! These kernels are exact, allocation-free, and route degenerate inputs
//! (zero-length segments, zero-area triangles) to their lower-dimensional
//! counterpart instead of dividing by a vanishing denominator.

pub use self::closest_points_point_cuboid::closest_points_point_cuboid;
pub use self::closest_points_point_segment::closest_points_point_segment;
pub use self::closest_points_point_triangle::closest_points_point_triangle;
pub use self::closest_points_segment_segment::{
    closest_points_segment_segment, SegmentSegmentClosest,
};
pub use self::closest_points_segment_triangle::{
    closest_points_segment_triangle, SegmentTriangleClosest,
};

mod closest_points_point_cuboid;
mod closest_points_point_segment;
mod closest_points_point_triangle;
mod closest_points_segment_segment;
mod closest_points_segment_triangle;
