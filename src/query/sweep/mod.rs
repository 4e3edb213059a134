//! Implementation details of the `sweep` function.

pub use self::sweep::{sweep, SweepParams};
pub use self::sweep_capsule_capsule::sweep_capsule_capsule;
pub use self::sweep_composite_shape::{is_better_sweep_hit, sweep_round_convex_composite_shape};
pub use self::sweep_halfspace_support_map::sweep_support_map_halfspace;
pub use self::sweep_support_map_support_map::sweep_round_convex_round_convex;
pub use self::sweep_triangle::{
    extrude_triangle, sweep_capsule_triangle, sweep_round_convex_triangle, sweep_sphere_triangle,
    TriangleSweepHit,
};

pub(crate) use self::sweep::sweep_typed_shapes;

#[allow(clippy::module_inception)]
mod sweep;
mod sweep_capsule_capsule;
mod sweep_composite_shape;
mod sweep_halfspace_support_map;
mod sweep_support_map_support_map;
mod sweep_triangle;
