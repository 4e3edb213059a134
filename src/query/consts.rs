//! Tolerances and limits shared by the query kernels.

use crate::math::Real;

/// Two sweep hits closer than this distance are considered simultaneous; the hit
/// whose triangle normal is the most opposed to the motion is then kept.
pub const SAME_DISTANCE_EPSILON: Real = 1.0e-3;

/// Two raycast hits on a mesh closer than this distance are merged into one.
pub const RAY_DUPLICATE_EPSILON: Real = 1.0e-4;

/// The plane-distance tolerance used to select the face of a convex polyhedron hit by a sweep.
pub const CONVEX_FACE_EPSILON: Real = 0.01;

/// Convex raycasts ignore entry points closer than this to the end of the ray.
pub const CONVEX_RAY_END_EPSILON: Real = 1.0e-5;

/// Sweep distances are clamped to this value.
pub const MAX_SWEEP_DISTANCE: Real = 1.0e10;

/// The absolute tolerance of GJK: simplex vertices closer than this are merged, and a CSO
/// closer than this to the origin is considered touching it.
pub const GJK_TOLERANCE: Real = crate::math::DEFAULT_EPSILON * 10.0;

/// The termination tolerance of EPA.
pub const EPA_EPSILON: Real = crate::math::DEFAULT_EPSILON * 100.0;

/// The maximum number of polytope expansions of EPA.
pub const EPA_MAX_ITERATIONS: usize = 100;

/// The maximum number of GJK iterations.
pub const GJK_MAX_ITERATIONS: usize = 100;

/// The number of depenetration steps of the mesh and height-field MTD.
pub const MTD_ITERATIONS: usize = 4;

/// The number of depenetration steps of the mesh and height-field MTD when the moving shape is a
/// convex polyhedron.
pub const MTD_CONVEX_ITERATIONS: usize = 2;
