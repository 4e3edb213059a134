use crate::math::{Isometry, Real, Vector};
use crate::query::dispatch;
use crate::query::intersection_test::find_overlap_triangles_composite_shape;
use crate::query::sweep::{sweep_typed_shapes, SweepParams};
use crate::query::{Hit, HitFlags, QueryDispatcher, Ray, RaycastHits, Unsupported};
use crate::shape::{RoundConvex, TypedShape};

/// The default query dispatcher implementation provided by geoquery3d.
///
/// This dispatcher handles all the built-in shape types through the static kernel tables of
/// [`crate::query::dispatch`]. It is used internally by all the free functions in the
/// [`crate::query`] module.
///
/// # Supported Shape Combinations
///
/// - **Overlap**: every pair except half-space against half-space or a mesh, and meshes
///   against each other.
/// - **Raycast**: every shape.
/// - **Sweep**: balls, capsules, cuboids and convex polyhedra against any shape.
/// - **Triangle overlap enumeration**: convex shapes against triangle meshes and heightfields.
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use geoquery3d::math::{Isometry, Vector};
/// use geoquery3d::query::{DefaultQueryDispatcher, HitFlags, QueryDispatcher};
/// use geoquery3d::shape::{Ball, TypedShape};
///
/// let ball = Ball::new(0.5);
/// let ball = TypedShape::Ball(&ball);
/// let pos1 = Isometry::translation(-2.0, 0.0, 0.0);
/// let pos2 = Isometry::identity();
///
/// let hit = DefaultQueryDispatcher
///     .sweep(&pos1, &ball, &pos2, &ball, &Vector::x(), 10.0, 0.0, HitFlags::default())
///     .unwrap()
///     .unwrap();
/// assert!((hit.distance - 1.0).abs() < 1.0e-5);
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultQueryDispatcher;

impl QueryDispatcher for DefaultQueryDispatcher {
    fn overlap(
        &self,
        pos1: &Isometry<Real>,
        g1: &TypedShape,
        pos2: &Isometry<Real>,
        g2: &TypedShape,
        _flags: HitFlags,
    ) -> Result<bool, Unsupported> {
        dispatch::overlap(pos1, g1, pos2, g2)
    }

    fn raycast(
        &self,
        pos: &Isometry<Real>,
        g: &TypedShape,
        ray: &Ray,
        max_dist: Real,
        flags: HitFlags,
        max_hits: usize,
    ) -> Result<RaycastHits, Unsupported> {
        Ok(dispatch::raycast(pos, g, ray, max_dist, flags, max_hits))
    }

    fn sweep(
        &self,
        pos1: &Isometry<Real>,
        g1: &TypedShape,
        pos2: &Isometry<Real>,
        g2: &TypedShape,
        dir: &Vector<Real>,
        max_dist: Real,
        inflation: Real,
        flags: HitFlags,
    ) -> Result<Option<Hit>, Unsupported> {
        let params = SweepParams::new(dir, max_dist, inflation, flags);
        sweep_typed_shapes(pos1, g1, pos2, g2, &params)
    }

    fn find_overlap_triangles(
        &self,
        pos: &Isometry<Real>,
        g: &TypedShape,
        pos_mesh: &Isometry<Real>,
        mesh: &TypedShape,
        max_results: usize,
        start_index: usize,
    ) -> Result<(Vec<u32>, bool), Unsupported> {
        let round = RoundConvex::from_typed_shape(g, 0.0).ok_or(Unsupported)?;
        let composite = mesh.as_composite_shape().ok_or(Unsupported)?;

        Ok(find_overlap_triangles_composite_shape(
            &pos_mesh.inv_mul(pos),
            composite,
            &round,
            max_results,
            start_index,
        ))
    }
}
