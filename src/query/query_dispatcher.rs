//! Query dispatcher system for pluggable geometric queries.
//!
//! # Overview
//!
//! A query dispatcher knows how to run the queries of this crate between pairs of shapes. It
//! examines the types of both shapes, selects the kernel of that pair, and runs it. The free
//! functions [`overlap`](crate::query::overlap), [`raycast`](crate::query::raycast),
//! [`sweep`](crate::query::sweep) and
//! [`find_overlap_triangles`](crate::query::find_overlap_triangles) all go through the
//! [`DefaultQueryDispatcher`](crate::query::DefaultQueryDispatcher).
//!
//! # Fallible queries
//!
//! Every method returns `Err(Unsupported)` for pairs it has no kernel for. The free functions
//! turn this error into a debug assertion, a log message and an empty result; calling the
//! dispatcher directly lets the caller handle it.
//!
//! ```
//! # #[cfg(all(feature = "dim3", feature = "f32"))] {
//! use geoquery3d::math::{Isometry, Vector};
//! use geoquery3d::query::{DefaultQueryDispatcher, HitFlags, QueryDispatcher};
//! use geoquery3d::shape::{HalfSpace, TypedShape};
//!
//! let ground = HalfSpace::new(Vector::y_axis());
//! let ground = TypedShape::HalfSpace(&ground);
//! let pos = Isometry::identity();
//!
//! assert!(DefaultQueryDispatcher
//!     .overlap(&pos, &ground, &pos, &ground, HitFlags::empty())
//!     .is_err());
//! # }
//! ```
//!
//! # Chaining dispatchers
//!
//! Dispatchers can be chained with [`QueryDispatcher::chain`]: the second dispatcher only runs
//! the queries the first one reports as unsupported.

use crate::math::{Isometry, Real, Vector};
use crate::query::{Hit, HitFlags, Ray, RaycastHits, Unsupported};
use crate::shape::TypedShape;

/// Dispatcher for pairwise geometric queries.
///
/// Shapes are given with their world-space poses. Implementations return
/// `Err(Unsupported)` for the pairs they can't handle.
pub trait QueryDispatcher: Send + Sync {
    /// Tests whether two shapes are intersecting.
    fn overlap(
        &self,
        pos1: &Isometry<Real>,
        g1: &TypedShape,
        pos2: &Isometry<Real>,
        g2: &TypedShape,
        flags: HitFlags,
    ) -> Result<bool, Unsupported>;

    /// Casts a world-space ray on a shape placed at `pos`.
    fn raycast(
        &self,
        pos: &Isometry<Real>,
        g: &TypedShape,
        ray: &Ray,
        max_dist: Real,
        flags: HitFlags,
        max_hits: usize,
    ) -> Result<RaycastHits, Unsupported>;

    /// Sweeps `g1` along `dir` and reports its first impact with `g2`.
    #[allow(clippy::too_many_arguments)]
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
    ) -> Result<Option<Hit>, Unsupported>;

    /// Collects the triangles of `mesh` overlapping the convex shape `g`.
    ///
    /// Returns the face indices found, and whether more overlapping triangles remain.
    fn find_overlap_triangles(
        &self,
        pos: &Isometry<Real>,
        g: &TypedShape,
        pos_mesh: &Isometry<Real>,
        mesh: &TypedShape,
        max_results: usize,
        start_index: usize,
    ) -> Result<(Vec<u32>, bool), Unsupported>;

    /// Construct a `QueryDispatcher` that falls back on `other` for cases not handled by `self`
    fn chain<U: QueryDispatcher>(self, other: U) -> QueryDispatcherChain<Self, U>
    where
        Self: Sized,
    {
        QueryDispatcherChain(self, other)
    }
}

/// The dispatcher built by [`QueryDispatcher::chain`].
///
/// Queries are tried on the first dispatcher, then on the second one if the first returned
/// `Err(Unsupported)`.
pub struct QueryDispatcherChain<T, U>(T, U);

macro_rules! chain_method {
    ($name:ident ( $( $arg:ident : $ty:ty,)*) -> $result:ty) => {
        fn $name(&self, $($arg : $ty,)*
        ) -> Result<$result, Unsupported> {
            (self.0).$name($($arg,)*)
                .or_else(|Unsupported| (self.1).$name($($arg,)*))
        }
    }
}

impl<T, U> QueryDispatcher for QueryDispatcherChain<T, U>
where
    T: QueryDispatcher,
    U: QueryDispatcher,
{
    chain_method!(overlap(
        pos1: &Isometry<Real>,
        g1: &TypedShape,
        pos2: &Isometry<Real>,
        g2: &TypedShape,
        flags: HitFlags,
    ) -> bool);

    chain_method!(raycast(
        pos: &Isometry<Real>,
        g: &TypedShape,
        ray: &Ray,
        max_dist: Real,
        flags: HitFlags,
        max_hits: usize,
    ) -> RaycastHits);

    chain_method!(sweep(
        pos1: &Isometry<Real>,
        g1: &TypedShape,
        pos2: &Isometry<Real>,
        g2: &TypedShape,
        dir: &Vector<Real>,
        max_dist: Real,
        inflation: Real,
        flags: HitFlags,
    ) -> Option<Hit>);

    chain_method!(find_overlap_triangles(
        pos: &Isometry<Real>,
        g: &TypedShape,
        pos_mesh: &Isometry<Real>,
        mesh: &TypedShape,
        max_results: usize,
        start_index: usize,
    ) -> (Vec<u32>, bool));
}
