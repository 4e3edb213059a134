use crate::bounding_volume::Aabb;
use crate::math::Real;
use crate::partitioning::VisitStatus;
use crate::query::Ray;
use crate::shape::Triangle;

/// Trait implemented by shapes made of a (potentially large) set of triangles.
///
/// This is the view the mesh and height-field query adapters work with: triangles are
/// identified by their face index and are only ever enumerated through a spatial
/// filter (an Aabb or a ray), in the local frame of the composite shape.
pub trait CompositeShape {
    /// The triangle with the given face index, or `None` if it doesn't exist or was removed.
    fn triangle(&self, face_index: u32) -> Option<Triangle>;

    /// The local-space bounding box of all the triangles.
    fn local_aabb(&self) -> Aabb;

    /// Calls `f` on each triangle that may intersect the local-space `aabb`.
    ///
    /// Traversal stops as soon as `f` returns [`VisitStatus::ExitEarly`], in which
    /// case `ExitEarly` is returned.
    fn map_triangles_in_local_aabb(
        &self,
        aabb: &Aabb,
        f: &mut dyn FnMut(u32, &Triangle) -> VisitStatus,
    ) -> VisitStatus;

    /// Calls `f` on each triangle that may be hit by the local-space `ray` before `max_toi`.
    ///
    /// Triangles are not guaranteed to be visited by increasing time of impact.
    fn map_triangles_along_ray(
        &self,
        ray: &Ray,
        max_toi: Real,
        f: &mut dyn FnMut(u32, &Triangle) -> VisitStatus,
    ) -> VisitStatus;
}
