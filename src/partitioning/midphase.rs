use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::partitioning::VisitStatus;
use crate::query::Ray;

/// A read-only acceleration structure over the triangles of a mesh.
///
/// Implementors report the face index of every triangle that may intersect the
/// query volume; reporting extra candidates is allowed, missing one is not.
/// Everything is expressed in the local frame of the mesh.
pub trait MeshMidphase: Sync {
    /// Calls `visit` on each triangle whose bounding box may intersect `aabb`.
    ///
    /// Returns [`VisitStatus::ExitEarly`] if and only if `visit` asked for it.
    fn traverse_aabb(
        &self,
        aabb: &Aabb,
        visit: &mut dyn FnMut(u32) -> VisitStatus,
    ) -> VisitStatus;

    /// Calls `visit` on each triangle whose bounding box may be hit by `ray` before `max_toi`.
    ///
    /// Returns [`VisitStatus::ExitEarly`] if and only if `visit` asked for it.
    fn traverse_ray(
        &self,
        ray: &Ray,
        max_toi: Real,
        visit: &mut dyn FnMut(u32) -> VisitStatus,
    ) -> VisitStatus;
}

/// A midphase testing the bounding box of every triangle.
///
/// This is enough for small meshes and serves as reference for real acceleration
/// structures.
#[derive(Clone, Debug, Default)]
pub struct BruteForceMidphase {
    aabbs: Vec<Aabb>,
}

impl BruteForceMidphase {
    /// Builds the midphase of the mesh with the given vertex and index buffers.
    ///
    /// Triangles referencing missing vertices get an empty bounding box and are never reported.
    pub fn new(vertices: &[Point<Real>], indices: &[[u32; 3]]) -> Self {
        let aabbs = indices
            .iter()
            .map(|idx| {
                let mut aabb = Aabb::new_invalid();
                for vid in idx {
                    if let Some(pt) = vertices.get(*vid as usize) {
                        aabb.take_point(*pt);
                    }
                }
                aabb
            })
            .collect();

        Self { aabbs }
    }

    /// The bounding boxes of the triangles, in face-index order.
    pub fn aabbs(&self) -> &[Aabb] {
        &self.aabbs
    }
}

impl MeshMidphase for BruteForceMidphase {
    fn traverse_aabb(
        &self,
        aabb: &Aabb,
        visit: &mut dyn FnMut(u32) -> VisitStatus,
    ) -> VisitStatus {
        for (i, tri_aabb) in self.aabbs.iter().enumerate() {
            if tri_aabb.is_valid()
                && tri_aabb.intersects(aabb)
                && visit(i as u32) == VisitStatus::ExitEarly
            {
                return VisitStatus::ExitEarly;
            }
        }

        VisitStatus::Continue
    }

    fn traverse_ray(
        &self,
        ray: &Ray,
        max_toi: Real,
        visit: &mut dyn FnMut(u32) -> VisitStatus,
    ) -> VisitStatus {
        for (i, tri_aabb) in self.aabbs.iter().enumerate() {
            if !tri_aabb.is_valid() {
                continue;
            }

            // Flat triangles have flat boxes: pad them so grazing rays aren't lost.
            let hit = tri_aabb
                .loosened(1.0e-4)
                .clip_ray_parameters(ray)
                .is_some_and(|(tmin, tmax)| tmax >= 0.0 && tmin <= max_toi);

            if hit && visit(i as u32) == VisitStatus::ExitEarly {
                return VisitStatus::ExitEarly;
            }
        }

        VisitStatus::Continue
    }
}
