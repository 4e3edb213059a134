use crate::math::{Isometry, Real};
use crate::partitioning::VisitStatus;
use crate::query::{DefaultQueryDispatcher, QueryDispatcher};
use crate::shape::{CompositeShape, RoundConvex, TypedShape};

use super::intersection_test_round_convex_triangle;

/// Intersection test between a composite shape (`TriMesh`, `HeightField`) and a rounded convex
/// shape.
///
/// `pos12` is the pose of `g2` relative to `g1`. Triangles are tested from both sides.
pub fn intersection_test_composite_shape_round_convex(
    pos12: &Isometry<Real>,
    g1: &dyn CompositeShape,
    g2: &RoundConvex,
) -> bool {
    let ls_aabb2 = g2.aabb(pos12);
    let mut found_intersection = false;

    let _ = g1.map_triangles_in_local_aabb(&ls_aabb2, &mut |_, tri| {
        found_intersection = intersection_test_round_convex_triangle(pos12, g2, tri);
        VisitStatus::exit_if(found_intersection)
    });

    found_intersection
}

/// Collects the indices of the triangles of `g1` intersecting `g2`.
///
/// `pos12` is the pose of `g2` relative to `g1`. The first `start_index` intersecting triangles
/// are skipped, then at most `max_results` are returned, in traversal order. The returned flag
/// is set if more intersecting triangles remain after those.
pub fn find_overlap_triangles_composite_shape(
    pos12: &Isometry<Real>,
    g1: &dyn CompositeShape,
    g2: &RoundConvex,
    max_results: usize,
    start_index: usize,
) -> (Vec<u32>, bool) {
    let ls_aabb2 = g2.aabb(pos12);
    let mut found = Vec::new();
    let mut num_skipped = 0;
    let mut overflow = false;

    let _ = g1.map_triangles_in_local_aabb(&ls_aabb2, &mut |id, tri| {
        if !intersection_test_round_convex_triangle(pos12, g2, tri) {
            return VisitStatus::Continue;
        }

        if num_skipped < start_index {
            num_skipped += 1;
            VisitStatus::Continue
        } else if found.len() < max_results {
            found.push(id);
            VisitStatus::Continue
        } else {
            overflow = true;
            VisitStatus::ExitEarly
        }
    });

    (found, overflow)
}

/// Finds the triangles of a triangle mesh or heightfield overlapping a convex shape.
///
/// `g` must be a ball, capsule, cuboid, or convex polyhedron and `mesh` a triangle mesh or a
/// heightfield. See [`find_overlap_triangles_composite_shape`] for the paging semantics.
pub fn find_overlap_triangles(
    pos: &Isometry<Real>,
    g: &TypedShape,
    pos_mesh: &Isometry<Real>,
    mesh: &TypedShape,
    max_results: usize,
    start_index: usize,
) -> (Vec<u32>, bool) {
    match DefaultQueryDispatcher.find_overlap_triangles(
        pos,
        g,
        pos_mesh,
        mesh,
        max_results,
        start_index,
    ) {
        Ok(result) => result,
        Err(err) => {
            log::warn!(
                "find_overlap_triangles between {:?} and {:?}: {}",
                g.shape_type(),
                mesh.shape_type(),
                err
            );
            debug_assert!(false, "{}", err);
            (Vec::new(), false)
        }
    }
}
