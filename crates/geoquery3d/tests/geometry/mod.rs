mod convex_hull;
mod convex_face_index;
mod heightfield_raycast;
mod mesh_raycast;
mod mesh_sweep;
mod mtd_recovery;
mod overlap_symmetry;
mod sweep_distance;
mod sweep_scenarios;
