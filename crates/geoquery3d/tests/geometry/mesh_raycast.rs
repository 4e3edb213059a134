use geoquery3d::math::{Isometry, Point, Vector};
use geoquery3d::partitioning::BruteForceMidphase;
use geoquery3d::query::{self, HitFlags, Ray};
use geoquery3d::shape::{TriMesh, TypedShape};

fn floor_at(vertices: &mut Vec<Point<f32>>, indices: &mut Vec<[u32; 3]>, height: f32) {
    let first = vertices.len() as u32;
    vertices.extend_from_slice(&[
        Point::new(-5.0, height, -5.0),
        Point::new(-5.0, height, 5.0),
        Point::new(5.0, height, -5.0),
    ]);
    indices.push([first, first + 1, first + 2]);
}

fn stacked_floors(heights: &[f32]) -> (Vec<Point<f32>>, Vec<[u32; 3]>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    for h in heights {
        floor_at(&mut vertices, &mut indices, *h);
    }
    (vertices, indices)
}

#[test]
fn multiple_hits_and_overflow() {
    let (vertices, indices) = stacked_floors(&[0.0, 1.0, 2.0]);
    let midphase = BruteForceMidphase::new(&vertices, &indices);
    let mesh = TriMesh::try_new(&vertices, &indices, &midphase).unwrap();
    let mesh = TypedShape::TriMesh(&mesh);
    let pos = Isometry::identity();
    let ray = Ray::new(Point::new(-1.0, 5.0, -1.0), -Vector::y());
    let flags = HitFlags::default();

    let closest = query::raycast(&pos, &mesh, &ray, 10.0, flags, 1);
    assert_eq!(closest.hits.len(), 1);
    assert!(!closest.overflow);
    assert_eq!(closest.hits[0].face_index, 2);
    assert_relative_eq!(closest.hits[0].distance, 3.0, epsilon = 1.0e-5);
    assert_relative_eq!(closest.hits[0].position, Point::new(-1.0, 2.0, -1.0), epsilon = 1.0e-5);

    let all = query::raycast(&pos, &mesh, &ray, 10.0, flags, 4);
    assert_eq!(all.hits.len(), 3);
    assert!(!all.overflow);
    assert_relative_eq!(all.closest().unwrap().distance, 3.0, epsilon = 1.0e-5);

    let truncated = query::raycast(&pos, &mesh, &ray, 10.0, flags, 2);
    assert_eq!(truncated.hits.len(), 2);
    assert!(truncated.overflow);

    // The farthest floor is out of reach.
    let short = query::raycast(&pos, &mesh, &ray, 4.5, flags, 4);
    assert_eq!(short.hits.len(), 2);
    assert!(!short.overflow);

    assert!(query::raycast(&pos, &mesh, &ray, 10.0, flags, 0).is_empty());

    let any = query::raycast(&pos, &mesh, &ray, 10.0, flags | HitFlags::ANY_HIT, 1);
    assert_eq!(any.hits.len(), 1);
    assert!(any.hits[0].distance >= 3.0 - 1.0e-5);
}

#[test]
fn coincident_hits_are_merged() {
    let (vertices, indices) = stacked_floors(&[0.0, 1.0, 0.0]);
    let midphase = BruteForceMidphase::new(&vertices, &indices);
    let mesh = TriMesh::try_new(&vertices, &indices, &midphase).unwrap();
    let ray = Ray::new(Point::new(-1.0, 5.0, -1.0), -Vector::y());

    let hits = query::raycast(
        &Isometry::identity(),
        &TypedShape::TriMesh(&mesh),
        &ray,
        10.0,
        HitFlags::default(),
        4,
    );
    assert_eq!(hits.hits.len(), 2);
    assert!(!hits.overflow);
}

#[test]
fn back_faces_and_normal_policy() {
    let (vertices, indices) = stacked_floors(&[0.0]);
    let midphase = BruteForceMidphase::new(&vertices, &indices);
    let mesh = TriMesh::try_new(&vertices, &indices, &midphase).unwrap();
    let mesh = TypedShape::TriMesh(&mesh);
    let pos = Isometry::translation(0.0, 1.0, 0.0);
    let ray = Ray::new(Point::new(-1.0, -2.0, -1.0), Vector::y());

    assert!(query::raycast(&pos, &mesh, &ray, 10.0, HitFlags::default(), 1).is_empty());

    let double_sided = HitFlags::default() | HitFlags::DOUBLE_SIDED;
    let hits = query::raycast(&pos, &mesh, &ray, 10.0, double_sided, 1);
    assert_relative_eq!(hits.hits[0].distance, 3.0, epsilon = 1.0e-5);
    assert_relative_eq!(hits.hits[0].normal, -Vector::y(), epsilon = 1.0e-5);

    let both_sides = HitFlags::default() | HitFlags::MESH_BOTH_SIDES;
    let hits = query::raycast(&pos, &mesh, &ray, 10.0, both_sides, 1);
    assert_relative_eq!(hits.hits[0].distance, 3.0, epsilon = 1.0e-5);
    assert_relative_eq!(hits.hits[0].normal, Vector::y(), epsilon = 1.0e-5);
}

#[test]
fn unrequested_normals_are_not_reported() {
    let (vertices, indices) = stacked_floors(&[0.0]);
    let midphase = BruteForceMidphase::new(&vertices, &indices);
    let mesh = TriMesh::try_new(&vertices, &indices, &midphase).unwrap();
    let ray = Ray::new(Point::new(-1.0, 2.0, -1.0), -Vector::y());

    let hits = query::raycast(
        &Isometry::identity(),
        &TypedShape::TriMesh(&mesh),
        &ray,
        10.0,
        HitFlags::DISTANCE,
        1,
    );
    let hit = hits.hits[0];
    assert!(!hit.flags.contains(HitFlags::NORMAL));
    assert_eq!(hit.normal, Vector::zeros());
    assert_relative_eq!(hit.distance, 2.0, epsilon = 1.0e-5);
}
